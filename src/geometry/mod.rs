pub mod edge;
pub mod face;
pub mod face_id;
pub mod oriented_rect;

pub use edge::Edge;
pub use face::{Face, EDGE_COUNT};
pub use face_id::FaceId;
pub use oriented_rect::OrientedRect;
