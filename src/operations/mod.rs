pub mod projection;
pub mod spawn;
pub mod trigger;
