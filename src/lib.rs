pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod navigator;
pub mod operations;
pub mod state;
pub mod world;

pub use error::{NavError, Result};
