// src/lib.rs

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod koch;
pub mod scene;

pub use error::FractalError;
pub use geometry::Point;
pub use koch::{generate, generate_with, Subdivision, MAX_ITERATIONS};
pub use scene::{Snowflake, Triangle};
