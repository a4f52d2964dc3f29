//! Renderer-agnostic chart descriptions built from API payloads.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
