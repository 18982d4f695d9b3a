//! In-memory backends and a small schema for exercising connection fields.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
