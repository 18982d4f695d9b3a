pub mod adapter;
pub mod error;
pub mod loader;
pub mod node;
pub mod schema_builder;

pub(self) mod self_prelude {
    pub use super::super::self_prelude::*;
    pub use crate::spec::*;
    pub use async_graphql::dynamic::*;
    pub use pagebridge::*;
    pub use serde_json::Value as JsonValue;
    pub use std::sync::Arc;
}

pub use adapter::*;
pub use error::*;
pub use loader::*;
pub use node::*;
pub use schema_builder::*;
