//! The cursor connection wire types and field arguments.
//!
//! GraphQL Docs: https://graphql.org/learn/pagination/
//! GraphQL Cursor Connections Spec: https://relay.dev/graphql/connections.htm

pub mod arguments;
pub mod fields;
pub mod objects;

pub(self) mod self_prelude {
    pub use super::super::self_prelude::*;
    pub use async_graphql::dynamic::*;
    pub use pagebridge::*;
    pub use serde_json::Value as JsonValue;
}

pub use arguments::*;
pub use fields::*;
pub use objects::*;
