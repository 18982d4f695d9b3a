//! # pagebridge-graphql
//!
//! Registers the cursor connection wire contract (`PageInfo`, `PageCursors`,
//! `<Node>Connection`, `<Node>Edge`) on an `async_graphql::dynamic` schema
//! and resolves connection fields through a backend loader.

pub mod schema;
pub mod spec;
pub mod testing;

pub(self) mod self_prelude {
    pub use async_trait::async_trait;
    pub use extension_trait::extension_trait;
}
