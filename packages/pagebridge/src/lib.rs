//! # pagebridge
//!
//! Conversion between cursor-connection arguments (`first`, `after`, `last`,
//! `before`) and `page`/`size`/`offset` backend paging, and construction of
//! Relay-style connections with numbered page navigation.
//!
//! See: https://relay.dev/graphql/connections.htm

pub mod args;
pub mod connection;
pub mod cursor;
pub mod options;
pub mod page_cursors;

pub use args::*;
pub use connection::*;
pub use cursor::Cursor;
pub use options::*;
pub use page_cursors::*;

use thiserror::Error;

pub type PagingResult<T> = Result<T, PagingError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("Cursor is invalid: {0:?}")]
    InvalidCursor(String),
    #[error("Invalid paging arguments: {0}")]
    InvalidPagingArguments(String),
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl PagingError {
    /// `true` when the error was caused by the caller's arguments rather than
    /// by a collaborator breaking its contract.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PagingError::InvalidCursor(_) | PagingError::InvalidPagingArguments(_)
        )
    }

    /// Stable machine-readable code, surfaced in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            PagingError::InvalidCursor(_) => "INVALID_CURSOR",
            PagingError::InvalidPagingArguments(_) => "INVALID_PAGING_ARGUMENTS",
            PagingError::InternalInconsistency(_) => "INTERNAL_INCONSISTENCY",
        }
    }
}
