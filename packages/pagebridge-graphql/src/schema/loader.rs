use super::error::*;
use super::self_prelude::*;
use async_graphql::ErrorExtensions;

/// Backend paging parameters for one connection field resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub state: PagingState,
    /// Non-paging field arguments, forwarded untouched.
    pub extra: ExtraFields,
}

impl LoadRequest {
    pub fn page(&self) -> u64 {
        self.state.page
    }
    pub fn size(&self) -> u64 {
        self.state.size
    }
    pub fn offset(&self) -> u64 {
        self.state.offset
    }
}

/// What a backend hands back for a connection.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedPage {
    /// Every matching item. The requested page is sliced out of it.
    Full(Vec<JsonValue>),
    /// A page already sliced by the backend, starting at the requested
    /// offset, together with the backend's total count.
    Slice {
        items: Vec<JsonValue>,
        total_count: i64,
    },
}

pub type LoaderResult<T> = anyhow::Result<T, LoaderError>;

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error(transparent)]
    Paging(#[from] PagingError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoaderError {
    pub fn into_graphql_error(self) -> async_graphql::Error {
        match self {
            LoaderError::Paging(e) => e.into_graphql_error(),
            LoaderError::Other(e) => async_graphql::Error::new(e.to_string())
                .extend_with(|_, ext| ext.set("code", "LOADER_ERROR")),
        }
    }
}

#[async_trait]
pub trait ConnectionLoader: Send + Sync + 'static {
    async fn load(&self, request: LoadRequest) -> LoaderResult<LoadedPage>;
}
