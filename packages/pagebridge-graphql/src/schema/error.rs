use super::self_prelude::*;
use async_graphql::ErrorExtensions;

#[extension_trait]
pub impl PagingGraphqlError for PagingError {
    /// Convert into a field-level GraphQL error carrying `extensions.code`.
    fn into_graphql_error(self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
