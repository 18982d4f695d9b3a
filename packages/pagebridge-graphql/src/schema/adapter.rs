use super::error::*;
use super::loader::*;
use super::self_prelude::*;
use tracing::{error, warn};

/// Resolves a connection field: normalizes the field arguments, asks the
/// backend for the page and assembles the connection from the result.
pub struct ConnectionAdapter {
    loader: Arc<dyn ConnectionLoader>,
    normalizer: ArgumentNormalizer,
    builder: ConnectionBuilder,
}

impl ConnectionAdapter {
    pub fn new(loader: Arc<dyn ConnectionLoader>, options: PagingOptions) -> Self {
        Self {
            loader,
            normalizer: ArgumentNormalizer::new(options),
            builder: ConnectionBuilder::new(options),
        }
    }

    pub async fn resolve(
        &self,
        args: &ConnectionArgs,
    ) -> LoaderResult<Connection<JsonValue>> {
        let (state, extra) = self.normalizer.normalize(args)?;
        let request = LoadRequest {
            state: state.clone(),
            extra,
        };

        let connection = match self.loader.load(request).await? {
            LoadedPage::Full(all) => self.builder.build_from_array(all, &state, args)?,
            LoadedPage::Slice { items, total_count } => {
                self.builder
                    .build(items, &state, args, total_count, state.offset)?
            }
        };

        Ok(connection)
    }
}

#[extension_trait]
pub impl ConnectionAdapterField for Field {
    /// Create a connection field over `node_name` nodes, resolved through
    /// `adapter`. Add any extra arguments with `.argument(..)`. The field is
    /// nullable so a paging error only nulls this field.
    fn new_connection_field(
        name: impl Into<String>,
        node_name: impl Into<String>,
        adapter: Arc<ConnectionAdapter>,
    ) -> Self {
        let name = name.into();
        let node_name = node_name.into();
        let field_name = name.clone();
        Field::new(
            name,
            TypeRef::named(TypeRef::connection(&node_name)),
            move |ctx| {
                let adapter = adapter.clone();
                let field_name = field_name.clone();
                FieldFuture::new(async move {
                    let args = connection_args(&ctx.args)?;
                    match adapter.resolve(&args).await {
                        Ok(connection) => Ok(Some(FieldValue::owned_any(connection))),
                        Err(LoaderError::Paging(e)) if e.is_client_error() => {
                            warn!("Rejected paging arguments for `{field_name}`: {e}");
                            Err(e.into_graphql_error())
                        }
                        Err(e) => {
                            error!("Failed to resolve connection `{field_name}`: {e}");
                            Err(e.into_graphql_error())
                        }
                    }
                })
            },
        )
        .paging_arguments()
    }
}
