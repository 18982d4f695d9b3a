use super::self_prelude::*;

/// Name, type and description of each paging argument.
const PAGING_ARGUMENTS: [(&str, &str, &str); 6] = [
    (
        "first",
        TypeRef::INT,
        "Paginate forward, returning the given amount of edges at most.",
    ),
    (
        "after",
        TypeRef::STRING,
        "Return edges after the given cursor.",
    ),
    (
        "last",
        TypeRef::INT,
        "Paginate backward, returning the given amount of edges at most.",
    ),
    (
        "before",
        TypeRef::STRING,
        "Return edges before the given cursor.",
    ),
    (
        "page",
        TypeRef::INT,
        "Return the given one-based page. Overrides the offset implied by a cursor.",
    ),
    (
        "size",
        TypeRef::INT,
        "Page size, used when neither `first` nor `last` is given.",
    ),
];

#[extension_trait]
pub impl PagingArguments for Field {
    /// Add the relay arguments plus `page` and `size` to a field.
    /// See: https://relay.dev/graphql/connections.htm#sec-Arguments
    fn paging_arguments(self) -> Self {
        PAGING_ARGUMENTS
            .iter()
            .fold(self, |field, (name, ty, description)| {
                field.argument(
                    InputValue::new(*name, TypeRef::named(*ty)).description(*description),
                )
            })
    }
}

/// Read a field's arguments as connection arguments. Arguments other than the
/// paging ones are kept as extra fields.
pub fn connection_args(args: &ObjectAccessor) -> async_graphql::Result<ConnectionArgs> {
    let mut fields = serde_json::Map::new();
    for (name, value) in args.iter() {
        fields.insert(name.to_string(), value.as_value().clone().into_json()?);
    }
    Ok(serde_json::from_value(JsonValue::Object(fields))?)
}
