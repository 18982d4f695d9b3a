use super::fields::*;
use super::self_prelude::*;

#[extension_trait]
pub impl PagingTypeRef for TypeRef {
    const CURSOR: &'static str = "String";
    const PAGE_INFO: &'static str = "PageInfo";
    const PAGE_CURSOR: &'static str = "PageCursor";
    const PAGE_CURSORS: &'static str = "PageCursors";

    fn connection(node_name: &str) -> String {
        format!("{node_name}Connection")
    }
    fn edge(node_name: &str) -> String {
        format!("{node_name}Edge")
    }
}

#[extension_trait]
pub impl PagingObject for Object {
    /// See: https://relay.dev/graphql/connections.htm#sec-PageInfo
    fn new_page_info() -> Self {
        Object::new(TypeRef::PAGE_INFO)
            .field(Field::parent_scalar(
                "hasNextPage",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                |info: &PageInfo| info.has_next_page,
            ))
            .field(Field::parent_scalar(
                "hasPreviousPage",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                |info: &PageInfo| info.has_previous_page,
            ))
            .field(Field::parent_optional_scalar(
                "startCursor",
                TypeRef::named(TypeRef::CURSOR),
                |info: &PageInfo| info.start_cursor.clone(),
            ))
            .field(Field::parent_optional_scalar(
                "endCursor",
                TypeRef::named(TypeRef::CURSOR),
                |info: &PageInfo| info.end_cursor.clone(),
            ))
    }

    fn new_page_cursor() -> Self {
        Object::new(TypeRef::PAGE_CURSOR)
            .description("A cursor that lands on the first item of a numbered page.")
            .field(Field::parent_scalar(
                "cursor",
                TypeRef::named_nn(TypeRef::CURSOR),
                |page: &PageCursor| page.cursor.clone(),
            ))
            .field(Field::parent_scalar(
                "page",
                TypeRef::named_nn(TypeRef::INT),
                |page: &PageCursor| page.page,
            ))
            .field(Field::parent_scalar(
                "isCurrent",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                |page: &PageCursor| page.is_current,
            ))
    }

    fn new_page_cursors() -> Self {
        Object::new(TypeRef::PAGE_CURSORS)
            .field(Field::parent_optional_object(
                "first",
                TypeRef::named(TypeRef::PAGE_CURSOR),
                |cursors: &PageCursors| cursors.first.as_ref(),
            ))
            .field(Field::parent_list(
                "around",
                TypeRef::named_nn_list_nn(TypeRef::PAGE_CURSOR),
                |cursors: &PageCursors| cursors.around.iter().collect(),
            ))
            .field(Field::parent_optional_object(
                "last",
                TypeRef::named(TypeRef::PAGE_CURSOR),
                |cursors: &PageCursors| cursors.last.as_ref(),
            ))
            .field(Field::parent_optional_object(
                "previous",
                TypeRef::named(TypeRef::PAGE_CURSOR),
                |cursors: &PageCursors| cursors.previous.as_ref(),
            ))
    }

    /// `<Node>Connection` over JSON nodes.
    /// See: https://relay.dev/graphql/connections.htm#sec-Connection-Types
    fn new_connection(node_name: &str) -> Self {
        Object::new(TypeRef::connection(node_name))
            .field(Field::parent_scalar(
                "totalCount",
                TypeRef::named_nn(TypeRef::INT),
                |connection: &Connection<JsonValue>| connection.total_count,
            ))
            .field(Field::parent_list(
                "nodes",
                TypeRef::named_nn_list_nn(node_name),
                |connection: &Connection<JsonValue>| connection.nodes().collect(),
            ))
            .field(Field::parent_list(
                "edges",
                TypeRef::named_nn_list_nn(TypeRef::edge(node_name)),
                |connection: &Connection<JsonValue>| connection.edges.iter().collect(),
            ))
            .field(Field::parent_object(
                "pageInfo",
                TypeRef::named_nn(TypeRef::PAGE_INFO),
                |connection: &Connection<JsonValue>| &connection.page_info,
            ))
            .field(Field::parent_object(
                "pageCursors",
                TypeRef::named_nn(TypeRef::PAGE_CURSORS),
                |connection: &Connection<JsonValue>| &connection.page_cursors,
            ))
    }

    /// See: https://relay.dev/graphql/connections.htm#sec-Edge-Types
    fn new_edge(node_name: &str) -> Self {
        Object::new(TypeRef::edge(node_name))
            .field(Field::parent_object(
                "node",
                TypeRef::named_nn(node_name),
                |edge: &Edge<JsonValue>| &edge.node,
            ))
            .field(Field::parent_scalar(
                "cursor",
                TypeRef::named_nn(TypeRef::CURSOR),
                |edge: &Edge<JsonValue>| edge.cursor.clone(),
            ))
    }
}
