use super::self_prelude::*;

#[extension_trait]
pub impl PagingSchemaBuilder for SchemaBuilder {
    /// Register `PageInfo`, `PageCursor` and `PageCursors`. Call once per
    /// schema.
    fn register_paging_types(self) -> Self {
        self.register(Object::new_page_info())
            .register(Object::new_page_cursor())
            .register(Object::new_page_cursors())
    }

    /// Register `<Node>Connection` and `<Node>Edge` for a node type.
    fn register_connection_types(self, node_name: &str) -> Self {
        self.register(Object::new_connection(node_name))
            .register(Object::new_edge(node_name))
    }
}
