use super::self_prelude::*;

/// Resolve a node field by looking up its name in the parent JSON object.
/// Missing keys and JSON `null` both resolve to `null`.
pub fn resolve_json_field(ctx: ResolverContext) -> FieldFuture {
    FieldFuture::new(async move {
        let node = ctx.parent_value.try_downcast_ref::<JsonValue>()?;
        match node.get(ctx.field().name()) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(value) => {
                let value = async_graphql::Value::from_json(value.clone())?;
                Ok(Some(FieldValue::value(value)))
            }
        }
    })
}

#[extension_trait]
pub impl JsonNodeObject for Object {
    fn json_field(self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.field(Field::new(name, ty, resolve_json_field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_json_fields_resolve_from_node() {
        let node = Object::new("Node")
            .json_field("id", TypeRef::named_nn(TypeRef::ID))
            .json_field("tags", TypeRef::named_list(TypeRef::STRING))
            .json_field("missing", TypeRef::named(TypeRef::STRING));
        let query = Object::new("Query").field(Field::new(
            "node",
            TypeRef::named_nn("Node"),
            |_| {
                FieldFuture::new(async {
                    Ok(Some(FieldValue::owned_any(json!({ "id": "n1", "tags": ["a", "b"] }))))
                })
            },
        ));
        let schema = Schema::build("Query", None, None)
            .register(node)
            .register(query)
            .finish()
            .unwrap();

        let response = schema.execute("{ node { id tags missing } }").await;

        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "node": { "id": "n1", "tags": ["a", "b"], "missing": null } })
        );
    }
}
