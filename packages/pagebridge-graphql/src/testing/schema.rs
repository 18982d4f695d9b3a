use super::loader::VecLoader;
use crate::schema::*;
use async_graphql::dynamic::*;
use pagebridge::PagingOptions;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

pub const ARTWORK: &str = "Artwork";
pub const ARTIST: &str = "Artist";

/// `count` artworks with ids `artwork-0` onwards.
pub fn artworks(count: usize) -> Vec<JsonValue> {
    (0..count)
        .map(|i| json!({ "id": format!("artwork-{i}"), "title": format!("Artwork {i}") }))
        .collect()
}

/// `count` artists with ids `artist-0` onwards. Odd artists have no name.
pub fn artists(count: usize) -> Vec<JsonValue> {
    (0..count)
        .map(|i| match i % 2 {
            0 => json!({ "id": format!("artist-{i}"), "name": format!("Artist {i}") }),
            _ => json!({ "id": format!("artist-{i}"), "name": null }),
        })
        .collect()
}

/// Backends behind the test schema's connection fields.
#[derive(Debug, Clone)]
pub struct TestBackends {
    /// `artworksConnection`: sliced by the backend.
    pub artworks: Arc<VecLoader>,
    /// `artistsConnection`: the full list, sliced by the connection.
    pub artists: Arc<VecLoader>,
    /// `brokenConnection`: always returns one item too many.
    pub broken: Arc<VecLoader>,
}

impl TestBackends {
    pub fn new(artwork_count: usize, total_count: i64, artist_count: usize) -> Self {
        Self {
            artworks: Arc::new(
                VecLoader::sliced(artworks(artwork_count)).with_total_count(total_count),
            ),
            artists: Arc::new(VecLoader::full(artists(artist_count))),
            broken: Arc::new(VecLoader::sliced(artworks(artwork_count)).with_overfill(1)),
        }
    }
}

fn adapter(loader: &Arc<VecLoader>, options: PagingOptions) -> Arc<ConnectionAdapter> {
    let loader: Arc<dyn ConnectionLoader> = loader.clone();
    Arc::new(ConnectionAdapter::new(loader, options))
}

/// Build a schema with `Artwork` and `Artist` connections over `backends`.
pub fn test_schema(
    backends: &TestBackends,
    options: PagingOptions,
) -> Result<Schema, SchemaError> {
    let artwork = Object::new(ARTWORK)
        .json_field("id", TypeRef::named_nn(TypeRef::ID))
        .json_field("title", TypeRef::named_nn(TypeRef::STRING));
    let artist = Object::new(ARTIST)
        .json_field("id", TypeRef::named_nn(TypeRef::ID))
        .json_field("name", TypeRef::named(TypeRef::STRING));

    let query = Object::new("Query")
        .field(
            Field::new_connection_field(
                "artworksConnection",
                ARTWORK,
                adapter(&backends.artworks, options),
            )
            .argument(InputValue::new("sort", TypeRef::named(TypeRef::STRING))),
        )
        .field(Field::new_connection_field(
            "artistsConnection",
            ARTIST,
            adapter(&backends.artists, options),
        ))
        .field(Field::new_connection_field(
            "brokenConnection",
            ARTWORK,
            adapter(&backends.broken, options),
        ))
        .field(Field::new(
            "ping",
            TypeRef::named_nn(TypeRef::STRING),
            |_| FieldFuture::new(async { Ok(Some(FieldValue::value("pong"))) }),
        ));

    Schema::build("Query", None, None)
        .register_paging_types()
        .register_connection_types(ARTWORK)
        .register_connection_types(ARTIST)
        .register(artwork)
        .register(artist)
        .register(query)
        .finish()
}
