use crate::schema::{ConnectionLoader, LoadRequest, LoadedPage, LoaderResult};
use crate::self_prelude::*;
use serde_json::Value as JsonValue;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderMode {
    /// Return every item and let the connection slice the page.
    Full,
    /// Slice the page in the backend and report the total count.
    Sliced,
}

/// A backend serving a fixed list of items.
#[derive(Debug)]
pub struct VecLoader {
    items: Vec<JsonValue>,
    mode: LoaderMode,
    total_count: Option<i64>,
    overfill: usize,
    last_request: Mutex<Option<LoadRequest>>,
}

impl VecLoader {
    fn new(items: Vec<JsonValue>, mode: LoaderMode) -> Self {
        Self {
            items,
            mode,
            total_count: None,
            overfill: 0,
            last_request: Mutex::new(None),
        }
    }

    pub fn full(items: Vec<JsonValue>) -> Self {
        Self::new(items, LoaderMode::Full)
    }

    pub fn sliced(items: Vec<JsonValue>) -> Self {
        Self::new(items, LoaderMode::Sliced)
    }

    /// Report `total_count` instead of the number of items held.
    pub fn with_total_count(mut self, total_count: i64) -> Self {
        self.total_count = Some(total_count);
        self
    }

    /// Return `overfill` more items than a sliced page asks for.
    pub fn with_overfill(mut self, overfill: usize) -> Self {
        self.overfill = overfill;
        self
    }

    pub async fn last_request(&self) -> Option<LoadRequest> {
        self.last_request.lock().await.clone()
    }
}

#[async_trait]
impl ConnectionLoader for VecLoader {
    async fn load(&self, request: LoadRequest) -> LoaderResult<LoadedPage> {
        *self.last_request.lock().await = Some(request.clone());

        let page = match self.mode {
            LoaderMode::Full => LoadedPage::Full(self.items.clone()),
            LoaderMode::Sliced => {
                let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
                let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
                let items = self
                    .items
                    .iter()
                    .skip(offset)
                    .take(size.saturating_add(self.overfill))
                    .cloned()
                    .collect();
                let total_count = self
                    .total_count
                    .unwrap_or_else(|| i64::try_from(self.items.len()).unwrap_or(i64::MAX));
                LoadedPage::Slice { items, total_count }
            }
        };

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebridge::{ArgumentNormalizer, ConnectionArgs};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn request(args: &ConnectionArgs) -> LoadRequest {
        let (state, extra) = ArgumentNormalizer::default().normalize(args).unwrap();
        LoadRequest { state, extra }
    }

    #[tokio::test]
    async fn test_sliced_loader_serves_requested_slice() {
        let items = (0..10).map(|i| json!({ "id": i })).collect::<Vec<_>>();
        let loader = VecLoader::sliced(items).with_total_count(500);

        let page = loader.load(request(&ConnectionArgs::paged(2, 3))).await.unwrap();

        assert_eq!(
            page,
            LoadedPage::Slice {
                items: vec![json!({ "id": 3 }), json!({ "id": 4 }), json!({ "id": 5 })],
                total_count: 500,
            }
        );
        assert_eq!(loader.last_request().await.map(|r| r.offset()), Some(3));
    }

    #[tokio::test]
    async fn test_overfilled_loader_returns_extra_items() {
        let items = (0..10).map(|i| json!({ "id": i })).collect::<Vec<_>>();
        let loader = VecLoader::sliced(items).with_overfill(1);

        let page = loader
            .load(request(&ConnectionArgs::forward(3, None)))
            .await
            .unwrap();

        assert!(matches!(page, LoadedPage::Slice { items, .. } if items.len() == 4));
    }
}
