//! Relay connections built from backend slices.
//! See: https://relay.dev/graphql/connections.htm#sec-Connection-Types

use crate::{
    cursor::{self, Cursor},
    ConnectionArgs, PageCursorNavigator, PageCursors, PagingError, PagingOptions,
    PagingResult, PagingState,
};
use serde::Serialize;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: Cursor,
}

/// See: https://relay.dev/graphql/connections.htm#sec-undefined.PageInfo
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    /// The count reported by the backend, not capped to the window.
    pub total_count: u64,
    pub page_cursors: PageCursors,
}

impl<T> Connection<T> {
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> Connection<U> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|Edge { node, cursor }| Edge {
                    node: f(node),
                    cursor,
                })
                .collect(),
            page_info: self.page_info,
            total_count: self.total_count,
            page_cursors: self.page_cursors,
        }
    }
}

/// Parse an `x-total-count` style header value.
pub fn total_count_from_header(value: &str) -> PagingResult<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        PagingError::InternalInconsistency(format!(
            "total count header is not a non-negative integer: {value:?}"
        ))
    })
}

#[derive(Debug, Clone, Copy)]
pub struct ConnectionBuilder {
    max_window: u64,
    navigator: PageCursorNavigator,
}

impl Default for ConnectionBuilder {
    fn default() -> Self {
        Self::new(PagingOptions::default())
    }
}

impl ConnectionBuilder {
    pub fn new(options: PagingOptions) -> Self {
        Self {
            max_window: options.max_window,
            navigator: PageCursorNavigator::new(options.page_cursor_window),
        }
    }

    /// Build a connection from a page of items that starts at `slice_start`
    /// in the full result set.
    pub fn build<T>(
        &self,
        items: Vec<T>,
        state: &PagingState,
        args: &ConnectionArgs,
        total_count: i64,
        slice_start: u64,
    ) -> PagingResult<Connection<T>> {
        let total_count = u64::try_from(total_count).map_err(|_| {
            error!("Backend reported a negative total count: {total_count}");
            PagingError::InternalInconsistency(format!(
                "backend reported a negative total count: {total_count}"
            ))
        })?;

        let effective_length = total_count.min(self.max_window);
        if effective_length < total_count {
            debug!(
                total_count,
                effective_length, "Capping connection to the pagination window"
            );
        }

        // A slice starting past the window is only what the backend had left
        // there, so it is not held to the page size.
        let len = items.len() as u64;
        if slice_start < effective_length && len > state.size {
            error!(
                "Backend returned {len} items for a page of size {}",
                state.size
            );
            return Err(PagingError::InternalInconsistency(format!(
                "backend returned {len} items for a page of size {}",
                state.size
            )));
        }

        let slice_end = slice_start.checked_add(len).ok_or_else(|| {
            PagingError::InvalidPagingArguments(format!(
                "a slice of {len} items at offset {slice_start} is out of range"
            ))
        })?;

        let edges = items
            .into_iter()
            .zip(slice_start..slice_end)
            .map(|(node, index)| Edge {
                node,
                cursor: cursor::encode(index),
            })
            .collect::<Vec<_>>();

        let explicit_page_beyond_first = args.page.map_or(false, |page| page > 1);
        let page_info = PageInfo {
            has_next_page: slice_end < effective_length,
            has_previous_page: slice_start > 0 || explicit_page_beyond_first,
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
        };

        Ok(Connection {
            edges,
            page_info,
            total_count,
            page_cursors: self.navigator.build(state, effective_length),
        })
    }

    /// Build a connection from the complete result set, slicing out the page
    /// `state` describes.
    pub fn build_from_array<T>(
        &self,
        all: Vec<T>,
        state: &PagingState,
        args: &ConnectionArgs,
    ) -> PagingResult<Connection<T>> {
        let total_count = i64::try_from(all.len()).unwrap_or(i64::MAX);
        let items = all
            .into_iter()
            .skip(usize::try_from(state.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(state.size).unwrap_or(usize::MAX))
            .collect::<Vec<_>>();
        self.build(items, state, args, total_count, state.offset)
    }
}
