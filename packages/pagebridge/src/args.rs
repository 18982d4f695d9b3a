//! Connection arguments and their normalization into backend paging.
//! See: https://relay.dev/graphql/connections.htm#sec-Arguments

use crate::{
    cursor::{self, Cursor},
    PagingError, PagingOptions, PagingResult,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Non-paging arguments that travel alongside the paging ones and are
/// forwarded to the backend untouched.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Paging arguments exactly as a caller supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Cursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Relay-style arguments with empty cursors dropped and counts validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayArgs {
    pub first: Option<u64>,
    pub after: Option<Cursor>,
    pub last: Option<u64>,
    pub before: Option<Cursor>,
}

impl RelayArgs {
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
            && self.after.is_none()
            && self.last.is_none()
            && self.before.is_none()
    }

    fn is_forward(&self) -> bool {
        self.first.is_some() || self.after.is_some()
    }

    fn is_backward(&self) -> bool {
        self.last.is_some() || self.before.is_some()
    }
}

/// How a request addresses its slice, resolved once from `ConnectionArgs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagingStrategy {
    /// The slice is addressed by relay cursors (or not addressed at all).
    Cursor(RelayArgs),
    /// An explicit page number is authoritative. Cursors, if any, are kept
    /// only so they can be handed on to a nested connection.
    Page {
        page: u64,
        /// `first` or `last`, when given.
        size: Option<u64>,
        after: Option<Cursor>,
        before: Option<Cursor>,
    },
}

/// Canonical backend paging. `page` is one-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingState {
    pub page: u64,
    pub size: u64,
    pub offset: u64,
    #[serde(skip)]
    pub strategy: PagingStrategy,
}

impl PagingState {
    pub fn has_explicit_page(&self) -> bool {
        matches!(self.strategy, PagingStrategy::Page { .. })
    }
}

fn non_negative(name: &str, value: Option<i64>) -> PagingResult<Option<u64>> {
    value
        .map(|v| {
            u64::try_from(v).map_err(|_| {
                PagingError::InvalidPagingArguments(format!(
                    "`{name}` must be a non-negative integer, got {v}"
                ))
            })
        })
        .transpose()
}

fn non_empty(cursor: &Option<Cursor>) -> Option<Cursor> {
    cursor.as_ref().filter(|c| !c.is_empty()).cloned()
}

impl ConnectionArgs {
    pub fn forward(first: i64, after: Option<Cursor>) -> Self {
        Self {
            first: Some(first),
            after,
            ..Default::default()
        }
    }

    pub fn paged(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn relay_args(&self) -> PagingResult<RelayArgs> {
        let relay = RelayArgs {
            first: non_negative("first", self.first)?,
            after: non_empty(&self.after),
            last: non_negative("last", self.last)?,
            before: non_empty(&self.before),
        };

        if relay.first.is_some() && relay.last.is_some() {
            return Err(PagingError::InvalidPagingArguments(
                "`first` and `last` cannot be combined".to_string(),
            ));
        }

        if relay.is_forward() && relay.is_backward() {
            return Err(PagingError::InvalidPagingArguments(
                "paging must use either first/after or last/before".to_string(),
            ));
        }

        if relay.last.is_some() && relay.before.is_none() {
            return Err(PagingError::InvalidPagingArguments(
                "when paging backwards, a `before` argument is required".to_string(),
            ));
        }

        Ok(relay)
    }

    /// Resolve which paging strategy these arguments describe.
    pub fn strategy(&self) -> PagingResult<PagingStrategy> {
        self.relay_args().and_then(|relay| self.strategy_with(relay))
    }

    fn strategy_with(&self, relay: RelayArgs) -> PagingResult<PagingStrategy> {
        match self.page {
            Some(page) if page < 1 => Err(PagingError::InvalidPagingArguments(format!(
                "`page` must be at least 1, got {page}"
            ))),
            Some(page) => Ok(PagingStrategy::Page {
                page: page as u64,
                size: relay.first.or(relay.last),
                after: relay.after,
                before: relay.before,
            }),
            None => Ok(PagingStrategy::Cursor(relay)),
        }
    }
}

/// Converts connection arguments into canonical backend paging and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentNormalizer {
    options: PagingOptions,
}

impl ArgumentNormalizer {
    pub fn new(options: PagingOptions) -> Self {
        Self { options }
    }

    pub fn normalize(
        &self,
        args: &ConnectionArgs,
    ) -> PagingResult<(PagingState, ExtraFields)> {
        let strategy = args.strategy_with(args.relay_args()?)?;
        let fallback_size = non_negative("size", args.size)?
            .unwrap_or(self.options.default_page_size);

        let (page, size, offset) = match &strategy {
            // Cursors travelling with an explicit page are never decoded.
            PagingStrategy::Page { page, size, .. } => {
                let size = size.unwrap_or(fallback_size);
                let offset = (page - 1).checked_mul(size).ok_or_else(|| {
                    PagingError::InvalidPagingArguments(format!(
                        "`page` {page} with size {size} is out of range"
                    ))
                })?;
                (*page, size, offset)
            }
            PagingStrategy::Cursor(relay) if relay.is_backward() => {
                let end = match &relay.before {
                    Some(before) => cursor::decode_position(before)?.offset_before(),
                    None => 0,
                };
                let wanted = relay.last.unwrap_or(fallback_size);
                let (size, offset) = (wanted.min(end), end.saturating_sub(wanted));
                (derive_page(size, offset), size, offset)
            }
            PagingStrategy::Cursor(relay) => {
                let offset = match &relay.after {
                    Some(after) => cursor::decode_position(after)?
                        .offset_after()
                        .ok_or_else(|| PagingError::InvalidCursor(after.clone()))?,
                    None => 0,
                };
                let size = relay.first.unwrap_or(fallback_size);
                (derive_page(size, offset), size, offset)
            }
        };

        if offset.checked_add(size).is_none() {
            return Err(PagingError::InvalidPagingArguments(format!(
                "a slice of {size} items at offset {offset} is out of range"
            )));
        }

        let state = PagingState {
            page,
            size,
            offset,
            strategy,
        };

        debug!(
            page = state.page,
            size = state.size,
            offset = state.offset,
            explicit_page = state.has_explicit_page(),
            "Normalized connection arguments"
        );

        Ok((state, args.extra.clone()))
    }

    /// Re-express a resolved state as connection arguments, so that one
    /// connection's slice can feed another connection over the same data.
    pub fn denormalize(&self, state: &PagingState) -> ConnectionArgs {
        let to_i64 = |v: u64| i64::try_from(v).unwrap_or(i64::MAX);
        match &state.strategy {
            PagingStrategy::Page { after, before, .. } => ConnectionArgs {
                first: Some(to_i64(state.size)),
                after: after.clone(),
                before: before.clone(),
                ..Default::default()
            },
            PagingStrategy::Cursor(relay) if relay.is_empty() => ConnectionArgs {
                first: Some(to_i64(state.size)),
                ..Default::default()
            },
            PagingStrategy::Cursor(relay) => ConnectionArgs {
                first: relay.first.map(to_i64),
                after: relay.after.clone(),
                last: relay.last.map(to_i64),
                before: relay.before.clone(),
                ..Default::default()
            },
        }
    }
}

/// `round((size + offset) / size)`, rounding halves up, or `1` for a
/// count-only request.
fn derive_page(size: u64, offset: u64) -> u64 {
    if size == 0 {
        return 1;
    }
    let size = size as u128;
    let offset = offset as u128;
    let page = (2 * (size + offset) + size) / (2 * size);
    u64::try_from(page).unwrap_or(u64::MAX)
}
