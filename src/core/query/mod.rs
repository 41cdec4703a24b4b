//! List query engine
//!
//! Turns the raw `sort_by` / `order` / `limit` / `offset` query parameters into
//! [`QueryOptions`] and applies them to a snapshot of the inventory. Malformed
//! or out-of-range pagination values never fail a request; they simply have no
//! effect.


use super::models::Produce;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Query parameter carrying the sort key
pub const SORT_BY: &str = "sort_by";
/// Query parameter carrying the sort direction
pub const ORDER: &str = "order";
/// Query parameter carrying the page size
pub const LIMIT: &str = "limit";
/// Query parameter carrying the page start
pub const OFFSET: &str = "offset";

/// Raw, unparsed list parameters as they arrive on the query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProduceParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListProduceParams {
    /// Collect the recognized keys from decoded query pairs
    ///
    /// The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                SORT_BY => &mut params.sort_by,
                ORDER => &mut params.order,
                LIMIT => &mut params.limit,
                OFFSET => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Non-empty parameters as query pairs, in a stable order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (SORT_BY, &self.sort_by),
            (ORDER, &self.order),
            (LIMIT, &self.limit),
            (OFFSET, &self.offset),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

/// Field a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    ProduceCode,
    UnitPrice,
}

impl SortKey {
    /// Parse a `sort_by` value; unknown keys yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "producecode" => Some(Self::ProduceCode),
            "unitprice" => Some(Self::UnitPrice),
            _ => None,
        }
    }

    fn compare(self, a: &Produce, b: &Produce) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::ProduceCode => a.produce_code.cmp(&b.produce_code),
            Self::UnitPrice => a.unit_price.total_cmp(&b.unit_price),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse an `order` value; only `desc` and `descending` select descending
    ///
    /// Matching is exact, so `DESC` sorts ascending.
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Parsed list options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub sort_key: Option<SortKey>,
    pub order: SortOrder,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl QueryOptions {
    /// Parse raw query parameters
    pub fn from_params(params: &ListProduceParams) -> Self {
        Self {
            sort_key: params.sort_by.as_deref().and_then(SortKey::parse),
            order: params
                .order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            limit: params.limit.as_deref().and_then(parse_non_negative),
            offset: params.offset.as_deref().and_then(parse_non_negative),
        }
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = Some(key);
        self.order = order;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Base-10 signed integer, accepted only when non-negative
fn parse_non_negative(value: &str) -> Option<usize> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
}

/// Sort and paginate a snapshot of records
///
/// The input is never modified. Sorting is stable, so records with equal keys
/// keep their snapshot order. The offset is applied first and falls back to 0
/// when it is at or past the end; the limit is then checked against what the
/// offset left over and falls back to "everything" when larger.
pub fn query(records: &[Produce], options: &QueryOptions) -> Vec<Produce> {
    let mut produce = records.to_vec();

    if let Some(key) = options.sort_key {
        match options.order {
            SortOrder::Ascending => produce.sort_by(|a, b| key.compare(a, b)),
            SortOrder::Descending => produce.sort_by(|a, b| key.compare(b, a)),
        }
    }

    let offset = options
        .offset
        .filter(|&offset| offset < produce.len())
        .unwrap_or(0);
    produce.drain(..offset);

    let limit = options
        .limit
        .filter(|&limit| limit <= produce.len())
        .unwrap_or(produce.len());
    produce.truncate(limit);

    produce
}
