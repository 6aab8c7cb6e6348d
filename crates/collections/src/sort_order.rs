//! Ordering of collection members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use merchkit_core::{DomainError, DomainResult};

use crate::record::ProductRecord;

/// How a collection orders its products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionSortOrder {
    /// Merchant-defined order (see [`move_entry`]).
    Manual,
    #[default]
    BestSelling,
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
    CreatedDesc,
    CreatedAsc,
}

/// A collection member with the metadata sorting needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub product: ProductRecord,
    pub created_at: DateTime<Utc>,
    pub units_sold: u64,
}

impl CollectionSortOrder {
    /// Stable sort; ties keep their current relative order.
    pub fn sort(self, entries: &mut [CollectionEntry]) {
        match self {
            CollectionSortOrder::Manual => {}
            CollectionSortOrder::BestSelling => {
                entries.sort_by(|a, b| b.units_sold.cmp(&a.units_sold))
            }
            CollectionSortOrder::TitleAsc => {
                entries.sort_by_cached_key(|e| e.product.title.to_lowercase())
            }
            CollectionSortOrder::TitleDesc => entries.sort_by(|a, b| {
                b.product
                    .title
                    .to_lowercase()
                    .cmp(&a.product.title.to_lowercase())
            }),
            CollectionSortOrder::PriceAsc => entries.sort_by_key(|e| e.product.price),
            CollectionSortOrder::PriceDesc => {
                entries.sort_by(|a, b| b.product.price.cmp(&a.product.price))
            }
            CollectionSortOrder::CreatedDesc => {
                entries.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
            CollectionSortOrder::CreatedAsc => entries.sort_by_key(|e| e.created_at),
        }
    }
}

/// Manual reorder: take the entry at `from` and insert it at `to`.
pub fn move_entry<T>(entries: &mut Vec<T>, from: usize, to: usize) -> DomainResult<()> {
    let len = entries.len();
    if from >= len {
        return Err(DomainError::out_of_range(from, len));
    }
    if to >= len {
        return Err(DomainError::out_of_range(to, len));
    }

    let entry = entries.remove(from);
    entries.insert(to, entry);
    debug!(from, to, len, "moved collection entry");
    Ok(())
}
