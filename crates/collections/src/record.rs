//! Read-only product projection used for rule matching.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Flattened view of a catalog product exposing exactly the fields rules can test.
///
/// The host application builds this from whatever catalog storage it uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub product_type: String,
    pub vendor: String,
    pub tags: BTreeSet<String>,
    pub price: Decimal,
    pub compare_at_price: Option<Decimal>,
    pub inventory_stock: i64,
    pub variant_title: String,
    pub variant_weight: Option<Decimal>,
}

/// Borrowed value of one field, typed by how rules compare it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Tags(&'a BTreeSet<String>),
    Number(Option<Decimal>),
}

impl ProductRecord {
    pub fn new(title: impl Into<String>, price: Decimal) -> Self {
        Self {
            title: title.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn field(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::ProductTitle => FieldValue::Text(&self.title),
            FieldName::ProductType => FieldValue::Text(&self.product_type),
            FieldName::ProductVendor => FieldValue::Text(&self.vendor),
            FieldName::ProductTag => FieldValue::Tags(&self.tags),
            FieldName::ProductPrice => FieldValue::Number(Some(self.price)),
            FieldName::CompareAtPrice => FieldValue::Number(self.compare_at_price),
            FieldName::InventoryStock => {
                FieldValue::Number(Some(Decimal::from(self.inventory_stock)))
            }
            FieldName::VariantTitle => FieldValue::Text(&self.variant_title),
            FieldName::VariantWeight => FieldValue::Number(self.variant_weight),
        }
    }
}

impl FieldValue<'_> {
    /// Present means a non-empty string, a non-empty tag set, or a numeric value.
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Tags(tags) => !tags.is_empty(),
            FieldValue::Number(n) => n.is_some(),
        }
    }
}

/// Canonical decimal string: no trailing fractional zeros (`45.50` -> `"45.5"`).
pub(crate) fn canonical_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
