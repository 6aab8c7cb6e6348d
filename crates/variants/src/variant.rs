//! Variant descriptors and merchant edits.

use serde::{Deserialize, Serialize};

use merchkit_core::ValueObject;

/// One `axis = value` pair of a variant key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValue {
    pub axis_name: String,
    pub value: String,
}

impl ValueObject for OptionValue {}

impl OptionValue {
    pub fn new(axis_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            axis_name: axis_name.into(),
            value: value.into(),
        }
    }
}

/// One concrete combination of axis values plus its editable commercial fields.
///
/// Commercial fields are kept as the merchant typed them; formatting and
/// validation belong to the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    /// Axis/value pairs in axis order; identifies the variant across regenerations.
    pub key: Vec<OptionValue>,
    /// Values joined by `" / "`.
    pub title: String,
    pub sku_suffix: String,
    pub sku: String,
    pub price: String,
    pub compare_at_price: String,
    pub cost_per_item: String,
    pub quantity: String,
    pub barcode: String,
}

/// Editable field of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantField {
    Price,
    CompareAtPrice,
    CostPerItem,
    Quantity,
    Sku,
    Barcode,
}

impl VariantDescriptor {
    pub(crate) fn fresh(key: Vec<OptionValue>, base_sku: &str, base_price: &str) -> Self {
        let title = key
            .iter()
            .map(|v| v.value.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        let sku_suffix = sku_suffix(&key);
        let sku = if base_sku.is_empty() {
            String::new()
        } else {
            format!("{base_sku}-{sku_suffix}")
        };

        Self {
            key,
            title,
            sku_suffix,
            sku,
            price: base_price.to_string(),
            compare_at_price: String::new(),
            cost_per_item: String::new(),
            quantity: "0".to_string(),
            barcode: String::new(),
        }
    }

    pub fn set_field(&mut self, field: VariantField, value: impl Into<String>) {
        let value = value.into();
        match field {
            VariantField::Price => self.price = value,
            VariantField::CompareAtPrice => self.compare_at_price = value,
            VariantField::CostPerItem => self.cost_per_item = value,
            VariantField::Quantity => self.quantity = value,
            VariantField::Sku => self.sku = value,
            VariantField::Barcode => self.barcode = value,
        }
    }

    pub fn field(&self, field: VariantField) -> &str {
        match field {
            VariantField::Price => &self.price,
            VariantField::CompareAtPrice => &self.compare_at_price,
            VariantField::CostPerItem => &self.cost_per_item,
            VariantField::Quantity => &self.quantity,
            VariantField::Sku => &self.sku,
            VariantField::Barcode => &self.barcode,
        }
    }
}

/// Find the variant with exactly this key (same axes, same values, same order).
pub fn find_variant<'a>(
    variants: &'a [VariantDescriptor],
    key: &[OptionValue],
) -> Option<&'a VariantDescriptor> {
    variants.iter().find(|v| v.key == key)
}

/// First two characters of each value, uppercased, joined with `-`.
fn sku_suffix(key: &[OptionValue]) -> String {
    key.iter()
        .map(|v| v.value.chars().take(2).collect::<String>().to_uppercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(pairs: &[(&str, &str)]) -> Vec<OptionValue> {
        pairs.iter().map(|(a, v)| OptionValue::new(*a, *v)).collect()
    }

    #[test]
    fn fresh_variant_defaults() {
        let variant = VariantDescriptor::fresh(
            key(&[("Taglia", "M"), ("Colore", "Rosso")]),
            "MAG",
            "19.90",
        );
        assert_eq!(variant.title, "M / Rosso");
        assert_eq!(variant.sku_suffix, "M-RO");
        assert_eq!(variant.sku, "MAG-M-RO");
        assert_eq!(variant.price, "19.90");
        assert_eq!(variant.quantity, "0");
        assert!(variant.compare_at_price.is_empty());
        assert!(variant.cost_per_item.is_empty());
        assert!(variant.barcode.is_empty());
    }

    #[test]
    fn fresh_variant_without_base_sku_has_empty_sku() {
        let variant = VariantDescriptor::fresh(key(&[("Colore", "blu")]), "", "");
        assert_eq!(variant.sku_suffix, "BL");
        assert_eq!(variant.sku, "");
    }

    #[test]
    fn sku_suffix_handles_multibyte_values() {
        let variant = VariantDescriptor::fresh(key(&[("Colore", "ébano")]), "X", "");
        assert_eq!(variant.sku_suffix, "ÉB");
    }

    #[test]
    fn set_field_updates_only_that_field() {
        let mut variant = VariantDescriptor::fresh(key(&[("Taglia", "S")]), "", "10");
        variant.set_field(VariantField::Barcode, "8001234567890");
        variant.set_field(VariantField::Quantity, "7");
        assert_eq!(variant.field(VariantField::Barcode), "8001234567890");
        assert_eq!(variant.field(VariantField::Quantity), "7");
        assert_eq!(variant.field(VariantField::Price), "10");
    }

    #[test]
    fn find_variant_requires_same_axis_order() {
        let variants = vec![VariantDescriptor::fresh(
            key(&[("Taglia", "M"), ("Colore", "Blu")]),
            "",
            "",
        )];
        assert!(find_variant(&variants, &key(&[("Taglia", "M"), ("Colore", "Blu")])).is_some());
        assert!(find_variant(&variants, &key(&[("Colore", "Blu"), ("Taglia", "M")])).is_none());
        assert!(find_variant(&variants, &key(&[("Taglia", "M")])).is_none());
    }
}
