//! Closed condition vocabulary: fields, operators and which operator applies where.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InvalidRuleError;

/// Product field a condition can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    ProductTitle,
    ProductType,
    ProductVendor,
    ProductTag,
    ProductPrice,
    CompareAtPrice,
    InventoryStock,
    VariantTitle,
    VariantWeight,
}

/// How a condition compares the field with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    IsSet,
    IsNotSet,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::ProductTitle,
        FieldName::ProductType,
        FieldName::ProductVendor,
        FieldName::ProductTag,
        FieldName::ProductPrice,
        FieldName::CompareAtPrice,
        FieldName::InventoryStock,
        FieldName::VariantTitle,
        FieldName::VariantWeight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::ProductTitle => "product_title",
            FieldName::ProductType => "product_type",
            FieldName::ProductVendor => "product_vendor",
            FieldName::ProductTag => "product_tag",
            FieldName::ProductPrice => "product_price",
            FieldName::CompareAtPrice => "compare_at_price",
            FieldName::InventoryStock => "inventory_stock",
            FieldName::VariantTitle => "variant_title",
            FieldName::VariantWeight => "variant_weight",
        }
    }

    /// Numeric fields are compared as numbers (`greater_than`/`less_than`) or as
    /// their canonical decimal string (`equals`/`not_equals`).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldName::ProductPrice
                | FieldName::CompareAtPrice
                | FieldName::InventoryStock
                | FieldName::VariantWeight
        )
    }

    /// Fields a product may leave empty; only these accept presence checks.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            FieldName::ProductType
                | FieldName::ProductVendor
                | FieldName::ProductTag
                | FieldName::CompareAtPrice
                | FieldName::VariantWeight
        )
    }

    /// Operators a rule editor should offer for this field.
    pub fn operators(self) -> Vec<Operator> {
        Operator::ALL
            .into_iter()
            .filter(|op| op.applies_to(self))
            .collect()
    }
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::Contains,
        Operator::NotContains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::IsSet,
        Operator::IsNotSet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::IsSet => "is_set",
            Operator::IsNotSet => "is_not_set",
        }
    }

    pub fn is_numeric_comparison(self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::LessThan)
    }

    pub fn is_presence_check(self) -> bool {
        matches!(self, Operator::IsSet | Operator::IsNotSet)
    }

    /// Static applicability table.
    pub fn applies_to(self, field: FieldName) -> bool {
        match self {
            Operator::Equals | Operator::NotEquals => true,
            Operator::Contains
            | Operator::NotContains
            | Operator::StartsWith
            | Operator::EndsWith => !field.is_numeric(),
            Operator::GreaterThan | Operator::LessThan => field.is_numeric(),
            Operator::IsSet | Operator::IsNotSet => field.is_optional(),
        }
    }
}

impl core::fmt::Display for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = InvalidRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| InvalidRuleError::UnknownField(s.to_string()))
    }
}

impl FromStr for Operator {
    type Err = InvalidRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| InvalidRuleError::UnknownOperator(s.to_string()))
    }
}
