//! Rule matching: does a product belong to an automated collection?
//!
//! Matching is total. Anything validation should have rejected (a non-numeric
//! value on a numeric comparison, a substring test on a number) makes that one
//! condition evaluate to `false`.

use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, trace};

use crate::condition::{Condition, ConditionSet, Relation};
use crate::field::Operator;
use crate::record::{FieldValue, ProductRecord, canonical_decimal};

/// Whether `product` satisfies `rule_set`.
///
/// An empty condition set matches nothing; callers that want "no rules means
/// every product" must handle that case themselves.
pub fn matches(product: &ProductRecord, rule_set: &ConditionSet) -> bool {
    if rule_set.conditions.is_empty() {
        trace!("empty condition set matches nothing");
        return false;
    }

    let mut results = rule_set
        .conditions
        .iter()
        .map(|condition| evaluate(product, condition));

    match rule_set.relation {
        Relation::All => results.all(|hit| hit),
        Relation::Any => results.any(|hit| hit),
    }
}

/// Evaluate a single condition against `product`.
pub fn evaluate(product: &ProductRecord, condition: &Condition) -> bool {
    let field = product.field(condition.field);
    let value = condition.value.as_str();

    match condition.operator {
        Operator::Equals => any_value(field, |s| s == value),
        Operator::NotEquals => !any_value(field, |s| s == value),
        Operator::Contains => is_text(field) && any_value(field, |s| s.contains(value)),
        Operator::NotContains => is_text(field) && !any_value(field, |s| s.contains(value)),
        Operator::StartsWith => is_text(field) && any_value(field, |s| s.starts_with(value)),
        Operator::EndsWith => is_text(field) && any_value(field, |s| s.ends_with(value)),
        Operator::GreaterThan => compare_numeric(condition, field, |lhs, rhs| lhs > rhs),
        Operator::LessThan => compare_numeric(condition, field, |lhs, rhs| lhs < rhs),
        Operator::IsSet => field.is_set(),
        Operator::IsNotSet => !field.is_set(),
    }
}

/// Products of `catalog` that belong to the collection, in catalog order.
pub fn filter_products<'a>(
    catalog: &'a [ProductRecord],
    rule_set: &ConditionSet,
) -> Vec<&'a ProductRecord> {
    let members: Vec<_> = catalog
        .iter()
        .filter(|product| matches(product, rule_set))
        .collect();

    debug!(
        conditions = rule_set.conditions.len(),
        relation = %rule_set.relation,
        catalog = catalog.len(),
        members = members.len(),
        "evaluated automated collection"
    );

    members
}

fn is_text(field: FieldValue<'_>) -> bool {
    !matches!(field, FieldValue::Number(_))
}

/// True if the field's string form satisfies `pred`; for tags, if any tag does.
fn any_value(field: FieldValue<'_>, pred: impl Fn(&str) -> bool) -> bool {
    match field {
        FieldValue::Text(s) => pred(s),
        FieldValue::Tags(tags) => tags.iter().any(|tag| pred(tag.as_str())),
        FieldValue::Number(Some(n)) => pred(canonical_decimal(n).as_str()),
        FieldValue::Number(None) => false,
    }
}

fn compare_numeric(
    condition: &Condition,
    field: FieldValue<'_>,
    cmp: impl Fn(f64, f64) -> bool,
) -> bool {
    let FieldValue::Number(Some(lhs)) = field else {
        return false;
    };
    let Some(lhs) = lhs.to_f64() else {
        return false;
    };

    match condition.value.trim().parse::<f64>() {
        Ok(rhs) if rhs.is_finite() => cmp(lhs, rhs),
        _ => {
            trace!(
                condition_id = %condition.id,
                value = %condition.value,
                "non-numeric comparison value; condition fails closed"
            );
            false
        }
    }
}
