//! Conditions and condition sets for automated collections.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidRuleError;
use crate::field::{FieldName, Operator};

/// One field/operator/value test.
///
/// Deserialisation goes through the raw string form so unknown field or operator
/// names surface as [`InvalidRuleError`] instead of a generic serde message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCondition")]
pub struct Condition {
    pub id: String,
    pub field: FieldName,
    pub operator: Operator,
    pub value: String,
}

/// Untrusted condition as submitted by a rule editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub id: String,
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

impl TryFrom<RawCondition> for Condition {
    type Error = InvalidRuleError;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        let field = raw.field.parse::<FieldName>()?;
        let operator = raw.operator.parse::<Operator>()?;
        let id = if raw.id.is_empty() {
            Uuid::now_v7().to_string()
        } else {
            raw.id
        };

        Ok(Self {
            id,
            field,
            operator,
            value: raw.value,
        })
    }
}

impl Condition {
    /// Create a condition with a fresh, time-ordered id.
    pub fn new(field: FieldName, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            field,
            operator,
            value: value.into(),
        }
    }

    /// Boundary validation. The matcher tolerates anything this rejects, but a rule
    /// editor should refuse to save it.
    pub fn validate(&self) -> Result<(), InvalidRuleError> {
        if !self.operator.applies_to(self.field) {
            return Err(InvalidRuleError::OperatorNotApplicable {
                field: self.field,
                operator: self.operator,
            });
        }

        if self.operator.is_presence_check() {
            return Ok(());
        }

        let value = self.value.trim();
        if value.is_empty() {
            return Err(InvalidRuleError::MissingValue {
                field: self.field,
                operator: self.operator,
            });
        }

        if self.operator.is_numeric_comparison() && !value.parse::<f64>().is_ok_and(f64::is_finite)
        {
            return Err(InvalidRuleError::NonNumericValue {
                field: self.field,
                operator: self.operator,
                value: self.value.clone(),
            });
        }

        Ok(())
    }
}

/// How condition results are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Relation {
    /// Every condition must hold.
    #[default]
    All,
    /// At least one condition must hold.
    Any,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::All => "all",
            Relation::Any => "any",
        }
    }
}

impl FromStr for Relation {
    type Err = InvalidRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Relation::All),
            "any" => Ok(Relation::Any),
            other => Err(InvalidRuleError::UnknownRelation(other.to_string())),
        }
    }
}

impl TryFrom<String> for Relation {
    type Error = InvalidRuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl core::fmt::Display for Relation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rules of an automated collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub relation: Relation,
}

impl ConditionSet {
    pub fn new(relation: Relation) -> Self {
        Self {
            conditions: Vec::new(),
            relation,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// A collection without conditions is a manual collection.
    pub fn is_automated(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Remove a condition by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Condition> {
        let index = self.conditions.iter().position(|c| c.id == id)?;
        Some(self.conditions.remove(index))
    }

    /// Validate every condition, reporting the first rejection.
    pub fn validate(&self) -> Result<(), InvalidRuleError> {
        self.conditions.iter().try_for_each(Condition::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conditions_get_distinct_ids() {
        let a = Condition::new(FieldName::ProductTag, Operator::Equals, "estate");
        let b = Condition::new(FieldName::ProductTag, Operator::Equals, "estate");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn deserialize_condition_set_from_editor_json() {
        let json = r#"{
            "conditions": [
                {"id": "1", "field": "product_tag", "operator": "equals", "value": "estate"},
                {"id": "2", "field": "product_price", "operator": "greater_than", "value": "50"}
            ],
            "relation": "any"
        }"#;

        let set: ConditionSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.relation, Relation::Any);
        assert_eq!(set.conditions.len(), 2);
        assert_eq!(set.conditions[1].field, FieldName::ProductPrice);
        assert_eq!(set.conditions[1].operator, Operator::GreaterThan);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn condition_set_json_round_trip_uses_wire_names() {
        let set = ConditionSet::new(Relation::Any)
            .with_condition(Condition::new(FieldName::CompareAtPrice, Operator::IsSet, ""))
            .with_condition(Condition::new(
                FieldName::InventoryStock,
                Operator::LessThan,
                "5",
            ));

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains(r#""field":"compare_at_price""#));
        assert!(json.contains(r#""operator":"less_than""#));
        assert!(json.contains(r#""relation":"any""#));

        let restored: ConditionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn deserialize_rejects_unknown_operator() {
        let json =
            r#"{"id": "1", "field": "product_title", "operator": "matches_regex", "value": "x"}"#;
        let err = serde_json::from_str::<Condition>(json).unwrap_err();
        assert!(err.to_string().contains("unknown condition operator"));
    }

    #[test]
    fn deserialize_rejects_unknown_relation() {
        let json = r#"{"conditions": [], "relation": "either"}"#;
        let err = serde_json::from_str::<ConditionSet>(json).unwrap_err();
        assert!(err.to_string().contains("unknown condition relation"));
    }

    #[test]
    fn missing_id_is_generated() {
        let json = r#"{"field": "product_vendor", "operator": "is_set"}"#;
        let condition: Condition = serde_json::from_str(json).unwrap();
        assert!(!condition.id.is_empty());
        assert_eq!(condition.value, "");
    }

    #[test]
    fn validate_rejects_operator_not_applicable_to_field() {
        let condition = Condition::new(FieldName::ProductPrice, Operator::Contains, "9");
        assert_eq!(
            condition.validate(),
            Err(InvalidRuleError::OperatorNotApplicable {
                field: FieldName::ProductPrice,
                operator: Operator::Contains,
            })
        );
    }

    #[test]
    fn validate_rejects_non_numeric_comparison_value() {
        let condition = Condition::new(FieldName::InventoryStock, Operator::LessThan, "dieci");
        match condition.validate() {
            Err(InvalidRuleError::NonNumericValue { value, .. }) => assert_eq!(value, "dieci"),
            other => panic!("Expected NonNumericValue, got {other:?}"),
        }
    }

    #[test]
    fn validate_requires_value_except_for_presence_checks() {
        let blank = Condition::new(FieldName::ProductTitle, Operator::Contains, "  ");
        assert!(matches!(
            blank.validate(),
            Err(InvalidRuleError::MissingValue { .. })
        ));

        let presence = Condition::new(FieldName::CompareAtPrice, Operator::IsNotSet, "");
        assert!(presence.validate().is_ok());
    }

    #[test]
    fn remove_by_id() {
        let keep = Condition::new(FieldName::ProductTitle, Operator::Contains, "Maglia");
        let drop = Condition::new(FieldName::ProductVendor, Operator::Equals, "Acme");
        let drop_id = drop.id.clone();
        let mut set = ConditionSet::new(Relation::All)
            .with_condition(keep.clone())
            .with_condition(drop);

        assert!(set.remove(&drop_id).is_some());
        assert!(set.remove(&drop_id).is_none());
        assert_eq!(set.conditions, vec![keep]);
        assert!(set.is_automated());
    }
}
