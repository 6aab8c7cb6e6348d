//! Rule boundary errors.

use thiserror::Error;

use crate::field::{FieldName, Operator};

/// Rejection of a rule at the boundary (deserialisation or form submission).
///
/// The matcher never sees an invalid rule: anything that fails here is dropped
/// before evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRuleError {
    #[error("unknown condition field: {0:?}")]
    UnknownField(String),

    #[error("unknown condition operator: {0:?}")]
    UnknownOperator(String),

    #[error("unknown condition relation: {0:?} (expected \"all\" or \"any\")")]
    UnknownRelation(String),

    #[error("operator {operator} cannot be used with field {field}")]
    OperatorNotApplicable { field: FieldName, operator: Operator },

    #[error("operator {operator} on field {field} requires a numeric value, got {value:?}")]
    NonNumericValue {
        field: FieldName,
        operator: Operator,
        value: String,
    },

    #[error("operator {operator} on field {field} requires a value")]
    MissingValue { field: FieldName, operator: Operator },
}
