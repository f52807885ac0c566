//! Criterion model: one search condition and the logic that chains it to the
//! conditions before it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidReason, QueryError, Result};
use crate::registry::CategoryRegistry;

/// Boolean logic combining a criterion with the result of all criteria before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryLogic {
    #[default]
    And,
    Or,
    Not,
}

impl QueryLogic {
    /// Keywords in the order the parser tries them.
    pub const ALL: [QueryLogic; 3] = [QueryLogic::And, QueryLogic::Or, QueryLogic::Not];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryLogic::And => "AND",
            QueryLogic::Or => "OR",
            QueryLogic::Not => "NOT",
        }
    }

    /// Match an exact (case-sensitive) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|logic| logic.as_str() == keyword)
    }
}

impl fmt::Display for QueryLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single search condition.
///
/// `logic` is meaningful only from the second criterion of a sequence on;
/// whatever is stored on the first one is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub category: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<QueryLogic>,
}

impl Criterion {
    pub fn new(
        category: impl Into<String>,
        text: impl Into<String>,
        logic: Option<QueryLogic>,
    ) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
            logic,
        }
    }

    /// The base criterion of a sequence.
    pub fn first(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(category, text, None)
    }

    /// A criterion chained onto the ones before it.
    pub fn then(logic: QueryLogic, category: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(category, text, Some(logic))
    }

    /// Check text and category against the registry.
    pub fn check(&self, registry: &CategoryRegistry) -> std::result::Result<(), InvalidReason> {
        if !registry.contains_label(&self.category) {
            return Err(InvalidReason::UnknownCategory(self.category.clone()));
        }
        if self.text.trim().is_empty() {
            return Err(InvalidReason::EmptyText);
        }
        Ok(())
    }

    pub fn is_valid(&self, registry: &CategoryRegistry) -> bool {
        self.check(registry).is_ok()
    }
}

/// Validate a sequence for submission.
///
/// Fails with `NothingToSearch` when empty, otherwise with `InvalidCriterion`
/// for the first element that does not pass [`Criterion::check`].
pub fn validate_sequence(registry: &CategoryRegistry, criteria: &[Criterion]) -> Result<()> {
    if criteria.is_empty() {
        return Err(QueryError::NothingToSearch);
    }
    for (index, criterion) in criteria.iter().enumerate() {
        criterion
            .check(registry)
            .map_err(|reason| QueryError::InvalidCriterion { index, reason })?;
    }
    Ok(())
}

/// Whether a sequence is non-empty and every criterion is valid.
pub fn is_submittable(registry: &CategoryRegistry, criteria: &[Criterion]) -> bool {
    validate_sequence(registry, criteria).is_ok()
}

/// Drop any logic stored on the first criterion.
pub fn normalize(mut criteria: Vec<Criterion>) -> Vec<Criterion> {
    if let Some(first) = criteria.first_mut() {
        first.logic = None;
    }
    criteria
}
