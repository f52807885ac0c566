//! Request payload for the external search executor.
//!
//! The executor itself lives outside this crate. What it receives is an
//! ordered list of clauses plus a collection scope, and it must evaluate the
//! clauses left to right: each clause combines with the cumulative result of
//! all clauses before it, with no precedence and no grouping. [`fold_left`]
//! is the reference for that evaluation order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::criterion::{validate_sequence, Criterion, QueryLogic};
use crate::error::{QueryError, Result};
use crate::parse::parse_with_report;
use crate::registry::CategoryRegistry;

/// Collection a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollectionScope {
    #[default]
    All,
    Lecturers,
    Students,
    Freelancers,
    Uncategorized,
}

impl CollectionScope {
    pub const ALL: [CollectionScope; 5] = [
        CollectionScope::All,
        CollectionScope::Lecturers,
        CollectionScope::Students,
        CollectionScope::Freelancers,
        CollectionScope::Uncategorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionScope::All => "All",
            CollectionScope::Lecturers => "Lecturers",
            CollectionScope::Students => "Students",
            CollectionScope::Freelancers => "Freelancers",
            CollectionScope::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for CollectionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionScope {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| QueryError::UnknownCollection(s.to_string()))
    }
}

/// One condition as sent to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<QueryLogic>,
    pub category: String,
    pub text: String,
}

/// Search request handed to the external executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub criteria: Vec<QueryClause>,
    #[serde(default)]
    pub collection_scope: CollectionScope,
}

impl SearchRequest {
    /// Build a request from criteria, preserving their order.
    ///
    /// The first clause never carries logic. A later criterion without logic
    /// is sent as `AND` and logged, since the query text most likely lost a
    /// keyword.
    pub fn from_criteria(criteria: &[Criterion], collection_scope: CollectionScope) -> Result<Self> {
        if criteria.is_empty() {
            return Err(QueryError::NothingToSearch);
        }

        let clauses = criteria
            .iter()
            .enumerate()
            .map(|(index, criterion)| {
                let logic = if index == 0 {
                    None
                } else {
                    Some(criterion.logic.unwrap_or_else(|| {
                        warn!(index, "criterion has no logic operator, sending AND");
                        QueryLogic::And
                    }))
                };
                QueryClause {
                    logic,
                    category: criterion.category.clone(),
                    text: criterion.text.trim().to_string(),
                }
            })
            .collect();

        Ok(Self {
            criteria: clauses,
            collection_scope,
        })
    }

    /// Parse query text, validate the criteria and build a request.
    pub fn from_query_text(
        registry: &CategoryRegistry,
        text: &str,
        collection_scope: CollectionScope,
    ) -> Result<Self> {
        let (criteria, report) = parse_with_report(registry, text);
        if !report.missing_logic.is_empty() {
            warn!(
                indices = ?report.missing_logic,
                "query text has criteria without a logic keyword"
            );
        }
        validate_sequence(registry, &criteria)?;
        Self::from_criteria(&criteria, collection_scope)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Evaluate the request with a per-clause matcher, in executor order.
    pub fn evaluate_with<K, F>(&self, mut matcher: F) -> BTreeSet<K>
    where
        K: Ord + Clone,
        F: FnMut(&QueryClause) -> BTreeSet<K>,
    {
        fold_left(
            self.criteria
                .iter()
                .map(|clause| (clause.logic, matcher(clause))),
        )
    }
}

/// Combine per-clause match sets left to right.
///
/// `AND` intersects with the running result, `OR` unions, `NOT` removes. The
/// first clause's logic is ignored and absent logic later counts as `AND`.
pub fn fold_left<K, I>(clauses: I) -> BTreeSet<K>
where
    K: Ord + Clone,
    I: IntoIterator<Item = (Option<QueryLogic>, BTreeSet<K>)>,
{
    let mut clauses = clauses.into_iter();
    let Some((_, first)) = clauses.next() else {
        return BTreeSet::new();
    };

    clauses.fold(first, |acc, (logic, matches)| match logic.unwrap_or_default() {
        QueryLogic::And => acc.intersection(&matches).cloned().collect(),
        QueryLogic::Or => acc.union(&matches).cloned().collect(),
        QueryLogic::Not => acc.difference(&matches).cloned().collect(),
    })
}
