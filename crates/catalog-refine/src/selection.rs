//! Refinement selection: which values of each facet the user has ticked.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::engine::Faceted;

/// Facet name to selected values.
///
/// A facet with an empty set does not filter. The selection is active only
/// when at least one facet has a value selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefinementSelection {
    facets: BTreeMap<String, BTreeSet<String>>,
}

impl RefinementSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with every given facet present and nothing selected.
    pub fn with_facets<I, S>(facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            facets: facets
                .into_iter()
                .map(|facet| (facet.into(), BTreeSet::new()))
                .collect(),
        }
    }

    /// Select a value. Returns false if it was already selected.
    pub fn select(&mut self, facet: &str, value: impl Into<String>) -> bool {
        self.facets
            .entry(facet.to_string())
            .or_default()
            .insert(value.into())
    }

    /// Deselect a value. Returns false if it was not selected.
    pub fn deselect(&mut self, facet: &str, value: &str) -> bool {
        self.facets
            .get_mut(facet)
            .map(|values| values.remove(value))
            .unwrap_or(false)
    }

    /// Flip a value, as a checkbox does. Returns whether it is now selected.
    pub fn toggle(&mut self, facet: &str, value: &str) -> bool {
        if self.deselect(facet, value) {
            false
        } else {
            self.select(facet, value)
        }
    }

    /// Replace all selected values of a facet.
    pub fn set<I, S>(&mut self, facet: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets.insert(
            facet.to_string(),
            values.into_iter().map(Into::into).collect(),
        );
    }

    /// Selected values of a facet, if the facet is known.
    pub fn selected(&self, facet: &str) -> Option<&BTreeSet<String>> {
        self.facets.get(facet)
    }

    pub fn is_selected(&self, facet: &str, value: &str) -> bool {
        self.facets
            .get(facet)
            .is_some_and(|values| values.contains(value))
    }

    /// True when any facet has at least one value selected.
    pub fn is_active(&self) -> bool {
        self.facets.values().any(|values| !values.is_empty())
    }

    /// Facets that currently filter, with their selected values.
    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.facets
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(facet, values)| (facet.as_str(), values))
    }

    /// All known facet names, filtering or not.
    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.facets.keys().map(String::as_str)
    }

    /// Deselect everything, keeping the facets themselves.
    pub fn clear(&mut self) {
        for values in self.facets.values_mut() {
            values.clear();
        }
    }

    /// Button caption for a facet: `"Artist: A, B"` or `"Artist: None"`.
    pub fn summary(&self, facet: &str, label: &str) -> String {
        match self.facets.get(facet) {
            Some(values) if !values.is_empty() => {
                let values: Vec<&str> = values.iter().map(String::as_str).collect();
                format!("{}: {}", label, values.join(", "))
            }
            _ => format!("{}: None", label),
        }
    }

    /// Whether an item passes every filtering facet.
    ///
    /// An item with no value for a filtering facet does not pass.
    pub fn matches<T: Faceted + ?Sized>(&self, item: &T) -> bool {
        self.active_facets().all(|(facet, values)| {
            item.facet_value(facet)
                .is_some_and(|value| values.contains(&*value))
        })
    }
}
