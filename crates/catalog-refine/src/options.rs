//! Selectable values per facet, as shown in the refinement panel.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::engine::Faceted;

/// Facet name to the values a user can pick from.
///
/// Usually supplied by the catalog's distinct-values lookup; [`FacetOptions::from_items`]
/// derives it from a loaded result set instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetOptions {
    facets: BTreeMap<String, Vec<String>>,
}

impl FacetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the options for a facet, keeping the given order.
    pub fn insert<I, S>(&mut self, facet: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets
            .insert(facet.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, facet: &str) -> Option<&[String]> {
        self.facets.get(facet).map(Vec::as_slice)
    }

    pub fn contains(&self, facet: &str, value: &str) -> bool {
        self.get(facet)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    pub fn facets(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.facets
            .iter()
            .map(|(facet, values)| (facet.as_str(), values.as_slice()))
    }

    /// Distinct, sorted values of each facet across `items`.
    ///
    /// Every requested facet gets an entry, empty if no item has a value.
    pub fn from_items<'f, T, F>(items: &[T], facets: F) -> Self
    where
        T: Faceted,
        F: IntoIterator<Item = &'f str>,
    {
        let facets = facets
            .into_iter()
            .map(|facet| {
                let values: BTreeSet<String> = items
                    .iter()
                    .filter_map(|item| item.facet_value(facet))
                    .map(|value| value.into_owned())
                    .collect();
                (facet.to_string(), values.into_iter().collect())
            })
            .collect();
        Self { facets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_items_collects_distinct_sorted() {
        let items = vec![
            json!({ "artist": "Monet", "collection": "Students" }),
            json!({ "artist": "Degas", "collection": "Students" }),
            json!({ "artist": "Monet" }),
        ];
        let options = FacetOptions::from_items(&items, ["artist", "collection", "genre"]);
        assert_eq!(options.get("artist").unwrap(), &["Degas", "Monet"]);
        assert_eq!(options.get("collection").unwrap(), &["Students"]);
        assert!(options.get("genre").unwrap().is_empty());
        assert_eq!(options.get("price"), None);
    }

    #[test]
    fn insert_keeps_order() {
        let mut options = FacetOptions::new();
        options.insert("collection", ["Lecturers", "Students", "Freelancers"]);
        assert_eq!(
            options.get("collection").unwrap(),
            &["Lecturers", "Students", "Freelancers"]
        );
        assert!(options.contains("collection", "Students"));
        assert!(!options.contains("collection", "All"));
        assert_eq!(options.facets().count(), 1);
    }

    #[test]
    fn deserializes_from_lookup_response() {
        let options: FacetOptions =
            serde_json::from_value(json!({ "genre": ["Folk", "Jazz"] })).unwrap();
        assert!(options.contains("genre", "Jazz"));
    }
}
