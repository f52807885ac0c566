//! Refinement filter engine.
//!
//! Narrows an already-fetched result set without another search. Facets
//! combine with AND, values within one facet with OR.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use tracing::debug;

use crate::selection::RefinementSelection;

/// An item whose fields can be refined on.
pub trait Faceted {
    /// Value of a facet field as a string, or `None` if the item lacks it.
    fn facet_value(&self, facet: &str) -> Option<Cow<'_, str>>;
}

impl Faceted for Value {
    /// Strings as is, numbers and booleans in their JSON spelling. Nulls,
    /// arrays and objects have no facet value.
    fn facet_value(&self, facet: &str) -> Option<Cow<'_, str>> {
        match self.get(facet)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }
}

impl Faceted for BTreeMap<String, String> {
    fn facet_value(&self, facet: &str) -> Option<Cow<'_, str>> {
        self.get(facet).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl Faceted for HashMap<String, String> {
    fn facet_value(&self, facet: &str) -> Option<Cow<'_, str>> {
        self.get(facet).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Outcome of a refinement.
///
/// `NotFiltered` means no facet has a selection, which is not the same as a
/// selection that matched nothing (`Filtered` with no items).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refinement<T> {
    NotFiltered,
    Filtered(Vec<T>),
}

impl<T> Default for Refinement<T> {
    fn default() -> Self {
        Refinement::NotFiltered
    }
}

impl<T> Refinement<T> {
    pub fn is_filtered(&self) -> bool {
        matches!(self, Refinement::Filtered(_))
    }

    /// Filtered items, or `None` when no filter is active.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Refinement::NotFiltered => None,
            Refinement::Filtered(items) => Some(items),
        }
    }

    /// Items to show: the filtered ones, or `all` when not filtered.
    pub fn visible<'a>(&'a self, all: &'a [T]) -> &'a [T] {
        self.items().unwrap_or(all)
    }
}

/// Refine items by a selection, keeping their order.
pub fn refine<T>(items: &[T], selection: &RefinementSelection) -> Refinement<T>
where
    T: Faceted + Clone,
{
    if !selection.is_active() {
        debug!(items = items.len(), "no refinement facet selected");
        return Refinement::NotFiltered;
    }

    let kept: Vec<T> = items
        .iter()
        .filter(|item| selection.matches(*item))
        .cloned()
        .collect();

    debug!(
        items = items.len(),
        kept = kept.len(),
        facets = selection.active_facets().count(),
        "refined results"
    );
    Refinement::Filtered(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_facet_values() {
        let item = json!({ "artist": "Monet", "price": 120, "sold": false, "tags": ["a"] });
        assert_eq!(item.facet_value("artist").as_deref(), Some("Monet"));
        assert_eq!(item.facet_value("price").as_deref(), Some("120"));
        assert_eq!(item.facet_value("sold").as_deref(), Some("false"));
        assert_eq!(item.facet_value("tags"), None);
        assert_eq!(item.facet_value("missing"), None);
        assert_eq!(json!("not an object").facet_value("artist"), None);
    }

    #[test]
    fn map_facet_values() {
        let mut item = BTreeMap::new();
        item.insert("genre".to_string(), "Jazz".to_string());
        assert_eq!(item.facet_value("genre").as_deref(), Some("Jazz"));
        assert_eq!(item.facet_value("composer"), None);
    }

    #[test]
    fn inactive_selection_is_not_filtered() {
        let items = vec![json!({ "artist": "A" })];
        let selection = RefinementSelection::with_facets(["artist", "collection"]);
        assert_eq!(refine(&items, &selection), Refinement::NotFiltered);
    }

    #[test]
    fn no_match_is_filtered_empty() {
        let items = vec![json!({ "artist": "A" })];
        let mut selection = RefinementSelection::new();
        selection.select("artist", "B");
        let result = refine(&items, &selection);
        assert_eq!(result, Refinement::Filtered(vec![]));
        assert!(result.is_filtered());
        assert!(result.visible(&items).is_empty());
    }

    #[test]
    fn or_within_facet() {
        let items = vec![
            json!({ "artist": "A" }),
            json!({ "artist": "B" }),
            json!({ "artist": "C" }),
        ];
        let mut selection = RefinementSelection::new();
        selection.set("artist", ["A", "C"]);
        let result = refine(&items, &selection);
        assert_eq!(result.items().unwrap(), &[items[0].clone(), items[2].clone()]);
    }

    #[test]
    fn item_missing_facet_is_dropped() {
        let items = vec![json!({ "artist": "A" }), json!({ "collection": "X" })];
        let mut selection = RefinementSelection::new();
        selection.select("collection", "X");
        assert_eq!(refine(&items, &selection), Refinement::Filtered(vec![items[1].clone()]));
    }

    #[test]
    fn visible_falls_back_to_all() {
        let items = vec![1u8, 2, 3];
        let refinement: Refinement<u8> = Refinement::default();
        assert_eq!(refinement.visible(&items), &[1, 2, 3]);
        assert_eq!(refinement.items(), None);
    }
}
