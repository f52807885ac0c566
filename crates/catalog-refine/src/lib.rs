//! catalog-refine: client-side refinement of catalog search results.
//!
//! After a search returns, the results panel offers multi-select facets
//! (artist and collection for artwork; composer, genre, instrumentation and
//! emotion for music scores). An item passes when, for every facet with a
//! selection, its value is one of the selected values. With nothing selected
//! the result is [`Refinement::NotFiltered`], never an empty filter.
//!
//! ```
//! use catalog_refine::{refine, Refinement, RefinementSelection};
//! use serde_json::json;
//!
//! let items = vec![
//!     json!({ "artist": "A", "collection": "X" }),
//!     json!({ "artist": "B", "collection": "X" }),
//! ];
//! let mut selection = RefinementSelection::with_facets(["artist", "collection"]);
//! assert_eq!(refine(&items, &selection), Refinement::NotFiltered);
//!
//! selection.select("artist", "A");
//! assert_eq!(refine(&items, &selection), Refinement::Filtered(vec![items[0].clone()]));
//! ```

pub mod engine;
pub mod options;
pub mod selection;
pub mod view;

pub use engine::*;
pub use options::FacetOptions;
pub use selection::RefinementSelection;
pub use view::ResultsView;
