//! catalog-query: search criteria, category registry, and the canonical
//! query text shared by the advanced search form and the search executor.
//!
//! # Grammar
//!
//! A query is a sequence of units separated by single spaces:
//! - First unit: `CODE=(text)`
//! - Each later unit: `LOGIC CODE=(text)` with `LOGIC` one of `AND`, `OR`, `NOT`
//! - `CODE` is the registered short code of a category (`AR`, `CO`, `All`, ...)
//! - Inside the parentheses, `\)` stands for `)` and `\\` for `\`
//!
//! Example: `AR=(Mozart) AND CO=(Students) NOT PR=(100)`
//!
//! Logic applies left to right with no precedence: each unit combines with the
//! accumulated result of every unit before it.

pub mod config;
pub mod criterion;
pub mod error;
pub mod executor;
pub mod form;
pub mod lexer;
pub mod parse;
pub mod registry;
pub mod render;

pub use config::*;
pub use criterion::*;
pub use error::*;
pub use executor::*;
pub use form::SearchForm;
pub use parse::*;
pub use registry::*;
pub use render::*;
