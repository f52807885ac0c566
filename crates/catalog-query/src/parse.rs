//! Parse query text back into criteria.
//!
//! The parser is lenient: it accepts everything the renderer produces plus
//! hand edits of it, and never fails. Unregistered codes become the category
//! label verbatim, unreadable logic becomes "no logic", and broken fragments
//! are skipped.

use tracing::debug;

use crate::criterion::{Criterion, QueryLogic};
use crate::lexer::Scanner;
use crate::registry::CategoryRegistry;

/// What the parser had to tolerate while reading a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Codes that were not in the registry and were kept as labels
    pub unresolved_codes: Vec<String>,
    /// Indices of non-first criteria with no recoverable logic keyword
    pub missing_logic: Vec<usize>,
}

impl ParseReport {
    /// True when nothing had to be tolerated.
    pub fn is_clean(&self) -> bool {
        self.unresolved_codes.is_empty() && self.missing_logic.is_empty()
    }
}

/// Parse query text into criteria. An empty result means nothing to search.
pub fn parse(registry: &CategoryRegistry, text: &str) -> Vec<Criterion> {
    parse_with_report(registry, text).0
}

/// Parse query text and report the lenient fallbacks that were applied.
pub fn parse_with_report(registry: &CategoryRegistry, text: &str) -> (Vec<Criterion>, ParseReport) {
    let mut scanner = Scanner::new(text);
    let mut criteria: Vec<Criterion> = Vec::new();
    let mut report = ParseReport::default();
    // Logic read after the previous unit, applied to the next one.
    let mut pending: Option<QueryLogic> = None;

    while let Some(unit) = scanner.next_unit() {
        let category = match registry.label_for(unit.code) {
            Some(label) => label.to_string(),
            None => {
                debug!(code = unit.code, "unregistered category code kept as label");
                report.unresolved_codes.push(unit.code.to_string());
                unit.code.to_string()
            }
        };

        let index = criteria.len();
        let logic = pending.take();
        if index > 0 && logic.is_none() {
            debug!(index, "no logic keyword before criterion");
            report.missing_logic.push(index);
        }

        criteria.push(Criterion {
            category,
            text: unit.text.trim().to_string(),
            logic,
        });

        pending = scanner.take_logic();
    }

    (criteria, report)
}
