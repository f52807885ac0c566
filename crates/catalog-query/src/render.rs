//! Render criteria into canonical query text.
//!
//! ```text
//! AR=(Mozart) AND CO=(Students) NOT PR=(100)
//! ```

use crate::criterion::Criterion;
use crate::error::{InvalidReason, QueryError, Result};
use crate::lexer::escape_text;
use crate::registry::CategoryRegistry;

/// Render a criterion sequence as canonical query text.
///
/// Every category must be registered, every text non-blank, and every
/// criterion after the first must carry logic. The first criterion's logic is
/// never written.
pub fn render(registry: &CategoryRegistry, criteria: &[Criterion]) -> Result<String> {
    let mut fragments = Vec::with_capacity(criteria.len());

    for (index, criterion) in criteria.iter().enumerate() {
        let code = registry
            .code_for(&criterion.category)
            .ok_or_else(|| QueryError::UnknownCategory(criterion.category.clone()))?;

        let text = criterion.text.trim();
        if text.is_empty() {
            return Err(QueryError::InvalidCriterion {
                index,
                reason: InvalidReason::EmptyText,
            });
        }

        let unit = format!("{}=({})", code, escape_text(text));
        if index == 0 {
            fragments.push(unit);
            continue;
        }

        let logic = criterion.logic.ok_or(QueryError::MissingLogic { index })?;
        fragments.push(format!("{} {}", logic.as_str(), unit));
    }

    Ok(fragments.join(" "))
}

/// Render a preview while the user is still composing.
///
/// Never fails: unregistered categories get an empty code, missing logic is
/// shown as the default `AND`, and blank text is written as is.
pub fn render_preview(registry: &CategoryRegistry, criteria: &[Criterion]) -> String {
    criteria
        .iter()
        .enumerate()
        .map(|(index, criterion)| {
            let code = registry.code_for(&criterion.category).unwrap_or("");
            let unit = format!("{}=({})", code, escape_text(criterion.text.trim()));
            if index == 0 {
                unit
            } else {
                format!("{} {}", criterion.logic.unwrap_or_default().as_str(), unit)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
