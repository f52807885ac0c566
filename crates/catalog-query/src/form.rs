//! Query builder state behind the advanced search form.
//!
//! The form owns the committed criteria and the editable preview text. The
//! preview is what gets searched: the user may edit it freely, and `submit`
//! parses it again rather than trusting the committed list.

use std::sync::Arc;

use crate::criterion::{Criterion, QueryLogic};
use crate::error::{QueryError, Result};
use crate::executor::{CollectionScope, SearchRequest};
use crate::parse::parse;
use crate::registry::{CategoryRegistry, CATCH_ALL};
use crate::render::{render, render_preview};

#[derive(Debug, Clone)]
pub struct SearchForm {
    registry: Arc<CategoryRegistry>,
    /// Category picked for the pending input
    pub category: String,
    /// Text typed for the pending input
    pub text: String,
    /// Logic for the pending input; unused while no criterion is committed
    pub logic: QueryLogic,
    pub collection_scope: CollectionScope,
    criteria: Vec<Criterion>,
    preview: String,
}

impl SearchForm {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        Self {
            registry,
            category: CATCH_ALL.to_string(),
            text: String::new(),
            logic: QueryLogic::default(),
            collection_scope: CollectionScope::default(),
            criteria: Vec::new(),
            preview: String::new(),
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Criteria committed with [`SearchForm::add_input`].
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Current query text, possibly edited by the user.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Commit the pending input as a new criterion.
    ///
    /// On success the category resets to `All`, the text is cleared and the
    /// preview is regenerated from the committed criteria.
    pub fn add_input(&mut self) -> Result<()> {
        let index = self.criteria.len();
        let logic = if index == 0 { None } else { Some(self.logic) };
        let criterion = Criterion::new(self.category.clone(), self.text.trim(), logic);
        criterion
            .check(&self.registry)
            .map_err(|reason| QueryError::InvalidCriterion { index, reason })?;

        let mut criteria = self.criteria.clone();
        criteria.push(criterion);
        let preview = render(&self.registry, &criteria)?;

        self.criteria = criteria;
        self.preview = preview;
        self.category = CATCH_ALL.to_string();
        self.text.clear();
        Ok(())
    }

    /// Preview including the pending input, for display while typing.
    pub fn draft_preview(&self) -> String {
        let mut criteria = self.criteria.clone();
        if !self.text.trim().is_empty() {
            let logic = if criteria.is_empty() { None } else { Some(self.logic) };
            criteria.push(Criterion::new(self.category.clone(), self.text.clone(), logic));
        }
        render_preview(&self.registry, &criteria)
    }

    /// Replace the preview with user-edited text.
    pub fn edit_preview(&mut self, text: impl Into<String>) {
        self.preview = text.into();
    }

    /// Drop all committed criteria and the preview.
    pub fn clear(&mut self) {
        self.criteria.clear();
        self.preview.clear();
    }

    /// Criteria as they would be searched right now.
    pub fn parsed(&self) -> Vec<Criterion> {
        parse(&self.registry, &self.preview)
    }

    /// Build the executor request from the current preview text.
    pub fn submit(&self) -> Result<SearchRequest> {
        SearchRequest::from_query_text(&self.registry, &self.preview, self.collection_scope)
    }
}
