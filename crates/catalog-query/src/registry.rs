//! Category registry: the fixed mapping between category labels and the
//! short codes used in query text.
//!
//! A registry is built once and only read afterwards, so it can be shared
//! behind an `Arc` between the renderer, the parser and any number of threads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Code and label of the catch-all category.
pub const CATCH_ALL: &str = "All";

/// Categories searchable in the artwork catalog, as `(code, label)`.
pub const ARTWORK_CATEGORIES: &[(&str, &str)] = &[
    ("All", "All"),
    ("AR", "Artist"),
    ("CO", "Collection"),
    ("PR", "Price"),
    ("DU", "Date Uploaded"),
];

/// Categories searchable in the music score catalog, as `(code, label)`.
pub const MUSIC_SCORE_CATEGORIES: &[(&str, &str)] = &[
    ("All", "All"),
    ("AB", "Albums"),
    ("AT", "Alternative Title"),
    ("AR", "Artist(s)"),
    ("BR", "Background Resources"),
    ("CN", "Call number"),
    ("CO", "Composer"),
    ("CT", "Composer Time Period"),
    ("C", "Contributor"),
    ("CR", "Copyright"),
    ("CS", "Cosmetics and Prop"),
    ("CY", "County"),
    ("CRE", "Creator"),
    ("DA", "Date Accessioned"),
    ("DV", "Date Available"),
    ("DI", "Date Issued"),
    ("DB", "Date of Birth"),
    ("DC", "Date of Creation"),
    ("DR", "Date of Recording (medium)"),
    ("DS", "Description"),
    ("DCN", "Digital Collection"),
    ("ED", "Edition"),
    ("E", "Editor"),
    ("EG", "Ethnic Group"),
    ("FP", "First Publication"),
    ("FM", "Format"),
    ("GS", "Gamut Scale"),
    ("GN", "Genre"),
    ("HC", "Historical Context"),
    ("ID", "Identifier"),
    ("IN", "Instrumentation"),
    ("IT", "Intonation"),
    ("K", "Key"),
    ("L", "Language"),
    ("LM", "Last Modified"),
    ("LE", "Length"),
    ("LI", "Librettist"),
    ("LY", "Lyrics"),
    ("MC", "Melodic Classification"),
    ("MD", "Melody Descriptions"),
    ("MI", "Method of implementation"),
    ("MN", "Misc. Notes"),
    ("MS", "Movements/Sections"),
    ("NT", "Notation"),
    ("NIP", "Number in publication"),
    ("OC", "Object Collections"),
    ("OP", "Occasion of Performing"),
    ("PS", "Performing Skills"),
    ("PL", "Permalink"),
    ("PT", "Piece Style"),
    ("PB", "Place of Birth"),
    ("PO", "Place of Origin"),
    ("PSP", "Place of Prosper"),
    ("PR", "Place of Residence"),
    ("P", "Position"),
    ("PV", "Prevalence"),
    ("PU", "Publisher"),
    ("PC", "Purpose of Creation"),
    ("RP", "Recording Person"),
    ("RE", "Region"),
    ("RA", "Related Artists"),
    ("RW", "Related Work"),
    ("RT", "Rights"),
    ("SM", "Sheet Music"),
    ("SP", "Sponsor"),
    ("ST", "Stage Performance"),
    ("SU", "Subject"),
    ("TA", "Target Audience"),
    ("TE", "Temperament"),
    ("TO", "Time of Origin"),
    ("TP", "Time of Prosper"),
    ("TT", "Title"),
    ("TF", "Track function"),
    ("TK", "Tracks"),
    ("TY", "Type"),
    ("URI", "URI"),
    ("VS", "Vocal Style"),
    ("WP", "Western Parallel"),
    ("WT", "Work Title"),
    ("YDC", "Year/Date of Composition"),
];

/// One registered category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub code: String,
    pub label: String,
}

impl CategoryEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Bijective label ⇄ code lookup over a closed set of categories.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: Vec<CategoryEntry>,
    by_code: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Build a registry from entries, in display order.
    ///
    /// The catch-all `All` category is inserted first when missing. Codes and
    /// labels must both be unique, and codes must be word characters so the
    /// parser can find them again.
    pub fn new(entries: impl IntoIterator<Item = CategoryEntry>) -> Result<Self, RegistryError> {
        let mut registry = Self {
            entries: Vec::new(),
            by_code: HashMap::new(),
            by_label: HashMap::new(),
        };

        let entries: Vec<CategoryEntry> = entries.into_iter().collect();
        if !entries.iter().any(|e| e.code == CATCH_ALL && e.label == CATCH_ALL) {
            registry.insert(CategoryEntry::new(CATCH_ALL, CATCH_ALL))?;
        }
        for entry in entries {
            registry.insert(entry)?;
        }

        Ok(registry)
    }

    /// Registry for the artwork catalog.
    pub fn artwork() -> Self {
        Self::from_table(ARTWORK_CATEGORIES)
    }

    /// Registry for the music score catalog.
    pub fn music_score() -> Self {
        Self::from_table(MUSIC_SCORE_CATEGORIES)
    }

    // Built-in tables are unique by construction; see `builtin_tables_are_valid`.
    fn from_table(table: &[(&str, &str)]) -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(table.len()),
            by_code: HashMap::with_capacity(table.len()),
            by_label: HashMap::with_capacity(table.len()),
        };
        for (code, label) in table {
            let index = registry.entries.len();
            registry.by_code.insert(code.to_string(), index);
            registry.by_label.insert(label.to_string(), index);
            registry.entries.push(CategoryEntry::new(*code, *label));
        }
        registry
    }

    fn insert(&mut self, entry: CategoryEntry) -> Result<(), RegistryError> {
        if entry.code.is_empty() {
            return Err(RegistryError::EmptyCode(entry.label));
        }
        if !entry.code.chars().all(is_code_char) {
            return Err(RegistryError::InvalidCode(entry.code));
        }
        if entry.label.trim().is_empty() {
            return Err(RegistryError::EmptyLabel(entry.code));
        }
        if let Some(&existing) = self.by_code.get(&entry.code) {
            return Err(RegistryError::DuplicateCode {
                code: entry.code,
                first: self.entries[existing].label.clone(),
                second: entry.label,
            });
        }
        if self.by_label.contains_key(&entry.label) {
            return Err(RegistryError::DuplicateLabel(entry.label));
        }

        let index = self.entries.len();
        self.by_code.insert(entry.code.clone(), index);
        self.by_label.insert(entry.label.clone(), index);
        self.entries.push(entry);
        Ok(())
    }

    /// Code registered for a label.
    pub fn code_for(&self, label: &str) -> Option<&str> {
        self.by_label
            .get(label)
            .map(|&i| self.entries[i].code.as_str())
    }

    /// Label registered for a code.
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(code)
            .map(|&i| self.entries[i].label.as_str())
    }

    /// Resolve a code to its label, returning the code itself if unregistered.
    pub fn label_or_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.label_for(code).unwrap_or(code)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Entries sorted alphabetically by label, for the category picker.
    pub fn sorted_by_label(&self) -> Vec<&CategoryEntry> {
        let mut sorted: Vec<&CategoryEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a registry holds at least the catch-all category.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::artwork()
    }
}

/// Characters allowed in a category code.
pub(crate) fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
