//! Function catalog — which functions get documented, and for what inputs.
//!
//! The catalog is a JSON file owned by the library being documented:
//!
//! ```json
//! {
//!   "functions": [
//!     { "name": "filter", "for": ["strings", "numbers"], "big_o": "O(n)", "file": "filter.rs" }
//!   ]
//! }
//! ```
//!
//! Entry order is significant: it is the order of table rows and sections.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// A data category a function can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strings,
    Numbers,
    Structs,
    Maps,
}

impl Category {
    /// Every category, in table column order.
    pub const ALL: [Category; 4] = [
        Category::Strings,
        Category::Numbers,
        Category::Structs,
        Category::Maps,
    ];

    fn bit(self) -> u8 {
        match self {
            Category::Strings => 1,
            Category::Numbers => 1 << 1,
            Category::Structs => 1 << 2,
            Category::Maps => 1 << 3,
        }
    }

    /// Column title used in the README table.
    pub fn title(self) -> &'static str {
        match self {
            Category::Strings => "String",
            Category::Numbers => "Number",
            Category::Structs => "Struct",
            Category::Maps => "Maps",
        }
    }
}

/// Bitmask of [`Category`] flags.
#[derive(Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Category>")]
pub struct Applicability(u8);

impl Applicability {
    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }
}

impl From<Vec<Category>> for Applicability {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl FromIterator<Category> for Applicability {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Applicability(iter.into_iter().fold(0, |mask, c| mask | c.bit()))
    }
}

impl fmt::Debug for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Category::ALL.iter().filter(|c| self.contains(**c)))
            .finish()
    }
}

/// One documented function as declared by the library.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "for", default)]
    pub applicability: Applicability,
    #[serde(default)]
    pub big_o: String,
    /// Source file, relative to the source directory.
    pub file: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    functions: Vec<CatalogEntry>,
}

/// Ordered, read-only list of catalog entries.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&content)
            .with_context(|| format!("invalid catalog {}", path.display()))?;
        Self::from_entries(file.functions)
    }

    /// Build a catalog from entries, rejecting duplicate names.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                bail!("duplicate function in catalog: {}", entry.name);
            }
        }
        Ok(Catalog { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
