//! Join catalog entries with the doc comments found in their source files.

use crate::catalog::Catalog;
use crate::extract;
use crate::model::FunctionRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Build one record per catalog entry, in catalog order.
///
/// Any unreadable or unparsable source file aborts the whole build.
pub fn build_records(catalog: &Catalog, source_dir: &Path) -> Result<Vec<FunctionRecord>> {
    let mut records = Vec::with_capacity(catalog.entries().len());

    for entry in catalog.entries() {
        let path = source_dir.join(&entry.file);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let fns = extract::parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(file = %path.display(), functions = fns.len(), "parsed source");

        let doc = match extract::doc_for(&fns, &entry.name) {
            Some(doc) => doc,
            None => {
                warn!(function = %entry.name, file = %path.display(), "function not declared in source file");
                String::new()
            }
        };
        if doc.is_empty() {
            debug!(function = %entry.name, "no documentation");
        }

        records.push(FunctionRecord {
            name: entry.name.clone(),
            applicability: entry.applicability,
            big_o: entry.big_o.clone(),
            doc,
        });
    }

    Ok(records)
}
