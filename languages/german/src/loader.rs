use std::path::Path;

use anyhow::{Context, bail};
use wortwerk_types::ImportRecord;

pub struct RecordLoader;

impl RecordLoader {
    /// Load import records from a tab-separated file
    pub fn load_from_file(path: &Path) -> anyhow::Result<Vec<ImportRecord>> {
        tracing::info!("Loading import records from file: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let records = Self::parse_tsv(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!("Loaded {} import records", records.len());
        Ok(records)
    }

    /// One record per line in import field order; blank lines and `#`
    /// comments are skipped
    pub fn parse_tsv(content: &str) -> anyhow::Result<Vec<ImportRecord>> {
        let mut records = Vec::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            let Some(record) = ImportRecord::from_fields(&fields) else {
                bail!(
                    "line {}: expected {} fields, found {}",
                    number + 1,
                    ImportRecord::FIELD_COUNT,
                    fields.len()
                );
            };
            records.push(record);
        }

        Ok(records)
    }
}
