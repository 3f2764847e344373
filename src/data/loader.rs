use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{FactTable, RegionFacts, TableError};

/// Error raised while reading a user-supplied facts file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse facts: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] TableError),
}

/// Load a fact table from a JSON array of
/// `{ "region", "capital", "flower"?, "bird"? }` objects.
pub fn load_facts_from_json<P: AsRef<Path>>(path: P) -> Result<FactTable, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_facts_json(&json_content)?;
    tracing::info!(path = %path.display(), regions = table.len(), "loaded facts file");
    Ok(table)
}

pub fn parse_facts_json(json: &str) -> Result<FactTable, LoadError> {
    let rows: Vec<RegionFacts> = serde_json::from_str(json)?;
    Ok(FactTable::new(rows)?)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_with_optional_secondary_facts() {
        let table = parse_facts_json(
            r#"[
                {"region": "Texas", "capital": "Austin", "flower": "Bluebonnet", "bird": "Northern mockingbird"},
                {"region": "Ohio", "capital": "Columbus"}
            ]"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let ohio = table.find("Ohio").unwrap();
        assert_eq!(table.capital_of(ohio), "Columbus");
        assert_eq!(table.secondary_facts_of(ohio).bird, crate::models::NOT_AVAILABLE);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_facts_json("not json"), Err(LoadError::Parse(_))));
        assert!(matches!(
            parse_facts_json("[]"),
            Err(LoadError::Invalid(TableError::Empty))
        ));
        assert!(matches!(
            parse_facts_json(r#"[{"region": "Ohio"}]"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("facts.json");
        fs::write(&path, r#"[{"region": "Utah", "capital": "Salt Lake City"}]"#).unwrap();

        let table = load_facts_from_json(&path).unwrap();

        let utah = table.find("Utah").unwrap();
        assert_eq!(table.capital_of(utah), "Salt Lake City");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_facts_from_json("/nonexistent/facts.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/facts.json"));
    }
}
