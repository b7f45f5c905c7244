//! Output writing for the CLI.

use crate::error::Result;
use faircat_domain::RawRecord;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One identity group in the inspectable grouping artifact.
#[derive(Debug, Serialize)]
pub struct GroupEntry {
    /// Tool name of the identity key
    pub name: String,

    /// Tool type of the identity key
    #[serde(rename = "type")]
    pub tool_type: Option<String>,

    /// Raw records gathered under this key, in source processing order
    pub records: Vec<RawRecord>,
}

/// Write a value as pretty JSON to a file, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&vec!["a", "b"], Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"a\""));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_group_entry_shape() {
        let entry = GroupEntry {
            name: "trimal".to_string(),
            tool_type: Some("cmd".to_string()),
            records: Vec::new(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "cmd");
        assert!(json["records"].as_array().unwrap().is_empty());
    }
}
