//! Command execution.

use crate::cli::{IntegrateArgs, ScoreArgs};
use crate::error::{CliError, Result};
use crate::output::{write_json, GroupEntry};
use faircat_domain::RawRecord;
use faircat_integration::{group_records, Integrator};
use faircat_pipeline::{run_batch, BatchReport, PipelineConfig};
use std::path::{Path, PathBuf};
use tracing::info;

/// Load each input file as one source's array of raw records.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<Vec<RawRecord>>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<RawRecord> = serde_json::from_str(&contents).map_err(|e| {
            CliError::InvalidInput(format!("{}: {}", path.display(), e))
        })?;
        info!("loaded {} record(s) from {}", records.len(), path.display());
        sources.push(records);
    }
    Ok(sources)
}

/// Run the full pipeline and write scored instances.
pub fn execute_score(
    args: &ScoreArgs,
    config: &PipelineConfig,
    output: Option<&Path>,
) -> Result<()> {
    let sources = load_sources(&args.inputs)?;
    let outcome = run_batch(&sources, config);
    write_json(&outcome.scored, output)?;
    if args.report {
        eprintln!("{}", outcome.report.summary());
    }
    Ok(())
}

/// Run grouping and integration only, without scoring.
pub fn execute_integrate(
    args: &IntegrateArgs,
    config: &PipelineConfig,
    output: Option<&Path>,
) -> Result<()> {
    let sources = load_sources(&args.inputs)?;
    let grouping = group_records(&sources);

    if args.groups {
        let entries: Vec<GroupEntry> = grouping
            .iter_groups()
            .map(|(key, records)| GroupEntry {
                name: key.name,
                tool_type: key.tool_type,
                records: records.to_vec(),
            })
            .collect();
        write_json(&entries, output)?;
        if args.report {
            eprintln!("{}", report_for(&grouping, Vec::new()).summary());
        }
        return Ok(());
    }

    let integrator = Integrator::new(config.integration.clone());
    let mut instances = Vec::with_capacity(grouping.group_count());
    let mut conflicts = Vec::new();
    for (key, records) in grouping.iter_groups() {
        let (instance, group_conflicts) = integrator.integrate_group(key, records);
        conflicts.extend(group_conflicts);
        instances.push(instance);
    }

    write_json(&instances, output)?;
    if args.report {
        eprintln!("{}", report_for(&grouping, conflicts).summary());
    }
    Ok(())
}

fn report_for(
    grouping: &faircat_integration::GroupingOutcome,
    conflicts: Vec<faircat_integration::MergeConflict>,
) -> BatchReport {
    BatchReport {
        records_seen: grouping.records_seen,
        groups: grouping.group_count(),
        skipped: grouping.skipped.clone(),
        conflicts,
        ..BatchReport::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn test_load_sources_reads_arrays() {
        let file = source_file(r#"[{"name": "trimal", "type": "cmd", "source": "biotools"}]"#);
        let sources = load_sources(&[file.path().to_path_buf()]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0][0].name, "trimal");
    }

    #[test]
    fn test_load_sources_rejects_unknown_keys() {
        let file = source_file(r#"[{"name": "trimal", "source": "biotools", "mystery": 1}]"#);
        let result = load_sources(&[file.path().to_path_buf()]);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_load_sources_reports_missing_file() {
        let result = load_sources(&[PathBuf::from("/nonexistent/records.json")]);
        assert!(matches!(result, Err(CliError::Input { .. })));
    }

    #[test]
    fn test_integrate_writes_instances() {
        let file = source_file(
            r#"[{"name": "trimal", "type": "cmd", "source": "biotools",
                 "description": ["Trims alignments"]}]"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("instances.json");
        let args = IntegrateArgs {
            inputs: vec![file.path().to_path_buf()],
            groups: false,
            report: false,
        };
        execute_integrate(&args, &PipelineConfig::default(), Some(&out)).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("\"trimal\""));
        assert!(written.contains("Trims alignments."));
    }

    #[test]
    fn test_integrate_groups_artifact() {
        let file = source_file(
            r#"[{"name": "trimal", "type": "cmd", "source": "biotools"},
                {"name": "trimal", "type": "cmd", "source": "biotools"}]"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("groups.json");
        let args = IntegrateArgs {
            inputs: vec![file.path().to_path_buf()],
            groups: true,
            report: false,
        };
        execute_integrate(&args, &PipelineConfig::default(), Some(&out)).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["records"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_score_writes_scored_instances() {
        let file = source_file(
            r#"[{"name": "trimal", "type": "cmd", "source": "biotools",
                 "license": ["GPL-2"], "os": ["Linux"]}]"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scored.json");
        let args = ScoreArgs {
            inputs: vec![file.path().to_path_buf()],
            report: false,
        };
        execute_score(&args, &PipelineConfig::default(), Some(&out)).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["instance"]["key"]["name"], "trimal");
        assert_eq!(parsed[0]["indicators"].as_array().unwrap().len(), 15);
    }
}
