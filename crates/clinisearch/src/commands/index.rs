use clinisearch_core::DocumentIndex;
use clinisearch_store::{load_records, record_event, save_records, Paths};
use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let count = replace_snapshot(file, &Paths::new()?)?;
    println!("Indexed {} records", count);
    Ok(())
}

/// Validate `file` as an index, then swap it in as the home record snapshot.
/// An invalid file leaves the current snapshot untouched.
pub(crate) fn replace_snapshot(file: &Path, paths: &Paths) -> anyhow::Result<usize> {
    let records = load_records(file)?;
    let count = DocumentIndex::new(records.clone())?.len();

    let target = paths.records_file();
    save_records(&target, &records)?;

    let user = std::env::var("USER").unwrap_or_else(|_| "local".to_string());
    record_event(
        &paths.audit_file(),
        "INDEX_REPLACE",
        &user,
        &target.display().to_string(),
        &format!("{} records from {}", count, file.display()),
    )?;
    tracing::info!(count, path = %target.display(), "replaced record snapshot");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinisearch_store::{read_jsonl, AuditLog};
    use std::fs;

    #[test]
    fn test_replace_snapshot_and_audit() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::at(dir.path().join("home"));
        let source = dir.path().join("export.json");
        fs::write(
            &source,
            r#"[{"id":"R1","body":"asthma plan","timestamp":"2024-12-05T00:00:00Z"}]"#,
        )
        .unwrap();

        assert_eq!(replace_snapshot(&source, &paths).unwrap(), 1);
        assert_eq!(load_records(&paths.records_file()).unwrap()[0].id, "R1");

        let logs: Vec<AuditLog> = read_jsonl(&paths.audit_file()).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].event_type, "INDEX_REPLACE");
    }

    #[test]
    fn test_invalid_snapshot_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::at(dir.path());
        let source = dir.path().join("export.json");
        fs::write(
            &source,
            r#"[
                {"id":"R1","body":"a","timestamp":"2024-12-05T00:00:00Z"},
                {"id":"R1","body":"b","timestamp":"2024-12-05T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        assert!(replace_snapshot(&source, &paths).is_err());
        assert!(!paths.records_file().exists());
        assert!(!paths.audit_file().exists());
    }
}
