use crate::cli::AuditArgs;
use clinisearch_store::{filter_logs, read_jsonl, AuditFilter, AuditLog, Paths};

pub fn run(args: &AuditArgs) -> anyhow::Result<()> {
    let logs = matching(args, &Paths::new()?)?;
    if logs.is_empty() {
        eprintln!("No audit logs found.");
        return Ok(());
    }
    for log in &logs {
        println!("{}", serde_json::to_string(log)?);
    }
    Ok(())
}

pub(crate) fn matching(args: &AuditArgs, paths: &Paths) -> anyhow::Result<Vec<AuditLog>> {
    let path = args.file.clone().unwrap_or_else(|| paths.audit_file());
    let logs: Vec<AuditLog> = read_jsonl(&path)?;

    let filter = AuditFilter {
        search: args.search.clone(),
        action: args.action.clone(),
        date_prefix: args.date.clone(),
    };
    let kept: Vec<AuditLog> = filter_logs(&logs, &filter).into_iter().cloned().collect();
    tracing::debug!(total = logs.len(), kept = kept.len(), "filtered audit logs");
    Ok(kept)
}
