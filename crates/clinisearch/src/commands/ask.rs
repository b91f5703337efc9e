use crate::cli::AskArgs;
use clinisearch_core::{FilterConfig, Query, QuestionIntent};
use clinisearch_source::SearchHit;
use clinisearch_store::Paths;
use serde::Serialize;

/// Metadata key holding the patient a record belongs to
const PATIENT_KEY: &str = "patient_id";

#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub intent: QuestionIntent,
    pub topic: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    pub sources: Vec<SearchHit>,
}

pub fn run(args: &AskArgs) -> anyhow::Result<()> {
    let output = execute(args, &Paths::new()?)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub(crate) fn execute(args: &AskArgs, paths: &Paths) -> anyhow::Result<AskOutput> {
    let intent = QuestionIntent::classify(&args.question);
    let engine = super::load_engine(args.config.as_deref(), paths)?;
    let index = super::load_index(args.records.as_deref(), paths)?;

    let query = Query::new(args.question.as_str());
    let ranked = engine.search(&query, &FilterConfig::default(), &index)?;
    let sources: Vec<SearchHit> = ranked
        .iter()
        .filter(|scored| match &args.patient {
            Some(patient) => scored
                .record
                .metadata
                .get(PATIENT_KEY)
                .is_some_and(|id| id.eq_ignore_ascii_case(patient)),
            None => true,
        })
        .take(args.limit)
        .map(SearchHit::from)
        .collect();

    tracing::debug!(intent = intent.label(), sources = sources.len(), "answered question");
    Ok(AskOutput {
        intent,
        topic: intent.label(),
        patient: args.patient.clone(),
        sources,
    })
}
