use clinisearch_core::EngineConfig;
use clinisearch_store::Paths;
use std::path::Path;

pub fn run(config: Option<&Path>) -> anyhow::Result<()> {
    let config = effective(config, &Paths::new()?)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub(crate) fn effective(config: Option<&Path>, paths: &Paths) -> anyhow::Result<EngineConfig> {
    super::load_config(config, paths)
}
