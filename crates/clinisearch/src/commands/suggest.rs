use clinisearch_core::DEFAULT_SUGGESTIONS;

pub fn run() -> anyhow::Result<()> {
    for suggestion in DEFAULT_SUGGESTIONS {
        println!("{}", suggestion);
    }
    Ok(())
}
