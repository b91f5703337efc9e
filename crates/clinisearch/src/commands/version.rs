pub fn run() -> anyhow::Result<()> {
    println!("clinisearch {}", env!("CARGO_PKG_VERSION"));
    println!("Heuristic relevance search and filtering for clinical records");
    Ok(())
}
