use crate::cli::CheckArgs;
use crate::error::Result;
use atomtyper::core::forcefield::document::ForcefieldDocument;
use tracing::{debug, info};

pub fn run(args: CheckArgs) -> Result<()> {
    info!("Checking forcefield document {:?}", &args.forcefield);
    let document = ForcefieldDocument::load(&args.forcefield)?;

    let override_edges: usize = document.rules.iter().map(|r| r.overrides.len()).sum();
    let cited: usize = document
        .rules
        .iter()
        .filter(|r| r.citation.is_some())
        .count();

    for rule in document.rules.iter() {
        debug!(
            rule = %rule.name,
            pattern = %rule.pattern_source,
            overrides = rule.overrides.len(),
            "Rule loaded."
        );
    }

    println!("Forcefield document is valid.");
    println!("  atom-type rules:       {}", document.rules.len());
    println!("  override declarations: {override_edges}");
    println!("  cited rules:           {cited}");
    println!(
        "  pass-through sections: {}",
        document.passthrough_sections().len()
    );
    Ok(())
}
