use crate::cli::AssignArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use atomtyper::core::io::{assignment, molecule};
use atomtyper::engine::error::EngineError;
use atomtyper::engine::progress::ProgressReporter;
use atomtyper::workflows;
use tracing::{info, warn};

pub fn run(args: AssignArgs) -> Result<()> {
    info!("Loading molecule from {:?}", &args.input);
    let mol = molecule::load_molecule(&args.input)?;
    info!(atoms = mol.atom_count(), "Molecule loaded.");

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let outcome = workflows::typing::run_with_document(&mol, &args.forcefield, &reporter);
    let (document, type_assignment) = match outcome {
        Ok(result) => result,
        Err(EngineError::TypingIncomplete { failures }) => {
            warn!(
                unresolved = failures.len(),
                "Typing finished with unresolved atoms."
            );
            eprintln!("Unresolved atoms:");
            for failure in &failures {
                eprintln!("  - {failure}");
            }
            return Err(EngineError::TypingIncomplete { failures }.into());
        }
        Err(e) => return Err(e.into()),
    };

    match &args.output {
        Some(path) => {
            info!("Writing assignment CSV to {:?}", path);
            assignment::write_csv_to_path(path, &mol, &type_assignment)?;
            println!(
                "Typed {} atom(s); assignment written to {}.",
                type_assignment.len(),
                path.display()
            );
        }
        None => {
            assignment::write_csv(std::io::stdout().lock(), &mol, &type_assignment)?;
        }
    }

    if let Some(path) = &args.bibliography {
        let block = assignment::bibliography(&type_assignment, &document.rules);
        if block.is_empty() {
            warn!("No citations among the assigned rules; bibliography will be empty.");
        }
        info!("Writing bibliography to {:?}", path);
        std::fs::write(path, block)?;
        println!("Bibliography written to {}.", path.display());
    }

    Ok(())
}
