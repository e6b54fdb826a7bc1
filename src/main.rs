use anyhow::{Context, Result};
use clap::Parser;
use dualize::cli::{Cli, Commands};
use dualize::core::{DeclarationTree, SequentialNames};
use dualize::{try_dualize, try_dualize_with, DualizeOutcome, TriggerArgs};
use std::io::Read;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dualize {
            input,
            dual_name,
            output,
            pretty,
            name_parameters,
        } => {
            let source = read_input(input.as_deref())?;
            let decl: DeclarationTree =
                serde_json::from_str(&source).context("failed to parse declaration tree")?;
            let args = match dual_name {
                Some(name) => TriggerArgs::with_override(name),
                None => TriggerArgs::default(),
            };
            let outcome = if name_parameters {
                let mut names = SequentialNames::new();
                try_dualize_with(&decl, &args, &mut names)?
            } else {
                try_dualize(&decl, &args)?
            };
            report_diagnostics(&outcome);
            write_output(&outcome, output, pretty)?;
            if outcome.generated.is_none() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn read_input(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn report_diagnostics(outcome: &DualizeOutcome) {
    for diagnostic in &outcome.diagnostics {
        eprintln!(
            "error[{}]: {} ({}:{}:{})",
            diagnostic.kind.code(),
            diagnostic.message(),
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column
        );
        if let Some(fix_it) = &diagnostic.fix_it {
            eprintln!("  fix-it: {}", fix_it.message);
        }
    }
}

fn write_output(outcome: &DualizeOutcome, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(outcome)?
    } else {
        serde_json::to_string(outcome)?
    };
    match output {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
