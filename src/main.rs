use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::{debug, error, info};

mod cli;
mod options;

use cli::Cli;
use options::{CatalogBuilder, OptionsParser, emit_file, emit_stdout, generate_source};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting fdb-optgen");

    let scopes = cli.requested_scopes();
    if scopes.is_empty() {
        anyhow::bail!(
            "At least one of the generator options (--network, --database, --transaction) must be given"
        );
    }

    let parser = OptionsParser::from_path(&cli.file)?;
    let mut builder = CatalogBuilder::new();
    parser
        .parse(&mut builder)
        .with_context(|| format!("Failed to parse options file: {}", cli.file.display()))?;
    let catalog = builder.into_catalog();
    debug!(
        "Parsed {} network, {} database, {} transaction options",
        catalog.network.len(),
        catalog.database.len(),
        catalog.transaction.len()
    );

    for scope in scopes {
        let source = match generate_source(scope, catalog.scope(scope), true) {
            Ok(source) => source,
            Err(e) => {
                error!("Skipping {} bindings: {e:#}", scope.type_name());
                eprintln!("{} {e:#}", "Skipping scope:".red());
                continue;
            }
        };

        if cli.stdout {
            if let Err(e) = emit_stdout(&source) {
                error!("{e:#}");
                eprintln!("{} {e:#}", "Error:".red());
            }
        } else {
            match emit_file(&cli.output_directory, scope, &source) {
                Ok(path) => {
                    info!("Generated {}", path.display());
                    eprintln!("{} {}", "Generated".green(), path.display());
                }
                Err(e) => {
                    error!("{e:#}");
                    eprintln!("{} {e:#}", "Error:".red());
                }
            }
        }
    }

    Ok(())
}
