use std::path::PathBuf;

use clap::Parser;

use crate::options::Scope;

/// Conventional install location of the FoundationDB client headers.
pub const DEFAULT_OPTIONS_FILE: &str = "/usr/local/include/foundationdb/fdb.options";

#[derive(Parser)]
#[command(name = "fdb-optgen")]
#[command(about = "Generate Rust bindings from FoundationDB's fdb.options file")]
#[command(long_about = "Parses fdb.options from <FILE> and generates Rust bindings for the \
requested option scopes. At least one of --network, --database, --transaction must be given. \
Use --output-directory or --stdout to control where the generated files go.")]
pub struct Cli {
    /// Path to the fdb.options file to parse
    #[arg(default_value = DEFAULT_OPTIONS_FILE, help = "Path to FoundationDB fdb.options file")]
    pub file: PathBuf,

    /// Directory the generated files are written into
    #[arg(short, long, default_value = ".", help = "Directory for generated files")]
    pub output_directory: PathBuf,

    /// Write generated files to standard output instead (ignores --output-directory)
    #[arg(long, help = "Write generated files to standard output")]
    pub stdout: bool,

    /// Generate bindings for the network options
    #[arg(short, long, help = "Generate bindings for the FoundationDB network options")]
    pub network: bool,

    /// Generate bindings for the database options
    #[arg(short, long, help = "Generate bindings for the FoundationDB database options")]
    pub database: bool,

    /// Generate bindings for the transaction options
    #[arg(short, long, help = "Generate bindings for the FoundationDB transaction options")]
    pub transaction: bool,
}

impl Cli {
    /// Scopes selected by the generation flags, in canonical order.
    pub fn requested_scopes(&self) -> Vec<Scope> {
        Scope::ALL
            .into_iter()
            .filter(|scope| match scope {
                Scope::Network => self.network,
                Scope::Database => self.database,
                Scope::Transaction => self.transaction,
            })
            .collect()
    }
}
