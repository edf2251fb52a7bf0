use clap::Parser;
use std::path::PathBuf;

/// Interactive teaching bank with a text menu
#[derive(Parser, Debug)]
#[command(name = "bank-teller")]
#[command(about = "Interactive teaching bank with a text menu", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// Optional script of menu input to replay instead of reading stdin
    ///
    /// The file holds one line per prompt answer, exactly as an operator
    /// would type them. Used by the end-to-end tests and for demos.
    #[arg(value_name = "SCRIPT", help = "Path to a menu-input script file")]
    pub script: Option<PathBuf>,
}
