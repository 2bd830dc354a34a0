use clap::Parser;
use dirtree::Indent;

use crate::application::data::{ColorMode, LogLevel};

/// Builds the demonstration directory tree and prints it
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Indentation per level: `tab` or a number of spaces
    #[clap(long, short, default_value = "tab")]
    pub indent: Indent,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorMode,
}
