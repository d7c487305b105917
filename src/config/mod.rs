pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::Format;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "coord-convert")]
#[command(about = "Convert coordinates between DD, DMS and DDM")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input format (dd, dms or ddm)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Load the sample coordinate before applying field updates
    #[arg(long)]
    pub sample: bool,

    /// Field update, e.g. --set dms.lat.deg=47 (repeatable, applied in order)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub assignments: Vec<cli::FieldAssignment>,

    /// Fail on the first rejected field update instead of ignoring it
    #[arg(long)]
    pub strict: bool,

    /// Print the derived views as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
