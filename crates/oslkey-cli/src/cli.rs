//! Command line definitions.

use std::path::PathBuf;

use clap::Parser;

/// Derive stable numeric keys for OSL shader parameters and report
/// collisions.
#[derive(Debug, Parser)]
#[command(name = "oslkey", version, about)]
pub struct Cli {
    /// Shader metadata manifest (JSON object mapping shader name to its
    /// declared parameter names) produced by the shader introspection step.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the expanded parameter manifest.
    #[arg(short, long, default_value = "shaderparams.json")]
    pub output: PathBuf,

    /// Exit with an error if any collision is found.
    #[arg(long)]
    pub strict: bool,
}
