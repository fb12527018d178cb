//! oslkey - stable numeric keys for OSL shader parameters.
//!
//! Reads a shader metadata manifest, derives a 15-bit key for every
//! declared parameter name and its `_map` variant, warns about key
//! collisions, and writes the expanded parameter manifest for the host
//! application.

mod cli;
mod manifest;

use anyhow::{bail, Result};
use clap::Parser;
use log::{info, warn};
use oslkey_core::scan_all;

use crate::cli::Cli;
use crate::manifest::JsonManifest;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    let mut source = JsonManifest::load(&args.input)?;
    let shader_count = source.shader_count();

    let outcome = scan_all(&mut source)?;
    for collision in &outcome.collisions {
        warn!("{}", collision);
    }

    manifest::save(&args.output, &outcome.manifest)?;
    info!(
        "Scanned {} shaders, wrote {}",
        shader_count,
        args.output.display()
    );

    if args.strict && !outcome.collisions.is_empty() {
        bail!("{} parameter key collisions found", outcome.collisions.len());
    }

    Ok(())
}
