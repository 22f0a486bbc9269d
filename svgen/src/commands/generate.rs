use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use eyre::{Context, Result};
use svgen_codegen::write_source;
use svgen_manifest::SvgenToml;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to svgen.toml (defaults to ./svgen.toml)
    #[arg(short, long, default_value = "svgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let svgen_toml = SvgenToml::open(&self.config).unwrap_or_exit();
        let manifest = svgen_toml.manifest();

        let date = Local::now().format("%Y-%m-%d").to_string();
        let rendered = ops::build_source(manifest, &date)?;

        if self.dry_run {
            println!("── {}.sv ──", rendered.name);
            println!("{}", rendered.content);
            return Ok(());
        }

        let path = self.output.join(format!("{}.sv", rendered.name));
        write_source(&path, &rendered.content).wrap_err("Failed to write generated module")?;
        println!("Generated: {}", path.display());
        Ok(())
    }
}
