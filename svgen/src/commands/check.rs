use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use svgen_manifest::{PortDirection, SvgenToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to svgen.toml (defaults to ./svgen.toml)
    #[arg(short, long, default_value = "svgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let svgen_toml = SvgenToml::open(&self.config).unwrap_or_exit();
        let manifest = svgen_toml.manifest();

        println!("{} is valid", self.config.display());
        println!();
        println!(
            "module {} ({} ports, {} parameters)",
            manifest.module.name,
            manifest.ports.len(),
            manifest.parameters.len()
        );
        for port in &manifest.ports {
            let direction = match port.direction {
                PortDirection::Input => "input",
                PortDirection::Output => "output",
            };
            match (&port.msb, &port.lsb) {
                (Some(msb), Some(lsb)) => {
                    println!("  {direction} [{msb}:{lsb}] {}", port.name)
                }
                _ => println!("  {direction} {}", port.name),
            }
        }
        Ok(())
    }
}
