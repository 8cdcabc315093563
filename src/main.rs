use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pepe_dna::config::ConfigManager;
use pepe_dna::data::parse_pepe_id;
use pepe_dna::engines::decoding::Genome;
use pepe_dna::engines::preview::PartPreviewer;
use pepe_dna::functions::registry::ExpressorRegistry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pepe_dna")]
#[command(version, about = "Decode pepe genomes into looks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// TOML config file, applied before PEPE_DNA__* environment overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolved look of each pepe id, as JSON
    Look {
        /// Pepe ids (0x, 0o and 0b prefixes accepted)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Unresolved look and skipped loci, as JSON
    Raw {
        id: String,
    },

    /// Resolved look of an explicit 512-bit genome
    Genome {
        /// 128 hex digits, optional 0x prefix
        hex: String,
    },

    /// Base preview look with one catalog part applied
    Preview {
        id: String,
    },

    /// List the part catalog
    Parts,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let manager = ConfigManager::new();
    manager
        .load_layered(cli.config.as_ref())
        .context("loading configuration")?;
    let config = manager.get();

    let registry = ExpressorRegistry::new();
    let decoder = config.decoder.build(&registry)?;
    let generator = config.generator.build();

    match cli.command {
        Command::Look { ids } => {
            let genomes = ids
                .iter()
                .map(|id| parse_pepe_id(id).map(|id| generator.generate(id)))
                .collect::<pepe_dna::Result<Vec<_>>>()?;
            for look in decoder.decode_batch(&genomes) {
                println!("{}", look.to_json_pretty()?);
            }
        }
        Command::Raw { id } => {
            let genome = generator.generate(parse_pepe_id(&id)?);
            let expression = decoder.express(&genome);
            println!("{}", serde_json::to_string_pretty(&expression)?);
        }
        Command::Genome { hex } => {
            let genome: Genome = hex.parse()?;
            println!("{}", decoder.decode(&genome).to_json_pretty()?);
        }
        Command::Preview { id } => {
            let id = parse_pepe_id(&id)?;
            let previewer = PartPreviewer::new(config.preview.base.clone(), registry.parts());
            println!("{}", previewer.preview(id)?.to_json_pretty()?);
        }
        Command::Parts => {
            for part in registry.parts() {
                println!("{}", part);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["pepe_dna", "look", "42", "0x2a", "--config", "pepe.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pepe.toml")));
        match cli.command {
            Command::Look { ids } => assert_eq!(ids, vec!["42", "0x2a"]),
            _ => panic!("expected look"),
        }
    }

    #[test]
    fn test_look_needs_an_id() {
        assert!(Cli::try_parse_from(["pepe_dna", "look"]).is_err());
        assert!(Cli::try_parse_from(["pepe_dna", "raw", "1", "2"]).is_err());
    }
}
