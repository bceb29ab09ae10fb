//! CLI harness for checking Sinovate parameters and address handling
//!
//! This tool allows:
//! - Printing the parameter set selected for a chain name
//! - Decoding an address into its descriptor
//! - Rendering the addresses of a descriptor

use anyhow::Context;
use clap::{Parser, Subcommand};
use coin_btc::{AddressDescriptor, BlockChainParser, Configuration};
use coin_sinovate::{get_chain_params, SinovateParser};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "addr-harness")]
#[command(about = "Sinovate parameter and address harness", long_about = None)]
struct Cli {
    /// Chain name; "test" selects testnet, anything else mainnet
    #[arg(short, long, global = true, default_value = "main")]
    chain: String,

    /// Coin configuration JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected parameter set as JSON
    Params,

    /// Decode an address into its descriptor
    Decode {
        /// Address to decode
        address: String,
    },

    /// Render the addresses of a hex descriptor
    Encode {
        /// Output script in hex
        descriptor: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Configuration::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Configuration::default(),
    };
    let params = get_chain_params(&cli.chain);
    let parser = SinovateParser::new(params, config);

    match cli.command {
        Commands::Params => {
            println!("{}", serde_json::to_string_pretty(parser.params())?);
        }
        Commands::Decode { address } => {
            let descriptor = parser
                .get_addr_desc_from_address(&address)
                .with_context(|| format!("decoding {address}"))?;
            info!("{} -> {:?}", address, descriptor.script_type());
            println!("{descriptor}");
        }
        Commands::Encode { descriptor } => {
            let descriptor = AddressDescriptor::from_hex(&descriptor)?;
            let (addresses, searchable) = parser.get_addresses_from_addr_desc(&descriptor)?;
            info!("searchable: {}", searchable);
            for address in addresses {
                println!("{address}");
            }
        }
    }

    Ok(())
}
