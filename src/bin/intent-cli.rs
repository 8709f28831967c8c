//! Demo driver for the intent lifecycle.
//!
//! Runs each transaction kind end to end against the in-memory sandbox
//! provider: build, sign, execute, then poll until the intent resolves.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use intent_flow::catalog::ChainCatalog;
use intent_flow::config::{load_config, SdkConfig};
use intent_flow::explorer::explorer_url;
use intent_flow::intent::{
    encoder_for, AptosCallDraft, EvmCallDraft, IntentDraft, NftMintDraft, NftTransferDraft,
};
use intent_flow::lifecycle::{LifecycleOrchestrator, Phase};
use intent_flow::observability::{logging, metrics};
use intent_flow::sandbox::SandboxProvider;

/// Manual refreshes the demo issues before giving up on a pending intent.
const MAX_REFRESHES: u32 = 5;

#[derive(Parser)]
#[command(name = "intent-cli")]
#[command(
    about = "Demo driver for the wallet intent lifecycle (runs against the in-memory sandbox)",
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted. The config
    /// is loaded and validated, but the demo always signs, executes and
    /// polls against the in-memory sandbox, never a live gateway.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default log directive when RUST_LOG is unset.
    #[arg(long, default_value = "intent_flow=info")]
    log_level: String,

    /// Expose Prometheus metrics on this address.
    #[arg(long)]
    metrics_address: Option<SocketAddr>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a raw EVM call through the lifecycle
    EvmRaw {
        #[arg(long, default_value = "eip155:137")]
        caip_id: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "0")]
        value: String,
        #[arg(long, default_value = "")]
        data: String,
    },
    /// Run a raw Aptos entry-function call through the lifecycle
    AptosRaw {
        #[arg(long, default_value = "aptos:testnet")]
        caip_id: String,
        #[arg(long)]
        function: String,
        #[arg(long, default_value = "")]
        type_args: String,
        #[arg(long, default_value = "")]
        args: String,
    },
    /// Transfer an NFT
    NftTransfer {
        #[arg(long, default_value = "eip155:137")]
        caip_id: String,
        #[arg(long)]
        collection: String,
        #[arg(long)]
        nft_id: String,
        #[arg(long)]
        recipient: String,
        #[arg(long, default_value = "1")]
        amount: String,
        #[arg(long, default_value = "721")]
        nft_type: String,
    },
    /// Create an NFT collection
    NftCreate {
        #[arg(long, default_value = "eip155:137")]
        caip_id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        metadata_uri: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "721")]
        nft_type: String,
    },
    /// List sandbox networks and accounts
    Chains,
}

impl Commands {
    fn into_draft(self) -> Option<IntentDraft> {
        match self {
            Commands::EvmRaw { caip_id, from, to, value, data } => {
                Some(IntentDraft::EvmCall(EvmCallDraft { caip_id, from, to, value, data }))
            }
            Commands::AptosRaw { caip_id, function, type_args, args } => {
                Some(IntentDraft::AptosCall(AptosCallDraft {
                    caip_id,
                    function,
                    type_arguments: type_args,
                    function_arguments: args,
                }))
            }
            Commands::NftTransfer {
                caip_id,
                collection,
                nft_id,
                recipient,
                amount,
                nft_type,
            } => Some(IntentDraft::NftTransfer(NftTransferDraft {
                caip_id,
                collection_address: collection,
                nft_id,
                recipient,
                amount,
                nft_type,
            })),
            Commands::NftCreate {
                caip_id,
                name,
                description,
                metadata_uri,
                symbol,
                nft_type,
            } => Some(IntentDraft::NftMint(NftMintDraft {
                caip_id,
                name,
                description,
                metadata_uri,
                symbol,
                nft_type,
            })),
            Commands::Chains => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level);
    if let Some(addr) = cli.metrics_address {
        metrics::init_metrics(addr);
    }

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SdkConfig::default(),
    };
    tracing::info!(
        environment = %config.environment,
        gateway_url = %config.gateway_url(),
        "configuration loaded"
    );

    let sandbox = SandboxProvider::new();
    let catalog = ChainCatalog::load(sandbox.as_ref()).await?;

    let Some(draft) = cli.command.into_draft() else {
        for n in catalog.networks() {
            println!(
                "{:<16} {:<16} sponsorship: {}",
                n.caip_id,
                n.network_name,
                if n.sponsorship_enabled { "yes" } else { "no" }
            );
        }
        for a in catalog.accounts() {
            println!("{:<16} account {}", a.caip_id, a.address);
        }
        return Ok(());
    };

    if !catalog.sponsorship_enabled(draft.caip_id()) {
        tracing::warn!(caip_id = %draft.caip_id(), "native tokens required for gas");
    }

    let orchestrator = LifecycleOrchestrator::new(encoder_for(&draft), sandbox.bundle());

    let unsigned = orchestrator.submit_draft(draft.clone())?;
    println!("unsigned operation:\n{}", serde_json::to_string_pretty(&unsigned.payload)?);

    let signed = orchestrator.confirm_sign().await?;
    println!("signed with {}", signed.signature);

    let tracking_id = orchestrator.confirm_execute().await?;
    println!("submitted, tracking id {tracking_id}");

    let mut refreshes = 0;
    while orchestrator.phase() == Phase::Stalled && refreshes < MAX_REFRESHES {
        refreshes += 1;
        tracing::info!(refreshes, "refreshing intent status");
        if let Err(e) = orchestrator.refresh().await {
            tracing::warn!(error = %e, "refresh failed");
        }
    }

    let snapshot = orchestrator.snapshot();
    println!("final phase: {}", snapshot.phase);
    if let Some(record) = &snapshot.record {
        println!("status: {} (intent {})", record.status, record.intent_id);
        if let Some(network) = catalog.find(draft.caip_id()) {
            if let Some(url) = explorer_url(record, network) {
                println!("explorer: {url}");
            }
        }
    }

    Ok(())
}
