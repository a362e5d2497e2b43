use anyhow::{Context, Result};
use clap::Parser;
use nft_marketplace_deploy::{fetch_marketplace, DeployArgs};
use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Signer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let args = DeployArgs::parse();
    let payer = args.load_payer()?;
    let module = args.module();
    info!(
        module = module.id,
        program = module.program,
        program_id = %module.program_id,
        url = %args.url,
        admin = %payer.pubkey(),
        "starting deployment"
    );

    let client = RpcClient::new_with_commitment(args.url.clone(), args.commitment.into());
    let deployed = module
        .deploy(&client, &payer)
        .with_context(|| format!("failed to deploy {}", module.id))?;

    let marketplace = fetch_marketplace(&client, &deployed.address)
        .context("failed to read back deployed marketplace")?;
    info!(
        address = %deployed.address,
        fresh = deployed.is_fresh(),
        admin = %marketplace.admin,
        membership_nft = %marketplace.membership_nft,
        marketplace_fee = marketplace.marketplace_fee,
        number_of_sellers = marketplace.number_of_sellers,
        number_of_sales = marketplace.number_of_sales,
        number_of_minted_nfts = marketplace.number_of_minted_nfts,
        "marketplace state"
    );

    println!("{}", deployed.address);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
