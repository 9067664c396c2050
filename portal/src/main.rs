//! Terminal front end for the GIF portal: reads commands from stdin, hands them to the sync
//! controller, and prints every state change.

use clap::Parser;
use gif_portal_client::{
    controller::SyncController,
    logs::log_error,
    print_kv,
    remote::RpcListClient,
    wallet::{
        probe_wallet,
        WalletSessionAdapter,
    },
};
use tokio::sync::mpsc;

use crate::{
    cli::Args,
    commands::read_commands,
    render::print_snapshots,
};

mod cli;
mod commands;
mod render;

const COMMAND_QUEUE_LEN: usize = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, base_keypair) = args.load_config()?;
    print_kv!("RPC", &config.rpc_url);
    print_kv!("Program", config.program_id);
    print_kv!("Base account", config.base_account);

    let wallet = WalletSessionAdapter::new(
        probe_wallet(args.wallet.as_deref(), args.trusted),
        config.timeout,
    );
    let remote = RpcListClient::new(&config, base_keypair)?;
    let controller = SyncController::new(&config, wallet, remote);

    let printer = tokio::spawn(print_snapshots(controller.subscribe()));
    let (sender, receiver) = mpsc::channel(COMMAND_QUEUE_LEN);
    let reader = tokio::spawn(read_commands(sender));

    controller.run(receiver).await?;
    printer.abort();

    if let Err(e) = reader.await? {
        log_error("Input", format!("{e:#}"));
    }

    Ok(())
}
