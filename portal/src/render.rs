use colored::Colorize;
use gif_portal_client::{
    controller::{
        Snapshot,
        SyncState,
    },
    logs::log_error,
    print_kv,
    LogColor,
};
use tokio::sync::watch;

/// Prints the view implied by each new snapshot.
pub async fn print_snapshots(mut snapshots: watch::Receiver<Snapshot>) -> anyhow::Result<()> {
    loop {
        snapshots.changed().await?;
        let snapshot = snapshots.borrow_and_update().clone();
        render(&snapshot);
    }
}

fn render(snapshot: &Snapshot) {
    println!(
        "\n{}",
        format!("── {} ──", snapshot.state.name()).color(LogColor::Header)
    );

    match &snapshot.state {
        SyncState::Disconnected => println!("Type `connect` to connect a wallet."),
        SyncState::Connecting => println!("Connecting..."),
        SyncState::Unsynced(session) => {
            print_kv!("Wallet", session.identity());
            println!("Couldn't read the GIF list yet. Type `refresh` to try again.");
        }
        SyncState::Uninitialized(session) => {
            print_kv!("Wallet", session.identity());
            println!("The GIF list doesn't exist yet. Type `init` to create it.");
        }
        SyncState::Ready { session, entries } => {
            print_kv!("Wallet", session.identity());
            if entries.is_empty() {
                println!("No GIFs yet. Submit one with `submit <link>`.");
            }
            for (i, entry) in entries.iter().enumerate() {
                println!(
                    "{:>3}. {} {}",
                    i + 1,
                    entry.link,
                    format!("({})", entry.submitter).bright_black()
                );
            }
        }
    }

    if let Some(pending) = &snapshot.pending {
        print_kv!("Submitting", pending);
    }
    if !snapshot.input.is_empty() {
        print_kv!("Input", &snapshot.input);
    }
    if let Some(error) = &snapshot.last_error {
        log_error(error.kind(), error);
    }
}
