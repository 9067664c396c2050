use anyhow::Context;
use colored::Colorize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_instruction::Instruction;
use solana_sdk::{
    hash::Hash,
    message::Message,
    signature::Signature,
    signer::Signer,
    transaction::Transaction,
};

use crate::logs::{
    log_error,
    log_info,
    log_success,
    LogColor,
};

/// A signer that can be held across `.await` points in `Send` futures.
pub type SyncSigner<'a> = dyn Signer + Sync + 'a;

/// Builds a transaction paid for by `payer` and signs it with the payer plus any extra `signers`.
pub fn sign_transaction(
    payer: &SyncSigner<'_>,
    signers: &[&SyncSigner<'_>],
    instructions: &[Instruction],
    blockhash: Hash,
) -> anyhow::Result<Transaction> {
    let payer_pubkey = payer
        .try_pubkey()
        .context("Couldn't read the fee payer's address")?;

    let msg = Message::new(instructions, Some(&payer_pubkey));
    let mut tx = Transaction::new_unsigned(msg);
    let all_signers: Vec<&dyn Signer> = std::iter::once(payer as &dyn Signer)
        .chain(signers.iter().map(|signer| *signer as &dyn Signer))
        .collect();
    tx.try_sign(&all_signers, blockhash)
        .context("Couldn't sign the transaction")?;

    Ok(tx)
}

/// Signs `instructions` with the fee payer plus any extra `signers` and sends them in a single
/// transaction, waiting for confirmation at the client's commitment.
pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &SyncSigner<'_>,
    signers: &[&SyncSigner<'_>],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    let blockhash = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch the latest blockhash")?;
    let tx = sign_transaction(payer, signers, instructions, blockhash)?;
    let payer_pubkey = tx.message.account_keys[0];

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(sig) => {
            let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer_pubkey);
            log_success("Signature", format!("{sig}\n{sender_info}"));
            Ok(sig)
        }
        Err(error) => {
            log_error("Failed transaction", &error);
            log_info("Payer", payer_pubkey);

            Err(error).context("Failed transaction submission")
        }
    }
}
