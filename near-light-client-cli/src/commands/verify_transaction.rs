//! `verify-transaction` subcommand
//! Verify a certain transaction's outcome against the latest light client head.

use std::str::FromStr;

use crate::light_client::{convert, near_rpc_client_wrapper::NearRpcClientWrapper, LightClient};
/// App-local prelude includes `app_reader()`/`app_writer()`/`app_config()`
/// accessors along with logging macros. Customize as you see fit.
use crate::{info_with_time, prelude::*};
use abscissa_core::{Command, Runnable};
use near_light_client::host::Sha256Ed25519Host;
use near_light_client::near_types::hash::CryptoHash;
use near_light_client::{verify_block_inclusion, verify_transaction};

/// `verify-transaction` subcommand
#[derive(clap::Parser, Command, Debug)]
pub struct VerifyTransactionCmd {
    /// base58 formatted transaction hash
    pub tx_hash: String,
    /// Account id of transaction sender
    pub sender_id: String,
}

impl Runnable for VerifyTransactionCmd {
    fn run(&self) {
        abscissa_tokio::run(&APP, validate_transaction(&self.tx_hash, &self.sender_id))
            .expect("Failed to validate transaction against the NEAR light client.");
    }
}

async fn validate_transaction(tx_hash: &str, sender_id: &str) {
    let host = Sha256Ed25519Host;
    let light_client = LightClient::new(APP.config().state_data.data_folder.clone());
    let latest_height = match light_client.latest_height() {
        Some(height) => height,
        None => {
            status_err!("Uninitialized NEAR light client.");
            return;
        }
    };
    let head = light_client
        .get_head_at(latest_height)
        .expect("cached height has no head data");
    let head_hash = head.current_block_hash(&host);

    let transaction_hash = CryptoHash::try_from(
        bs58::decode(tx_hash)
            .into_vec()
            .expect("tx hash is not valid base58")
            .as_ref(),
    )
    .expect("tx hash is not a 32-byte digest");
    let sender_id = near_primitives::account::id::AccountId::from_str(sender_id)
        .expect("sender id is not a valid NEAR account id");

    let rpc_client = NearRpcClientWrapper::new(APP.config().near_rpc.rpc_endpoint.as_str());
    let result = rpc_client
        .get_light_client_proof(
            near_primitives::types::TransactionOrReceiptId::Transaction {
                transaction_hash: near_primitives::hash::CryptoHash(transaction_hash.0),
                sender_id,
            },
            &near_primitives::hash::CryptoHash(head_hash.0),
        )
        .await
        .expect("Failed to get light client proof.");

    info_with_time!("Header of block proof: {:?}", result.block_header_lite);
    info_with_time!("Block proof length: {}", result.block_proof.len());

    let outcome_proof = convert::convert_outcome_proof(&result.outcome_proof);
    let outcome_root_proof = convert::convert_merkle_path(&result.outcome_root_proof);
    let block_header_lite = convert::convert_block_header_lite(&result.block_header_lite);
    let block_proof = convert::convert_merkle_path(&result.block_proof);

    if let Err(err) = verify_transaction(
        &host,
        &outcome_proof,
        &outcome_root_proof,
        &block_header_lite.inner_lite.outcome_root,
    ) {
        status_err!("Transaction outcome verification failed: {}", err);
        return;
    }

    match verify_block_inclusion(
        &host,
        &block_header_lite,
        &block_proof,
        &head.inner_lite.block_merkle_root,
    ) {
        Ok(()) => status_ok!(
            "Finished",
            "Transaction outcome verified and block is an ancestor of the trusted head."
        ),
        Err(err) => status_err!("Ancestor block verification failed: {}", err),
    }
}
