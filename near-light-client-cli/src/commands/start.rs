//! `start` subcommand: polls a NEAR RPC endpoint for new light client
//! heads, verifies each against the cached head, and persists the result.

use crate::config::AppConfig;
use crate::light_client::{
    convert, near_rpc_client_wrapper::NearRpcClientWrapper, LightClient,
};
/// App-local prelude includes `app_reader()`/`app_writer()`/`app_config()`
/// accessors along with logging macros. Customize as you see fit.
use crate::{info_with_time, prelude::*};
use abscissa_core::{config, Command, FrameworkError, Runnable};
use near_light_client::host::Sha256Ed25519Host;
use near_primitives::types::BlockId;

/// `start` subcommand
#[derive(clap::Parser, Command, Debug)]
pub struct StartCmd {}

impl Runnable for StartCmd {
    fn run(&self) {
        abscissa_tokio::run(&APP, start_light_client()).expect("Failed to start NEAR light client.");
    }
}

impl config::Override<AppConfig> for StartCmd {
    fn override_config(&self, config: AppConfig) -> Result<AppConfig, FrameworkError> {
        Ok(config)
    }
}

async fn start_light_client() {
    let host = Sha256Ed25519Host;
    let rpc_client = NearRpcClientWrapper::new(APP.config().near_rpc.rpc_endpoint.as_str());
    let mut light_client = LightClient::new(APP.config().state_data.data_folder.clone());

    let mut last_block_hash = get_last_block_hash(&light_client, &rpc_client).await;
    loop {
        let rpc_view = rpc_client
            .get_next_light_client_block(&last_block_hash)
            .await
            .expect("Failed to get next light client block.");
        let view = convert::convert_light_client_block_view(&rpc_view);

        if light_client
            .get_epoch_block_producers(&view.inner_lite.epoch_id.0)
            .is_none()
        {
            info_with_time!(
                "Installing head directly at height {}, epoch {}",
                view.inner_lite.height,
                view.inner_lite.epoch_id.0
            );
            let current_epoch_producers = view.next_bps.clone().unwrap_or_default();
            light_client.install_head(view, current_epoch_producers, None);
        } else {
            info_with_time!(
                "Validating and updating head at height {}, epoch {}",
                view.inner_lite.height,
                view.inner_lite.epoch_id.0
            );
            let height = view.inner_lite.height;
            if let Err(err) = light_client.validate_and_update_head(&host, view) {
                status_err!("Failed to validate head at height {}: {}", height, err);
                break;
            }
        }

        last_block_hash = get_last_block_hash(&light_client, &rpc_client).await;

        while light_client.cached_heights().len() as u64 > APP.config().state_data.max_cached_heights {
            light_client.remove_oldest_head();
        }
    }
}

async fn get_last_block_hash(
    light_client: &LightClient,
    rpc_client: &NearRpcClientWrapper,
) -> near_primitives::hash::CryptoHash {
    rpc_client
        .view_block(&light_client.latest_height().map(BlockId::Height))
        .await
        .expect("Failed to get latest block.")
        .header
        .hash
}
