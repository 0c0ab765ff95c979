//! `view-head` subcommand: print cached head data at a given height.

use crate::light_client::LightClient;
/// App-local prelude includes `app_reader()`/`app_writer()`/`app_config()`
/// accessors along with logging macros. Customize as you see fit.
use crate::prelude::*;
use abscissa_core::{Command, Runnable};

/// `view-head` subcommand
#[derive(clap::Parser, Command, Debug)]
pub struct ViewHeadCmd {
    pub height: Option<u64>,
    pub with_detail: Option<bool>,
}

impl Runnable for ViewHeadCmd {
    fn run(&self) {
        let light_client = LightClient::new(APP.config().state_data.data_folder.clone());
        status_info!(
            "Info",
            "Latest height of light client: {}",
            light_client.latest_height().unwrap_or(0)
        );
        let height = match self.height {
            Some(height) => height,
            None => match light_client.latest_height() {
                Some(height) => height,
                None => panic!("No head data in client."),
            },
        };
        if let Some(head) = light_client.get_head_at(height) {
            if self.with_detail.unwrap_or(false) {
                status_info!("Info", "Head data at height {}: {:?}", height, head);
            } else {
                status_info!(
                    "Info",
                    "Head data at height {}: {{ prev_block_hash: {}, height: {}, prev_state_root: {}, epoch_id: {}, next_epoch_id: {} }}",
                    height,
                    head.prev_block_hash,
                    head.inner_lite.height,
                    head.inner_lite.prev_state_root,
                    head.inner_lite.epoch_id.0,
                    head.inner_lite.next_epoch_id.0
                );
            }
        } else {
            status_err!("Missing head data at height {}.", height);
        }
    }
}
