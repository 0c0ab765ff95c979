//! File-backed cache for a [`TrustedHead`], wrapping the verification core
//! with the persistence the core deliberately leaves to its host.

pub mod convert;
pub mod near_rpc_client_wrapper;

use std::collections::VecDeque;

use borsh::{BorshDeserialize, BorshSerialize};
use near_light_client::head::TrustedHead;
use near_light_client::near_types::block::BlockHeight;
use near_light_client::near_types::hash::CryptoHash;
use near_light_client::near_types::validator::ValidatorStake;
use near_light_client::{update_head, Error, ErrorKind, Host, LightClientBlockView};

const HEAD_DATA_SUB_FOLDER: &str = "head";
const BPS_DATA_SUB_FOLDER: &str = "bps";

#[derive(BorshDeserialize, BorshSerialize)]
struct BlockProducers(Vec<ValidatorStake>);

/// A [`TrustedHead`] whose head-per-height history and producer sets are
/// persisted as Borsh-encoded files under a base folder, the way the
/// reference implementation this CLI descends from keeps its cache.
pub struct LightClient {
    base_folder: String,
    cached_heights: VecDeque<BlockHeight>,
}

impl LightClient {
    /// Opens the cache rooted at `base_folder`, scanning it for already
    /// cached heights.
    pub fn new(base_folder: String) -> Self {
        LightClient {
            cached_heights: get_cached_heights(&base_folder),
            base_folder,
        }
    }

    pub fn latest_height(&self) -> Option<BlockHeight> {
        self.cached_heights.back().copied()
    }

    pub fn oldest_height(&self) -> Option<BlockHeight> {
        self.cached_heights.front().copied()
    }

    pub fn cached_heights(&self) -> Vec<BlockHeight> {
        self.cached_heights.iter().copied().collect()
    }

    pub fn remove_oldest_head(&mut self) {
        if let Some(height) = self.cached_heights.pop_front() {
            let file_name = self.head_file(height);
            std::fs::remove_file(file_name).expect("failed to remove head data file");
        }
    }

    pub fn get_head_at(&self, height: BlockHeight) -> Option<LightClientBlockView> {
        let bytes = std::fs::read(self.head_file(height)).ok()?;
        Some(LightClientBlockView::try_from_slice(&bytes).expect("invalid head data file"))
    }

    pub fn get_epoch_block_producers(&self, epoch_id: &CryptoHash) -> Option<Vec<ValidatorStake>> {
        let bytes = std::fs::read(self.bps_file(epoch_id)).ok()?;
        Some(
            BlockProducers::try_from_slice(&bytes)
                .expect("invalid block producers data file")
                .0,
        )
    }

    /// Installs `head` directly, with no quorum check — for a checkpoint
    /// the caller already trusts, or for the light client's very first
    /// head while it still lacks two full epochs of cached producers.
    pub fn install_head(
        &mut self,
        head: LightClientBlockView,
        current_epoch_producers: Vec<ValidatorStake>,
        next_epoch_producers: Option<Vec<ValidatorStake>>,
    ) {
        if let Some(latest_height) = self.cached_heights.back() {
            assert!(
                head.inner_lite.height > *latest_height,
                "head data is too old"
            );
        }
        self.write_producers(&head.inner_lite.epoch_id.0, &current_epoch_producers);
        if let Some(next) = &next_epoch_producers {
            self.write_producers(&head.inner_lite.next_epoch_id.0, next);
        }
        let height = head.inner_lite.height;
        std::fs::write(self.head_file(height), borsh::to_vec(&head).unwrap())
            .expect("failed to save light client head to file");
        self.cached_heights.push_back(height);
    }

    /// Runs the core's quorum-verified [`update_head`] against the cached
    /// head and, only if it accepts, persists the new head and any newly
    /// installed producer set.
    pub fn validate_and_update_head(
        &mut self,
        host: &impl Host,
        view: LightClientBlockView,
    ) -> Result<(), Error> {
        let latest_height = self.latest_height().ok_or_else(|| {
            Error::new(ErrorKind::BadInput, "light client has no cached head yet")
        })?;
        let head = self
            .get_head_at(latest_height)
            .expect("cached height has no head data");

        let current_epoch_producers = self
            .get_epoch_block_producers(&head.inner_lite.epoch_id.0)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::UnknownEpoch,
                    "no cached producers for the current head's epoch",
                )
            })?;
        let next_epoch_producers = self.get_epoch_block_producers(&head.inner_lite.next_epoch_id.0);

        let mut state =
            TrustedHead::from_checkpoint(head, current_epoch_producers, next_epoch_producers);
        update_head(host, view, &mut state)?;

        for (epoch_id, producers) in &state.producers {
            self.write_producers(epoch_id, producers);
        }
        let height = state.head.inner_lite.height;
        std::fs::write(self.head_file(height), borsh::to_vec(&state.head).unwrap())
            .expect("failed to save light client head to file");
        self.cached_heights.push_back(height);
        Ok(())
    }

    fn write_producers(&self, epoch_id: &CryptoHash, producers: &[ValidatorStake]) {
        std::fs::write(
            self.bps_file(epoch_id),
            borsh::to_vec(&BlockProducers(producers.to_vec())).unwrap(),
        )
        .expect("failed to save block producers to file");
    }

    fn head_file(&self, height: BlockHeight) -> String {
        format!("{}/{}/{}", self.base_folder, HEAD_DATA_SUB_FOLDER, height)
    }

    fn bps_file(&self, epoch_id: &CryptoHash) -> String {
        format!("{}/{}/{}", self.base_folder, BPS_DATA_SUB_FOLDER, epoch_id)
    }
}

fn get_cached_heights(base_folder: &str) -> VecDeque<BlockHeight> {
    let head_data_path = format!("{}/{}", base_folder, HEAD_DATA_SUB_FOLDER);
    let mut heights = Vec::new();
    for entry in std::fs::read_dir(head_data_path).expect("failed to access head data folder") {
        let dir_entry = entry.expect("invalid file entry");
        let path = dir_entry.path();
        if path.is_file() {
            if let Ok(bytes) = std::fs::read(&path) {
                let head = LightClientBlockView::try_from_slice(&bytes)
                    .unwrap_or_else(|_| panic!("invalid head data file {}", path.display()));
                heights.push(head.inner_lite.height);
            }
        }
    }
    heights.sort_unstable();
    heights.into_iter().collect()
}
