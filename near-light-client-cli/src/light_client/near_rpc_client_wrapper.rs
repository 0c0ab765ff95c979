//! Implementation of a wrapper around NEAR's `JsonRpcClient`.

use std::fmt::Debug;

use abscissa_core::Application;
use near_jsonrpc_client::{methods, JsonRpcClient, MethodCallResult};
use near_jsonrpc_primitives::types::light_client::RpcLightClientExecutionProofResponse;
use near_primitives::hash::CryptoHash;
use near_primitives::types::{BlockId, Finality, TransactionOrReceiptId};
use near_primitives::views::BlockView;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;

use crate::application::APP;

const ERR_INVALID_VARIANT: &str =
    "Incorrect variant retrieved while querying: maybe a bug in RPC code?";

/// A client that wraps around [`JsonRpcClient`], adding retry with
/// exponential backoff around every call.
pub struct NearRpcClientWrapper {
    pub rpc_addr: String,
    pub rpc_client: JsonRpcClient,
}

impl NearRpcClientWrapper {
    pub(crate) fn new(rpc_addr: &str) -> Self {
        let connector = JsonRpcClient::new_client();
        let rpc_client = connector.connect(rpc_addr);

        Self {
            rpc_client,
            rpc_addr: rpc_addr.into(),
        }
    }

    pub(crate) async fn get_next_light_client_block(
        &self,
        last_block_hash: &CryptoHash,
    ) -> anyhow::Result<near_primitives::views::LightClientBlockView> {
        retry(|| async {
            let query_resp = self
                .query(
                    &methods::next_light_client_block::RpcLightClientNextBlockRequest {
                        last_block_hash: *last_block_hash,
                    },
                )
                .await?;
            query_resp.ok_or_else(|| {
                anyhow::anyhow!("Failed to get next light client block. Response is empty.")
            })
        })
        .await
    }

    pub(crate) async fn get_light_client_proof(
        &self,
        id: TransactionOrReceiptId,
        light_client_head: &CryptoHash,
    ) -> anyhow::Result<RpcLightClientExecutionProofResponse> {
        retry(|| async {
            let response = self
                .query(&methods::light_client_proof::RpcLightClientExecutionProofRequest {
                    id: id.clone(),
                    light_client_head: *light_client_head,
                })
                .await?;
            anyhow::Ok(response)
        })
        .await
    }

    pub(crate) async fn query<M>(&self, method: &M) -> MethodCallResult<M::Response, M::Error>
    where
        M: methods::RpcMethod + Debug,
        M::Response: Debug,
        M::Error: Debug,
    {
        retry(|| async {
            let result = self.rpc_client.call(method).await;
            tracing::debug!(
                target: "near_light_client_cli",
                "Querying RPC with {:?} resulted in {:?}",
                method,
                result
            );
            result
        })
        .await
    }

    pub(crate) async fn view_block(&self, block_id: &Option<BlockId>) -> anyhow::Result<BlockView> {
        retry(|| async {
            let block_reference = block_id
                .clone()
                .map(Into::into)
                .unwrap_or_else(|| Finality::None.into());

            let block_view = self
                .query(&methods::block::RpcBlockRequest { block_reference })
                .await?;

            Ok(block_view)
        })
        .await
    }
}

pub(crate) async fn retry<R, E, T, F>(task: F) -> T::Output
where
    F: FnMut() -> T,
    T: core::future::Future<Output = Result<R, E>>,
{
    // Exponential backoff starting w/ 10ms, capped at `max_retries` attempts.
    let retry_strategy = ExponentialBackoff::from_millis(10)
        .map(jitter)
        .take(APP.config().near_rpc.max_retries as usize);

    Retry::spawn(retry_strategy, task).await
}
