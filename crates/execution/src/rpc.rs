//! JSON-RPC access to a live execution node.

use crate::{ExecutionBlock, ExecutionError, ExecutionResult, RpcBlock};
use alloy_primitives::U64;
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use reqwest::{Client, Url};

/// Fetches the head block of the node at `url`, with full transaction objects.
///
/// The block number is read first and the block then requested by number, so a reorg between
/// the two calls yields the block now canonical at that height.
pub async fn fetch_latest_block(url: &str) -> ExecutionResult<ExecutionBlock> {
    let url = Url::parse(url).map_err(|_| ExecutionError::InvalidRpcUrl(url.to_string()))?;
    let client = RpcClient::new(Http::<Client>::new(url), false);

    let number = client.request_noparams::<U64>("eth_blockNumber").await?;
    debug!(target: "execution", "Execution head is block {number}");

    let block = client
        .request::<_, Option<RpcBlock>>("eth_getBlockByNumber", (number, true))
        .await?
        .ok_or(ExecutionError::MissingBlock(number.to()))?;

    info!(
        target: "execution",
        "Fetched block {} ({} transactions) over RPC",
        block.header.number,
        block.transactions.len()
    );
    Ok(block.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url() {
        let err = fetch_latest_block("not a url").await.unwrap_err();
        assert!(matches!(err, ExecutionError::InvalidRpcUrl(url) if url == "not a url"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let err = fetch_latest_block("http://127.0.0.1:1").await.unwrap_err();
        assert!(matches!(err, ExecutionError::Rpc(_)));
    }
}
