//! Selection of the execution block a genesis state commits to.

use crate::{fetch_latest_block, genesis_block, load_block_file, ExecutionBlock, ExecutionResult};
use alloy_genesis::Genesis;
use std::{fmt, path::Path};

/// Where the genesis execution block comes from, in order of precedence.
#[derive(Debug, Clone, Copy)]
pub enum ExecutionBlockSource<'a> {
    /// A saved block, for shadow forks of a chain with no live endpoint.
    BlockFile(&'a Path),
    /// The head of a live execution node, for shadow forks.
    Rpc(&'a str),
    /// Block 0 of the chain described by an EL genesis config.
    GenesisConfig(&'a Genesis),
    /// No block; a header is synthesized from the command line where the fork allows it.
    Placeholder,
}

impl<'a> ExecutionBlockSource<'a> {
    /// Picks the highest-precedence source that was configured.
    pub const fn select(
        block_file: Option<&'a Path>,
        rpc: Option<&'a str>,
        genesis: Option<&'a Genesis>,
    ) -> Self {
        match (block_file, rpc, genesis) {
            (Some(path), _, _) => Self::BlockFile(path),
            (None, Some(url), _) => Self::Rpc(url),
            (None, None, Some(genesis)) => Self::GenesisConfig(genesis),
            (None, None, None) => Self::Placeholder,
        }
    }

    /// Obtains the block, or `None` for [Self::Placeholder].
    pub async fn fetch(self) -> ExecutionResult<Option<ExecutionBlock>> {
        let block = match self {
            Self::BlockFile(path) => load_block_file(path)?,
            Self::Rpc(url) => fetch_latest_block(url).await?,
            Self::GenesisConfig(genesis) => genesis_block(genesis)?,
            Self::Placeholder => return Ok(None),
        };
        Ok(Some(block))
    }
}

impl fmt::Display for ExecutionBlockSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockFile(path) => write!(f, "block file {}", path.display()),
            Self::Rpc(url) => write!(f, "RPC endpoint {url}"),
            Self::GenesisConfig(_) => write!(f, "EL genesis config"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::el_genesis::tests::sample_genesis;

    #[test]
    fn test_precedence() {
        let genesis = sample_genesis();
        let path = Path::new("block.json");

        assert!(matches!(
            ExecutionBlockSource::select(Some(path), Some("http://node"), Some(&genesis)),
            ExecutionBlockSource::BlockFile(p) if p == path
        ));
        assert!(matches!(
            ExecutionBlockSource::select(None, Some("http://node"), Some(&genesis)),
            ExecutionBlockSource::Rpc("http://node")
        ));
        assert!(matches!(
            ExecutionBlockSource::select(None, None, Some(&genesis)),
            ExecutionBlockSource::GenesisConfig(_)
        ));
        assert!(matches!(
            ExecutionBlockSource::select(None, None, None),
            ExecutionBlockSource::Placeholder
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExecutionBlockSource::Rpc("http://node").to_string(), "RPC endpoint http://node");
        assert_eq!(ExecutionBlockSource::Placeholder.to_string(), "placeholder");
    }

    #[tokio::test]
    async fn test_fetch() {
        assert!(ExecutionBlockSource::Placeholder.fetch().await.unwrap().is_none());

        let genesis = sample_genesis();
        let block = ExecutionBlockSource::GenesisConfig(&genesis).fetch().await.unwrap().unwrap();
        assert_eq!(block.hash(), genesis_block(&genesis).unwrap().hash());

        let missing = ExecutionBlockSource::BlockFile(Path::new("/nonexistent/block.json"));
        assert!(missing.fetch().await.is_err());
    }
}
