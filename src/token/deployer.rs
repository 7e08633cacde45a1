//! Contract deployment strategies.

use alloy::primitives::Bytes;
use async_trait::async_trait;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::signer::{CallIntent, SignerContext};
use crate::blockchain::types::{BlockchainResult, Deployment};
use crate::token::bindings::Goldcoin;

/// Submits a contract creation with a prepared signing context.
///
/// Injected into [`TokenContract`](crate::token::TokenContract) so callers
/// can swap the deploy routine without touching the facade.
#[async_trait]
pub trait Deployer: Send + Sync {
    /// Init code the signing context's gas estimate is computed for.
    fn init_code(&self) -> Bytes;

    async fn deploy(
        &self,
        ctx: &SignerContext,
        backend: &dyn ChainBackend,
    ) -> BlockchainResult<Deployment>;
}

/// Deploys the Goldcoin bytecode with a signed legacy creation transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldcoinDeployer;

#[async_trait]
impl Deployer for GoldcoinDeployer {
    fn init_code(&self) -> Bytes {
        Goldcoin::BYTECODE.clone()
    }

    async fn deploy(
        &self,
        ctx: &SignerContext,
        backend: &dyn ChainBackend,
    ) -> BlockchainResult<Deployment> {
        let signed = ctx.sign(CallIntent::create(self.init_code())).await?;

        let node_hash = backend.send_raw_transaction(&signed.raw).await?;
        if node_hash != signed.hash {
            tracing::warn!(
                local = %signed.hash,
                node = %node_hash,
                "Node reported a different transaction hash"
            );
        }

        Ok(Deployment {
            address: ctx.from.create(ctx.nonce),
            tx_hash: signed.hash,
        })
    }
}
