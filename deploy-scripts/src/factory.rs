//! The contract factory abstraction through which contracts are deployed,
//! and its implementation over an alloy provider.
//!
//! Deployment happens in three steps, each of which may fail:
//! 1. Resolve a factory for a named contract ([`ContractFactoryProvider`])
//! 2. Submit the deployment transaction ([`ContractFactory`])
//! 3. Await confirmation of the transaction ([`PendingDeployment`])

#![allow(async_fn_in_trait)]

use std::path::PathBuf;

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use tracing::{debug, info};

use crate::{
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    utils::{deploy_calldata, read_artifact, ContractArtifact},
};

/// Resolves deployment factories for named contracts
pub trait ContractFactoryProvider {
    /// The factory type returned for a contract
    type Factory: ContractFactory;

    /// Get the deployment factory for the contract with the given name
    async fn contract_factory(&self, contract_name: &str) -> Result<Self::Factory, ScriptError>;
}

/// Submits deployment transactions for a single contract
pub trait ContractFactory {
    /// A submitted, unconfirmed deployment
    type Pending: PendingDeployment;

    /// Submit a deployment transaction with the given constructor arguments
    async fn deploy(&self, constructor_args: &[Address]) -> Result<Self::Pending, ScriptError>;
}

/// A deployment transaction awaiting confirmation
pub trait PendingDeployment {
    /// Wait for the deployment to be confirmed, returning the address
    /// of the deployed contract
    async fn deployed(self) -> Result<Address, ScriptError>;
}

// ---------
// | Alloy |
// ---------

/// Resolves factories from compiled artifacts on disk, deploying through an alloy provider
#[derive(Clone)]
pub struct AlloyFactoryProvider {
    /// The signing provider used to submit transactions
    provider: DynProvider,
    /// The directory containing compiled contract artifacts
    artifacts_dir: PathBuf,
}

impl AlloyFactoryProvider {
    /// Create a new factory provider
    pub fn new(provider: DynProvider, artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            artifacts_dir: artifacts_dir.into(),
        }
    }
}

impl ContractFactoryProvider for AlloyFactoryProvider {
    type Factory = AlloyContractFactory;

    async fn contract_factory(&self, contract_name: &str) -> Result<Self::Factory, ScriptError> {
        let artifact = read_artifact(&self.artifacts_dir, contract_name)?;
        debug!(
            "loaded `{contract_name}` artifact ({} bytes of creation code)",
            artifact.bytecode.len()
        );

        Ok(AlloyContractFactory {
            provider: self.provider.clone(),
            contract_name: contract_name.to_string(),
            artifact,
        })
    }
}

/// Deploys a single compiled contract
pub struct AlloyContractFactory {
    /// The signing provider used to submit transactions
    provider: DynProvider,
    /// The name of the contract
    contract_name: String,
    /// The compiled contract
    artifact: ContractArtifact,
}

impl ContractFactory for AlloyContractFactory {
    type Pending = AlloyPendingDeployment;

    async fn deploy(&self, constructor_args: &[Address]) -> Result<Self::Pending, ScriptError> {
        let code = deploy_calldata(&self.artifact, constructor_args)?;
        let tx = TransactionRequest::default().with_deploy_code(code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        info!(
            "submitted `{}` deployment in tx {:#x}",
            self.contract_name,
            pending.tx_hash()
        );

        Ok(AlloyPendingDeployment { pending })
    }
}

/// A submitted deployment transaction
pub struct AlloyPendingDeployment {
    /// The pending transaction
    pending: PendingTransactionBuilder<Ethereum>,
}

impl PendingDeployment for AlloyPendingDeployment {
    async fn deployed(self) -> Result<Address, ScriptError> {
        let receipt = self
            .pending
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractConfirmation(e.to_string()))?;

        deployed_address(&receipt)
    }
}

/// Extract the address of the deployed contract from a deployment receipt
///
/// Fails if the deployment reverted or the receipt carries no contract address
pub fn deployed_address(receipt: &TransactionReceipt) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractConfirmation(format!(
            "deployment tx {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractConfirmation(format!(
            "receipt for tx {:#x} has no contract address",
            receipt.transaction_hash
        ))
    })?;

    info!(
        "deployment confirmed in block {}",
        receipt.block_number.unwrap_or_default()
    );

    Ok(address)
}
