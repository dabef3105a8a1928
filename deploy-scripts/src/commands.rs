//! Implementation of the deploy scripts

use std::io::Write;

use alloy::primitives::Address;
use tracing::info;

use crate::{
    errors::ScriptError,
    factory::{ContractFactory, ContractFactoryProvider, PendingDeployment},
    types::DeploymentSpec,
};

/// Deploy the contract described by `spec`, writing
/// `<ContractName> deployed to: <address>` to `out` once it is confirmed.
///
/// Nothing is written if any step fails.
pub async fn deploy_contract<P: ContractFactoryProvider>(
    provider: &P,
    spec: &DeploymentSpec,
    out: &mut impl Write,
) -> Result<Address, ScriptError> {
    let DeploymentSpec {
        contract_name,
        constructor_args,
    } = spec;

    info!("deploying `{contract_name}` with args {constructor_args:?}");

    let factory = provider.contract_factory(contract_name).await?;
    let pending = factory.deploy(constructor_args).await?;
    let address = pending.deployed().await?;

    writeln!(out, "{contract_name} deployed to: {address}")
        .map_err(|e| ScriptError::Output(e.to_string()))?;

    Ok(address)
}
