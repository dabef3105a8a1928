//! Definitions of CLI arguments and commands for deploy scripts

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    commands::deploy_contract,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY},
    errors::ScriptError,
    factory::ContractFactoryProvider,
    types::{DeploymentSpec, BRIDGE, EMPIRE_TOKEN, EMPIRE_TOKEN_WITH_ROUTER, MINI_ROUTER},
};

/// Deploy the Empire contracts.
///
/// Constructor arguments are fixed per command, the options below only
/// select the network and the deployer.
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY", default_value = DEFAULT_DEVNET_PKEY, hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub rpc_url: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// The deployment to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deployments available to run
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deploy `EmpireToken(marketingWallet, teamWallet)`
    EmpireToken,
    /// Deploy `EmpireToken(router, marketingWallet, teamWallet)`
    EmpireTokenWithRouter,
    /// Deploy `Bridge(validator, treasury)`
    Bridge,
    /// Deploy `MiniRouter(empire, router, weth, busd)`
    MiniRouter,
}

impl Command {
    /// The deployment this command runs
    pub fn deployment_spec(self) -> &'static DeploymentSpec {
        match self {
            Command::EmpireToken => &EMPIRE_TOKEN,
            Command::EmpireTokenWithRouter => &EMPIRE_TOKEN_WITH_ROUTER,
            Command::Bridge => &BRIDGE,
            Command::MiniRouter => &MINI_ROUTER,
        }
    }

    /// Run the deployment, printing the deployed address to stdout
    pub async fn run(self, provider: &impl ContractFactoryProvider) -> Result<(), ScriptError> {
        deploy_contract(provider, self.deployment_spec(), &mut io::stdout()).await?;
        Ok(())
    }
}
