//! Type definitions used throughout the scripts

use alloy::primitives::Address;

use crate::constants::{
    BRIDGE_CONTRACT, BRIDGE_TREASURY, BRIDGE_VALIDATOR, BUSD_ADDRESS, EMPIRE_TOKEN_ADDRESS,
    EMPIRE_TOKEN_CONTRACT, MARKETING_WALLET, MINI_ROUTER_CONTRACT, ROUTER_ADDRESS, TEAM_WALLET,
    WETH_ADDRESS,
};

/// A single contract deployment: the contract to deploy and the
/// arguments to pass to its constructor, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentSpec {
    /// The name of the compiled contract
    pub contract_name: &'static str,
    /// The constructor arguments
    pub constructor_args: &'static [Address],
}

/// `EmpireToken(marketingWallet, teamWallet)`
pub const EMPIRE_TOKEN: DeploymentSpec = DeploymentSpec {
    contract_name: EMPIRE_TOKEN_CONTRACT,
    constructor_args: &[MARKETING_WALLET, TEAM_WALLET],
};

/// `EmpireToken(router, marketingWallet, teamWallet)`, the revision of the
/// token which takes the DEX router at construction time
pub const EMPIRE_TOKEN_WITH_ROUTER: DeploymentSpec = DeploymentSpec {
    contract_name: EMPIRE_TOKEN_CONTRACT,
    constructor_args: &[ROUTER_ADDRESS, MARKETING_WALLET, TEAM_WALLET],
};

/// `Bridge(validator, treasury)`
pub const BRIDGE: DeploymentSpec = DeploymentSpec {
    contract_name: BRIDGE_CONTRACT,
    constructor_args: &[BRIDGE_VALIDATOR, BRIDGE_TREASURY],
};

/// `MiniRouter(empire, router, weth, busd)`
pub const MINI_ROUTER: DeploymentSpec = DeploymentSpec {
    contract_name: MINI_ROUTER_CONTRACT,
    constructor_args: &[EMPIRE_TOKEN_ADDRESS, ROUTER_ADDRESS, WETH_ADDRESS, BUSD_ADDRESS],
};
