//! Constants used in the deploy scripts

use alloy::primitives::{address, Address};

/// The default RPC url, a local Hardhat or Anvil node
pub const DEFAULT_DEVNET_HOSTPORT: &str = "http://127.0.0.1:8545";

/// The default private key, the first default account in a Hardhat or Anvil node
pub const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default directory in which Hardhat writes compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/contracts";

/// The extension of a Solidity source file, used as the artifact subdirectory suffix
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The Solidity type of every constructor argument passed by the scripts
pub const ADDRESS_ABI_TYPE: &str = "address";

// ------------------
// | Contract Names |
// ------------------

/// The name of the Empire token contract
pub const EMPIRE_TOKEN_CONTRACT: &str = "EmpireToken";

/// The name of the bridge contract
pub const BRIDGE_CONTRACT: &str = "Bridge";

/// The name of the mini router contract
pub const MINI_ROUTER_CONTRACT: &str = "MiniRouter";

// -------------------------
// | Constructor Arguments |
// -------------------------

/// The PancakeSwap router on BSC testnet
pub const ROUTER_ADDRESS: Address = address!("0x9Ac64Cc6e4415144C455BD8E4837Fea55603e5c3");

/// The wallet receiving the token's marketing fees
pub const MARKETING_WALLET: Address = address!("0x885Aec56Bd62ccafc8e55CF19997aCddaa2fe73b");

/// The wallet receiving the token's team fees
pub const TEAM_WALLET: Address = address!("0x2b538414570e2134B6A9fC6d504c3b38cA016Cf3");

/// The validator authorized to sign bridge transfers
pub const BRIDGE_VALIDATOR: Address = address!("0x256C9FbE9093E7b9E3C4584aDBC3066D8c6216da");

/// The treasury receiving bridge fees
pub const BRIDGE_TREASURY: Address = address!("0x7F77451e9c89058556674C5b82Bd5A4fab601AFC");

/// The deployed Empire token on BSC testnet
pub const EMPIRE_TOKEN_ADDRESS: Address = address!("0xC369B72872e2ba9ff2e29a020B2801EE0e49452c");

/// Wrapped BNB on BSC testnet
pub const WETH_ADDRESS: Address = address!("0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd");

/// BUSD on BSC testnet
pub const BUSD_ADDRESS: Address = address!("0x78867BbEeF44f2326bF8DDd1941a4439382EF2A7");
