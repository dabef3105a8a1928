//! Utilities for the deploy scripts.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{hex, Address, Bytes},
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde::Deserialize;

use crate::{
    constants::{ADDRESS_ABI_TYPE, ARTIFACT_EXTENSION, SOLIDITY_EXTENSION},
    errors::ScriptError,
};

/// Sets up the signing provider through which contracts are deployed
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
    Ok(DynProvider::new(provider))
}

// -------------
// | Artifacts |
// -------------

/// A compiled contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract creation code
    pub bytecode: Bytes,
}

/// The subset of a compilation artifact needed for deployment
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract ABI
    abi: JsonAbi,
    /// The contract creation code
    bytecode: RawBytecode,
}

/// Creation code as emitted by Hardhat (a hex string) or Foundry (an object)
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// A bare hex string
    Hex(String),
    /// An object holding the hex string under `object`
    Object {
        /// The hex-encoded creation code
        object: String,
    },
}

impl RawBytecode {
    /// The hex-encoded creation code
    fn as_hex(&self) -> &str {
        match self {
            RawBytecode::Hex(s) => s,
            RawBytecode::Object { object } => object,
        }
    }
}

/// Parse a compilation artifact from its JSON contents
pub fn parse_artifact(contents: &str) -> Result<ContractArtifact, ScriptError> {
    let raw: RawArtifact =
        serde_json::from_str(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    // Unlinked library placeholders (`__$...$__`) fail to decode here
    let bytecode = hex::decode(raw.bytecode.as_hex())
        .map_err(|e| ScriptError::ArtifactParsing(format!("invalid bytecode: {e}")))?;
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactParsing(
            "artifact has no creation code, is the contract abstract?".to_string(),
        ));
    }

    Ok(ContractArtifact {
        abi: raw.abi,
        bytecode: bytecode.into(),
    })
}

/// The paths at which the artifact for the given contract may live, in
/// order of preference: `<dir>/<Name>.sol/<Name>.json`, then `<dir>/<Name>.json`
pub fn artifact_paths(artifacts_dir: &Path, contract_name: &str) -> [PathBuf; 2] {
    let file_name = format!("{contract_name}.{ARTIFACT_EXTENSION}");
    [
        artifacts_dir
            .join(format!("{contract_name}.{SOLIDITY_EXTENSION}"))
            .join(&file_name),
        artifacts_dir.join(file_name),
    ]
}

/// Read the artifact for the given contract from the artifacts directory
pub fn read_artifact(
    artifacts_dir: &Path,
    contract_name: &str,
) -> Result<ContractArtifact, ScriptError> {
    let path = artifact_paths(artifacts_dir, contract_name)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| {
            ScriptError::UnknownContract(format!(
                "no artifact for `{contract_name}` in {}",
                artifacts_dir.display()
            ))
        })?;

    let contents =
        fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    parse_artifact(&contents).map_err(|e| match e {
        ScriptError::ArtifactParsing(s) => {
            ScriptError::ArtifactParsing(format!("{}: {s}", path.display()))
        }
        e => e,
    })
}

// ------------
// | Calldata |
// ------------

/// Build the data of a contract creation transaction: the creation code
/// followed by the ABI-encoded constructor arguments.
///
/// The arguments are checked against the constructor in the ABI, a contract
/// without a declared constructor takes no arguments.
pub fn deploy_calldata(
    artifact: &ContractArtifact,
    constructor_args: &[Address],
) -> Result<Bytes, ScriptError> {
    let inputs = artifact
        .abi
        .constructor
        .as_ref()
        .map(|c| c.inputs.as_slice())
        .unwrap_or_default();

    if inputs.len() != constructor_args.len() {
        return Err(ScriptError::CalldataConstruction(format!(
            "constructor takes {} arguments, got {}",
            inputs.len(),
            constructor_args.len()
        )));
    }

    if let Some(param) = inputs.iter().find(|p| p.ty != ADDRESS_ABI_TYPE) {
        return Err(ScriptError::CalldataConstruction(format!(
            "constructor argument `{}` has type `{}`, expected `{ADDRESS_ABI_TYPE}`",
            param.name, param.ty
        )));
    }

    let encoded_args = DynSolValue::Tuple(
        constructor_args
            .iter()
            .copied()
            .map(DynSolValue::Address)
            .collect(),
    )
    .abi_encode_params();

    let mut code = artifact.bytecode.to_vec();
    code.extend(encoded_args);
    Ok(code.into())
}
