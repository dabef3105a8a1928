//! Tests of resolving contract factories from compiled artifacts on disk

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use deploy_scripts::{
    constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY},
    errors::ScriptError,
    factory::{AlloyFactoryProvider, ContractFactoryProvider},
    utils::{read_artifact, setup_client},
};
use eyre::Result;
use rand::{thread_rng, Rng};

const BRIDGE_ARTIFACT: &str = r#"{
    "contractName": "Bridge",
    "abi": [
        {
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                { "name": "_validator", "type": "address", "internalType": "address" },
                { "name": "_treasury", "type": "address", "internalType": "address" }
            ]
        }
    ],
    "bytecode": "0x60806040"
}"#;

/// A scratch artifacts directory, removed on drop
struct ArtifactsDir(PathBuf);

impl ArtifactsDir {
    fn new() -> Self {
        let dir = env::temp_dir().join(format!("deploy-scripts-{:x}", thread_rng().gen::<u64>()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.0.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

impl Drop for ArtifactsDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_read_hardhat_layout() -> Result<()> {
    let dir = ArtifactsDir::new();
    dir.write("Bridge.sol/Bridge.json", BRIDGE_ARTIFACT);

    let artifact = read_artifact(dir.path(), "Bridge")?;
    assert_eq!(&artifact.bytecode[..], &[0x60, 0x80, 0x60, 0x40]);
    Ok(())
}

#[test]
fn test_read_flat_layout() -> Result<()> {
    let dir = ArtifactsDir::new();
    dir.write("Bridge.json", BRIDGE_ARTIFACT);

    let artifact = read_artifact(dir.path(), "Bridge")?;
    assert!(artifact.abi.constructor.is_some());
    Ok(())
}

#[test]
fn test_hardhat_layout_preferred() -> Result<()> {
    let dir = ArtifactsDir::new();
    dir.write("Bridge.sol/Bridge.json", BRIDGE_ARTIFACT);
    dir.write("Bridge.json", "not json");

    read_artifact(dir.path(), "Bridge")?;
    Ok(())
}

#[test]
fn test_missing_artifact() {
    let dir = ArtifactsDir::new();
    let res = read_artifact(dir.path(), "MiniRouter");
    assert!(matches!(res, Err(ScriptError::UnknownContract(_))));
}

#[test]
fn test_malformed_artifact_names_path() {
    let dir = ArtifactsDir::new();
    dir.write("Bridge.sol/Bridge.json", "{}");

    match read_artifact(dir.path(), "Bridge") {
        Err(ScriptError::ArtifactParsing(msg)) => assert!(msg.contains("Bridge.json")),
        _ => panic!("expected an artifact parsing error"),
    }
}

#[test]
fn test_setup_client_rejects_bad_config() {
    let res = setup_client("not a key", DEFAULT_DEVNET_HOSTPORT);
    assert!(matches!(res, Err(ScriptError::ClientInitialization(_))));

    let res = setup_client(DEFAULT_DEVNET_PKEY, "not a url");
    assert!(matches!(res, Err(ScriptError::ClientInitialization(_))));
}

#[tokio::test]
async fn test_factory_lookup() -> Result<()> {
    let dir = ArtifactsDir::new();
    dir.write("Bridge.sol/Bridge.json", BRIDGE_ARTIFACT);

    // Resolving a factory only reads the artifact, no node is contacted
    let client = setup_client(DEFAULT_DEVNET_PKEY, DEFAULT_DEVNET_HOSTPORT)?;
    let provider = AlloyFactoryProvider::new(client, dir.path());

    assert!(provider.contract_factory("Bridge").await.is_ok());
    assert!(matches!(
        provider.contract_factory("EmpireToken").await,
        Err(ScriptError::UnknownContract(_))
    ));

    Ok(())
}
