use clap::Parser;
use deploy_scripts::{
    cli::Cli, errors::ScriptError, factory::AlloyFactoryProvider, utils::setup_client,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        command,
    } = Cli::parse();

    // Logs go to stderr, stdout only carries the deployed address
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = setup_client(&priv_key, &rpc_url)?;
    let provider = AlloyFactoryProvider::new(client, artifacts_dir);

    command.run(&provider).await
}
