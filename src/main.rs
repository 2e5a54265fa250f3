use anyhow::Context;
use kevin::{AssistantParts, KevinConfig, env::EnvSnapshot};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let env = EnvSnapshot::from_process().context("failed to read environment")?;
    let config = KevinConfig::load(&env).context("invalid Kevin configuration")?;
    let parts =
        AssistantParts::from_config(&config).context("failed to build assistant providers")?;

    info!(
        model = %parts.inference.model_id(),
        waker = parts.waker.kind(),
        "Kevin providers resolved"
    );
    println!("{}", serde_json::to_string_pretty(&parts.summary())?);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
