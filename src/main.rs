use anyhow::Result;
use tracing_subscriber::EnvFilter;

use photodim::PhotoDimConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("photodim=info")),
        )
        .init();

    let cfg = PhotoDimConfig::default();
    photodim::run_photodim(cfg).map_err(|e| anyhow::anyhow!("failed to run PhotoDim: {e}"))?;
    Ok(())
}
