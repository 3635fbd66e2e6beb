use tracing::info;
use zonediff_domain::{CliOverrides, Config};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        timeout_secs = config.query.timeout_secs,
        max_timeout_secs = config.query.max_timeout_secs,
        ignore_ttl = config.query.ignore_ttl,
        max_delay_secs = ?config.pacing.max_delay_secs,
        "Configuration loaded"
    );

    Ok(config)
}
