//! Implementation of the `editlease config` command and config resolution
//! shared with `shell`.

use crate::cli::ConfigArgs;
use editlease::config::Config;
use editlease::error::Result;

/// Build the effective config: file (or defaults), then CLI overrides.
pub(crate) fn resolve_config(args: &ConfigArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(ms) = args.lease_ms {
        config.lease_duration_ms = ms;
    }
    if let Some(ms) = args.interval_ms {
        config.sweep_interval_ms = ms;
    }
    if args.revalidate {
        config.revalidate_before_commit = true;
    }

    config.validate()?;
    Ok(config)
}

pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
