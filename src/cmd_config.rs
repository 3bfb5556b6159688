//! `config` handler.

use anyhow::bail;

use clutch_config::{Config, ConfigValidator};

/// Print the effective configuration, or validate it.
pub(crate) fn handle_config(config: &Config, check: bool) -> anyhow::Result<()> {
    if !check {
        print!("{}", config.to_redacted_toml()?);
        return Ok(());
    }

    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if !result.is_valid() {
        bail!("configuration has {} error(s)", result.errors.len());
    }
    println!("ok");
    Ok(())
}
