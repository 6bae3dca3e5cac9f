//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("dir", &ctx.config.storage.dir);
    ctx.output.kv("resolved", &ctx.storage_dir().display().to_string());

    ctx.output.info("");
    ctx.output.info("[reviews]");
    ctx.output.kv("delay_ms", &ctx.config.reviews.delay_ms.to_string());
    ctx.output.kv("cache_ttl_secs", &ctx.config.reviews.cache_ttl_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv("currency", ctx.config.display.currency.code());

    ctx.output.info("");
    ctx.output.info("[catalog]");
    match ctx.config.catalog.path {
        Some(ref path) => ctx.output.kv("path", path),
        None => ctx.output.kv("path", "(bundled)"),
    }
    ctx.output.kv("products", &ctx.catalog.len().to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output.debug(&format!("storage will be kept in {}", ctx.cwd.join(".storefront").display()));
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
