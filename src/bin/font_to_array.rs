use anyhow::Context;
use clap::Parser;
use rtos_tools::core::font::render;
use rtos_tools::utils::{logger, validation::Validate};
use rtos_tools::{FontConfig, FontConverter, FreeTypeRasterizer};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = FontConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let rasterizer = FreeTypeRasterizer::open(&config.font, config.pixel_size)
        .with_context(|| format!("failed to load font '{}'", config.font))?;
    let table = FontConverter::new(rasterizer).convert();
    let text = render(&table, config.output_format()?, &config.array_names())?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("failed to write {}", path))?;
            tracing::info!("📁 Glyph table written to: {}", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
