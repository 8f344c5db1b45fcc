use clap::Parser;
use rtos_tools::utils::{error::ToolError, logger, validation::Validate};
use rtos_tools::{LocalStorage, PatchOutcome, VersionConfig, VersionPatcher};

fn main() {
    let config = VersionConfig::parse();

    if config.version.is_none() {
        eprintln!("Usage: update-version <version>");
        std::process::exit(1);
    }

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ update-version failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code().max(1));
    }
}

fn run(config: &VersionConfig) -> rtos_tools::Result<()> {
    let version = config.version()?;
    let storage = LocalStorage::new(&config.root);
    tracing::debug!("Repository root: {}", storage.base_path().display());

    let patcher = VersionPatcher::new(storage, config.resolve_targets()?);
    tracing::info!("🔧 Patching {} target file(s) to {}", patcher.targets().len(), version);

    let report = patcher.apply(version)?;

    if config.strict {
        if let Some((target, _)) = report
            .iter()
            .find(|(_, outcome)| *outcome == PatchOutcome::PrefixNotFound)
        {
            return Err(ToolError::PrefixNotFound {
                path: target.path.clone(),
                prefix: target.prefix.clone(),
            });
        }
    }

    tracing::info!("✅ Version set to {}", version);
    Ok(())
}
