use crate::config::toml_config::TargetsFile;
use crate::core::version::default_targets;
use crate::domain::model::VersionTarget;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_required_field, validate_version_string,
    Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "update-version")]
#[command(about = "Rewrite the release version in the installer and build scripts")]
pub struct VersionConfig {
    /// New version string, e.g. 0.4.1
    pub version: Option<String>,

    /// Repository root the target paths are relative to
    #[arg(long, default_value = ".")]
    pub root: String,

    /// TOML file listing [[targets]] to patch instead of the built-in ones
    #[arg(long)]
    pub targets: Option<String>,

    /// Fail if a target file has no matching version line
    #[arg(long)]
    pub strict: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl VersionConfig {
    pub fn version(&self) -> Result<&str> {
        validate_required_field("version", &self.version).map(String::as_str)
    }

    pub fn resolve_targets(&self) -> Result<Vec<VersionTarget>> {
        match &self.targets {
            Some(path) => Ok(TargetsFile::from_file(path)?.targets),
            None => Ok(default_targets()),
        }
    }
}

impl Validate for VersionConfig {
    fn validate(&self) -> Result<()> {
        validate_version_string("version", self.version()?)?;
        validate_path("root", &self.root)?;
        if let Some(targets) = &self.targets {
            validate_path("targets", targets)?;
            validate_file_extension("targets", targets, &["toml"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ToolError;

    #[test]
    fn test_version_is_positional() {
        let config = VersionConfig::parse_from(["update-version", "1.4.0"]);
        assert_eq!(config.version().unwrap(), "1.4.0");
        assert_eq!(config.root, ".");
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve_targets().unwrap(), default_targets());
    }

    #[test]
    fn test_missing_version() {
        let config = VersionConfig::parse_from(["update-version"]);
        assert!(matches!(
            config.validate(),
            Err(ToolError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_targets_file_must_be_toml() {
        let config =
            VersionConfig::parse_from(["update-version", "1.0", "--targets", "targets.yaml"]);
        assert!(config.validate().is_err());
    }
}
