use crate::domain::model::VersionTarget;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Version patch targets loaded from TOML:
///
/// ```toml
/// [[targets]]
/// path = "release_building/installer.nsi"
/// prefix = "!define VERSION "
/// style = "quoted"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsFile {
    pub targets: Vec<VersionTarget>,
}

impl TargetsFile {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let file: Self =
            toml::from_str(&processed_content).map_err(|e| ToolError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        file.validate()?;
        Ok(file)
    }

    /// 替換環境變數 (例如 ${RELEASE_DIR})
    fn substitute_env_vars(content: &str) -> String {
        static ENV_RE: OnceLock<Regex> = OnceLock::new();
        let re = ENV_RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for TargetsFile {
    fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(ToolError::ConfigValidationError {
                field: "targets".to_string(),
                message: "at least one [[targets]] entry is required".to_string(),
            });
        }

        for (i, target) in self.targets.iter().enumerate() {
            validate_path(&format!("targets[{}].path", i), &target.path)?;
            validate_non_empty_string(&format!("targets[{}].prefix", i), &target.prefix)?;
            if target.prefix.contains('\n') {
                return Err(ToolError::InvalidConfigValueError {
                    field: format!("targets[{}].prefix", i),
                    value: target.prefix.clone(),
                    reason: "Prefix must be a single line".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ValueStyle;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_targets() {
        let toml_content = r#"
[[targets]]
path = "release_building/installer.nsi"
prefix = "!define VERSION "
style = "quoted"

[[targets]]
path = "release_building/win.bat"
prefix = 'set "_VERSION_='
style = "bare"
terminator = '"'
"#;

        let file = TargetsFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.targets.len(), 2);
        assert_eq!(file.targets[0].style, ValueStyle::Quoted);
        assert_eq!(file.targets[0].terminator, None);
        assert_eq!(file.targets[1].prefix, "set \"_VERSION_=");
        assert_eq!(file.targets[1].terminator.as_deref(), Some("\""));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RTOS_TOOLS_TEST_HEADER", "source/main.h");

        let toml_content = r##"
[[targets]]
path = "${RTOS_TOOLS_TEST_HEADER}"
prefix = "#define VERSION         "
style = "quoted"
"##;

        let file = TargetsFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.targets[0].path, "source/main.h");

        std::env::remove_var("RTOS_TOOLS_TEST_HEADER");
    }

    #[test]
    fn test_rejects_empty_and_unknown_style() {
        assert!(TargetsFile::from_toml_str("targets = []").is_err());

        let toml_content = r#"
[[targets]]
path = "a.nsi"
prefix = "!define VERSION "
style = "single"
"#;
        assert!(matches!(
            TargetsFile::from_toml_str(toml_content),
            Err(ToolError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_targets_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[targets]]\npath = \"x.bat\"\nprefix = \"set V=\"\nstyle = \"bare\"\n")
            .unwrap();

        let file = TargetsFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.targets[0].path, "x.bat");
    }
}
