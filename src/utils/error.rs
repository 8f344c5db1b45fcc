use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "font")]
    #[error("FreeType error: {0}")]
    FontError(#[from] freetype::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid MAC address '{value}'")]
    InvalidMacAddress { value: String },

    #[error("Malformed frame: {message}")]
    FrameError { message: String },

    #[error("Network interface '{name}' not found")]
    InterfaceNotFound { name: String },

    #[error("Network interface '{name}': {message}")]
    InterfaceError { name: String, message: String },

    #[error("Failed to transmit frame on '{name}': {message}")]
    TransmitError { name: String, message: String },

    #[error("Glyph {code:#04x} unavailable: {message}")]
    GlyphError { code: u32, message: String },

    #[error("Prefix '{prefix}' not found in {path}")]
    PrefixNotFound { path: String, prefix: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Network,
    Font,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::IoError(_) | ToolError::SerializationError(_) => ErrorCategory::Io,
            #[cfg(feature = "font")]
            ToolError::FontError(_) => ErrorCategory::Font,
            ToolError::GlyphError { .. } => ErrorCategory::Font,
            ToolError::ConfigError { .. }
            | ToolError::ConfigValidationError { .. }
            | ToolError::MissingConfigError { .. }
            | ToolError::InvalidConfigValueError { .. }
            | ToolError::InvalidMacAddress { .. } => ErrorCategory::Configuration,
            ToolError::FrameError { .. }
            | ToolError::InterfaceNotFound { .. }
            | ToolError::InterfaceError { .. }
            | ToolError::TransmitError { .. } => ErrorCategory::Network,
            ToolError::PrefixNotFound { .. } => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ToolError::GlyphError { .. } => ErrorSeverity::Low,
            ToolError::TransmitError { .. } | ToolError::PrefixNotFound { .. } => {
                ErrorSeverity::Medium
            }
            ToolError::IoError(_) | ToolError::InterfaceError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ToolError::IoError(_) => "Check that the file exists and is readable/writable".to_string(),
            ToolError::SerializationError(_) => "Try a different --format".to_string(),
            #[cfg(feature = "font")]
            ToolError::FontError(_) => {
                "Check the --font path and that FreeType supports the font format".to_string()
            }
            ToolError::ConfigError { .. }
            | ToolError::ConfigValidationError { .. }
            | ToolError::MissingConfigError { .. }
            | ToolError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted arguments".to_string()
            }
            ToolError::InvalidMacAddress { .. } => {
                "Use six hex octets separated by ':' (e.g. 52:54:00:12:34:56)".to_string()
            }
            ToolError::FrameError { .. } => "Check the frame length and header fields".to_string(),
            ToolError::InterfaceNotFound { name } => format!(
                "Create the interface first (e.g. `ip tuntap add dev {} mode tap`) or pick another with --interface",
                name
            ),
            ToolError::InterfaceError { .. } | ToolError::TransmitError { .. } => {
                "Raw sockets need CAP_NET_RAW; try running as root".to_string()
            }
            ToolError::GlyphError { .. } => "The glyph is emitted as blank rows".to_string(),
            ToolError::PrefixNotFound { path, .. } => format!(
                "Add a version line to {} or drop --strict",
                path
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::IoError(e) => format!("File operation failed: {}", e),
            ToolError::InterfaceNotFound { name } => {
                format!("No network interface named '{}'", name)
            }
            ToolError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// 依錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
