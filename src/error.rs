//! Error types for the teamdir CLI

use thiserror::Error;

/// Result type alias for teamdir operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised while fetching and decoding the team directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Directory returned {status}")]
    Upstream { status: reqwest::StatusCode },

    #[error("Invalid directory response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DirectoryError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            DirectoryError::Transport("Failed to connect to directory".to_string())
        } else {
            DirectoryError::Transport(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `teamdir init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Directory endpoint not configured. Set TEAMDIR_ENDPOINT or run `teamdir init` to set up."
    )]
    MissingEndpoint,

    #[error("Invalid directory endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Unknown team attribute '{0}'")]
    UnknownField(String),

    #[error("Required attribute '{0}' is not part of the selected field set")]
    RequiredFieldExcluded(String),

    #[error("Unknown API version '{0}' (expected v0 or v1)")]
    UnknownApiVersion(String),

    #[error("Unknown output format '{0}' (expected table or json)")]
    UnknownFormat(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Violations of the declared output schema found while mapping teams
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Team '{team_id}' is missing required attribute '{field}'")]
    MissingAttribute { team_id: String, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_transport_message() {
        let err = DirectoryError::Transport("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_directory_error_upstream_includes_status() {
        let err = DirectoryError::Upstream {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_directory_error_decode_message() {
        let err = DirectoryError::Decode("expected a sequence".to_string());
        assert!(err.to_string().contains("expected a sequence"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("teamdir init"));
    }

    #[test]
    fn test_config_error_missing_endpoint() {
        let err = ConfigError::MissingEndpoint;
        let msg = err.to_string();
        assert!(msg.contains("TEAMDIR_ENDPOINT"));
        assert!(msg.contains("teamdir init"));
    }

    #[test]
    fn test_config_error_invalid_endpoint() {
        let err = ConfigError::InvalidEndpoint {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL"));
    }

    #[test]
    fn test_config_error_unknown_field() {
        let err = ConfigError::UnknownField("colour".to_string());
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_config_error_required_field_excluded() {
        let err = ConfigError::RequiredFieldExcluded("domain".to_string());
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_schema_error_names_team_and_field() {
        let err = SchemaError::MissingAttribute {
            team_id: "t1".to_string(),
            field: "cloud_org",
        };
        let msg = err.to_string();
        assert!(msg.contains("t1"));
        assert!(msg.contains("cloud_org"));
    }

    #[test]
    fn test_error_from_directory_error() {
        let dir_err = DirectoryError::Transport("boom".to_string());
        let err: Error = dir_err.into();

        match err {
            Error::Directory(DirectoryError::Transport(_)) => (),
            _ => panic!("Expected Error::Directory(DirectoryError::Transport)"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::MissingEndpoint;
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::MissingEndpoint) => (),
            _ => panic!("Expected Error::Config(ConfigError::MissingEndpoint)"),
        }
    }

    #[test]
    fn test_error_from_schema_error() {
        let schema_err = SchemaError::MissingAttribute {
            team_id: "t9".to_string(),
            field: "name",
        };
        let err: Error = schema_err.into();

        match err {
            Error::Schema(SchemaError::MissingAttribute { .. }) => (),
            _ => panic!("Expected Error::Schema(SchemaError::MissingAttribute)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
