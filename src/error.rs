use thiserror::Error;

/// Every failure is fatal to the current download; nothing is recovered locally.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// A flag or configuration value was not usable. Raised before any network IO.
    #[error("Invalid configuration for `{param}`: {message}")]
    Config { param: String, message: String },

    /// The remote source could not be reached or read.
    #[error("Retrieval from {url} failed: {message}")]
    Retrieval { url: String, message: String },

    /// A field in retrieved data did not match the expected format.
    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },

    /// A local file could not be written.
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}

impl AppError {
    pub fn config(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn retrieval(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Retrieval {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Process exit code used by the `ecdc` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } | Self::Io { .. } => 2,
            Self::Parse { .. } => 3,
            Self::Retrieval { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_parameter() {
        let err = AppError::config("cached", "expected a single boolean, got \"yes\"");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("`cached`"));
    }

    #[test]
    fn exit_codes_by_kind() {
        assert_eq!(AppError::parse("dateRep", "bad").exit_code(), 3);
        assert_eq!(AppError::retrieval("http://x", "down").exit_code(), 4);
        assert_eq!(AppError::io("out.csv", "denied").exit_code(), 2);
    }
}
