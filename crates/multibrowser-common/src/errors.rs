use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config path: {0}")]
    PathError(String),

    #[error("failed to read {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("failed to write {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },
}

/// Failure at the tab-surface seam (navigation, zoom, visibility, ...).
///
/// Surface operations are best-effort in the shell: callers log and
/// continue rather than tearing the window down.
#[derive(Debug, thiserror::Error)]
#[error("surface error: {0}")]
pub struct SurfaceError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::PathError("no home directory".into());
        assert_eq!(
            err.to_string(),
            "could not determine config path: no home directory"
        );

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ReadError {
            path: PathBuf::from("/tmp/missing.json"),
            reason: "not found".into(),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/missing.json: not found");
    }

    #[test]
    fn browser_error_from_config() {
        let config_err = ConfigError::ParseError("bad json".into());
        let err: BrowserError = config_err.into();
        assert!(matches!(err, BrowserError::Config(_)));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn browser_error_from_surface() {
        let surface_err = SurfaceError("zoom failed".into());
        let err: BrowserError = surface_err.into();
        assert!(matches!(err, BrowserError::Surface(_)));
        assert!(err.to_string().contains("zoom failed"));
    }

    #[test]
    fn browser_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BrowserError = io_err.into();
        assert!(matches!(err, BrowserError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
