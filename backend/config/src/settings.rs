use serde::Deserialize;

/// TextLens runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Optional directory for rolling NDJSON log files
    pub log_dir: Option<String>,
    /// Override of the Vision API base URL (tests, regional endpoints)
    pub vision_endpoint: Option<String>,
    /// Raw `GOOGLE_APPLICATION_CREDENTIALS` value: inline JSON or a file path
    pub google_application_credentials: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8501,
            log_level: "info".to_string(),
            log_dir: None,
            vision_endpoint: None,
            google_application_credentials: None,
        }
    }
}

impl Settings {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("TEXTLENS_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("TEXTLENS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8501),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string()),
            log_dir: std::env::var("TEXTLENS_LOG_DIR").ok(),
            vision_endpoint: std::env::var("TEXTLENS_VISION_ENDPOINT").ok(),
            google_application_credentials: std::env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let s = Settings::default();
        assert_eq!(s.bind_address, "0.0.0.0");
        assert_eq!(s.port, 8501);
        assert_eq!(s.log_level, "info");
        assert!(s.google_application_credentials.is_none());
    }
}
