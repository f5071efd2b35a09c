//! Service-account secret resolution.
//!
//! `GOOGLE_APPLICATION_CREDENTIALS` carries either the service-account key
//! JSON inline or a path to a JSON file on disk. Resolution happens once at
//! startup; the returned string is handed straight to the vision crate and
//! never logged.

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Resolve the raw credentials value into the key JSON itself.
///
/// A value whose first non-whitespace character is `{` is treated as inline
/// JSON; anything else is treated as a filesystem path.
pub fn resolve_credentials_json(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("GOOGLE_APPLICATION_CREDENTIALS is set but empty");
    }

    if trimmed.starts_with('{') {
        debug!("using inline service-account credentials");
        return Ok(trimmed.to_string());
    }

    debug!(path = %trimmed, "reading service-account credentials from file");
    let contents = std::fs::read_to_string(trimmed)
        .with_context(|| format!("failed to read credentials file: {trimmed}"))?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_json_passes_through() {
        let raw = r#"{"type": "service_account"}"#;
        assert_eq!(resolve_credentials_json(raw).unwrap(), raw);
    }

    #[test]
    fn leading_whitespace_is_tolerated() {
        let raw = "  {\"type\": \"service_account\"}\n";
        assert_eq!(
            resolve_credentials_json(raw).unwrap(),
            r#"{"type": "service_account"}"#
        );
    }

    #[test]
    fn empty_value_is_an_error() {
        assert!(resolve_credentials_json("   ").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = resolve_credentials_json("/nonexistent/key.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/key.json"));
    }

    #[test]
    fn file_path_is_read() {
        let path = std::env::temp_dir().join("textlens-secrets-test-key.json");
        std::fs::write(&path, r#"{"type": "service_account"}"#).unwrap();
        let json = resolve_credentials_json(path.to_str().unwrap()).unwrap();
        assert!(json.contains("service_account"));
        let _ = std::fs::remove_file(&path);
    }
}
