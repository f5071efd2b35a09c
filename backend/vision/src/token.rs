//! OAuth2 JWT-bearer token exchange for service accounts.
//!
//! The key signs a short-lived RS256 assertion which the token endpoint
//! trades for a bearer token. Tokens are cached until shortly before expiry
//! so that one process instance performs the handshake once per hour, not
//! once per upload.

use std::time::{Duration, Instant};

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use textlens_core::LensError;

use crate::credentials::ServiceAccountKey;

const SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

// Refresh this long before the provider-reported expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

fn claims(key: &ServiceAccountKey, issued_at: i64) -> Claims {
    Claims {
        iss: key.client_email.clone(),
        scope: SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Exchanges service-account assertions for bearer tokens, with caching.
pub struct Authenticator {
    key: ServiceAccountKey,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl Authenticator {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            http: reqwest::Client::new(),
            cached: Mutex::new(None),
        }
    }

    /// Return a bearer token valid for at least [`EXPIRY_MARGIN`].
    pub async fn bearer_token(&self) -> Result<String, LensError> {
        let mut guard = self.cached.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.token.clone());
            }
        }

        let response = self.exchange().await?;
        debug!(expires_in = response.expires_in, "obtained new access token");

        let expires_at = Instant::now()
            + Duration::from_secs(response.expires_in).saturating_sub(EXPIRY_MARGIN);
        let token = response.access_token.clone();
        *guard = Some(CachedToken {
            token: response.access_token,
            expires_at,
        });
        Ok(token)
    }

    fn sign_assertion(&self) -> Result<String, LensError> {
        let header = Header {
            alg: Algorithm::RS256,
            kid: Some(self.key.private_key_id.clone()),
            ..Header::default()
        };
        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| LensError::Credential(format!("invalid private key: {e}")))?;
        jsonwebtoken::encode(&header, &claims(&self.key, Utc::now().timestamp()), &encoding_key)
            .map_err(|e| LensError::Credential(format!("failed to sign assertion: {e}")))
    }

    async fn exchange(&self) -> Result<TokenResponse, LensError> {
        let assertion = self.sign_assertion()?;
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| LensError::Credential(format!("token exchange failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LensError::Credential(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LensError::Credential(format!("malformed token response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> ServiceAccountKey {
        ServiceAccountKey::from_json(
            r#"{
                "type": "service_account",
                "project_id": "lens-test",
                "private_key_id": "abc123",
                "private_key": "pem",
                "client_email": "ocr@lens-test.iam.gserviceaccount.com"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn claims_carry_the_jwt_bearer_shape() {
        let key = sample_key();
        let c = claims(&key, 1_700_000_000);
        assert_eq!(c.iss, key.client_email);
        assert_eq!(c.aud, key.token_uri);
        assert_eq!(c.scope, SCOPE);
        assert_eq!(c.exp - c.iat, ASSERTION_LIFETIME_SECS);
    }

    #[test]
    fn token_response_parses() {
        let json = r#"{"access_token": "ya29.token", "expires_in": 3599, "token_type": "Bearer"}"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "ya29.token");
        assert_eq!(parsed.expires_in, 3599);
    }

    #[test]
    fn signing_with_a_bogus_key_is_a_credential_error() {
        let auth = Authenticator::new(sample_key());
        let err = auth.sign_assertion().unwrap_err();
        assert!(matches!(err, LensError::Credential(_)));
    }
}
