use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use super::IdentityVerifier;
use genrelay_types::{IdentityError, VerifiedIdentity};

pub const DEFAULT_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Verifies ID tokens against an OAuth2 `tokeninfo`-style endpoint.
///
/// `GET {verify_url}?id_token=<token>`; a 2xx response carries the token's
/// claims. `sub` is required, `aud` must match when an audience is
/// configured, and a past `exp` is rejected.
pub struct TokenInfoVerifier {
    http_client: Client,
    verify_url: String,
    audience: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TokenClaims {
    sub: Option<String>,
    email: Option<String>,
    aud: Option<String>,
    exp: Option<Value>,
}

impl TokenInfoVerifier {
    pub fn new(http_client: Client, verify_url: impl Into<String>, audience: Option<String>) -> Self {
        Self { http_client, verify_url: verify_url.into(), audience }
    }
}

#[async_trait]
impl IdentityVerifier for TokenInfoVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, IdentityError> {
        // Errors are stripped of their URL: it carries the token as a query param.
        let response = self
            .http_client
            .get(&self.verify_url)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| IdentityError::Transport { message: e.without_url().to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Invalid {
                reason: format!("identity provider returned HTTP {}", status.as_u16()),
            });
        }

        let claims: TokenClaims = response.json().await.map_err(|e| IdentityError::Invalid {
            reason: format!("unreadable claims: {}", e.without_url()),
        })?;

        check_claims(claims, self.audience.as_deref(), unix_now())
    }
}

fn check_claims(
    claims: TokenClaims,
    audience: Option<&str>,
    now_secs: u64,
) -> Result<VerifiedIdentity, IdentityError> {
    let subject = claims
        .sub
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IdentityError::Invalid { reason: "missing subject".to_string() })?;

    if let Some(expected) = audience {
        let actual = claims.aud.unwrap_or_default();
        if actual != expected {
            return Err(IdentityError::AudienceMismatch { audience: actual });
        }
    }

    if let Some(exp) = claims.exp.as_ref() {
        let expired_at = parse_exp(exp)
            .ok_or_else(|| IdentityError::Invalid { reason: "malformed exp claim".to_string() })?;
        if expired_at <= now_secs {
            return Err(IdentityError::Expired { expired_at });
        }
    }

    Ok(VerifiedIdentity { subject, email: claims.email })
}

/// `exp` arrives as a JSON number or a decimal string depending on provider.
fn parse_exp(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}
