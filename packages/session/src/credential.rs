//! Read-only view of the bearer credential issued by the backend.
//!
//! The credential is a JWT: base64url JSON segments joined by `.`. Only the
//! middle (claims) segment is decoded, and the signature is never checked.
//! The backend verifies it on every protected call; the client reads `exp`
//! only to decide whether a call is worth making.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::CredentialError;

/// Claims the client cares about. Unknown claims are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<f64>,
    /// Issued-at, seconds since the epoch.
    #[serde(default)]
    pub iat: Option<f64>,
    /// Subject user id.
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    claims: Claims,
    expires_at: DateTime<Utc>,
}

impl Credential {
    /// Decode the claims segment of `token`.
    ///
    /// A token without an `exp` claim is rejected the same way as one that
    /// cannot be decoded at all.
    pub fn decode(token: &str) -> Result<Self, CredentialError> {
        if token.is_empty() {
            return Err(CredentialError::Empty);
        }

        let payload = token
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or(CredentialError::MissingPayload)?;

        let bytes = decode_segment(payload)?;
        let claims: Claims = serde_json::from_slice(&bytes)?;
        let exp = claims.exp.ok_or(CredentialError::MissingExpiry)?;
        let expires_at = timestamp(exp).ok_or(CredentialError::InvalidExpiry(exp))?;

        Ok(Self { claims, expires_at })
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Expired once `now` reaches the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Accept both base64url (JWT) and standard-alphabet segments, padded or not.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized)
}

fn timestamp(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).floor();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Build an unsigned token carrying `claims`, for tests and local fixtures.
pub fn encode_unsigned(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn test_decode_reads_expiry() {
        let token = encode_unsigned(&json!({ "id": "u1", "iat": 1_700_000_000, "exp": 1_700_003_600 }));
        let credential = Credential::decode(&token).unwrap();

        assert_eq!(credential.expires_at().timestamp(), 1_700_003_600);
        assert_eq!(credential.claims().id.as_deref(), Some("u1"));
        assert_eq!(credential.claims().iat, Some(1_700_000_000.0));
    }

    #[test]
    fn test_expiry_boundary_is_expired() {
        let token = encode_unsigned(&json!({ "exp": 1_700_000_000 }));
        let credential = Credential::decode(&token).unwrap();
        let at = credential.expires_at();

        assert!(!credential.is_expired_at(at - Duration::milliseconds(1)));
        assert!(credential.is_expired_at(at));
        assert!(credential.is_expired_at(at + Duration::seconds(10)));
    }

    #[test]
    fn test_fractional_expiry() {
        let token = encode_unsigned(&json!({ "exp": 1_700_000_000.5 }));
        let credential = Credential::decode(&token).unwrap();
        assert_eq!(credential.expires_at().timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn test_standard_alphabet_and_padding_accepted() {
        // Encodes to "...I/Pz4+In0=": '/', '+' and one '=' of padding.
        let payload = base64::engine::general_purpose::STANDARD
            .encode(br#"{"exp":1700000000,"n":"??>>"}"#);
        assert!(payload.contains('/') && payload.contains('+') && payload.ends_with('='));
        let token = format!("h.{payload}.s");
        assert!(Credential::decode(&token).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Credential::decode(""), Err(CredentialError::Empty)));
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert!(matches!(
            Credential::decode("not-a-valid-token"),
            Err(CredentialError::MissingPayload)
        ));
        assert!(matches!(
            Credential::decode("header..sig"),
            Err(CredentialError::MissingPayload)
        ));
    }

    #[test]
    fn test_rejects_non_base64() {
        assert!(matches!(
            Credential::decode("a.!!!not base64!!!.c"),
            Err(CredentialError::Encoding(_))
        ));
    }

    #[test]
    fn test_rejects_non_json_payload() {
        let payload = URL_SAFE_NO_PAD.encode("definitely not json");
        assert!(matches!(
            Credential::decode(&format!("a.{payload}.c")),
            Err(CredentialError::Claims(_))
        ));
    }

    #[test]
    fn test_rejects_missing_exp() {
        let token = encode_unsigned(&json!({ "id": "u1" }));
        assert!(matches!(
            Credential::decode(&token),
            Err(CredentialError::MissingExpiry)
        ));
    }

    #[test]
    fn test_rejects_non_numeric_exp() {
        let token = encode_unsigned(&json!({ "exp": "tomorrow" }));
        assert!(matches!(
            Credential::decode(&token),
            Err(CredentialError::Claims(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_exp() {
        let token = encode_unsigned(&json!({ "exp": 1e300 }));
        assert!(matches!(
            Credential::decode(&token),
            Err(CredentialError::InvalidExpiry(_))
        ));
    }
}
