// src/infrastructure/security/token.rs
//
// Verifies the HMAC-signed principal tokens minted by the identity service.
// Token layout: base64url(claims JSON) "." base64url(HMAC-SHA256 tag over the
// claims bytes).
use crate::application::{
    dto::Principal,
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenVerifier, time::Clock},
};
use crate::domain::article::BusinessId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize, Deserialize)]
struct PrincipalClaims {
    sub: String,
    name: String,
    business_id: String,
    #[serde(default)]
    privileged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

#[derive(Clone)]
pub struct HmacTokenVerifier {
    key: Vec<u8>,
    clock: Arc<dyn Clock>,
}

impl HmacTokenVerifier {
    pub fn new(secret: impl Into<Vec<u8>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            key: secret.into(),
            clock,
        }
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid HMAC key: {err}")))
    }

    /// Mints a token for the given principal. Used operationally to provision
    /// service credentials and by the verifier tests.
    pub fn issue(&self, principal: &Principal, ttl_secs: Option<i64>) -> ApplicationResult<String> {
        let claims = PrincipalClaims {
            sub: principal.actor_id.clone(),
            name: principal.actor_name.clone(),
            business_id: principal.business_id.as_str().to_owned(),
            privileged: principal.privileged,
            exp: ttl_secs.map(|ttl| self.clock.now().timestamp() + ttl),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        let tag = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(tag)
        ))
    }
}

#[async_trait]
impl TokenVerifier for HmacTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<Principal> {
        let (payload_b64, tag_b64) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&tag)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let claims: PrincipalClaims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token claims"))?;

        if let Some(exp) = claims.exp {
            if exp < self.clock.now().timestamp() {
                return Err(ApplicationError::unauthorized("token expired"));
            }
        }

        let business_id = BusinessId::new(claims.business_id)
            .map_err(|_| ApplicationError::unauthorized("token carries no tenant"))?;

        Ok(Principal {
            actor_id: claims.sub,
            actor_name: claims.name,
            business_id,
            privileged: claims.privileged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::time::SystemClock;

    fn verifier() -> HmacTokenVerifier {
        HmacTokenVerifier::new(
            b"0123456789abcdef0123456789abcdef".to_vec(),
            Arc::new(SystemClock),
        )
    }

    fn principal() -> Principal {
        Principal {
            actor_id: "staff-1".into(),
            actor_name: "Staff Member".into(),
            business_id: BusinessId::new("acme").unwrap(),
            privileged: true,
        }
    }

    #[tokio::test]
    async fn verifies_its_own_tokens() {
        let verifier = verifier();
        let token = verifier.issue(&principal(), Some(3600)).unwrap();
        let verified = verifier.verify(&token).await.unwrap();
        assert_eq!(verified.actor_id, "staff-1");
        assert_eq!(verified.business_id.as_str(), "acme");
        assert!(verified.privileged);
    }

    #[tokio::test]
    async fn rejects_tampered_payload() {
        let verifier = verifier();
        let token = verifier.issue(&principal(), None).unwrap();
        let (_, tag) = token.split_once('.').unwrap();
        let forged_claims = URL_SAFE_NO_PAD.encode(
            br#"{"sub":"intruder","name":"x","business_id":"acme","privileged":true}"#,
        );
        let forged = format!("{forged_claims}.{tag}");
        assert!(verifier.verify(&forged).await.is_err());
    }

    #[tokio::test]
    async fn rejects_expired_tokens() {
        let verifier = verifier();
        let token = verifier.issue(&principal(), Some(-10)).unwrap();
        assert!(verifier.verify(&token).await.is_err());
    }

    #[tokio::test]
    async fn rejects_wrong_key() {
        let token = verifier().issue(&principal(), None).unwrap();
        let other = HmacTokenVerifier::new(
            b"ffffffffffffffffffffffffffffffff".to_vec(),
            Arc::new(SystemClock),
        );
        assert!(other.verify(&token).await.is_err());
    }
}
