use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Claims;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

/// Issue a short-lived bearer token for a driver. Token issuance lives in
/// the platform's user service in production; this is used operationally
/// and by tests.
pub fn generate_driver_token(driver_id: u64, username: String, secret: &str, ttl: usize) -> String {
    let claims = Claims {
        driver_id,
        sub: username,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let token = generate_driver_token(1001, "rider.jay".to_string(), "secret", 900);
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.driver_id, 1001);
        assert_eq!(claims.sub, "rider.jay");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_driver_token(1001, "rider.jay".to_string(), "secret", 900);
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn each_token_gets_a_fresh_jti() {
        let a = generate_driver_token(1, "a".to_string(), "secret", 900);
        let b = generate_driver_token(1, "a".to_string(), "secret", 900);
        let ja = verify_token(&a, "secret").unwrap().jti;
        let jb = verify_token(&b, "secret").unwrap().jti;
        assert_ne!(ja, jb);
    }
}
