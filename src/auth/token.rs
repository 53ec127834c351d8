// JWT token issue and verify service

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Access tokens live for one minute; clients are expected to refresh
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60;
/// Refresh tokens live for thirty days in an http-only cookie
pub const REFRESH_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user id
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for JWT operations
///
/// Holds the signing secret handed over at construction; there is no other
/// copy of it in the process.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a claim set for `user_id` expiring `ttl_secs` from now
    pub fn issue(&self, user_id: i32, ttl_secs: i64) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Issue a short-lived access token
    pub fn issue_access_token(&self, user_id: i32) -> Result<String, AuthError> {
        self.issue(user_id, ACCESS_TOKEN_TTL_SECS)
    }

    /// Issue a long-lived refresh token
    pub fn issue_refresh_token(&self, user_id: i32) -> Result<String, AuthError> {
        self.issue(user_id, REFRESH_TOKEN_TTL_SECS)
    }

    /// Decode and check a presented token
    /// Expiry is checked with zero leeway so the one-minute access window is
    /// exact
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                ErrorKind::InvalidToken
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => AuthError::MalformedToken,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Helper to create a test token service
    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes")
    }

    // Helper to sign arbitrary claims with the test secret
    fn sign_raw(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn access_token_expiration_is_one_minute() {
        let service = test_token_service();
        let token = service.issue_access_token(1).unwrap();
        let claims = service.verify(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(duration, 60, "Access token should expire in 60 seconds");
    }

    #[test]
    fn refresh_token_expiration_is_thirty_days() {
        let service = test_token_service();
        let token = service.issue_refresh_token(1).unwrap();
        let claims = service.verify(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(
            duration, 2_592_000,
            "Refresh token should expire in 30 days (2592000 seconds)"
        );
    }

    #[test]
    fn token_claims_contain_user_identity() {
        let service = test_token_service();
        let user_id = 42;

        let access_token = service.issue_access_token(user_id).unwrap();
        assert_eq!(service.verify(&access_token).unwrap().sub, user_id);

        let refresh_token = service.issue_refresh_token(user_id).unwrap();
        assert_eq!(service.verify(&refresh_token).unwrap().sub, user_id);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let service = test_token_service();

        let claims = Claims {
            sub: 1,
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500, // expired 500 seconds ago
        };
        let token = sign_raw(&claims);

        let result = service.verify(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn malformed_tokens_are_rejected_as_malformed() {
        let service = test_token_service();

        for token in ["", "not.a.token", "invalid_token_format"] {
            let result = service.verify(token);
            assert!(
                matches!(result, Err(AuthError::MalformedToken)),
                "expected MalformedToken for {:?}",
                token
            );
        }
    }

    #[test]
    fn wrong_secret_is_rejected_as_invalid() {
        let service1 = TokenService::new("secret1");
        let service2 = TokenService::new("secret2");

        let token = service1.issue_access_token(1).unwrap();

        assert!(service1.verify(&token).is_ok());
        assert!(matches!(
            service2.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    // Property-based tests using proptest

    proptest! {
        #[test]
        fn prop_access_token_expiration(user_id in 1i32..1000000) {
            let service = test_token_service();
            let token = service.issue_access_token(user_id)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS);
        }

        #[test]
        fn prop_refresh_token_expiration(user_id in 1i32..1000000) {
            let service = test_token_service();
            let token = service.issue_refresh_token(user_id)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_TTL_SECS);
        }

        #[test]
        fn prop_token_claims_contain_identity(user_id in 1i32..1000000) {
            let service = test_token_service();

            let token = service.issue_access_token(user_id)?;
            let claims = service.verify(&token)?;
            prop_assert_eq!(claims.sub, user_id);
        }

        #[test]
        fn prop_random_strings_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();

            let result = service.verify(&malformed);
            prop_assert!(result.is_err());
        }
    }
}
