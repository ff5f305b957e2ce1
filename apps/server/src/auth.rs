//! Bearer-token authentication.
//!
//! `AuthManager` mints and verifies the signed, time-bounded tokens the
//! API uses; the middleware turns a valid `Authorization: Bearer <token>`
//! header into an `AuthUser` request extension. Verification is a pure
//! check; roles are looked up from the user store per request, never
//! carried in the credential.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use pawhaven_core::authz::Identity;

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: usize,
    exp: usize,
}

/// Verified identity attached to a request after the middleware ran.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

impl AuthUser {
    pub fn identity(&self) -> Identity {
        Identity::new(self.email.clone())
    }
}

impl AuthManager {
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        Self {
            encoding_key,
            decoding_key,
            validation,
            token_ttl,
        }
    }

    pub fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: email.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    pub fn verify_token(&self, token: &str) -> Result<AuthUser, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| AuthUser {
                email: data.claims.sub,
            })
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature
                | jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                    AuthError::Unauthorized
                }
                other => AuthError::Internal(format!("Failed to validate token: {other:?}")),
            })
    }

    pub fn expires_in(&self) -> Duration {
        self.token_ttl
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized access".to_string())
            }
            AuthError::Internal(msg) => {
                tracing::error!("auth internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

/// Middleware applied to every route: when a valid bearer token is
/// present, the verified `AuthUser` is added to request extensions. The
/// request continues either way; handlers that need an identity extract
/// `AuthUser`, which rejects with 401 when the extension is absent.
pub async fn inject_auth_user(
    State(auth): State<Arc<AuthManager>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let user = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| auth.verify_token(token).ok());

    if let Some(user) = user {
        request.extensions_mut().insert(user);
    }
    next.run(request).await
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> AuthManager {
        AuthManager::new(b"test_secret", Duration::from_secs(3600))
    }

    #[test]
    fn issued_tokens_verify_back_to_the_subject() {
        let auth = manager();
        let token = auth.issue_token("mina@example.com").unwrap();
        let user = auth.verify_token(&token).unwrap();
        assert_eq!(user.email, "mina@example.com");
    }

    #[test]
    fn garbage_tokens_are_unauthorized() {
        let auth = manager();
        assert!(matches!(
            auth.verify_token("not-a-token"),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn tokens_from_another_secret_are_unauthorized() {
        let other = AuthManager::new(b"other_secret", Duration::from_secs(3600));
        let token = other.issue_token("mina@example.com").unwrap();
        assert!(matches!(
            manager().verify_token(&token),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn expired_tokens_are_unauthorized() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize;
        let claims = Claims {
            sub: "mina@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();
        assert!(matches!(
            manager().verify_token(&token),
            Err(AuthError::Unauthorized)
        ));
    }
}
