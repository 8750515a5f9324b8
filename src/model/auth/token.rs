use chrono::{serde::ts_seconds, DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation};
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request, State,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

use super::Role;

/// Header carrying the token on API requests.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// An API authentication token representing a specific user with specific rights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    #[serde(rename = "sub")]
    pub email: String,
    pub name: String,
    #[serde(rename = "rgt")]
    pub role: Role,
}

impl AuthToken {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    /// Sign this token, valid for `auth_ttl`.
    pub fn encode(self, config: &Config) -> Result<String> {
        let claims = Claims {
            token: self,
            expire_at: Utc::now() + config.auth_ttl(),
        };
        Ok(jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret()),
        )?)
    }

    /// Verify and decode a signed token.
    pub fn decode(token: &str, config: &Config) -> Result<Self> {
        let token = jsonwebtoken::decode(
            token,
            &DecodingKey::from_secret(config.jwt_secret()),
            &Validation::default(),
        )
        .map(|claims: TokenData<Claims>| claims.claims.token)?;
        Ok(token)
    }
}

/// A freshly signed token, sent back as `x-auth-token` on later requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// The user a token belongs to.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<AuthToken> for CurrentUser {
    fn from(token: AuthToken) -> Self {
        Self {
            name: token.name,
            email: token.email,
            role: token.role.to_string(),
        }
    }
}

/// Token claims: the token itself plus an expiry datetime.
#[derive(Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    token: AuthToken,
    #[serde(rename = "exp", with = "ts_seconds")]
    expire_at: DateTime<Utc>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthToken {
    type Error = Error;

    /// Get an [`AuthToken`] from the `x-auth-token` header.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        // Unwrap is safe as `Config` is always managed.
        let config = req.guard::<&State<Config>>().await.unwrap();

        let Some(header) = req.headers().get_one(AUTH_TOKEN_HEADER) else {
            return Outcome::Failure((
                Status::Unauthorized,
                Error::unauthorized("Missing authentication token"),
            ));
        };

        match Self::decode(header, config) {
            Ok(token) => Outcome::Success(token),
            // Any token we cannot verify is as good as no token.
            Err(err) => Outcome::Failure((Status::Unauthorized, err)),
        }
    }
}
