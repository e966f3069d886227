//! Session identification via the `game-session` cookie.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use uuid::Uuid;

use crate::game::DEFAULT_SESSION_ID;

use super::errors::ApiError;

pub const SESSION_COOKIE: &str = "game-session";

/// The session a request plays under, plus the cookie to hand back when the
/// id was minted for this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    pub id: String,
    pub issued: bool,
}

impl PlayerSession {
    /// Use the request's cookie if present. Otherwise mint a fresh id when
    /// `issue` is set, or fall back to the shared default session.
    pub fn resolve(headers: &HeaderMap, issue: bool) -> Self {
        if let Some(id) = cookie_value(headers, SESSION_COOKIE) {
            return Self { id, issued: false };
        }
        if issue {
            Self {
                id: Uuid::new_v4().to_string(),
                issued: true,
            }
        } else {
            Self {
                id: DEFAULT_SESSION_ID.to_string(),
                issued: false,
            }
        }
    }

    /// Attach `Set-Cookie` to `response` if this session was just issued.
    pub fn attach(&self, mut response: Response) -> Result<Response, ApiError> {
        if self.issued {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            let value = HeaderValue::from_str(&cookie)
                .map_err(|e| ApiError::InternalError(format!("bad session cookie: {e}")))?;
            response.headers_mut().append(SET_COOKIE, value);
        }
        Ok(response)
    }
}

/// First non-empty value of cookie `name` across all `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, v)| *k == name && !v.trim().is_empty())
        .map(|(_, v)| v.trim().to_string())
}
