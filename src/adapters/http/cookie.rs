//! Session cookie handling.
//!
//! The session rides in one HttpOnly cookie. Header values are built by
//! hand so the attributes stay exactly as sent, and extraction tolerates
//! whatever else the browser packed into the `Cookie` header.

use axum::http::{header, HeaderMap};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Builds and reads `session` cookie headers.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    secure: bool,
    max_age_secs: u64,
}

impl SessionCookie {
    /// Creates the cookie policy. `secure` marks the cookie HTTPS-only
    /// and is expected to be on in production.
    pub fn new(secure: bool, max_age_secs: u64) -> Self {
        Self {
            secure,
            max_age_secs,
        }
    }

    /// `Set-Cookie` value installing a session token.
    pub fn issue(&self, token: &str) -> String {
        let mut value = format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.max_age_secs
        );
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }

    /// `Set-Cookie` value instructing the client to drop its session.
    pub fn removal(&self) -> String {
        let mut value = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }

    /// Reads the session token out of a request's `Cookie` header.
    pub fn extract(headers: &HeaderMap) -> Option<String> {
        let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
        cookie_header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
    }
}
