//! One-shot notices carried to the next page in a cookie.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    /// The cookie that hands this notice to the next request.
    pub fn to_cookie(&self) -> Cookie<'static> {
        // Serializing a struct of an enum and a String cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        Cookie::build(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(json))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Reads the pending notice, if any. Undecodable cookies count as none.
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        let cookie = req.cookie(FLASH_COOKIE)?;
        let raw = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
        match serde_json::from_slice(&raw) {
            Ok(flash) => Some(flash),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed flash cookie");
                None
            }
        }
    }

    /// A cookie that clears the notice once it has been shown.
    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }
}
