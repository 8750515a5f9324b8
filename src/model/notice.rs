//! Transient notifications, shown once on the page a form submission lands on.

use rocket::{
    request::FlashMessage,
    response::{Flash, Redirect},
    serde::json::{json, serde_json},
};
use serde::{Deserialize, Serialize};

use super::validation::Invalid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A notification with a short title and a longer description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

/// What travels inside the flash cookie; the kind is carried by the cookie itself.
#[derive(Deserialize)]
struct Body {
    title: String,
    description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Attach this notice to a redirect.
    pub fn flash(self, redirect: Redirect) -> Flash<Redirect> {
        let body = json!({
            "title": self.title,
            "description": self.description,
        });
        Flash::new(redirect, self.kind.as_str(), body.to_string())
    }

    /// Recover the notice set by [`Notice::flash`] on the previous response.
    pub fn from_flash(flash: FlashMessage<'_>) -> Option<Self> {
        let (kind, message) = flash.into_inner();
        let kind = match kind.as_str() {
            "success" => NoticeKind::Success,
            "error" => NoticeKind::Error,
            _ => return None,
        };
        let notice = match serde_json::from_str::<Body>(&message) {
            Ok(body) => Self {
                kind,
                title: body.title,
                description: body.description,
            },
            // Not one of ours; show it as-is.
            Err(_) => Self {
                kind,
                title: String::new(),
                description: message,
            },
        };
        Some(notice)
    }
}

impl From<Invalid> for Notice {
    fn from(invalid: Invalid) -> Self {
        Self::error(invalid.title(), invalid.to_string())
    }
}
