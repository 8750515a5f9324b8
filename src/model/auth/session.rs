use rocket::{
    http::{Cookie, CookieJar, SameSite, Status},
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request,
};

use crate::error::Error;

use super::Role;

/// Set to `"true"` while a user is logged in.
pub const IS_AUTHENTICATED_COOKIE: &str = "isAuthenticated";
/// The logged-in user's [`Role`].
pub const USER_ROLE_COOKIE: &str = "userRole";

/// The pair of session flags gating every page except login and registration.
///
/// The flags are session markers, not credentials: they are written once at
/// login and removed at logout. They are kept in private cookies so a client
/// cannot forge them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
}

impl Session {
    /// Mark the client as logged in with the given role.
    pub fn start(cookies: &CookieJar<'_>, role: Role) -> Self {
        cookies.add_private(flag(IS_AUTHENTICATED_COOKIE, "true"));
        cookies.add_private(flag(USER_ROLE_COOKIE, role.as_str()));
        Self { role: Some(role) }
    }

    /// Clear both flags. Harmless if the client was not logged in.
    pub fn end(cookies: &CookieJar<'_>) {
        cookies.remove_private(Cookie::named(IS_AUTHENTICATED_COOKIE));
        cookies.remove_private(Cookie::named(USER_ROLE_COOKIE));
    }

    /// Read the flags, returning `None` unless `isAuthenticated` is exactly `"true"`.
    pub fn from_cookies(cookies: &CookieJar<'_>) -> Option<Self> {
        let authenticated = cookies
            .get_private(IS_AUTHENTICATED_COOKIE)
            .filter(|cookie| cookie.value() == "true")
            .is_some();
        if !authenticated {
            return None;
        }

        let role = cookies
            .get_private(USER_ROLE_COOKIE)
            .and_then(|cookie| cookie.value().parse::<Role>().ok());
        Some(Self { role })
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// The dashboard this user is sent back to.
    pub fn dashboard(&self) -> &'static str {
        if self.is_admin() {
            "/admin/dashboard"
        } else {
            "/dashboard"
        }
    }
}

fn flag(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build(name, value)
        .same_site(SameSite::Strict)
        .http_only(true)
        .finish()
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    /// Fails with 401 when the client is not logged in.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match Session::from_cookies(req.cookies()) {
            Some(session) => Outcome::Success(session),
            None => Outcome::Failure((
                Status::Unauthorized,
                Error::unauthorized("Not logged in"),
            )),
        }
    }
}

/// A [`Session`] whose role is admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession(pub Session);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminSession {
    type Error = Error;

    /// Fails with 401 when not logged in, and with 403 when logged in as anyone but an admin.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let session = try_outcome!(req.guard::<Session>().await);
        if session.is_admin() {
            Outcome::Success(AdminSession(session))
        } else {
            Outcome::Failure((
                Status::Forbidden,
                Error::Status(Status::Forbidden, "Admin rights required".to_string()),
            ))
        }
    }
}
