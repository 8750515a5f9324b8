use rocket::{
    request::FlashMessage,
    response::Redirect,
    serde::json::{json, Value},
    Catcher, Request, Route,
};

use crate::model::notice::Notice;

mod admin;
mod auth;
mod public;
mod rest;
mod results;
mod voter;

/// Page routes, mounted at `/`.
pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(public::routes());
    routes.extend(auth::routes());
    routes.extend(voter::routes());
    routes.extend(admin::routes());
    routes.extend(results::routes());
    routes
}

/// JSON API routes, mounted at `/api`.
pub fn api_routes() -> Vec<Route> {
    rest::routes()
}

/// Page catchers: a missing session sends the client to the login page, a
/// missing admin role back to the voter dashboard.
pub fn catchers() -> Vec<Catcher> {
    catchers![unauthorized, forbidden, not_found]
}

/// API catchers answer with a JSON error body instead of redirecting.
pub fn api_catchers() -> Vec<Catcher> {
    catchers![api_error]
}

/// The notice left by the previous response, if any.
fn pending_notice(flash: Option<FlashMessage<'_>>) -> Option<Notice> {
    flash.and_then(Notice::from_flash)
}

#[catch(401)]
fn unauthorized() -> Redirect {
    Redirect::to("/login")
}

#[catch(403)]
fn forbidden() -> Redirect {
    Redirect::to("/dashboard")
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> Value {
    json!({ "error": format!("No page at {}", req.uri()) })
}

#[catch(default)]
fn api_error(status: rocket::http::Status, req: &Request<'_>) -> Value {
    json!({
        "status": status.code,
        "error": status.reason().unwrap_or("Unknown error"),
        "path": req.uri().to_string(),
    })
}
