use log::{info, warn};
use rocket::{
    form::Form,
    http::CookieJar,
    request::FlashMessage,
    response::{Flash, Redirect},
    serde::json::Json,
    tokio::time::sleep,
    Route, State,
};

use crate::{
    error::Result,
    model::{
        auth::{Accounts, Credentials, Registration, Role, Session},
        notice::Notice,
        view::{LoginView, RegisterView},
    },
    Config,
};

use super::pending_notice;

pub fn routes() -> Vec<Route> {
    routes![login_page, login, register_page, register, logout]
}

#[get("/login")]
fn login_page(flash: Option<FlashMessage<'_>>) -> Json<LoginView> {
    Json(LoginView::new(pending_notice(flash)))
}

#[post("/login", data = "<credentials>")]
async fn login(
    credentials: Form<Credentials>,
    cookies: &CookieJar<'_>,
    accounts: &State<Accounts>,
    config: &State<Config>,
) -> Result<Flash<Redirect>> {
    sleep(config.login_delay()).await;

    let Some(role) = accounts.authenticate(&credentials)? else {
        warn!("Failed login for {:?}", credentials.email);
        return Ok(Notice::error(
            "Login failed",
            "Invalid email or password. Please try again.",
        )
        .flash(Redirect::to(uri!(login_page))));
    };

    let session = Session::start(cookies, role);
    info!("{} logged in as {role}", credentials.email);
    let welcome = match role {
        Role::Admin => "Welcome back, Administrator.",
        Role::Voter => "Welcome back to the E-Ballot system.",
    };
    Ok(Notice::success("Login successful", welcome).flash(Redirect::to(session.dashboard())))
}

#[get("/register")]
fn register_page(flash: Option<FlashMessage<'_>>) -> Json<RegisterView> {
    Json(RegisterView::new(pending_notice(flash)))
}

#[post("/register", data = "<registration>")]
async fn register(registration: Form<Registration>, config: &State<Config>) -> Flash<Redirect> {
    if let Err(invalid) = registration.validate() {
        warn!("Rejected registration for {:?}: {invalid}", registration.email);
        return Notice::from(invalid).flash(Redirect::to(uri!(register_page)));
    }

    sleep(config.submit_delay()).await;
    info!(
        "Discarded registration of {} <{}>",
        registration.full_name(),
        registration.email
    );
    Notice::success(
        "Registration successful",
        "Your account has been created. You can now log in.",
    )
    .flash(Redirect::to(uri!(login_page)))
}

#[post("/logout")]
fn logout(cookies: &CookieJar<'_>) -> Redirect {
    Session::end(cookies);
    info!("Logged out");
    Redirect::to(uri!(login_page))
}
