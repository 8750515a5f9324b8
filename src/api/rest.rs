use log::{info, warn};
use rocket::{http::Status, serde::json::Json, Route, State};

use crate::{
    error::{Error, Result},
    model::auth::{Accounts, AuthToken, Credentials, CurrentUser, NewUser, Role, TokenResponse},
    Config,
};

pub fn routes() -> Vec<Route> {
    routes![login, register, current_user]
}

#[post("/auth/login", data = "<credentials>", format = "json")]
async fn login(
    credentials: Json<Credentials>,
    accounts: &State<Accounts>,
    config: &State<Config>,
) -> Result<Json<TokenResponse>> {
    let role = accounts.authenticate(&credentials)?.ok_or_else(|| {
        Error::unauthorized(format!("Invalid credentials for {:?}", credentials.email))
    })?;

    let name = match role {
        Role::Admin => "Administrator",
        Role::Voter => "Voter",
    };
    let token = AuthToken::new(&credentials.email, name, role).encode(config)?;
    info!("Issued API token to {}", credentials.email);
    Ok(Json(TokenResponse { token }))
}

#[post("/users/register", data = "<user>", format = "json")]
async fn register(user: Json<NewUser>, config: &State<Config>) -> Result<Json<TokenResponse>> {
    if !user.is_complete() {
        warn!("Rejected API registration for {:?}", user.email);
        return Err(Error::Status(
            Status::BadRequest,
            "Name, email and password are required".to_string(),
        ));
    }

    let NewUser { name, email, .. } = user.into_inner();
    info!("Discarded API registration of {name} <{email}>");
    let token = AuthToken::new(email, name, Role::Voter).encode(config)?;
    Ok(Json(TokenResponse { token }))
}

#[get("/auth")]
fn current_user(token: AuthToken) -> Json<CurrentUser> {
    Json(token.into())
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Header},
        local::asynchronous::Client,
        serde::json::{json, Value},
    };

    use crate::model::auth::AUTH_TOKEN_HEADER;

    use super::*;

    async fn token_for(client: &Client, credentials: &Credentials) -> Option<String> {
        let response = client
            .post("/api/auth/login")
            .header(ContentType::JSON)
            .body(json!(credentials).to_string())
            .dispatch()
            .await;
        if response.status() != Status::Ok {
            return None;
        }
        response
            .into_json::<TokenResponse>()
            .await
            .map(|body| body.token)
    }

    #[backend_test]
    async fn login_issues_tokens(client: Client) {
        let token = token_for(&client, &Credentials::admin()).await.unwrap();

        let response = client
            .get("/api/auth")
            .header(Header::new(AUTH_TOKEN_HEADER, token))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!(
            CurrentUser {
                name: "Administrator".to_string(),
                email: "admin@example.com".to_string(),
                role: "admin".to_string(),
            },
            response.into_json::<CurrentUser>().await.unwrap()
        );
    }

    #[backend_test]
    async fn login_rejects_unknown_credentials(client: Client) {
        assert_eq!(None, token_for(&client, &Credentials::empty()).await);

        let response = client
            .post("/api/auth/login")
            .header(ContentType::JSON)
            .body(json!(Credentials::empty()).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Unauthorized, response.status());
        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(401, body["status"]);
    }

    #[backend_test]
    async fn register_issues_voter_token(client: Client) {
        let response = client
            .post("/api/users/register")
            .header(ContentType::JSON)
            .body(json!(NewUser::example()).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        let token = response.into_json::<TokenResponse>().await.unwrap().token;

        let user = client
            .get("/api/auth")
            .header(Header::new(AUTH_TOKEN_HEADER, token))
            .dispatch()
            .await
            .into_json::<CurrentUser>()
            .await
            .unwrap();
        assert_eq!("Ada Lovelace", user.name);
        assert_eq!("voter", user.role);
    }

    #[backend_test]
    async fn register_requires_every_field(client: Client) {
        let incomplete = NewUser {
            name: String::new(),
            ..NewUser::example()
        };
        let response = client
            .post("/api/users/register")
            .header(ContentType::JSON)
            .body(json!(incomplete).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::BadRequest, response.status());
    }

    #[backend_test]
    async fn current_user_requires_token(client: Client) {
        let response = client.get("/api/auth").dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());

        let response = client
            .get("/api/auth")
            .header(Header::new(AUTH_TOKEN_HEADER, "not.a.token"))
            .dispatch()
            .await;
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[backend_test(voter)]
    async fn session_cookies_are_not_tokens(client: Client) {
        let response = client.get("/api/auth").dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());
    }
}
