use rocket::{serde::json::Json, Route};

use crate::model::view::LandingView;

pub fn routes() -> Vec<Route> {
    routes![landing]
}

#[get("/")]
fn landing() -> Json<LandingView> {
    Json(LandingView::default())
}

#[cfg(test)]
mod tests {
    use rocket::{http::Status, local::asynchronous::Client, serde::json::Value};

    use super::*;

    #[backend_test]
    async fn landing_is_public(client: Client) {
        let response = client.get(uri!(landing)).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let view = response.into_json::<Value>().await.unwrap();
        assert_eq!("Secure Digital Voting for Organizations", view["headline"]);
        assert_eq!(3, view["features"].as_array().unwrap().len());
        let links = view["links"].as_array().unwrap();
        assert_eq!("/login", links[0]["href"]);
        assert_eq!("/register", links[1]["href"]);
    }

    #[backend_test]
    async fn unknown_pages_are_not_found(client: Client) {
        let response = client.get("/nowhere").dispatch().await;
        assert_eq!(Status::NotFound, response.status());
    }
}
