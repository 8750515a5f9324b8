use log::{info, warn};
use rocket::{
    form::Form,
    request::FlashMessage,
    response::{Flash, Redirect},
    serde::json::Json,
    tokio::time::sleep,
    Route, State,
};

use crate::{
    model::{
        auth::Session,
        catalog::ElectionCatalog,
        election::{ElectionId, Selection, VoteForm},
        notice::Notice,
        view::{BallotView, VoterDashboard},
    },
    Config,
};

use super::pending_notice;

pub fn routes() -> Vec<Route> {
    routes![dashboard, ballot, vote]
}

#[get("/dashboard")]
fn dashboard(
    _session: Session,
    catalog: &State<ElectionCatalog>,
    flash: Option<FlashMessage<'_>>,
) -> Json<VoterDashboard> {
    Json(VoterDashboard::new(catalog, pending_notice(flash)))
}

fn election_not_found(id: ElectionId) -> Flash<Redirect> {
    warn!("No active election with ID {id}");
    Notice::error(
        "Election not found",
        "The requested election could not be found.",
    )
    .flash(Redirect::to(uri!(dashboard)))
}

#[get("/vote/<id>")]
fn ballot(
    id: ElectionId,
    _session: Session,
    catalog: &State<ElectionCatalog>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<BallotView>, Flash<Redirect>> {
    let election = catalog
        .active_election(id)
        .ok_or_else(|| election_not_found(id))?;
    Ok(Json(BallotView::new(election, pending_notice(flash))))
}

#[post("/vote/<id>", data = "<form>")]
async fn vote(
    id: ElectionId,
    _session: Session,
    form: Form<VoteForm>,
    catalog: &State<ElectionCatalog>,
    config: &State<Config>,
) -> Flash<Redirect> {
    let Some(election) = catalog.active_election(id) else {
        return election_not_found(id);
    };

    let selection = Selection::new(election.kind, &election.options);
    let chosen = match form.into_inner().fill(selection).and_then(Selection::submit) {
        Ok(chosen) => chosen,
        Err(invalid) => {
            warn!("Rejected ballot for election {id}: {invalid}");
            return Notice::from(invalid).flash(Redirect::to(uri!(ballot(id))));
        }
    };

    sleep(config.submit_delay()).await;
    info!("Discarded ballot for election {id} choosing {chosen:?}");
    Notice::success(
        "Vote submitted successfully",
        "Thank you for participating in this election.",
    )
    .flash(Redirect::to(uri!(dashboard)))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::Value,
    };

    use super::*;

    async fn notice_on(client: &Client, path: &str) -> Value {
        let response = client.get(path.to_string()).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        response.into_json::<Value>().await.unwrap()["notice"].clone()
    }

    async fn submit(client: &Client, id: ElectionId, body: &str) -> Option<String> {
        let response = client
            .post(uri!(vote(id)))
            .header(ContentType::Form)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(Status::SeeOther, response.status());
        response.headers().get_one("Location").map(str::to_string)
    }

    #[backend_test(voter)]
    async fn voter_dashboard(client: Client) {
        let response = client.get(uri!(dashboard)).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let view = response.into_json::<Value>().await.unwrap();
        let active = view["active"].as_array().unwrap();
        assert_eq!(2, active.len());
        assert_eq!("June 10, 2025 at 11:59 PM", active[0]["deadline"]);
        assert_eq!("/vote/1", active[0]["vote_url"]);
        assert_eq!(true, active[1]["has_voted"]);
        assert!(active[1]["vote_url"].is_null());

        let past = view["past"].as_array().unwrap();
        assert_eq!("April 2, 2025", past[0]["completed"]);
        assert_eq!(68, past[0]["participation"]);
        assert_eq!("/results/101", past[0]["results_url"]);
    }

    #[backend_test(voter)]
    async fn ballot_view(client: Client) {
        let response = client.get(uri!(ballot(1))).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let view = response.into_json::<Value>().await.unwrap();
        assert_eq!("multiple", view["type"]);
        assert_eq!(3, view["max_selections"]);
        assert_eq!("Select up to 3 options", view["instructions"]);
        assert_eq!(5, view["options"].as_array().unwrap().len());

        let view = client
            .get(uri!(ballot(2)))
            .dispatch()
            .await
            .into_json::<Value>()
            .await
            .unwrap();
        assert_eq!("Select one option", view["instructions"]);
    }

    #[backend_test(voter)]
    async fn unknown_ballot(client: Client) {
        let response = client.get(uri!(ballot(101))).dispatch().await;

        assert_eq!(Status::SeeOther, response.status());
        assert_eq!(Some("/dashboard"), response.headers().get_one("Location"));
        assert_eq!("Election not found", notice_on(&client, "/dashboard").await["title"]);
    }

    #[backend_test(voter)]
    async fn vote_multiple(client: Client) {
        let location = submit(&client, 1, "choices=1&choices=3&choices=5").await;

        assert_eq!(Some("/dashboard".to_string()), location);
        let notice = notice_on(&client, "/dashboard").await;
        assert_eq!("success", notice["kind"]);
        assert_eq!("Vote submitted successfully", notice["title"]);
    }

    #[backend_test(voter)]
    async fn vote_over_maximum(client: Client) {
        let location = submit(&client, 1, "choices=1&choices=2&choices=3&choices=4").await;

        assert_eq!(Some("/vote/1".to_string()), location);
        let notice = notice_on(&client, "/vote/1").await;
        assert_eq!("Maximum selections reached", notice["title"]);
        assert_eq!("You can only select up to 3 options.", notice["description"]);
    }

    #[backend_test(voter)]
    async fn vote_without_selection(client: Client) {
        let location = submit(&client, 1, "").await;
        assert_eq!(Some("/vote/1".to_string()), location);
        let notice = notice_on(&client, "/vote/1").await;
        assert_eq!("No selection made", notice["title"]);
        assert_eq!("Please select at least one option to vote.", notice["description"]);

        let location = submit(&client, 2, "").await;
        assert_eq!(Some("/vote/2".to_string()), location);
        assert_eq!(
            "Please select an option to vote.",
            notice_on(&client, "/vote/2").await["description"]
        );
    }

    #[backend_test(voter)]
    async fn vote_single(client: Client) {
        let location = submit(&client, 2, "choice=1").await;
        assert_eq!(Some("/dashboard".to_string()), location);

        let location = submit(&client, 2, "choice=7").await;
        assert_eq!(Some("/vote/2".to_string()), location);
        assert_eq!("Unknown option", notice_on(&client, "/vote/2").await["title"]);

        for body in ["choices=1&choices=2", "choice=1&choices=2"] {
            let location = submit(&client, 2, body).await;
            assert_eq!(Some("/vote/2".to_string()), location);
            let notice = notice_on(&client, "/vote/2").await;
            assert_eq!("Maximum selections reached", notice["title"]);
            assert_eq!("You can only select one option.", notice["description"]);
        }
    }

    #[backend_test]
    async fn voting_requires_login(client: Client) {
        for path in ["/dashboard", "/vote/1"] {
            let response = client.get(path).dispatch().await;
            assert_eq!(Status::SeeOther, response.status());
            assert_eq!(Some("/login"), response.headers().get_one("Location"));
        }

        let response = client
            .post(uri!(vote(1)))
            .header(ContentType::Form)
            .body("choices=1")
            .dispatch()
            .await;
        assert_eq!(Some("/login"), response.headers().get_one("Location"));
    }
}
