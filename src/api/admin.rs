use chrono::Utc;
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
        auth::AdminSession,
        catalog::ElectionCatalog,
        election::{ElectionForm, ElectionId},
        notice::Notice,
        view::{AdminDashboard, CreateElectionView, ManageView, ResultsView},
    },
    Config,
};

use super::{pending_notice, results::results_not_found};

pub fn routes() -> Vec<Route> {
    routes![
        dashboard,
        create_election_page,
        create_election,
        manage_election,
        election_results,
    ]
}

#[get("/admin/dashboard")]
fn dashboard(
    _admin: AdminSession,
    catalog: &State<ElectionCatalog>,
    config: &State<Config>,
    flash: Option<FlashMessage<'_>>,
) -> Json<AdminDashboard> {
    Json(AdminDashboard::new(
        catalog,
        config.registered_voters(),
        pending_notice(flash),
    ))
}

#[get("/admin/create-election")]
fn create_election_page(
    _admin: AdminSession,
    flash: Option<FlashMessage<'_>>,
) -> Json<CreateElectionView> {
    Json(CreateElectionView::new(
        Utc::now().date_naive(),
        pending_notice(flash),
    ))
}

#[post("/admin/create-election", data = "<form>")]
async fn create_election(
    _admin: AdminSession,
    form: Form<ElectionForm>,
    config: &State<Config>,
) -> Flash<Redirect> {
    let draft = match form.into_inner().validate(Utc::now()) {
        Ok(draft) => draft,
        Err(invalid) => {
            warn!("Rejected election: {invalid}");
            return Notice::from(invalid).flash(Redirect::to(uri!(create_election_page)));
        }
    };

    sleep(config.submit_delay()).await;
    info!(
        "Discarded {} election {:?} with {} options, closing {}",
        draft.kind.as_str(),
        draft.title,
        draft.options.len(),
        draft.deadline
    );
    Notice::success(
        "Election created successfully",
        "Your new election has been published.",
    )
    .flash(Redirect::to(uri!(dashboard)))
}

#[get("/admin/manage-election/<id>")]
fn manage_election(
    id: ElectionId,
    _admin: AdminSession,
    catalog: &State<ElectionCatalog>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ManageView>, Flash<Redirect>> {
    let election = catalog.active_election(id).ok_or_else(|| {
        warn!("No active election with ID {id}");
        Notice::error(
            "Election not found",
            "The requested election could not be found.",
        )
        .flash(Redirect::to(uri!(dashboard)))
    })?;
    Ok(Json(ManageView::new(election, pending_notice(flash))))
}

#[get("/admin/results/<id>")]
fn election_results(
    id: ElectionId,
    _admin: AdminSession,
    catalog: &State<ElectionCatalog>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResultsView>, Flash<Redirect>> {
    let election = catalog
        .past_election(id)
        .ok_or_else(|| results_not_found(id, "/admin/dashboard"))?;
    Ok(Json(ResultsView::new(
        election,
        "/admin/dashboard",
        pending_notice(flash),
    )))
}
