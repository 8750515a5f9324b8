use log::warn;
use rocket::{
    request::FlashMessage,
    response::{Flash, Redirect},
    serde::json::Json,
    Route, State,
};

use crate::model::{
    auth::Session,
    catalog::ElectionCatalog,
    election::ElectionId,
    notice::Notice,
    view::ResultsView,
};

use super::pending_notice;

pub fn routes() -> Vec<Route> {
    routes![election_results]
}

/// Send the user back to `dashboard` when no finished election has the given ID.
pub(super) fn results_not_found(id: ElectionId, dashboard: &'static str) -> Flash<Redirect> {
    warn!("No finished election with ID {id}");
    Notice::error(
        "Results not found",
        "The requested election results could not be found.",
    )
    .flash(Redirect::to(dashboard))
}

#[get("/results/<id>")]
fn election_results(
    id: ElectionId,
    session: Session,
    catalog: &State<ElectionCatalog>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResultsView>, Flash<Redirect>> {
    let back_url = session.dashboard();
    let election = catalog
        .past_election(id)
        .ok_or_else(|| results_not_found(id, back_url))?;
    Ok(Json(ResultsView::new(
        election,
        back_url,
        pending_notice(flash),
    )))
}
