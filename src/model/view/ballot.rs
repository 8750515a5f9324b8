use serde::Serialize;

use crate::model::{
    catalog::ActiveElection,
    election::{ElectionId, ElectionOption},
    format,
    notice::Notice,
    results::Turnout,
};

/// The voting form for one election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BallotView {
    pub notice: Option<Notice>,
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub deadline: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub max_selections: u32,
    pub instructions: String,
    pub options: Vec<ElectionOption>,
    pub submit_url: String,
    pub cancel_url: &'static str,
}

impl BallotView {
    pub fn new(election: &ActiveElection, notice: Option<Notice>) -> Self {
        Self {
            notice,
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            deadline: format::deadline(election.deadline),
            kind: election.kind.as_str(),
            max_selections: election.kind.max_selections(),
            instructions: election.kind.instructions(),
            options: election.options.clone(),
            submit_url: format!("/vote/{}", election.id),
            cancel_url: "/dashboard",
        }
    }
}

/// An admin's view of a running election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManageView {
    pub notice: Option<Notice>,
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub deadline: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub max_selections: u32,
    pub options: Vec<ElectionOption>,
    pub turnout: Turnout,
    pub participation: String,
    pub results_url: String,
    pub back_url: &'static str,
}

impl ManageView {
    pub fn new(election: &ActiveElection, notice: Option<Notice>) -> Self {
        Self {
            notice,
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            deadline: format::deadline(election.deadline),
            kind: election.kind.as_str(),
            max_selections: election.kind.max_selections(),
            options: election.options.clone(),
            turnout: election.turnout,
            participation: election.turnout.summary(),
            results_url: format!("/admin/results/{}", election.id),
            back_url: "/admin/dashboard",
        }
    }
}
