use serde::Serialize;

use crate::model::{
    catalog::{ActiveElection, ElectionCatalog, PastElection},
    election::ElectionId,
    format,
    notice::Notice,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoterActiveEntry {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub has_voted: bool,
    /// Absent once the voter has voted.
    pub vote_url: Option<String>,
}

impl From<&ActiveElection> for VoterActiveEntry {
    fn from(election: &ActiveElection) -> Self {
        Self {
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            deadline: format::deadline(election.deadline),
            has_voted: election.has_voted,
            vote_url: (!election.has_voted).then(|| format!("/vote/{}", election.id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoterPastEntry {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub completed: String,
    pub result: &'static str,
    /// Participation percentage.
    pub participation: u32,
    pub results_url: String,
}

impl From<&PastElection> for VoterPastEntry {
    fn from(election: &PastElection) -> Self {
        Self {
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            completed: format::day(election.completed),
            result: election.verdict.as_str(),
            participation: election.turnout.rate(),
            results_url: format!("/results/{}", election.id),
        }
    }
}

/// What a logged-in voter sees first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoterDashboard {
    pub notice: Option<Notice>,
    pub active: Vec<VoterActiveEntry>,
    pub past: Vec<VoterPastEntry>,
}

impl VoterDashboard {
    pub fn new(catalog: &ElectionCatalog, notice: Option<Notice>) -> Self {
        Self {
            notice,
            active: catalog.active().iter().map(Into::into).collect(),
            past: catalog.past().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub active_elections: usize,
    pub registered_voters: u32,
    pub completed_elections: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminActiveEntry {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub deadline: String,
    /// e.g. "42/120 (35%)".
    pub participation: String,
    pub results_url: String,
    pub manage_url: String,
}

impl From<&ActiveElection> for AdminActiveEntry {
    fn from(election: &ActiveElection) -> Self {
        Self {
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            deadline: format::deadline(election.deadline),
            participation: election.turnout.summary(),
            results_url: format!("/admin/results/{}", election.id),
            manage_url: format!("/admin/manage-election/{}", election.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPastEntry {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub completed: String,
    pub result: &'static str,
    pub participation: String,
    pub results_url: String,
}

impl From<&PastElection> for AdminPastEntry {
    fn from(election: &PastElection) -> Self {
        Self {
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            completed: format::day(election.completed),
            result: election.verdict.as_str(),
            participation: election.turnout.summary(),
            results_url: format!("/admin/results/{}", election.id),
        }
    }
}

/// What a logged-in admin sees first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDashboard {
    pub notice: Option<Notice>,
    pub overview: Overview,
    pub create_url: &'static str,
    pub active: Vec<AdminActiveEntry>,
    pub past: Vec<AdminPastEntry>,
}

impl AdminDashboard {
    pub fn new(catalog: &ElectionCatalog, registered_voters: u32, notice: Option<Notice>) -> Self {
        Self {
            notice,
            overview: Overview {
                active_elections: catalog.active().len(),
                registered_voters,
                completed_elections: catalog.past().len(),
            },
            create_url: "/admin/create-election",
            active: catalog.active().iter().map(Into::into).collect(),
            past: catalog.past().iter().map(Into::into).collect(),
        }
    }
}
