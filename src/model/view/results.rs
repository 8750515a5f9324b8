use serde::Serialize;

use crate::model::{
    catalog::PastElection,
    election::ElectionId,
    format,
    notice::Notice,
    results::{self, OptionShare, SegmentShare},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicsView {
    pub age_groups: Vec<SegmentShare>,
    pub gender: Vec<SegmentShare>,
}

/// Results and analytics of a finished election.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub notice: Option<Notice>,
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub completed: String,
    pub result: &'static str,
    pub outcome: String,
    pub voted: u32,
    pub total_voters: u32,
    pub participation_rate: u32,
    pub winner: Option<OptionShare>,
    pub options: Vec<OptionShare>,
    pub demographics: DemographicsView,
    pub back_url: &'static str,
}

impl ResultsView {
    pub fn new(election: &PastElection, back_url: &'static str, notice: Option<Notice>) -> Self {
        let options = results::option_shares(&election.options);
        let winner = results::winner(&election.options)
            .and_then(|winner| options.iter().find(|share| share.name == winner.name))
            .cloned();
        Self {
            notice,
            id: election.id,
            title: election.title.clone(),
            description: election.description.clone(),
            completed: format::day(election.completed),
            result: election.verdict.as_str(),
            outcome: election.outcome.clone(),
            voted: election.turnout.voted,
            total_voters: election.turnout.total,
            participation_rate: election.turnout.rate(),
            winner,
            options,
            demographics: DemographicsView {
                age_groups: results::segment_shares(&election.demographics.age_groups),
                gender: results::segment_shares(&election.demographics.gender),
            },
            back_url,
        }
    }
}
