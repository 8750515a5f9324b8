//! The data each page renders, serialised as JSON.
//!
//! Every view carries the pending [`Notice`](crate::model::notice::Notice), if any.

mod ballot;
mod dashboard;
mod pages;
mod results;

pub use ballot::{BallotView, ManageView};
pub use dashboard::{
    AdminActiveEntry, AdminDashboard, AdminPastEntry, Overview, VoterActiveEntry, VoterDashboard,
    VoterPastEntry,
};
pub use pages::{CreateElectionView, DemoAccount, Feature, LandingView, Link, LoginView, RegisterView};
pub use results::{DemographicsView, ResultsView};
