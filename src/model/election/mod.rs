mod draft;
mod kind;
mod selection;

use serde::Serialize;

pub use draft::{BallotType, ElectionDraft, ElectionForm, OptionForm};
pub use kind::ElectionKind;
pub use selection::{Selection, VoteForm};

/// Our election IDs are integers.
pub type ElectionId = u32;
/// Our option IDs are integers, unique within an election.
pub type OptionId = u32;

/// A named, optionally described choice within an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectionOption {
    pub id: OptionId,
    pub name: String,
    pub description: String,
}

impl ElectionOption {
    pub fn new(id: OptionId, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}
