//! The fixed set of elections every page reads from. Nothing here changes at runtime.

use chrono::{NaiveDate, NaiveDateTime};

use super::{
    election::{ElectionId, ElectionKind, ElectionOption},
    results::{Demographics, OptionTally, Segment, Turnout},
};

/// An election that is still open for votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveElection {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub kind: ElectionKind,
    pub deadline: NaiveDateTime,
    pub options: Vec<ElectionOption>,
    pub turnout: Turnout,
    /// Whether the (single, demo) voter has already voted.
    pub has_voted: bool,
}

/// Whether a finished election's motion passed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Rejected,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// A finished election and its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastElection {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub completed: NaiveDate,
    pub verdict: Verdict,
    /// Headline result, e.g. "Plan A Approved".
    pub outcome: String,
    pub turnout: Turnout,
    pub options: Vec<OptionTally>,
    pub demographics: Demographics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionCatalog {
    active: Vec<ActiveElection>,
    past: Vec<PastElection>,
}

impl ElectionCatalog {
    pub fn new(active: Vec<ActiveElection>, past: Vec<PastElection>) -> Self {
        Self { active, past }
    }

    pub fn active(&self) -> &[ActiveElection] {
        &self.active
    }

    pub fn past(&self) -> &[PastElection] {
        &self.past
    }

    pub fn active_election(&self, id: ElectionId) -> Option<&ActiveElection> {
        self.active.iter().find(|election| election.id == id)
    }

    pub fn past_election(&self, id: ElectionId) -> Option<&PastElection> {
        self.past.iter().find(|election| election.id == id)
    }

    /// The demo data set.
    pub fn demo() -> Self {
        Self::new(
            vec![
                ActiveElection {
                    id: 1,
                    title: "Board of Directors Election".to_string(),
                    description: "Vote for the new board members. Select up to 3 candidates."
                        .to_string(),
                    kind: ElectionKind::multiple(),
                    deadline: at(2025, 6, 10, 23, 59, 59),
                    options: vec![
                        ElectionOption::new(1, "Jane Smith", "Current treasurer, 5 years experience"),
                        ElectionOption::new(2, "Michael Johnson", "Technology consultant, new candidate"),
                        ElectionOption::new(3, "Sarah Williams", "Current president, seeking re-election"),
                        ElectionOption::new(4, "Robert Davis", "Community organizer, new candidate"),
                        ElectionOption::new(5, "Amanda Miller", "Local business owner, new candidate"),
                    ],
                    turnout: Turnout::new(42, 120),
                    has_voted: false,
                },
                ActiveElection {
                    id: 2,
                    title: "Annual Budget Approval".to_string(),
                    description: "Vote to approve the proposed annual budget for 2025.".to_string(),
                    kind: ElectionKind::Single,
                    deadline: at(2025, 5, 25, 23, 59, 59),
                    options: vec![
                        ElectionOption::new(1, "Approve", "Approve the budget as proposed"),
                        ElectionOption::new(2, "Reject", "Reject the budget proposal"),
                    ],
                    turnout: Turnout::new(68, 120),
                    has_voted: true,
                },
            ],
            vec![
                PastElection {
                    id: 101,
                    title: "Community Center Renovation".to_string(),
                    description: "Vote on the proposed renovation plans for the community center."
                        .to_string(),
                    completed: day(2025, 4, 2),
                    verdict: Verdict::Approved,
                    outcome: "Plan A Approved".to_string(),
                    turnout: Turnout::new(78, 115),
                    options: tallies(&[
                        ("Approve renovation plan A", 45),
                        ("Approve renovation plan B", 28),
                        ("Reject both plans", 5),
                    ]),
                    demographics: Demographics {
                        age_groups: segments(&[("18-30", 15), ("31-45", 32), ("46-60", 21), ("60+", 10)]),
                        gender: segments(&[("Male", 41), ("Female", 35), ("Non-binary", 2)]),
                    },
                },
                PastElection {
                    id: 102,
                    title: "Amendment to Community Bylaws".to_string(),
                    description: "Vote on the proposed amendments to the community bylaws."
                        .to_string(),
                    completed: day(2025, 3, 15),
                    verdict: Verdict::Rejected,
                    outcome: "Amendments Rejected".to_string(),
                    turnout: Turnout::new(65, 115),
                    options: tallies(&[
                        ("Approve the amendments", 28),
                        ("Reject the amendments", 37),
                    ]),
                    demographics: Demographics {
                        age_groups: segments(&[("18-30", 8), ("31-45", 25), ("46-60", 20), ("60+", 12)]),
                        gender: segments(&[("Male", 35), ("Female", 28), ("Non-binary", 2)]),
                    },
                },
            ],
        )
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Literal dates are valid")
}

fn at(year: i32, month: u32, d: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    day(year, month, d)
        .and_hms_opt(hour, min, sec)
        .expect("Literal times are valid")
}

fn tallies(rows: &[(&str, u32)]) -> Vec<OptionTally> {
    rows.iter()
        .map(|(name, votes)| OptionTally {
            name: name.to_string(),
            votes: *votes,
        })
        .collect()
}

fn segments(rows: &[(&str, u32)]) -> Vec<Segment> {
    rows.iter()
        .map(|(name, value)| Segment {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lookups() {
        let catalog = ElectionCatalog::demo();
        assert_eq!(catalog.active().len(), 2);
        assert_eq!(catalog.past().len(), 2);

        let board = catalog.active_election(1).unwrap();
        assert_eq!(board.kind.max_selections(), 3);
        assert_eq!(board.options.len(), 5);
        assert!(!board.has_voted);
        assert!(catalog.active_election(2).unwrap().has_voted);

        // Active and past ids do not overlap.
        assert!(catalog.active_election(101).is_none());
        assert!(catalog.past_election(1).is_none());
        assert_eq!(catalog.past_election(102).unwrap().verdict, Verdict::Rejected);
    }

    #[test]
    fn past_votes_add_up_to_turnout() {
        for election in ElectionCatalog::demo().past() {
            let cast: u32 = election.options.iter().map(|o| o.votes).sum();
            assert_eq!(cast, election.turnout.voted, "election {}", election.id);
        }
    }
}
