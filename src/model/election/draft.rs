use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::model::validation::Invalid;

use super::{ElectionKind, ElectionOption, OptionId};

/// Default deadline time of a new election.
pub const DEFAULT_DEADLINE_TIME: &str = "23:59";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// The election type radio buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum BallotType {
    Single,
    Multiple,
}

/// One option row of the election form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromForm)]
pub struct OptionForm {
    pub name: String,
    pub description: Option<String>,
}

impl OptionForm {
    fn blank() -> Self {
        Self {
            name: String::new(),
            description: Some(String::new()),
        }
    }
}

/// The election creation form, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromForm)]
pub struct ElectionForm {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    #[field(name = "type")]
    pub kind: BallotType,
    pub max_selections: Option<u32>,
    /// Deadline date, `YYYY-MM-DD`.
    pub date: String,
    /// Deadline time, `HH:MM`.
    pub time: String,
    pub options: Vec<OptionForm>,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionDraft {
    pub title: String,
    pub description: String,
    pub kind: ElectionKind,
    pub deadline: DateTime<Utc>,
    pub options: Vec<ElectionOption>,
}

impl ElectionForm {
    /// What the form shows before the admin touches it.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: BallotType::Single,
            max_selections: Some(1),
            date: today.format(DATE_FORMAT).to_string(),
            time: DEFAULT_DEADLINE_TIME.to_string(),
            options: vec![OptionForm::blank(), OptionForm::blank()],
        }
    }

    /// The election kind the form describes.
    pub fn election_kind(&self) -> ElectionKind {
        match self.kind {
            BallotType::Single => ElectionKind::Single,
            BallotType::Multiple => {
                let kind = ElectionKind::multiple();
                match self.max_selections {
                    Some(max) => kind.with_max_selections(max),
                    None => kind,
                }
            }
        }
    }

    /// The deadline, read as UTC.
    pub fn deadline(&self) -> Result<DateTime<Utc>, Invalid> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| Invalid::MalformedDeadline)?;
        let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT)
            .map_err(|_| Invalid::MalformedDeadline)?;
        Ok(Utc.from_utc_datetime(&date.and_time(time)))
    }

    /// Check the form field by field, reporting the first problem.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ElectionDraft, Invalid> {
        if self.title.trim().is_empty() {
            return Err(Invalid::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(Invalid::MissingDescription);
        }
        if self.options.len() < 2 {
            return Err(Invalid::TooFewOptions);
        }
        if self.options.iter().any(|option| option.name.trim().is_empty()) {
            return Err(Invalid::IncompleteOptions);
        }
        let deadline = self.deadline()?;
        if deadline <= now {
            return Err(Invalid::DeadlineNotInFuture);
        }

        let kind = self.election_kind();
        let options = self
            .options
            .into_iter()
            .zip(1..)
            .map(|(option, id): (OptionForm, OptionId)| ElectionOption {
                id,
                name: option.name.trim().to_string(),
                description: option.description.unwrap_or_default().trim().to_string(),
            })
            .collect();

        Ok(ElectionDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            kind,
            deadline,
            options,
        })
    }
}
