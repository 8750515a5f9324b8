use thiserror::Error;

use super::election::OptionId;

/// Reasons a submitted form is rejected before anything is sent anywhere.
///
/// The `Display` text is the description shown to the user; [`Invalid::title`]
/// is the heading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invalid {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("You must agree to the terms and conditions to register.")]
    TermsNotAccepted,
    #[error("Please enter a title for this election.")]
    MissingTitle,
    #[error("Please enter a description for this election.")]
    MissingDescription,
    #[error("Elections must have at least two options.")]
    TooFewOptions,
    #[error("Please provide names for all options.")]
    IncompleteOptions,
    #[error("Please enter the deadline as a date (YYYY-MM-DD) and a time (HH:MM).")]
    MalformedDeadline,
    #[error("The election deadline must be in the future.")]
    DeadlineNotInFuture,
    #[error("Please select at least one option to vote.")]
    NoSelection,
    #[error("Please select an option to vote.")]
    NoSingleSelection,
    #[error("You can only select up to {0} options.")]
    MaxSelections(u32),
    #[error("You can only select one option.")]
    SingleSelectionExceeded,
    #[error("Option {0} is not part of this election.")]
    UnknownOption(OptionId),
}

impl Invalid {
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Missing information",
            Self::PasswordMismatch => "Password error",
            Self::TermsNotAccepted => "Terms agreement required",
            Self::MissingTitle => "Missing title",
            Self::MissingDescription => "Missing description",
            Self::TooFewOptions => "Cannot remove option",
            Self::IncompleteOptions => "Incomplete options",
            Self::MalformedDeadline | Self::DeadlineNotInFuture => "Invalid deadline",
            Self::NoSelection | Self::NoSingleSelection => "No selection made",
            Self::MaxSelections(_) | Self::SingleSelectionExceeded => {
                "Maximum selections reached"
            }
            Self::UnknownOption(_) => "Unknown option",
        }
    }
}
