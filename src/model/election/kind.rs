/// Whether voters pick exactly one option or several up to a cap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ElectionKind {
    Single,
    Multiple { max_selections: u32 },
}

impl ElectionKind {
    /// Cap given to a freshly created multiple-choice election.
    pub const DEFAULT_MAX_SELECTIONS: u32 = 3;

    /// A multiple-choice election with the default cap.
    pub fn multiple() -> Self {
        Self::Multiple {
            max_selections: Self::DEFAULT_MAX_SELECTIONS,
        }
    }

    /// Change the cap. Single-choice elections are fixed at one, and a cap
    /// below one is ignored.
    pub fn with_max_selections(self, requested: u32) -> Self {
        match self {
            Self::Multiple { .. } if requested >= 1 => Self::Multiple {
                max_selections: requested,
            },
            other => other,
        }
    }

    pub fn max_selections(&self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Multiple { max_selections } => *max_selections,
        }
    }

    /// Wire name, `single` or `multiple`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple { .. } => "multiple",
        }
    }

    /// The instruction shown above the options.
    pub fn instructions(&self) -> String {
        match self {
            Self::Single => "Select one option".to_string(),
            Self::Multiple { max_selections } => format!("Select up to {max_selections} options"),
        }
    }
}
