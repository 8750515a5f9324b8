//! Turnout and result arithmetic over the static result tables.

use serde::Serialize;

/// Chart palette; entries are coloured in order, wrapping around.
pub const CHART_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

/// How many of the registered voters took part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Turnout {
    pub voted: u32,
    pub total: u32,
}

impl Turnout {
    pub fn new(voted: u32, total: u32) -> Self {
        Self { voted, total }
    }

    /// Whole-number participation percentage.
    pub fn rate(&self) -> u32 {
        whole_percentage(self.voted, self.total)
    }

    /// e.g. "42/120 (35%)".
    pub fn summary(&self) -> String {
        format!("{}/{} ({}%)", self.voted, self.total, self.rate())
    }
}

/// Votes received by one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTally {
    pub name: String,
    pub votes: u32,
}

/// One slice of a demographic breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub age_groups: Vec<Segment>,
    pub gender: Vec<Segment>,
}

/// An option's result as charted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionShare {
    pub name: String,
    pub votes: u32,
    /// Share of all votes cast, to one decimal place.
    pub percentage: f64,
    pub color: &'static str,
}

/// A demographic slice as charted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentShare {
    pub name: String,
    pub value: u32,
    /// Share of the breakdown, to the whole percent.
    pub percentage: u32,
    pub color: &'static str,
}

/// `part / whole` as a percentage rounded to one decimal place. Zero if `whole` is zero.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (f64::from(part) * 1000.0 / f64::from(whole)).round() / 10.0
}

/// `part / whole` as a percentage rounded to the nearest whole number. Zero if `whole` is zero.
pub fn whole_percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(whole)).round() as u32
}

pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// The option with the most votes; the earliest listed wins a tie.
pub fn winner(options: &[OptionTally]) -> Option<&OptionTally> {
    options.iter().fold(None, |best: Option<&OptionTally>, option| match best {
        Some(best) if best.votes >= option.votes => Some(best),
        _ => Some(option),
    })
}

pub fn option_shares(options: &[OptionTally]) -> Vec<OptionShare> {
    let cast: u32 = options.iter().map(|option| option.votes).sum();
    options
        .iter()
        .enumerate()
        .map(|(i, option)| OptionShare {
            name: option.name.clone(),
            votes: option.votes,
            percentage: percentage(option.votes, cast),
            color: chart_color(i),
        })
        .collect()
}

pub fn segment_shares(segments: &[Segment]) -> Vec<SegmentShare> {
    let total: u32 = segments.iter().map(|segment| segment.value).sum();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| SegmentShare {
            name: segment.name.clone(),
            value: segment.value,
            percentage: whole_percentage(segment.value, total),
            color: chart_color(i),
        })
        .collect()
}
