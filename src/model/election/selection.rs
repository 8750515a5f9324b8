use crate::model::validation::Invalid;

use super::{ElectionKind, ElectionOption, OptionId};

/// The options a voter has ticked so far on a ballot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    kind: ElectionKind,
    allowed: Vec<OptionId>,
    chosen: Vec<OptionId>,
}

impl Selection {
    /// An empty selection over the given options.
    pub fn new(kind: ElectionKind, options: &[ElectionOption]) -> Self {
        Self {
            kind,
            allowed: options.iter().map(|option| option.id).collect(),
            chosen: Vec::new(),
        }
    }

    /// Tick an option.
    ///
    /// Single-choice ballots replace the current choice. Multiple-choice ballots
    /// refuse to go past the cap, and ticking an option twice is a no-op.
    pub fn select(&mut self, option: OptionId) -> Result<(), Invalid> {
        if !self.allowed.contains(&option) {
            return Err(Invalid::UnknownOption(option));
        }
        match self.kind {
            ElectionKind::Single => {
                self.chosen.clear();
                self.chosen.push(option);
            }
            ElectionKind::Multiple { max_selections } => {
                if self.chosen.contains(&option) {
                    return Ok(());
                }
                if self.chosen.len() >= max_selections as usize {
                    return Err(Invalid::MaxSelections(max_selections));
                }
                self.chosen.push(option);
            }
        }
        Ok(())
    }

    /// Untick an option. Unticking an option that is not ticked is a no-op.
    pub fn deselect(&mut self, option: OptionId) {
        self.chosen.retain(|chosen| *chosen != option);
    }

    /// Untick the option if ticked, tick it otherwise.
    pub fn toggle(&mut self, option: OptionId) -> Result<(), Invalid> {
        if self.chosen.contains(&option) {
            self.deselect(option);
            Ok(())
        } else {
            self.select(option)
        }
    }

    pub fn chosen(&self) -> &[OptionId] {
        &self.chosen
    }

    /// Finish the ballot, refusing an empty one.
    pub fn submit(self) -> Result<Vec<OptionId>, Invalid> {
        if self.chosen.is_empty() {
            return Err(match self.kind {
                ElectionKind::Single => Invalid::NoSingleSelection,
                ElectionKind::Multiple { .. } => Invalid::NoSelection,
            });
        }
        Ok(self.chosen)
    }
}

/// A submitted ballot: `choice` on single-choice elections, repeated `choices`
/// on multiple-choice ones.
#[derive(Debug, Clone, Default, FromForm)]
pub struct VoteForm {
    pub choice: Option<OptionId>,
    pub choices: Vec<OptionId>,
}

impl VoteForm {
    /// Tick every submitted option in turn, stopping at the first refusal.
    ///
    /// A single-choice ballot carrying more than one option is refused outright.
    pub fn fill(self, mut selection: Selection) -> Result<Selection, Invalid> {
        let submitted: Vec<OptionId> = self.choice.into_iter().chain(self.choices).collect();
        if selection.kind == ElectionKind::Single && submitted.len() > 1 {
            return Err(Invalid::SingleSelectionExceeded);
        }
        for option in submitted {
            selection.select(option)?;
        }
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(count: u32) -> Vec<ElectionOption> {
        (1..=count)
            .map(|id| ElectionOption::new(id, &format!("Option {id}"), ""))
            .collect()
    }

    #[test]
    fn multiple_choice_cap() {
        let mut selection = Selection::new(ElectionKind::multiple(), &options(5));
        selection.select(1).unwrap();
        selection.select(2).unwrap();
        selection.select(3).unwrap();
        assert_eq!(selection.select(4), Err(Invalid::MaxSelections(3)));
        // Re-ticking an already ticked option is fine at the cap.
        selection.select(3).unwrap();

        // Freeing a slot allows another option.
        selection.deselect(2);
        selection.select(4).unwrap();
        assert_eq!(selection.chosen(), &[1, 3, 4]);
        assert_eq!(selection.submit().unwrap(), vec![1, 3, 4]);
    }

    #[test]
    fn toggling() {
        let mut selection = Selection::new(ElectionKind::multiple(), &options(5));
        selection.toggle(1).unwrap();
        selection.toggle(2).unwrap();
        selection.toggle(1).unwrap();
        assert_eq!(selection.chosen(), &[2]);

        selection.toggle(3).unwrap();
        selection.toggle(4).unwrap();
        assert_eq!(selection.toggle(5), Err(Invalid::MaxSelections(3)));
        assert_eq!(selection.chosen(), &[2, 3, 4]);
    }

    #[test]
    fn single_choice_replaces() {
        let mut selection = Selection::new(ElectionKind::Single, &options(2));
        selection.select(1).unwrap();
        selection.select(2).unwrap();
        assert_eq!(selection.submit().unwrap(), vec![2]);
    }

    #[test]
    fn empty_ballots_are_refused() {
        let selection = Selection::new(ElectionKind::multiple(), &options(5));
        assert_eq!(selection.submit(), Err(Invalid::NoSelection));

        let selection = Selection::new(ElectionKind::Single, &options(2));
        assert_eq!(selection.submit(), Err(Invalid::NoSingleSelection));
    }

    #[test]
    fn unknown_options_are_refused() {
        let mut selection = Selection::new(ElectionKind::Single, &options(2));
        assert_eq!(selection.select(3), Err(Invalid::UnknownOption(3)));
        assert!(selection.chosen().is_empty());
    }

    #[test]
    fn filling_from_a_form() {
        let form = VoteForm {
            choice: None,
            choices: vec![1, 2, 3, 4],
        };
        let selection = Selection::new(ElectionKind::multiple(), &options(5));
        assert_eq!(form.fill(selection), Err(Invalid::MaxSelections(3)));

        let form = VoteForm {
            choice: Some(2),
            choices: vec![],
        };
        let selection = Selection::new(ElectionKind::Single, &options(2));
        assert_eq!(form.fill(selection).unwrap().submit().unwrap(), vec![2]);

        let selection = Selection::new(ElectionKind::Single, &options(2));
        let filled = VoteForm::default().fill(selection).unwrap();
        assert_eq!(filled.submit(), Err(Invalid::NoSingleSelection));
    }

    #[test]
    fn single_choice_forms_carry_one_option() {
        let form = VoteForm {
            choice: None,
            choices: vec![1, 2],
        };
        let selection = Selection::new(ElectionKind::Single, &options(2));
        assert_eq!(form.fill(selection), Err(Invalid::SingleSelectionExceeded));

        let form = VoteForm {
            choice: Some(1),
            choices: vec![2],
        };
        let selection = Selection::new(ElectionKind::Single, &options(2));
        assert_eq!(form.fill(selection), Err(Invalid::SingleSelectionExceeded));
    }
}
