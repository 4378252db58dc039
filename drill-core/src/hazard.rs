//! "Spot the danger" selection quiz.

use thiserror::Error;

use crate::content::HazardItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HazardError {
    #[error("no hazard with id {0}")]
    Unknown(u32),
    #[error("select at least one item before checking")]
    EmptySelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// Answers were already checked; selection is frozen until reset.
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardOutcome {
    Success,
    Retry,
}

#[derive(Clone, Debug)]
pub struct HazardPicker {
    hazards: Vec<HazardItem>,
    selected: Vec<u32>,
    submitted: bool,
}

impl HazardPicker {
    pub fn new(hazards: Vec<HazardItem>) -> Self {
        HazardPicker {
            hazards,
            selected: Vec::new(),
            submitted: false,
        }
    }

    pub fn hazards(&self) -> &[HazardItem] {
        &self.hazards
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted && !self.selected.is_empty()
    }

    pub fn toggle(&mut self, id: u32) -> Result<Toggle, HazardError> {
        if !self.hazards.iter().any(|h| h.id == id) {
            return Err(HazardError::Unknown(id));
        }
        if self.submitted {
            return Ok(Toggle::Locked);
        }
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            Ok(Toggle::Deselected)
        } else {
            self.selected.push(id);
            Ok(Toggle::Selected)
        }
    }

    /// Check the selection: success when every dangerous item was picked.
    pub fn submit(&mut self) -> Result<HazardOutcome, HazardError> {
        if self.selected.is_empty() {
            return Err(HazardError::EmptySelection);
        }
        self.submitted = true;
        let all = self
            .hazards
            .iter()
            .filter(|h| h.is_danger)
            .all(|h| self.selected.contains(&h.id));
        Ok(if all {
            HazardOutcome::Success
        } else {
            HazardOutcome::Retry
        })
    }

    pub fn reset(&mut self) {
        self.selected.clear();
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curriculum;

    fn picker() -> HazardPicker {
        HazardPicker::new(Curriculum::builtin().unwrap().hazards)
    }

    #[test]
    fn all_four_is_success() {
        let mut p = picker();
        for id in 1..=4 {
            assert_eq!(p.toggle(id), Ok(Toggle::Selected));
        }
        assert_eq!(p.submit(), Ok(HazardOutcome::Success));
    }

    #[test]
    fn strict_subset_is_retry() {
        let mut p = picker();
        p.toggle(1).unwrap();
        p.toggle(3).unwrap();
        assert_eq!(p.submit(), Ok(HazardOutcome::Retry));
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut p = picker();
        p.toggle(2).unwrap();
        assert_eq!(p.toggle(2), Ok(Toggle::Deselected));
        assert!(!p.can_submit());
        assert_eq!(p.submit(), Err(HazardError::EmptySelection));
    }

    #[test]
    fn selection_locks_after_submit_until_reset() {
        let mut p = picker();
        p.toggle(1).unwrap();
        p.submit().unwrap();
        assert_eq!(p.toggle(2), Ok(Toggle::Locked));
        assert!(!p.is_selected(2));
        p.reset();
        assert!(!p.is_submitted());
        assert!(!p.is_selected(1));
        assert_eq!(p.toggle(2), Ok(Toggle::Selected));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut p = picker();
        assert_eq!(p.toggle(99), Err(HazardError::Unknown(99)));
    }
}
