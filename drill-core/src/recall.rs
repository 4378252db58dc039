//! Emergency number recall.

use crate::content::EmergencyNumber;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecallOutcome {
    Correct,
    Incorrect,
}

/// Keep ASCII digits only; spaces, dashes and anything else are dropped.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Clone, Debug)]
pub struct NumberRecall {
    number: EmergencyNumber,
}

impl NumberRecall {
    pub fn new(number: EmergencyNumber) -> Self {
        NumberRecall { number }
    }

    pub fn number(&self) -> &EmergencyNumber {
        &self.number
    }

    pub fn check(&self, input: &str) -> RecallOutcome {
        if normalize(input) == self.number.digits {
            RecallOutcome::Correct
        } else {
            RecallOutcome::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curriculum;

    fn recall() -> NumberRecall {
        NumberRecall::new(Curriculum::builtin().unwrap().emergency)
    }

    #[test]
    fn normalizes_separators() {
        assert_eq!(normalize("061 - 211111"), "061211111");
        assert_eq!(normalize("(061) 211-111 1"), "0612111111");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(normalize("٠٦١"), "");
    }

    #[test]
    fn checks_against_fixed_number() {
        let r = recall();
        assert_eq!(r.check("061 - 211111"), RecallOutcome::Correct);
        assert_eq!(r.check("061211111"), RecallOutcome::Correct);
        assert_eq!(r.check("911"), RecallOutcome::Incorrect);
        assert_eq!(r.check(""), RecallOutcome::Incorrect);
        assert_eq!(r.check("0612111110"), RecallOutcome::Incorrect);
    }
}
