//! Stop, drop and roll: narration plus three instruction panels.

use crate::content::{Procedure, ProcedureStep};

/// What the host should hand to its speech engine.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrationRequest {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    /// Narration already running.
    Ignored,
    Narrate(NarrationRequest),
    /// No speech engine; panels shown without audio.
    RevealedSilently,
}

#[derive(Clone, Debug)]
pub struct ProcedureAnimator {
    procedure: Procedure,
    steps_visible: bool,
    playing: bool,
}

impl ProcedureAnimator {
    pub fn new(procedure: Procedure) -> Self {
        ProcedureAnimator {
            procedure,
            steps_visible: false,
            playing: false,
        }
    }

    pub fn steps(&self) -> &[ProcedureStep] {
        &self.procedure.steps
    }

    pub fn steps_visible(&self) -> bool {
        self.steps_visible
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self, speech_available: bool) -> PlayOutcome {
        if self.playing {
            return PlayOutcome::Ignored;
        }
        self.steps_visible = true;
        if !speech_available {
            return PlayOutcome::RevealedSilently;
        }
        self.playing = true;
        PlayOutcome::Narrate(NarrationRequest {
            text: self.procedure.narration.clone(),
            rate: self.procedure.rate,
            pitch: self.procedure.pitch,
        })
    }

    /// Speech engine reported the end of the narration.
    pub fn narration_finished(&mut self) {
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curriculum;

    fn animator() -> ProcedureAnimator {
        ProcedureAnimator::new(Curriculum::builtin().unwrap().procedure)
    }

    #[test]
    fn play_reveals_and_narrates() {
        let mut a = animator();
        assert!(!a.steps_visible());
        let PlayOutcome::Narrate(req) = a.play(true) else {
            panic!("expected narration");
        };
        assert!(req.text.starts_with("Stop!"));
        assert_eq!(req.rate, 0.9);
        assert_eq!(req.pitch, 1.1);
        assert!(a.steps_visible());
        assert!(a.is_playing());
        assert_eq!(a.play(true), PlayOutcome::Ignored);
        a.narration_finished();
        assert!(!a.is_playing());
        assert!(a.steps_visible());
        assert!(matches!(a.play(true), PlayOutcome::Narrate(_)));
    }

    #[test]
    fn without_speech_only_reveals() {
        let mut a = animator();
        assert_eq!(a.play(false), PlayOutcome::RevealedSilently);
        assert!(a.steps_visible());
        assert!(!a.is_playing());
        let titles: Vec<&str> = a.steps().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["STOP", "DROP", "ROLL"]);
    }
}
