//! Curriculum content: every fixed list, answer key and layout the chapters
//! read. The default document is embedded at build time; the browser runtime
//! may swap in another one fetched by name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Embedded default curriculum.
pub const BUILTIN_JSON: &str = include_str!("../../content/curriculum.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("curriculum JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid curriculum: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardItem {
    pub id: u32,
    pub label: String,
    pub is_danger: bool,
    pub icon: String,
}

/// Logical tile kind for the matching game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchItem {
    pub id: String,
    pub label: String,
    pub emoji: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyNumber {
    /// Digits only, compared against normalized input.
    pub digits: String,
    /// Human formatting, e.g. `061-211111`.
    pub display: String,
    pub spoken_hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcedureStep {
    pub icon: String,
    pub title: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub narration: String,
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    pub steps: Vec<ProcedureStep>,
}

fn default_rate() -> f32 {
    1.0
}

fn default_pitch() -> f32 {
    1.0
}

/// Static maze layout in canvas pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeLayout {
    pub challenge_id: u32,
    pub width: f64,
    pub height: f64,
    pub spawn: Point,
    pub start_zone: Rect,
    pub goal: Rect,
    pub obstacles: Vec<Rect>,
}

impl MazeLayout {
    pub fn hits_obstacle(&self, p: Point) -> bool {
        self.obstacles.iter().any(|r| r.contains(p))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingSettings {
    pub challenge_id: u32,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    pub city: String,
    pub emergency: EmergencyNumber,
    pub hazards: Vec<HazardItem>,
    pub matching_items: Vec<MatchItem>,
    pub procedure: Procedure,
    pub maze: MazeLayout,
    pub drawing: DrawingSettings,
}

impl Curriculum {
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_JSON)
    }

    fn from_json(text: &str) -> Result<Self, ContentError> {
        let c: Curriculum = serde_json::from_str(text)?;
        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let digits = &self.emergency.digits;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContentError::Invalid(format!(
                "emergency digits must be ASCII digits, got {digits:?}"
            )));
        }
        let mut seen = HashSet::new();
        if let Some(h) = self.hazards.iter().find(|h| !seen.insert(h.id)) {
            return Err(ContentError::Invalid(format!("duplicate hazard id {}", h.id)));
        }
        let mut seen = HashSet::new();
        if let Some(m) = self.matching_items.iter().find(|m| !seen.insert(m.id.as_str())) {
            return Err(ContentError::Invalid(format!("duplicate matching id {:?}", m.id)));
        }
        if self.maze.hits_obstacle(self.maze.spawn) {
            return Err(ContentError::Invalid("maze spawn lies inside an obstacle".into()));
        }
        if self.maze.width <= 0.0 || self.maze.height <= 0.0 {
            return Err(ContentError::Invalid("maze canvas must have a positive size".into()));
        }
        if self.drawing.width <= 0.0 || self.drawing.height <= 0.0 {
            return Err(ContentError::Invalid("drawing canvas must have a positive size".into()));
        }
        Ok(())
    }
}
