//! Integrity submission payloads.
//!
//! A payload summarises one finished challenge. On the wire it is a single
//! JSON object whose `submission_data` shape depends on
//! `challenge_metadata.challenge_type`; in Rust that discriminator lives in
//! the [`SubmissionData`] enum so the two can never disagree.
//!
//! Payloads are built and logged only. Nothing here signs, verifies or
//! transmits them.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

pub const MOCK_USER_UUID: &str = "mock-user-uuid-12345";
pub const MOCK_SESSION_ID: &str = "mock-session-id-67890";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("challenge type {0:?} carries no submission data shape")]
    Unsupported(ChallengeType),
    #[error("submission_data does not match challenge type {kind:?}: {source}")]
    Shape {
        kind: ChallengeType,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeType {
    Maze,
    Drawing,
    Quiz,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeMetadata {
    pub challenge_id: u32,
    pub challenge_type: ChallengeType,
    pub client_elapsed_time_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MazeSubmission {
    pub path_array: Vec<[i64; 2]>,
    pub path_length: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    pub time_offset_ms: u64,
}

/// One continuous pointer-down..pointer-up trace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<StrokePoint>,
}

impl Stroke {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time between the first and last sample.
    pub fn duration_ms(&self) -> u64 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => b.time_offset_ms.saturating_sub(a.time_offset_ms),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawingSubmission {
    pub stroke_data: Vec<Stroke>,
    pub total_stroke_count: usize,
    pub total_drawing_time_ms: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionData {
    Maze(MazeSubmission),
    Drawing(DrawingSubmission),
}

impl SubmissionData {
    pub fn challenge_type(&self) -> ChallengeType {
        match self {
            SubmissionData::Maze(_) => ChallengeType::Maze,
            SubmissionData::Drawing(_) => ChallengeType::Drawing,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "WirePayload")]
pub struct SubmissionPayload {
    pub user_uuid: String,
    pub session_id: String,
    pub challenge_id: u32,
    pub client_elapsed_time_ms: u64,
    pub data: SubmissionData,
}

impl SubmissionPayload {
    /// Payload tagged with the mock user and session ids.
    pub fn mock(challenge_id: u32, client_elapsed_time_ms: u64, data: SubmissionData) -> Self {
        SubmissionPayload {
            user_uuid: MOCK_USER_UUID.to_string(),
            session_id: MOCK_SESSION_ID.to_string(),
            challenge_id,
            client_elapsed_time_ms,
            data,
        }
    }

    pub fn metadata(&self) -> ChallengeMetadata {
        ChallengeMetadata {
            challenge_id: self.challenge_id,
            challenge_type: self.data.challenge_type(),
            client_elapsed_time_ms: self.client_elapsed_time_ms,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let wire: WirePayload = serde_json::from_str(text)?;
        Self::try_from(wire)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireDataRef<'a> {
    Maze(&'a MazeSubmission),
    Drawing(&'a DrawingSubmission),
}

#[derive(Serialize)]
struct WirePayloadRef<'a> {
    user_uuid: &'a str,
    session_id: &'a str,
    challenge_metadata: ChallengeMetadata,
    submission_data: WireDataRef<'a>,
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let submission_data = match &self.data {
            SubmissionData::Maze(m) => WireDataRef::Maze(m),
            SubmissionData::Drawing(d) => WireDataRef::Drawing(d),
        };
        WirePayloadRef {
            user_uuid: &self.user_uuid,
            session_id: &self.session_id,
            challenge_metadata: self.metadata(),
            submission_data,
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
struct WirePayload {
    user_uuid: String,
    session_id: String,
    challenge_metadata: ChallengeMetadata,
    submission_data: serde_json::Value,
}

impl TryFrom<WirePayload> for SubmissionPayload {
    type Error = PayloadError;

    fn try_from(w: WirePayload) -> Result<Self, Self::Error> {
        let kind = w.challenge_metadata.challenge_type;
        let shape = |source: serde_json::Error| PayloadError::Shape { kind, source };
        let data = match kind {
            ChallengeType::Maze => {
                SubmissionData::Maze(serde_json::from_value(w.submission_data).map_err(shape)?)
            }
            ChallengeType::Drawing => {
                SubmissionData::Drawing(serde_json::from_value(w.submission_data).map_err(shape)?)
            }
            ChallengeType::Quiz => return Err(PayloadError::Unsupported(kind)),
        };
        Ok(SubmissionPayload {
            user_uuid: w.user_uuid,
            session_id: w.session_id,
            challenge_id: w.challenge_metadata.challenge_id,
            client_elapsed_time_ms: w.challenge_metadata.client_elapsed_time_ms,
            data,
        })
    }
}

/// Hand a finished payload to the diagnostic log.
pub fn log_submission(payload: &SubmissionPayload) {
    match payload.to_pretty_json() {
        Ok(json) => log::info!(
            "[integrity] {:?} submission for challenge {}:\n{}",
            payload.data.challenge_type(),
            payload.challenge_id,
            json
        ),
        Err(e) => log::warn!("[integrity] could not serialize submission: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_payload() -> SubmissionPayload {
        SubmissionPayload::mock(
            4,
            1234,
            SubmissionData::Maze(MazeSubmission {
                path_array: vec![[40, 40], [43, 44]],
                path_length: 5,
            }),
        )
    }

    #[test]
    fn maze_wire_shape() {
        let v = serde_json::to_value(maze_payload()).unwrap();
        assert_eq!(v["user_uuid"], MOCK_USER_UUID);
        assert_eq!(v["session_id"], MOCK_SESSION_ID);
        assert_eq!(v["challenge_metadata"]["challenge_id"], 4);
        assert_eq!(v["challenge_metadata"]["challenge_type"], "MAZE");
        assert_eq!(v["challenge_metadata"]["client_elapsed_time_ms"], 1234);
        assert_eq!(v["submission_data"]["path_array"][1], serde_json::json!([43, 44]));
        assert_eq!(v["submission_data"]["path_length"], 5);
    }

    #[test]
    fn drawing_wire_shape() {
        let p = SubmissionPayload::mock(
            5,
            9000,
            SubmissionData::Drawing(DrawingSubmission {
                stroke_data: vec![Stroke {
                    points: vec![StrokePoint { x: 1.0, y: 2.0, time_offset_ms: 3 }],
                }],
                total_stroke_count: 1,
                total_drawing_time_ms: 9000,
            }),
        );
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["challenge_metadata"]["challenge_type"], "DRAWING");
        assert_eq!(v["submission_data"]["stroke_data"][0][0]["time_offset_ms"], 3);
        assert_eq!(v["submission_data"]["total_stroke_count"], 1);
        let back = SubmissionPayload::from_json(&v.to_string()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn parses_back_by_discriminator() {
        let p = maze_payload();
        let text = p.to_pretty_json().unwrap();
        let back: SubmissionPayload = serde_json::from_str(&text).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn rejects_mismatched_shape() {
        let mut v = serde_json::to_value(maze_payload()).unwrap();
        v["challenge_metadata"]["challenge_type"] = "DRAWING".into();
        let err = SubmissionPayload::from_json(&v.to_string()).unwrap_err();
        assert!(matches!(err, PayloadError::Shape { kind: ChallengeType::Drawing, .. }));
    }

    #[test]
    fn rejects_quiz_payloads() {
        let mut v = serde_json::to_value(maze_payload()).unwrap();
        v["challenge_metadata"]["challenge_type"] = "QUIZ".into();
        let err = SubmissionPayload::from_json(&v.to_string()).unwrap_err();
        assert!(matches!(err, PayloadError::Unsupported(ChallengeType::Quiz)));
    }

    #[test]
    fn stroke_duration() {
        let s = Stroke {
            points: vec![
                StrokePoint { x: 0.0, y: 0.0, time_offset_ms: 100 },
                StrokePoint { x: 1.0, y: 0.0, time_offset_ms: 180 },
            ],
        };
        assert_eq!(s.duration_ms(), 80);
        assert_eq!(Stroke::default().duration_ms(), 0);
    }
}
