use serde::{Deserialize, Serialize};

/// Stroke phase reported by the pointing device.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PenPhase {
    Down,
    Move,
    Up,
}

/// One pen sample: x, y, pressure (or size), timestamp, phase.
/// Serialized as a flat 5-element array.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PenSample(pub f64, pub f64, pub f64, pub f64, pub PenPhase);

impl PenSample {
    pub fn phase(&self) -> PenPhase {
        self.4
    }
}

/// Ephemeral draw event. Never stored in the directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum DrawPayload {
    #[serde(rename = "pen")]
    Pen { data: PenSample },
}

impl DrawPayload {
    pub fn phase(&self) -> PenPhase {
        match self {
            DrawPayload::Pen { data } => data.phase(),
        }
    }
}
