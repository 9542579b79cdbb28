//! Serializable description of a built animation: what will play, when.

use serde::{Deserialize, Serialize};

use crate::animation::TypeAnimation;
use crate::writable::Writable;

/// One scheduled segment as plain data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentSpec {
    pub text: String,
    pub duration_ms: u64,
    pub start_delay_ms: u64,
    /// Label of the easing curve chosen at build time.
    pub easing: String,
}

/// Snapshot of a composite animation's schedule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TypePlan {
    pub segments: Vec<SegmentSpec>,
    pub total_duration_ms: u64,
}

impl<W: Writable> TypeAnimation<W> {
    /// Snapshot the schedule as plain data for tooling and serialization.
    pub fn to_plan(&self) -> TypePlan {
        TypePlan {
            segments: self
                .segments()
                .iter()
                .map(|seg| SegmentSpec {
                    text: seg.text().to_string(),
                    duration_ms: seg.duration_ms(),
                    start_delay_ms: seg.start_delay_ms(),
                    easing: seg.easing_label().to_string(),
                })
                .collect(),
            total_duration_ms: self.total_duration(),
        }
    }
}

/// Export a plan as `serde_json::Value` (stable schema for FFI/tooling).
pub fn export_plan_json(plan: &TypePlan) -> serde_json::Value {
    serde_json::to_value(plan).unwrap_or(serde_json::Value::Null)
}
