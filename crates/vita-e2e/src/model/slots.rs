//! Slot availability response models.

use serde::{Deserialize, Serialize};

/// Top-level slot availability response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotList {
    /// Response payload
    pub data: Option<SlotData>,
    /// Server message
    pub message: Option<String>,
    /// Response status label
    pub status: Option<String>,
}

/// Payload of a slot availability response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotData {
    /// Available slots, in server order
    pub slots: Option<Vec<Slot>>,
}

/// A single bookable slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Slot {
    /// Number of bookings already taken
    pub booking_count: Option<i64>,
    /// End time label
    pub end_time: Option<String>,
    /// Whether the slot can still be booked
    pub is_available: Option<bool>,
    /// Start time label
    pub start_time: Option<String>,
}
