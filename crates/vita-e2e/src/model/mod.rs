//! Typed mirrors of the product's JSON API responses.
//!
//! Every field is independently optional: the source APIs are not
//! guaranteed complete, so a partial payload must decode cleanly with the
//! missing fields as `None`. Only structurally invalid JSON or a type
//! mismatch is a decode error. Whether `None` is acceptable is the calling
//! test's business, not the decoder's.

mod health;
mod profile;
mod slots;

pub use health::HealthData;
pub use profile::{ActivityLevel, MenstrualStatus};
pub use slots::{Slot, SlotData, SlotList};
