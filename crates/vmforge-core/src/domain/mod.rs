//! Domain types for the install workflow.
//!
//! These are pure data types with no infrastructure dependencies.

mod image;
mod load;
mod template;

pub use image::{AttemptOutcome, AttemptResult, ImageId};
pub use load::LoadSample;
pub use template::{EmptySelection, Selection, Template};
