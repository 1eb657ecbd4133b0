//! Chat author label composition.
//!
//! Builds the label shown next to a chat message (username, context
//! nickname and numeric user id) as an ordered sequence of styled
//! segments, arranged per a user-selected display mode. The host renderer
//! supplies the identity data, reads back the segments, and maps each
//! segment kind to its own visual styling.

pub mod compose;
pub mod identity;
pub mod settings;
pub mod validation;
