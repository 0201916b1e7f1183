pub mod bounded;      // BoundedStr
pub mod event;        // Event
pub mod kind;         // AccountKind
pub mod organizer;    // Organizer
pub mod transmutable; // Transmutable

// Re-export the types so everyone can `use crate::state::{...}`.
pub use bounded::BoundedStr;
pub use event::Event;
pub use kind::AccountKind;
pub use organizer::Organizer;
pub use transmutable::Transmutable;
