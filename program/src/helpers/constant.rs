use crate::state::{Event, Organizer};

/// Maximum UTF-8 byte length of organizer and event names.
pub const MAX_NAME_LEN: usize = 32;
/// Maximum UTF-8 byte length of an event venue.
pub const MAX_VENUE_LEN: usize = 64;

pub const ORGANIZER_SPACE: usize = Organizer::size();
pub const EVENT_SPACE: usize = Event::size();
