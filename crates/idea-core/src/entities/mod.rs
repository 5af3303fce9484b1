//! Entity structs for ideabox domain objects.
//!
//! Each entity maps to a table in the libSQL database.

mod idea;

pub use idea::Idea;
