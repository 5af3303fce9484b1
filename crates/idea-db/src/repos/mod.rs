//! Repository implementations backed by libSQL.

pub mod idea;
