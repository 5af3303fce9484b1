//! # idea-core
//!
//! Core types and error types for the ideabox board.
//!
//! This crate provides the foundational types shared across all ideabox crates:
//! - The `Idea` entity
//! - The `IdeaStatus` triage enum and its label parsing
//! - Cross-cutting error types
//! - JSON response bodies returned by the HTTP API

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
