//! # cp-core
//!
//! Core types, ID generation, and error types for ClassPilot.
//!
//! This crate provides the foundational types shared across all ClassPilot crates:
//! - Entity structs for tutors, students, and lessons
//! - The lesson status enum with its state machine transitions
//! - ID prefix constants and generation
//! - Input normalization (emails, free text, lesson notes)
//! - The `StartsAt` lesson start input, which keeps offset-less timestamps checkable
//! - Cross-cutting error types
//! - Response types for derived views (tutor dashboard)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod normalize;
pub mod responses;
pub mod timestamp;
