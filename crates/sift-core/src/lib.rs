//! # sift-core
//!
//! Core types, ID prefixes, and error types for Sift.
//!
//! This crate provides the foundational types shared across all Sift crates:
//! - Entity structs for the review aggregate (reviews, questions, articles, etc.)
//! - Label enums with their single-character storage codes
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types
//! - Pure domain rules (source URL normalization, description truncation,
//!   review slugs, quality score arithmetic)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod rules;
pub mod scoring;
