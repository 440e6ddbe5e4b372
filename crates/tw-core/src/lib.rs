//! # tw-core
//!
//! Core types, ID prefixes, and error types for TaskWise.
//!
//! This crate provides the foundational types shared across all TaskWise crates:
//! - Entity structs for tasks and categories
//! - Priority, status, and due-date filter enums
//! - Built-in category names and tag normalization
//! - Due-date window arithmetic
//! - The focus-mode countdown timer
//! - The structured result of the extraction step
//! - Cross-cutting error types and caller identity
//! - CLI response types

pub mod categories;
pub mod due;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod extraction;
pub mod focus;
pub mod identity;
pub mod ids;
pub mod responses;
pub mod tags;
