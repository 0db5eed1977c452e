//! faviconx - generate a complete favicon set from one source image
//!
//! This crate renders a fixed matrix of favicon assets (PNG sizes, a
//! multi-resolution ICO and an SVG wrapper) and emits the matching HTML
//! link tags and web app manifest for the icons that were produced.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_enum_variant,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::too_many_arguments,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::single_match_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![allow(
    missing_docs, // Table fields and tier variants are self-describing
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod emitter;
pub mod exceptions;
pub mod exit_codes;
pub mod generator;
pub mod logger;
pub mod matrix;
pub mod report;
pub mod source;
pub mod version;

// Re-export main API functions
pub use api::{GenerateOptions, GenerationReport, generate_favicons};
pub use exceptions::FaviconError;
pub use generator::{GenerationResult, generate};
pub use matrix::{
    ICON_MATRIX, IconSpec, ImportanceOption, TargetSize, Tier, TierSelection, effective_filename,
    select_specs,
};
