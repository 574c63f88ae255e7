/// Compiled-template cache keyed by ordered content-template names.
pub mod cache;

/// Configuration for template resolution.
pub mod config;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Template filters available to layouts and content templates.
pub mod filters;

/// Shared master layout loading and replacement.
pub mod master;

/// Render orchestration: resolve, transform, execute, finalize.
pub mod pipeline;

/// Common types shared across the crate.
pub mod types;
