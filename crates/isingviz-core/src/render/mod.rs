//! # Render Module
//!
//! The report renderer: turns derived observable series into a multi-page
//! PDF document with one annotated chart per page.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Page geometry and the per-page color
//!   palette
//! - **Peak Detection** ([`peak`]) - The specific-heat maximum scan that
//!   locates the critical temperature
//! - **Chart Drawing** ([`chart`]) - One chart per page: series, grid,
//!   labels, and the draw-then-annotate critical-point overlay
//! - **Document Assembly** ([`document`]) - Conversion of the rendered
//!   pages into one multi-page PDF, written atomically
//! - **Progress Monitoring** ([`progress`]) - Callback-based page progress
//!   for interactive front-ends
//! - **Error Handling** ([`error`]) - Renderer-specific error types
//!
//! Rendering is a strictly linear pipeline: pages are produced in fixed
//! order into a single in-memory document, which is written to disk once.

pub mod chart;
pub mod config;
pub mod document;
pub mod error;
pub mod peak;
pub mod progress;
