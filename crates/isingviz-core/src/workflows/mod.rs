//! # Workflows Module
//!
//! High-level entry points tying the data model to the renderer.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of the library. They own the
//! full pipeline from loaded samples to the finished document: deriving the
//! observable series, detecting the critical point, rendering the pages in
//! their fixed order, and writing the multi-page PDF, with progress events
//! reported along the way.
//!
//! - **Report Workflow** ([`report`]) - The complete three-page chart
//!   report with critical-point annotation.

pub mod report;
