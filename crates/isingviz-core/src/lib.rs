//! # isingviz Core Library
//!
//! Report generation for tabulated Ising model simulation output: loads a
//! temperature series of observables, renders one annotated chart per
//! observable, and assembles the pages into a single multi-page PDF with the
//! critical point marked on the specific-heat chart.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict dependency direction,
//! so that the data model, the rendering machinery, and the user-facing
//! pipeline can evolve and be tested independently.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Sample`, `Series`,
//!   `Observable`) and the series-file loader. No rendering concerns.
//!
//! - **[`render`]: The Renderer.** Chart drawing, peak detection, progress
//!   reporting, and multi-page PDF assembly. Consumes `core` types; never
//!   reads files other than writing the finished document.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   [`workflows::report::run`] ties loader output to the renderer and is the
//!   single entry point for generating a complete report.

pub mod core;
pub mod render;
pub mod workflows;
