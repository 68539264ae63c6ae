//! Input functionality for the tabulated simulation output format.
//!
//! The single supported format is the plain-text `.dat` series file: one row
//! per temperature sample, whitespace-separated columns in the fixed order
//! `T magnetization energy specific_heat`, no header line. Parsing is
//! all-or-nothing; a malformed line fails the whole load so the derived
//! series can never silently desynchronize.

pub mod dat;
