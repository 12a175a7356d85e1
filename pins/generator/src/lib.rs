// Licensed under the Apache-2.0 license

//! Chip pin / alternate-function table compiler.
//!
//! This crate compiles hardware-datasheet CSV tables describing a
//! microcontroller's pins and their alternate functions (AFs) into the
//! source artifacts consumed by the firmware build: the pin/AF object
//! tables, a header of pin symbol declarations, and the identifier list
//! seeding the runtime's symbol interning step.
//!
//! ## Pipeline
//!
//! ```text
//! chip AF table CSV ──┐
//!                     ├─→ PinRegistry ─→ emit::generate_source      (C pin/AF tables)
//! board pin CSV ──────┘               ├→ emit::generate_header      (extern decls + aliases)
//!                                     └→ emit::generate_symbol_list (sorted qstr seed)
//! ```
//!
//! The AF table describes every pin the chip has; the board table only
//! marks which of those pins the target board wires out. The emitters
//! consume the same read-only exposed-pin view, so the three artifacts
//! always describe the same pin set in the same order.
//!
//! ## Module Organization
//!
//! - [`taxonomy`]: the fixed catalog of supported AF families
//! - [`parse`]: pin-name and AF-cell token parsing
//! - [`model`]: normalized [`Pin`] and [`AlternateFunction`] records
//! - [`registry`]: table ingestion and the exposed-pin view
//! - [`emit`]: the three artifact emitters

pub mod emit;
pub mod error;
pub mod model;
pub mod parse;
pub mod registry;
pub mod taxonomy;

// Re-export main public API
pub use error::{GenError, Result};
pub use model::{AlternateFunction, Pin};
pub use registry::{AfTableLayout, PinRegistry};
