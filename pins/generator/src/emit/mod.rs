// Licensed under the Apache-2.0 license

//! Emission of the three generated artifacts.
//!
//! ```text
//! PinRegistry (exposed pins) ─→ source.rs  ─→ C pin/AF tables + lookup dicts
//!                            ├→ header.rs  ─→ extern declarations + alias macros
//!                            └→ symbols.rs ─→ sorted, deduplicated qstr seed list
//! ```
//!
//! Each emitter is a pure function over the registry's read-only
//! exposed-pin view; none of them share state, so the three artifacts
//! are consistent by construction and byte-stable across reruns.
//!
//! The emitted names (`pin_obj_t`, `PIN()`, `AF_AN`/`AF_SL`/`AF_ML`,
//! `MP_ROM_QSTR`, `Q()`) are the runtime's contract and are written
//! verbatim.

mod header;
mod source;
mod symbols;

pub use header::generate_header;
pub use source::generate_source;
pub use symbols::generate_symbol_list;
