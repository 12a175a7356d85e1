// Licensed under the Apache-2.0 license

use thiserror::Error;

/// Errors that can occur while compiling pin tables.
///
/// Only genuinely fatal conditions are represented here. Rows whose
/// pin-name cell doesn't follow the naming convention, board rows
/// naming unknown pins, and AF cells outside the taxonomy are all
/// silently skipped during ingestion, not reported as errors.
#[derive(Error, Debug)]
pub enum GenError {
    /// A token expected to name a chip pin does not follow the
    /// `P<port><index>` convention.
    #[error("malformed pin name {token:?}: {reason}")]
    MalformedPinName { token: String, reason: &'static str },

    /// A pin row's package-pin-number cell is not numeric.
    #[error("invalid pin number {cell:?} in row for pin {pin}")]
    InvalidPinNumber { cell: String, pin: String },

    /// Two AF-table rows claim the same name, package pin number, or
    /// (port, port pin) address.
    #[error("duplicate pin row for {name}")]
    DuplicatePin { name: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for pin table generation.
pub type Result<T> = std::result::Result<T, GenError>;
