// Licensed under the Apache-2.0 license

//! Normalized in-memory model of pins and their alternate functions.
//!
//! One [`Pin`] is created per AF-table pin row; it exclusively owns the
//! [`AlternateFunction`] records built from that row's AF columns, in
//! column order. Column order is semantically meaningful: it is the
//! mux-select value the firmware applies.

use crate::parse::AfToken;
use crate::taxonomy::NO_UNIT;

/// Mux-select value recorded for AF columns the hardware reserves.
pub const MUX_UNASSIGNED: i32 = -1;

/// Normalize an AF column offset to the chip's mux-select domain.
///
/// The hardware wires mux selects 0-9 and 14-15 only; columns 10-13 and
/// anything past 15 are reserved slots.
pub fn normalize_mux(column: usize) -> i32 {
    if column > 15 || (10..=13).contains(&column) {
        MUX_UNASSIGNED
    } else {
        column as i32
    }
}

/// One normalized alternate-function assignment on one pin.
#[derive(Clone, Debug)]
pub struct AlternateFunction {
    /// Full datasheet cell token, e.g. `U0_RX`.
    pub name: String,
    /// Hardware alternate-function-select value, or [`MUX_UNASSIGNED`]
    /// for reserved slots.
    pub mux_index: i32,
    /// Family mnemonic, e.g. `UART`.
    pub family: &'static str,
    /// Numbered instance of the family, or [`NO_UNIT`].
    pub unit: i32,
    /// Signal-type suffix; empty for untyped families.
    pub signal_type: &'static str,
    /// Compact identifier fragment per the family's display convention.
    pub mnemonic: String,
    /// Name of the owning pin, referenced by the emitted AF macros.
    pub pin_name: String,
}

impl AlternateFunction {
    /// Build one AF record from a parsed cell.
    ///
    /// `column` is the cell's offset among the AF columns. The mnemonic
    /// follows the family's display convention: abbreviation plus unit
    /// where the driver library abbreviates, nothing for families whose
    /// identifiers omit the family, the bare family name for
    /// single-instance families, and family plus unit otherwise.
    pub fn new(raw: &str, column: usize, token: &AfToken, pin_name: &str) -> Self {
        let family = token.family;
        let mnemonic = if let Some(abbrev) = family.abbreviation {
            format!("{abbrev}{}", token.unit)
        } else if family.omit_mnemonic {
            String::new()
        } else if token.unit == NO_UNIT {
            family.name.to_string()
        } else {
            format!("{}{}", family.name, token.unit)
        };
        Self {
            name: raw.to_string(),
            mux_index: normalize_mux(column),
            family: family.name,
            unit: token.unit,
            signal_type: token.signal_type,
            mnemonic,
            pin_name: pin_name.to_string(),
        }
    }
}

/// One physical/logical chip pin.
#[derive(Clone, Debug)]
pub struct Pin {
    /// Canonical symbolic name, e.g. `PA0`.
    pub name: String,
    /// GPIO port letter.
    pub port: char,
    /// Pin index within the port.
    pub port_pin: u8,
    /// Physical package-pin number.
    pub pin_number: u32,
    /// Column offset (among AF columns) of the power-on default AF.
    pub default_af: usize,
    /// Whether the target board wires this pin out.
    pub exposed_on_board: bool,
    /// AFs in source column order; the order encodes the mux-select
    /// value applied by firmware.
    pub alternate_functions: Vec<AlternateFunction>,
}

impl Pin {
    pub fn new(name: &str, port: char, port_pin: u8, pin_number: u32, default_af: usize) -> Self {
        Self {
            name: name.to_string(),
            port,
            port_pin,
            pin_number,
            default_af,
            exposed_on_board: false,
            alternate_functions: Vec::new(),
        }
    }
}
