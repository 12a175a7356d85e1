// Licensed under the Apache-2.0 license

//! Token parsing for datasheet cells.
//!
//! Two kinds of tokens appear in the input tables: chip pin names
//! (`PA0`) and AF cells (`U0_RX`). Pin-name parsing is strict and fails
//! with [`GenError::MalformedPinName`]; the caller decides whether that
//! means "not a pin row, skip it" (AF-table ingestion) or a real error.
//! AF-cell parsing is deliberately lenient: datasheet tables mix AF
//! cells with analog annotations and blank markers, so anything outside
//! the taxonomy simply yields `None`.

use crate::error::{GenError, Result};
use crate::taxonomy::{self, FamilyDescriptor, NO_UNIT};

/// First GPIO port letter present on the target chip family.
pub const PORT_FIRST: char = 'A';
/// Last GPIO port letter present on the target chip family.
pub const PORT_LAST: char = 'F';

/// Parse a chip pin name of the form `P<port><index>` into its port
/// letter and in-port pin index.
pub fn parse_pin_token(token: &str) -> Result<(char, u8)> {
    let malformed = |reason| GenError::MalformedPinName {
        token: token.to_string(),
        reason,
    };
    if token.len() < 3 {
        return Err(malformed("expected at least 3 characters"));
    }
    let mut chars = token.chars();
    if chars.next() != Some('P') {
        return Err(malformed("expected name to start with P"));
    }
    let port = chars.next().unwrap();
    if !(PORT_FIRST..=PORT_LAST).contains(&port) {
        return Err(malformed("expected port letter between A and F"));
    }
    let index = &token[2..];
    if !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("expected numeric pin index"));
    }
    let port_pin = index
        .parse()
        .map_err(|_| malformed("pin index out of range"))?;
    Ok((port, port_pin))
}

/// One AF cell split into its taxonomy parts.
#[derive(Debug, PartialEq)]
pub struct AfToken {
    pub family: &'static FamilyDescriptor,
    /// Numbered instance of the family, or [`NO_UNIT`].
    pub unit: i32,
    /// Signal-type suffix; empty for untyped families.
    pub signal_type: &'static str,
}

/// Split a datasheet AF cell into family, unit, and signal type.
///
/// The first `_`-separated segment is split at its trailing-digit
/// boundary into the family token and the unit digits; the second
/// segment, if any, is the signal type. Cells that don't name a
/// supported family, carry a signal type the family doesn't have, or
/// omit the unit digits of a numbered family are not AF cells and
/// yield `None`.
pub fn parse_af_token(cell: &str) -> Option<AfToken> {
    let mut segments = cell.split('_');
    let head = segments.next().unwrap_or("");
    let suffix = segments.next().unwrap_or("");

    let family_token = head.trim_end_matches(|c: char| c.is_ascii_digit());
    let family = taxonomy::family(family_token)?;
    let signal_type = *family.signal_types.iter().find(|t| **t == suffix)?;

    let unit = if family.numbered_unit {
        let digits = &head[family_token.len()..];
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()?
    } else {
        NO_UNIT
    };

    Some(AfToken {
        family,
        unit,
        signal_type,
    })
}
