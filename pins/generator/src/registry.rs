// Licensed under the Apache-2.0 license

//! The pin registry: ingestion of the chip AF table and the board
//! table, and the read-only exposed-pin view the emitters consume.
//!
//! The registry is built by exactly one AF-table pass (which creates
//! every pin) optionally followed by one board-table pass (which only
//! flips the exposure flag, never adds, removes, or reorders pins).
//! After that it is read-only; the emitters iterate the same filtered
//! view, so all three artifacts agree on pin set and order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::model::{AlternateFunction, Pin};
use crate::parse::{parse_af_token, parse_pin_token};

/// Column layout of the chip AF table.
///
/// Vendor exports differ in which leading columns they carry; the
/// defaults match the TI LM4F datasheet export (package pin number,
/// pin name, default AF, then the AF columns to end of row).
#[derive(Clone, Copy, Debug)]
pub struct AfTableLayout {
    /// Column of the physical package-pin number.
    pub pin_number_col: usize,
    /// Column of the `P<port><index>` pin name.
    pub pin_name_col: usize,
    /// Column of the power-on default AF name.
    pub default_af_col: usize,
    /// First AF column; the AF list runs from here to the end of row.
    pub af_start_col: usize,
}

impl Default for AfTableLayout {
    fn default() -> Self {
        Self {
            pin_number_col: 0,
            pin_name_col: 1,
            default_af_col: 2,
            af_start_col: 3,
        }
    }
}

/// Owns every pin parsed from the chip AF table.
#[derive(Debug, Default)]
pub struct PinRegistry {
    pins: Vec<Pin>,
}

impl PinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pins, in AF-table row order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Pins exposed on the target board, in AF-table row order.
    pub fn exposed_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.exposed_on_board)
    }

    fn find_by_number_mut(&mut self, pin_number: u32) -> Option<&mut Pin> {
        self.pins.iter_mut().find(|p| p.pin_number == pin_number)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Pin> {
        self.pins.iter_mut().find(|p| p.name == name)
    }

    /// Ingest the chip-wide AF table, creating one pin per pin row.
    ///
    /// Rows whose pin-name cell doesn't parse are header or separator
    /// rows and are skipped. A pin row whose pin-number cell is not
    /// numeric is fatal: every genuine pin row must carry a valid
    /// package-pin number.
    pub fn ingest_af_table<R: Read>(&mut self, reader: R, layout: &AfTableLayout) -> Result<()> {
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        for record in rows.records() {
            let record = record?;
            let cell = |col: usize| record.get(col).unwrap_or("").trim();

            let name = cell(layout.pin_name_col);
            let Ok((port, port_pin)) = parse_pin_token(name) else {
                // Not a pin row.
                continue;
            };

            let number_cell = cell(layout.pin_number_col);
            let pin_number: u32 = number_cell.parse().map_err(|_| GenError::InvalidPinNumber {
                cell: number_cell.to_string(),
                pin: name.to_string(),
            })?;

            if self.pins.iter().any(|p| {
                p.name == name
                    || p.pin_number == pin_number
                    || (p.port == port && p.port_pin == port_pin)
            }) {
                return Err(GenError::DuplicatePin {
                    name: name.to_string(),
                });
            }

            let af_cells: Vec<&str> = (layout.af_start_col..record.len()).map(cell).collect();

            // The default cell usually repeats the pin name (GPIO is the
            // reset function); only a differing, non-empty cell selects
            // another column. No match falls back to column 0.
            let default_cell = cell(layout.default_af_col);
            let default_af = if !default_cell.is_empty() && default_cell != name {
                af_cells.iter().position(|c| *c == default_cell).unwrap_or(0)
            } else {
                0
            };

            let mut pin = Pin::new(name, port, port_pin, pin_number, default_af);
            for (column, raw) in af_cells.iter().enumerate() {
                if let Some(token) = parse_af_token(raw) {
                    pin.alternate_functions
                        .push(AlternateFunction::new(raw, column, &token, name));
                }
            }
            self.pins.push(pin);
        }
        Ok(())
    }

    /// Ingest the AF table from a file path.
    pub fn ingest_af_file(&mut self, path: &Path, layout: &AfTableLayout) -> Result<()> {
        self.ingest_af_table(File::open(path)?, layout)
    }

    /// Ingest the board table, marking referenced pins as exposed.
    ///
    /// The identifying cell at `pin_col` is matched by package pin
    /// number when numeric, by symbolic name otherwise. Rows naming
    /// something the registry doesn't know (test points, power rails,
    /// reserved entries) are ignored.
    pub fn ingest_board_table<R: Read>(&mut self, reader: R, pin_col: usize) -> Result<()> {
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        for record in rows.records() {
            let record = record?;
            let cell = record.get(pin_col).unwrap_or("").trim();
            let pin = match cell.parse::<u32>() {
                Ok(number) => self.find_by_number_mut(number),
                Err(_) => self.find_by_name_mut(cell),
            };
            if let Some(pin) = pin {
                pin.exposed_on_board = true;
            }
        }
        Ok(())
    }

    /// Ingest the board table from a file path.
    pub fn ingest_board_file(&mut self, path: &Path, pin_col: usize) -> Result<()> {
        self.ingest_board_table(File::open(path)?, pin_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const AF_TABLE: &str = "\
Pin,Name,Default,AF0,AF1
12,PA0,,U0_RX,SSI0_RX
13,PA1,SSI0_TX,U0_TX,SSI0_TX
28,PE0,,,ADC_AIN3
";

    fn ingest(af_table: &str) -> PinRegistry {
        let mut registry = PinRegistry::new();
        registry
            .ingest_af_table(af_table.as_bytes(), &AfTableLayout::default())
            .unwrap();
        registry
    }

    #[test]
    fn test_af_table_ingestion() {
        let registry = ingest(AF_TABLE);
        // Header row skipped, three pin rows kept, in row order.
        let names: Vec<_> = registry.pins().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["PA0", "PA1", "PE0"]);

        let pa0 = &registry.pins()[0];
        assert_eq!((pa0.port, pa0.port_pin, pa0.pin_number), ('A', 0, 12));
        assert_eq!(pa0.alternate_functions.len(), 2);
        assert_eq!(pa0.alternate_functions[0].name, "U0_RX");
        assert_eq!(pa0.alternate_functions[0].mux_index, 0);
        assert_eq!(pa0.alternate_functions[1].name, "SSI0_RX");
        assert_eq!(pa0.alternate_functions[1].mux_index, 1);
        assert!(!pa0.exposed_on_board);
    }

    #[test]
    fn test_default_af_resolution() {
        let registry = ingest(AF_TABLE);
        // Empty default cell falls back to column 0.
        assert_eq!(registry.pins()[0].default_af, 0);
        // Default cell matching the second AF column resolves to 1.
        assert_eq!(registry.pins()[1].default_af, 1);
    }

    #[test]
    fn test_default_af_without_match_falls_back_to_zero() {
        let registry = ingest("7,PB2,I2C0_SCL,U1_RX,CAN0_TX\n");
        assert_eq!(registry.pins()[0].default_af, 0);
    }

    #[test]
    fn test_non_taxonomy_cells_are_skipped() {
        let registry = ingest("28,PE0,,GPIO,ADC_AIN3,-\n");
        let pe0 = &registry.pins()[0];
        assert_eq!(pe0.alternate_functions.len(), 1);
        assert_eq!(pe0.alternate_functions[0].name, "ADC_AIN3");
        // Column offset survives the skipped cells.
        assert_eq!(pe0.alternate_functions[0].mux_index, 1);
    }

    #[test]
    fn test_non_pin_rows_are_skipped() {
        // Too-short name, wrong prefix, blank line: none of these abort.
        let registry = ingest("1,X1,,U0_RX\n,,,\n2,NC,,\n3,PA5,,U1_TX\n");
        let names: Vec<_> = registry.pins().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["PA5"]);
    }

    #[test]
    fn test_invalid_pin_number_is_fatal() {
        let mut registry = PinRegistry::new();
        let err = registry
            .ingest_af_table("N/A,PA0,,U0_RX\n".as_bytes(), &AfTableLayout::default())
            .unwrap_err();
        match err {
            GenError::InvalidPinNumber { cell, pin } => {
                assert_eq!(cell, "N/A");
                assert_eq!(pin, "PA0");
            }
            other => panic!("expected InvalidPinNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_pin_row_is_fatal() {
        let mut registry = PinRegistry::new();
        let err = registry
            .ingest_af_table(
                "12,PA0,,U0_RX\n13,PA0,,U0_TX\n".as_bytes(),
                &AfTableLayout::default(),
            )
            .unwrap_err();
        assert!(matches!(err, GenError::DuplicatePin { .. }));
    }

    #[test]
    fn test_board_table_by_number_and_name() {
        let mut registry = ingest(AF_TABLE);
        registry
            .ingest_board_table("J1.3,12,GPIO\nJ1.4,PE0,GPIO\n".as_bytes(), 1)
            .unwrap();
        let exposed: Vec<_> = registry.exposed_pins().map(|p| p.name.as_str()).collect();
        assert_eq!(exposed, ["PA0", "PE0"]);
    }

    #[test]
    fn test_board_table_unknown_references_ignored() {
        let mut registry = ingest(AF_TABLE);
        registry
            .ingest_board_table("x,99,\ny,PZ9,\nz,,\nshort\n".as_bytes(), 1)
            .unwrap();
        assert_eq!(registry.exposed_pins().count(), 0);
    }

    #[test]
    fn test_ingest_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let af_path = dir.path().join("af.csv");
        let board_path = dir.path().join("board.csv");
        std::fs::File::create(&af_path)
            .unwrap()
            .write_all(AF_TABLE.as_bytes())
            .unwrap();
        std::fs::File::create(&board_path)
            .unwrap()
            .write_all(b"J1.3,12\n")
            .unwrap();

        let mut registry = PinRegistry::new();
        registry
            .ingest_af_file(&af_path, &AfTableLayout::default())
            .unwrap();
        registry.ingest_board_file(&board_path, 1).unwrap();
        let exposed: Vec<_> = registry.exposed_pins().map(|p| p.name.as_str()).collect();
        assert_eq!(exposed, ["PA0"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let mut registry = PinRegistry::new();
        assert!(registry
            .ingest_af_file(Path::new("/no/such/table.csv"), &AfTableLayout::default())
            .is_err());
    }
}
