// Licensed under the Apache-2.0 license

//! The fixed catalog of alternate-function families on the target chip
//! family.
//!
//! Each family is described by a single [`FamilyDescriptor`] capturing
//! every naming convention the rest of the compiler needs: which
//! signal-type suffixes are valid, whether the chip numbers instances of
//! the family, whether compact identifiers omit the family name, and the
//! abbreviated mnemonic the datasheet and driver library use for some
//! families. The mnemonic derivation in [`crate::model`] is a single
//! dispatch over this descriptor.

/// Unit value recorded for families the chip does not number.
pub const NO_UNIT: i32 = -1;

/// Naming conventions for one alternate-function family.
#[derive(Debug, PartialEq, Eq)]
pub struct FamilyDescriptor {
    /// Family mnemonic as it appears in datasheet cells, e.g. `UART`.
    pub name: &'static str,
    /// Signal-type suffixes valid for this family. Untyped families
    /// carry a single empty suffix, so only a bare cell matches.
    pub signal_types: &'static [&'static str],
    /// Whether the chip numbers instances of this family (UART0, UART1, ...).
    pub numbered_unit: bool,
    /// Whether generated compact identifiers omit the family entirely.
    pub omit_mnemonic: bool,
    /// Shortened family name used in datasheet cells and compact
    /// identifiers, where the driver library has one.
    pub abbreviation: Option<&'static str>,
}

/// Every AF family the target chip family supports.
pub const FAMILIES: &[FamilyDescriptor] = &[
    FamilyDescriptor {
        name: "UART",
        signal_types: &["TX", "RX", "RTS", "CTS"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: Some("U"),
    },
    // SPI
    FamilyDescriptor {
        name: "SSI",
        signal_types: &["CLK", "TX", "RX", "FSS"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: None,
    },
    FamilyDescriptor {
        name: "I2C",
        signal_types: &["SDA", "SCL"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: None,
    },
    // 16 bit timer
    FamilyDescriptor {
        name: "TIM",
        signal_types: &["CCP0", "CCP1"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: Some("T"),
    },
    // 32 bit wide timer
    FamilyDescriptor {
        name: "WTIM",
        signal_types: &["CCP0", "CCP1"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: Some("WT"),
    },
    // Motion control
    FamilyDescriptor {
        name: "MTRL",
        signal_types: &[
            "PWM0", "PWM1", "PWM2", "PWM3", "PWM4", "PWM5", "PWM6", "PWM7", "FAULT0",
        ],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: Some("M"),
    },
    FamilyDescriptor {
        name: "ADC",
        signal_types: &[
            "AIN0", "AIN1", "AIN2", "AIN3", "AIN4", "AIN5", "AIN6", "AIN7", "AIN8", "AIN9",
            "AIN10", "AIN11",
        ],
        numbered_unit: false,
        omit_mnemonic: true,
        abbreviation: None,
    },
    // Analog comparator
    FamilyDescriptor {
        name: "COMP",
        signal_types: &["NEG", "POS", "OUT"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: Some("C"),
    },
    // Quadrature encoder interface
    FamilyDescriptor {
        name: "QEI",
        signal_types: &["PHA0", "PHA1", "PHB0", "PHB1", "IDX0", "IDX1"],
        numbered_unit: false,
        omit_mnemonic: true,
        abbreviation: None,
    },
    // Trace
    FamilyDescriptor {
        name: "TR",
        signal_types: &["CLK", "D0", "D1"],
        numbered_unit: false,
        omit_mnemonic: false,
        abbreviation: None,
    },
    FamilyDescriptor {
        name: "CAN",
        signal_types: &["TX", "RX"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: None,
    },
    FamilyDescriptor {
        name: "NMI",
        signal_types: &[""],
        numbered_unit: false,
        omit_mnemonic: false,
        abbreviation: None,
    },
    FamilyDescriptor {
        name: "JTAG",
        signal_types: &["TDO", "SWO", "TDI", "TMS", "SWDIO", "TCK", "SWCLK"],
        numbered_unit: false,
        omit_mnemonic: true,
        abbreviation: None,
    },
    FamilyDescriptor {
        name: "USB",
        signal_types: &["DM", "DP", "EPEN", "ID", "PFLT", "VBUS"],
        numbered_unit: true,
        omit_mnemonic: false,
        abbreviation: None,
    },
];

/// Look up the descriptor for a family token from a datasheet cell.
///
/// Datasheet cells spell some families by their abbreviation (`U0_RX`
/// rather than `UART0_RX`), so both spellings resolve.
pub fn family(token: &str) -> Option<&'static FamilyDescriptor> {
    FAMILIES
        .iter()
        .find(|f| f.name == token || f.abbreviation == Some(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(family("UART").unwrap().name, "UART");
        assert_eq!(family("SSI").unwrap().name, "SSI");
        assert_eq!(family("JTAG").unwrap().name, "JTAG");
    }

    #[test]
    fn test_lookup_by_abbreviation() {
        assert_eq!(family("U").unwrap().name, "UART");
        assert_eq!(family("T").unwrap().name, "TIM");
        assert_eq!(family("WT").unwrap().name, "WTIM");
        assert_eq!(family("M").unwrap().name, "MTRL");
        assert_eq!(family("C").unwrap().name, "COMP");
    }

    #[test]
    fn test_unknown_family() {
        assert!(family("GPIO").is_none());
        assert!(family("").is_none());
        assert!(family("uart").is_none()); // case sensitive
    }

    #[test]
    fn test_untyped_family_matches_empty_suffix_only() {
        let nmi = family("NMI").unwrap();
        assert!(nmi.signal_types.contains(&""));
        assert_eq!(nmi.signal_types.len(), 1);
    }

    #[test]
    fn test_abbreviated_families_are_numbered() {
        // The abbreviation+unit mnemonic rule only makes sense for
        // numbered families.
        for f in FAMILIES {
            if f.abbreviation.is_some() {
                assert!(f.numbered_unit, "{} abbreviated but not numbered", f.name);
            }
        }
    }

    #[test]
    fn test_mnemonic_omitting_families_are_unnumbered() {
        for f in FAMILIES {
            if f.omit_mnemonic {
                assert!(!f.numbered_unit, "{} omits mnemonic but is numbered", f.name);
            }
        }
    }
}
