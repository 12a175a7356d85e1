// Licensed under the Apache-2.0 license

//! Symbol-interning list emitter.
//!
//! The generated list seeds the build-time qstr interning step, and that
//! step diffs the file to decide whether to rebuild, so the output must
//! be byte-stable across regenerations: both sections are deduplicated
//! and emitted in lexicographic order.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::registry::PinRegistry;

pub fn generate_symbol_list(registry: &PinRegistry) -> String {
    let mut pin_names = BTreeSet::new();
    let mut af_names = BTreeSet::new();
    for pin in registry.exposed_pins() {
        pin_names.insert(pin.name.as_str());
        for af in &pin.alternate_functions {
            af_names.insert(af.name.as_str());
        }
    }

    let mut out = String::new();
    writeln!(out, "// Board pins").unwrap();
    for name in &pin_names {
        writeln!(out, "Q({name})").unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "// Pin AFs").unwrap();
    for name in &af_names {
        writeln!(out, "Q({name})").unwrap();
    }
    out
}
