// Licensed under the Apache-2.0 license

//! C header emitter: one external-linkage declaration and one alias
//! macro per exposed pin.

use std::fmt::Write;

use crate::registry::PinRegistry;

pub fn generate_header(registry: &PinRegistry) -> String {
    let mut out = String::new();
    for pin in registry.exposed_pins() {
        writeln!(out, "extern const pin_obj_t pin_{:<3}_obj;", pin.name).unwrap();
        writeln!(
            out,
            "#define pin_{:<3} (&pin_{:<3}_obj)",
            pin.name, pin.name
        )
        .unwrap();
        writeln!(out).unwrap();
    }
    out
}
