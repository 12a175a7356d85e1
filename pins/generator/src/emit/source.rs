// Licensed under the Apache-2.0 license

//! C source emitter: per-pin AF arrays, pin objects, and the two
//! name-keyed lookup dicts.

use std::fmt::Write;

use crate::model::{AlternateFunction, Pin};
use crate::registry::PinRegistry;

/// Render the generated C source for every board-exposed pin.
///
/// Each pin contributes its AF array (or a NULL placeholder when it has
/// none) and one `PIN()` object referencing it. The same exposed set is
/// then rendered twice more as the `board`- and `cpu`-scoped lookup
/// dicts; the duplication is intentional, giving callers two equivalent
/// namespaces over identical contents.
pub fn generate_source(registry: &PinRegistry) -> String {
    let mut out = String::new();
    for pin in registry.exposed_pins() {
        write_pin(&mut out, pin);
    }
    write_named_dict(&mut out, "board", registry);
    write_named_dict(&mut out, "cpu", registry);
    writeln!(out).unwrap();
    out
}

fn write_pin(out: &mut String, pin: &Pin) {
    writeln!(out, "// {}", pin.name).unwrap();
    if pin.alternate_functions.is_empty() {
        writeln!(
            out,
            "const pin_obj_t pin_{:<3}_obj = PIN({:<6}, {}, {:>3}, {:>2}, NULL, 0, 0);",
            pin.name, pin.name, pin.port, pin.port_pin, pin.pin_number
        )
        .unwrap();
        writeln!(out).unwrap();
        return;
    }
    writeln!(out, "const pin_af_obj_t pin_{}_af[] = {{", pin.name).unwrap();
    for af in &pin.alternate_functions {
        write_af(out, af);
    }
    writeln!(out, "}};").unwrap();
    writeln!(
        out,
        "const pin_obj_t pin_{:<3}_obj = PIN({:<6}, {}, {:>3}, {:>2}, pin_{}_af, {}, {});",
        pin.name,
        pin.name,
        pin.port,
        pin.port_pin,
        pin.pin_number,
        pin.name,
        pin.default_af,
        pin.alternate_functions.len()
    )
    .unwrap();
    writeln!(out).unwrap();
}

/// One encoded AF row. Three record shapes: a mux-0 AF needs no routing
/// configuration, an AF with no mnemonic has no driver-library pin-map
/// constant to reference, and the general case carries both.
fn write_af(out: &mut String, af: &AlternateFunction) {
    if af.mux_index == 0 {
        writeln!(
            out,
            "    AF_AN({:<14}, {:>4}, {:<4}, {:>4}, {:<6}),    // {}",
            af.name, af.mux_index, af.family, af.unit, af.signal_type, af.name
        )
        .unwrap();
    } else if af.mnemonic.is_empty() {
        writeln!(
            out,
            "    AF_SL({:<14}, {:>4}, {:<4}, {:>4}, {:<12}, {:<3}),    // {}",
            af.name, af.mux_index, af.family, af.unit, af.signal_type, af.pin_name, af.name
        )
        .unwrap();
    } else {
        writeln!(
            out,
            "    AF_ML({:<14}, {:>4}, {:<4}, {:>4}, {:<6}, {:<4}, {:<3}),    // {}",
            af.name,
            af.mux_index,
            af.family,
            af.unit,
            af.signal_type,
            af.mnemonic,
            af.pin_name,
            af.name
        )
        .unwrap();
    }
}

fn write_named_dict(out: &mut String, label: &str, registry: &PinRegistry) {
    writeln!(out).unwrap();
    writeln!(
        out,
        "STATIC const mp_rom_map_elem_t pin_{label}_pins_locals_dict_table[] = {{"
    )
    .unwrap();
    for pin in registry.exposed_pins() {
        writeln!(
            out,
            "    {{ MP_ROM_QSTR(MP_QSTR_{:<3}), MP_ROM_PTR(pin_{:<3}) }},",
            pin.name, pin.name
        )
        .unwrap();
    }
    writeln!(out, "}};").unwrap();
    writeln!(
        out,
        "MP_DEFINE_CONST_DICT(pin_{label}_pins_locals_dict, pin_{label}_pins_locals_dict_table);"
    )
    .unwrap();
}
