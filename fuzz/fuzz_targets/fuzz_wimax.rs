//! Fuzz target for WiMAX MAC-PHY primitives.
//!
//! The first input byte picks the decoder settings so that strict mode,
//! unknown-message walking and small depth limits are covered too.

#![no_main]

use celldissect_core::{default_registry, dissect, DecoderConfig, Encapsulation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&settings, pdu)) = data.split_first() else {
        return;
    };

    let config = DecoderConfig {
        max_depth: (settings & 0x0f) as usize,
        strict: settings & 0x10 != 0,
        stop_on_unknown_message: settings & 0x20 != 0,
    };

    let registry = default_registry();
    let _ = dissect(&registry, Encapsulation::WimaxMacPhy, pdu, config);
});
