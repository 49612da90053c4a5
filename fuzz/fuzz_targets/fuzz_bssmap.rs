//! Fuzz target for the BSSAP/BSSMAP dissection chain.
//!
//! Exercises:
//! - BSSAP discriminator and length framing
//! - Message type dispatch and the ordered field walk
//! - Extensible length indicators (one or two octets)
//! - Old BSS to New BSS Information field element recursion

#![no_main]

use celldissect_core::{default_registry, dissect, DecoderConfig, Encapsulation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let registry = default_registry();

    // Both entry points: framed and bare
    for encapsulation in [Encapsulation::Bssap, Encapsulation::Bssmap] {
        let layers = dissect(&registry, encapsulation, data, DecoderConfig::default());
        for (_, result) in &layers {
            assert!(result.remaining.len() <= data.len());
        }
    }
});
