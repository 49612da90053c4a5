//! Fuzz target for the nested field element walker.
//!
//! Feeds the data straight to the Old BSS to New BSS Information table with
//! a cell identification discriminator taken from the first byte, so Cell
//! Load Information Groups nest without needing a valid BSSMAP message.

#![no_main]

use celldissect_core::engine::{decode_elements, DecodeContext, DecoderConfig};
use celldissect_core::protocol::bssmap::{CELL_DISCRIMINATOR, OLD_BSS_FIELD_ELEMENTS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&discriminator, elements)) = data.split_first() else {
        return;
    };

    let mut ctx = DecodeContext::new(DecoderConfig::default());
    ctx.set_scratch(CELL_DISCRIMINATOR, (discriminator & 0x0f) as u64);

    let _ = decode_elements(&OLD_BSS_FIELD_ELEMENTS, "fuzz", elements, 0, &mut ctx);
    assert_eq!(ctx.depth(), 0);
});
