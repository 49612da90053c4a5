//! Wire-level building blocks shared by the decoder and the test encoder.

mod length;
mod writer;

pub use length::{
    read_length, write_length, LengthCoding, EXTENSIBLE_LONG_MAX, EXTENSIBLE_SHORT_MAX,
};
pub use writer::ElementWriter;
