//! Core value types: colours, the fixed palette, and barcode decoding.

mod barcode;
mod colour;
mod palette;

pub use barcode::{decode, decode_valid, Barcode, DecodedBarcode, Rotation, TileDescriptor, BARCODE_LEN};
pub use colour::Colour;
pub use palette::{palette_entry, PaletteEntry, PALETTE};
