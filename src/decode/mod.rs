mod core;
mod group;
mod hex;
mod whole;

#[cfg(test)]
mod tests;

pub use self::core::{Decoder, READ_CHUNK};
pub use self::group::GroupDecoder;
pub use self::hex::HexDecoder;
pub use self::whole::{WholeDecoder, WholeKind};
