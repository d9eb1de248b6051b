mod core;


pub use self::core::{GroupCodec, base58_decode, base58_encode, multibase_decode};
pub use self::core::{hex_decode, hex_encode};
