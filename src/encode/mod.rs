mod core;


pub use self::core::{Base58Encoder, Encoder, GroupEncoder, HexEncoder};
