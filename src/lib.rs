// In-place byte compaction reads clearer as an index loop
#![allow(clippy::needless_range_loop)]

/// Use mimalloc as the global allocator for all binaries.
/// Decoders and encoders allocate a short-lived Vec per chunk,
/// which is where mimalloc's thread-local caching pays off.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod codec;
pub mod common;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod transcode;

pub use error::TranscodeError;
pub use format::{SourceFormat, TargetFormat};
pub use transcode::{run, transcode};
