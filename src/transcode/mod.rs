mod core;


pub use self::core::{STREAM_CHUNK, run, transcode};
