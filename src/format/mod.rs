mod core;


pub use self::core::{SOURCE_TOKENS, SourceFormat, TARGET_TOKENS, TargetFormat};
pub use self::core::{resolve_source, resolve_target};
