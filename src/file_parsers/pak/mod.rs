pub mod parser;
pub mod types;

pub use parser::{parse_directory, resolve_extents};
pub use types::{DirectoryEntry, ResolvedExtent};
