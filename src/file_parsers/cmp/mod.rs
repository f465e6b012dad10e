pub mod parser;
pub mod types;

pub use parser::parse_header;
pub use types::CmpHeader;
