pub mod parser;
pub mod types;

pub use parser::parse_palette;
pub use types::Rgb;
