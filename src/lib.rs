pub mod capture;
pub mod config;
pub mod display;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod pipeline;

pub use model::{CanonicalUnit, ParseResult};
pub use parser::{extract, PriceExtractor, TextParser};
