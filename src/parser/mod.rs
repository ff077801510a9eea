// Price label recognition: ordered rules and the extractor that applies them

pub mod price_parser;
pub mod rules;

pub use price_parser::{extract, PriceExtractor, TextParser};
