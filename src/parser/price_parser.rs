use crate::config::RegionalTokens;
use crate::model::{ConfigError, Extraction, ParseResult};
use crate::parser::rules::{build_rules, PriceRule};
use std::sync::LazyLock;

pub trait TextParser: Send + Sync {
    /// Keeps "matched but unusable" apart from "no match".
    fn extract_detailed(&self, text: &str) -> Extraction;

    fn extract(&self, text: &str) -> ParseResult {
        self.extract_detailed(text).into_result()
    }
}

/// Applies the price rules in priority order; the first rule that matches decides.
#[derive(Debug, Clone)]
pub struct PriceExtractor {
    rules: Vec<PriceRule>,
}

impl PriceExtractor {
    pub fn new(tokens: &RegionalTokens) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: build_rules(tokens)?,
        })
    }

    pub fn rules(&self) -> &[PriceRule] {
        &self.rules
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new(&RegionalTokens::default()).expect("built-in price patterns must compile")
    }
}

impl TextParser for PriceExtractor {
    // A malformed match still stops evaluation of lower priority rules.
    fn extract_detailed(&self, text: &str) -> Extraction {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(text))
            .unwrap_or(Extraction::NoMatch)
    }
}

static DEFAULT_EXTRACTOR: LazyLock<PriceExtractor> = LazyLock::new(PriceExtractor::default);

/// Extracts a unit price using the built-in Russian label formats.
pub fn extract(text: &str) -> ParseResult {
    DEFAULT_EXTRACTOR.extract(text)
}
