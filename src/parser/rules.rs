use crate::config::RegionalTokens;
use crate::model::{ConfigError, Extraction, UnitKind};
use crate::normalizer::canonicalize;
use regex::Regex;

// Small units are checked before large ones.
pub const RULE_PRIORITY: [UnitKind; 4] = [
    UnitKind::PerMassSmall,
    UnitKind::PerVolumeSmall,
    UnitKind::PerMassLarge,
    UnitKind::PerVolumeLarge,
];

const PRICE_GROUP: &str = r"(\d+[.,]?\d*)";
const QUANTITY_GROUP: &str = r"(\d+)";

#[derive(Debug, Clone)]
pub struct PriceRule {
    kind: UnitKind,
    matcher: Regex,
}

impl PriceRule {
    pub fn compile(kind: UnitKind, tokens: &RegionalTokens) -> Result<Self, ConfigError> {
        let currency = alternation("currency", &tokens.currency)?;
        let separator = alternation("separators", &tokens.separators)?;
        let (unit_name, unit) = match kind {
            UnitKind::PerMassSmall => ("gram", &tokens.gram),
            UnitKind::PerVolumeSmall => ("milliliter", &tokens.milliliter),
            UnitKind::PerMassLarge => ("kilogram", &tokens.kilogram),
            UnitKind::PerVolumeLarge => ("liter", &tokens.liter),
        };
        if unit.is_empty() {
            return Err(ConfigError::EmptyTokens(unit_name));
        }
        let unit = regex::escape(unit);

        let pattern = if kind.has_quantity() {
            format!(r"{PRICE_GROUP}\s*{currency}\s*{separator}\s*{QUANTITY_GROUP}\s*{unit}")
        } else {
            format!(r"{PRICE_GROUP}\s*{currency}\s*{separator}\s*{unit}")
        };

        Ok(Self {
            kind,
            matcher: Regex::new(&pattern)?,
        })
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// `None` when the label format does not occur in `text`.
    /// Only the first occurrence is considered.
    pub fn apply(&self, text: &str) -> Option<Extraction> {
        let caps = self.matcher.captures(text)?;
        let price = caps.get(1)?.as_str();
        let quantity = caps.get(2).map(|m| m.as_str());
        Some(canonicalize(self.kind, price, quantity))
    }
}

pub fn build_rules(tokens: &RegionalTokens) -> Result<Vec<PriceRule>, ConfigError> {
    RULE_PRIORITY
        .iter()
        .map(|&kind| PriceRule::compile(kind, tokens))
        .collect()
}

fn alternation(name: &'static str, tokens: &[String]) -> Result<String, ConfigError> {
    let escaped: Vec<String> = tokens
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| regex::escape(t))
        .collect();
    if escaped.is_empty() {
        return Err(ConfigError::EmptyTokens(name));
    }
    Ok(format!("(?:{})", escaped.join("|")))
}
