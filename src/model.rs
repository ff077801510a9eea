// Core types: ParseResult, UnitKind, RecognizedFrame and error enums
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalUnit {
    Kilogram,
    Liter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    // "25р за 100г"
    PerMassSmall,
    // "70р за 940мл"
    PerVolumeSmall,
    // "250р/кг"
    PerMassLarge,
    // "80р/л"
    PerVolumeLarge,
}

impl UnitKind {
    pub fn canonical_unit(self) -> CanonicalUnit {
        match self {
            UnitKind::PerMassSmall | UnitKind::PerMassLarge => CanonicalUnit::Kilogram,
            UnitKind::PerVolumeSmall | UnitKind::PerVolumeLarge => CanonicalUnit::Liter,
        }
    }

    pub fn has_quantity(self) -> bool {
        matches!(self, UnitKind::PerMassSmall | UnitKind::PerVolumeSmall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseResult {
    Found { unit: CanonicalUnit, value: f64 },
    NotFound,
}

impl ParseResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ParseResult::Found { .. })
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResult::Found { unit: CanonicalUnit::Kilogram, value } => {
                write!(f, "Price per kilogram: {:.2} ₽", value)
            }
            ParseResult::Found { unit: CanonicalUnit::Liter, value } => {
                write!(f, "Price per liter: {:.2} ₽", value)
            }
            ParseResult::NotFound => write!(f, "Not found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    ZeroQuantity,
    MissingQuantity,
    QuantityOutOfRange,
    UnparsablePrice,
    NonFiniteValue,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::ZeroQuantity => "quantity is zero",
            MalformedReason::MissingQuantity => "quantity is missing",
            MalformedReason::QuantityOutOfRange => "quantity is not a valid integer",
            MalformedReason::UnparsablePrice => "price is not a number",
            MalformedReason::NonFiniteValue => "unit price is out of range",
        };
        f.write_str(text)
    }
}

/// Detailed extraction outcome, kept apart from `ParseResult` for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extraction {
    Matched {
        kind: UnitKind,
        unit: CanonicalUnit,
        value: f64,
    },
    Malformed {
        kind: UnitKind,
        reason: MalformedReason,
    },
    NoMatch,
}

impl Extraction {
    pub fn into_result(self) -> ParseResult {
        match self {
            Extraction::Matched { unit, value, .. } => ParseResult::Found { unit, value },
            Extraction::Malformed { .. } | Extraction::NoMatch => ParseResult::NotFound,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecognizedFrame {
    pub sequence: u64,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token list `{0}` is empty")]
    EmptyTokens(&'static str),
    #[error("failed to compile price pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read frame: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write result: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
