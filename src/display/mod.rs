// Display side: rendering results for the on-screen label

pub mod console;

pub use console::ConsoleSink;

use crate::config::Language;
use crate::model::{CanonicalUnit, ParseResult, RecognizedFrame, SinkError};

#[async_trait::async_trait]
pub trait DisplaySink: Send {
    async fn show(&mut self, frame: &RecognizedFrame, result: &ParseResult) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub per_kilogram: &'static str,
    pub per_liter: &'static str,
    pub currency: &'static str,
    pub not_found: &'static str,
}

impl Labels {
    pub const EN: Labels = Labels {
        per_kilogram: "Price per kilogram",
        per_liter: "Price per liter",
        currency: "₽",
        not_found: "Not found",
    };

    pub const RU: Labels = Labels {
        per_kilogram: "Цена за кг",
        per_liter: "Цена за литр",
        currency: "₽",
        not_found: "Не найдено",
    };

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::EN,
            Language::Ru => Self::RU,
        }
    }
}

pub fn render(result: &ParseResult, labels: &Labels) -> String {
    match result {
        ParseResult::Found { unit, value } => {
            let label = match unit {
                CanonicalUnit::Kilogram => labels.per_kilogram,
                CanonicalUnit::Liter => labels.per_liter,
            };
            format!("{}: {:.2} {}", label, value, labels.currency)
        }
        ParseResult::NotFound => labels.not_found.to_string(),
    }
}
