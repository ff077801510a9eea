// Drives frames from a source through the extractor into a display sink.
use crate::capture::FrameSource;
use crate::display::DisplaySink;
use crate::model::{Extraction, PipelineError};
use crate::parser::TextParser;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub frames: u64,
    pub found: u64,
    pub malformed: u64,
}

impl PipelineSummary {
    pub fn not_found(&self) -> u64 {
        self.frames - self.found
    }
}

/// Processes frames in arrival order until the source is exhausted.
pub async fn run<S, P, D>(
    source: &mut S,
    parser: &P,
    sink: &mut D,
) -> Result<PipelineSummary, PipelineError>
where
    S: FrameSource + ?Sized,
    P: TextParser + ?Sized,
    D: DisplaySink + ?Sized,
{
    let mut summary = PipelineSummary::default();

    while let Some(frame) = source.next_frame().await? {
        summary.frames += 1;

        let extraction = parser.extract_detailed(&frame.text);
        match extraction {
            Extraction::Matched { kind, value, .. } => {
                summary.found += 1;
                debug!("Frame #{}: {:?} label -> {:.2}", frame.sequence, kind, value);
            }
            Extraction::Malformed { kind, reason } => {
                summary.malformed += 1;
                debug!("Frame #{}: {:?} label rejected: {}", frame.sequence, kind, reason);
            }
            Extraction::NoMatch => {
                debug!("Frame #{}: no price label", frame.sequence);
            }
        }

        sink.show(&frame, &extraction.into_result()).await?;
    }

    info!(
        "Processed {} frames: {} found, {} not found ({} malformed)",
        summary.frames,
        summary.found,
        summary.not_found(),
        summary.malformed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::TextBlockSource;
    use crate::config::DisplayConfig;
    use crate::display::ConsoleSink;
    use crate::model::{ParseResult, RecognizedFrame, SinkError, SourceError};
    use crate::parser::PriceExtractor;

    #[tokio::test]
    async fn renders_one_line_per_frame() {
        let input = "Молоко\n80р/л\n\nСыр 25р за 100г\n\nхлеб\n\n25р за 0г\n";
        let mut source = TextBlockSource::new(input.as_bytes());
        let mut sink = ConsoleSink::new(Vec::new(), &DisplayConfig::default());

        let summary = run(&mut source, &PriceExtractor::default(), &mut sink)
            .await
            .unwrap();

        assert_eq!(
            summary,
            PipelineSummary { frames: 4, found: 2, malformed: 1 }
        );
        assert_eq!(summary.not_found(), 2);

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "Price per liter: 80.00 ₽\nPrice per kilogram: 250.00 ₽\nNot found\nNot found\n"
        );
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl FrameSource for FailingSource {
        async fn next_frame(&mut self) -> Result<Option<RecognizedFrame>, SourceError> {
            Err(SourceError::Io(std::io::Error::other("camera gone")))
        }
    }

    struct CollectingSink(Vec<ParseResult>);

    #[async_trait::async_trait]
    impl DisplaySink for CollectingSink {
        async fn show(&mut self, _frame: &RecognizedFrame, result: &ParseResult) -> Result<(), SinkError> {
            self.0.push(*result);
            Ok(())
        }
    }

    #[tokio::test]
    async fn source_errors_end_the_run() {
        let mut sink = CollectingSink(Vec::new());
        let result = run(&mut FailingSource, &PriceExtractor::default(), &mut sink).await;

        assert!(matches!(result, Err(PipelineError::Source(_))));
        assert!(sink.0.is_empty());
    }

    #[tokio::test]
    async fn works_through_trait_objects() {
        let mut source: Box<dyn FrameSource> = Box::new(TextBlockSource::new("70р за 940мл".as_bytes()));
        let parser: Box<dyn TextParser> = Box::new(PriceExtractor::default());
        let mut sink = CollectingSink(Vec::new());

        let summary = run(source.as_mut(), parser.as_ref(), &mut sink).await.unwrap();

        assert_eq!(summary.found, 1);
        assert_eq!(
            sink.0,
            vec![ParseResult::Found {
                unit: crate::model::CanonicalUnit::Liter,
                value: 74.47
            }]
        );
    }
}
