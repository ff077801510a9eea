use price_calculator::capture::TextBlockSource;
use price_calculator::config::{resolve_config, DEFAULT_CONFIG_PATH};
use price_calculator::display::ConsoleSink;
use price_calculator::parser::PriceExtractor;
use price_calculator::pipeline;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr, results to stdout
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let explicit_path = std::env::args().nth(1);
    let config = match resolve_config(explicit_path.as_deref(), DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let extractor = match PriceExtractor::new(&config.tokens) {
        Ok(extractor) => extractor,
        Err(e) => {
            error!("Invalid price tokens: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "🚀 Reading recognized text from stdin ({} rules, language {:?})",
        extractor.rules().len(),
        config.display.language
    );

    let mut source = TextBlockSource::stdin();
    let mut sink = ConsoleSink::stdout(&config.display);

    match pipeline::run(&mut source, &extractor, &mut sink).await {
        Ok(summary) if summary.frames == 0 => {
            info!("No frames received.");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Pipeline stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
