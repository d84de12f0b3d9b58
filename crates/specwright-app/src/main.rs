mod artifact;
mod cli;
mod dotenv;
mod logging;
mod repl;
mod transcript;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use specwright_ai::{ModelCatalog, OpenAiClient, OpenAiConfig, Session};
use specwright_common::SpecwrightError;
use specwright_config::{resolve_api_key, validation, SpecwrightConfig};

use crate::artifact::ArtifactWriter;
use crate::repl::Repl;

fn openai_config(config: &SpecwrightConfig, api_key: String) -> OpenAiConfig {
    OpenAiConfig::new(api_key)
        .with_base_url(config.provider.base_url.clone())
        .with_connect_timeout(Duration::from_secs(config.provider.connect_timeout.into()))
        .with_request_timeout(Duration::from_secs(config.provider.request_timeout.into()))
}

fn build_session(config: &SpecwrightConfig, client: OpenAiClient) -> Session {
    let catalog = ModelCatalog::new(
        config.models.available.iter().cloned(),
        config.models.default.clone(),
    );
    let mut session = Session::new(Arc::new(client), catalog)
        .with_doc_type(config.session.doc_type)
        .with_reference_document(config.session.reference_document.clone());
    if let Some(ref prompt) = config.session.system_prompt {
        session = session.with_system_prompt(prompt.clone());
    }
    session
}

async fn run(args: cli::Args) -> specwright_common::Result<()> {
    // Config first so its log level can apply; report load errors after logging is up
    let loaded = specwright_config::load_config(args.config.as_deref());
    let directive = args
        .log_level
        .clone()
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|c| c.logging.level.directive().to_string())
        })
        .unwrap_or_else(|| logging::DEFAULT_DIRECTIVE.to_string());
    logging::init(&directive);

    tracing::info!("Specwright v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded?;
    args.apply_overrides(&mut config);
    validation::validate(&config)?;
    tracing::info!(
        model = %config.models.default,
        base_url = %config.provider.base_url,
        doc_type = %config.session.doc_type,
        "Config loaded"
    );

    let api_key = resolve_api_key(&config)?;
    let client = OpenAiClient::new(openai_config(&config, api_key))
        .map_err(|e| SpecwrightError::Other(format!("failed to build HTTP client: {e}")))?;

    let session = build_session(&config, client);
    let artifact = ArtifactWriter::new(
        config.artifact.output_dir.clone(),
        config.artifact.file_name.clone(),
    );

    let mut repl = Repl::new(session, artifact);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl.run(stdin, &mut stdout).await?;

    if let Some(path) = repl.artifact().path() {
        tracing::info!(path = %path.display(), "Last document kept");
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything else
    dotenv::load_dotenv();

    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("specwright: {e}");
            ExitCode::FAILURE
        }
    }
}
