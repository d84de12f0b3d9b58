use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "specwright=info";

/// Build the filter: `RUST_LOG` plus `directive`, falling back to the default
/// directive when `directive` does not parse.
pub fn filter_for(directive: &str) -> EnvFilter {
    let base = EnvFilter::from_default_env();
    match directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_DIRECTIVE.parse::<Directive>())
    {
        Ok(directive) => base.add_directive(directive),
        Err(_) => base,
    }
}

/// Install the global subscriber. Logs go to stderr so streamed text on
/// stdout stays clean.
pub fn init(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(directive))
        .with_writer(std::io::stderr)
        .try_init();
}
