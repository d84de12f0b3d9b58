use std::path::PathBuf;

use clap::Parser;
use specwright_common::DocType;
use specwright_config::SpecwrightConfig;

/// Specwright: interview-driven requirements and design documents.
#[derive(Parser, Debug)]
#[command(name = "specwright", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model to start with.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Document type for /doc (unified, requirements, design).
    #[arg(long)]
    pub doc_type: Option<DocType>,

    /// Example document to imitate when writing documents.
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Directory for the generated document (default: a temp dir).
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Log directive override (e.g. debug, specwright=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Apply command-line values on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut SpecwrightConfig) {
        if let Some(ref model) = self.model {
            config.models.default = model.clone();
        }
        if let Some(doc_type) = self.doc_type {
            config.session.doc_type = doc_type;
        }
        if let Some(ref reference) = self.reference {
            config.session.reference_document = Some(reference.clone());
        }
        if let Some(ref dir) = self.output_dir {
            config.artifact.output_dir = Some(dir.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
