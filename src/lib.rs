//! utm_links library: UTM link generation and spreadsheet export
//!
//! This library decorates product URLs with the four UTM campaign parameters
//! (`utm_source`, `utm_medium`, `utm_campaign`, `utm_content`), either for a
//! single explicit URL or for a whole candidate list, and exports the result
//! as a single-sheet spreadsheet (XLSX or CSV).
//!
//! # Example
//!
//! ```no_run
//! use utm_links::{run_generate, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://loja.freecook.com.br/fritadeira-af500".into()),
//!     export: true,
//!     ..Default::default()
//! };
//!
//! let report = run_generate(config).await?;
//! println!("Generated {} links", report.links.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod compose;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod params;
mod session;
mod sink;
mod source;

// Re-export public API
pub use compose::{compose_utm_url, generate_links, GeneratedLink};
pub use config::{Config, LogFormat, LogLevel, Vocabulary};
pub use error_handling::{ExportError, InitializationError, SourceFetchError, VocabularyError};
pub use export::{ExportFormat, ExportOptions};
pub use params::{UtmField, UtmParams};
pub use run::{run_generate, run_generate_with, GenerateReport};
pub use session::Session;
pub use sink::{LocalSink, MemorySink, Sink};
pub use source::{fetch_candidates, load_candidates, parse_candidate_lines, read_candidate_file};

// Internal run module (contains the main generation logic)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::compose::GeneratedLink;
    use crate::config::{Config, Vocabulary};
    use crate::export::{self, ExportFormat, ExportOptions};
    use crate::params::UtmField;
    use crate::session::Session;
    use crate::sink::{LocalSink, Sink};
    use crate::source::load_candidates;

    /// Results of a link generation run.
    ///
    /// Contains the generated links and summary metadata about the completed
    /// run.
    #[derive(Debug, Clone)]
    pub struct GenerateReport {
        /// Generated links, in generation order
        pub links: Vec<GeneratedLink>,
        /// Number of candidate URLs that were available to the run
        pub candidate_count: usize,
        /// Path of the exported document, when an export was requested
        pub exported: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a link generation with the provided configuration.
    ///
    /// This is the main entry point for the library. It resolves the
    /// vocabulary, obtains the candidate list (unless an explicit URL makes
    /// it unnecessary), decorates the URLs, prints each link, and writes the
    /// export document when one was requested.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A vocabulary file was given but cannot be loaded
    /// - The HTTP client cannot be initialized
    /// - The export document cannot be serialized or written
    ///
    /// A failing candidate list fetch is not an error; the run continues
    /// with an empty list and a warning.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use utm_links::{run_generate, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     url: Some("https://loja.freecook.com.br/af500".into()),
    ///     ..Default::default()
    /// };
    /// let report = run_generate(config).await?;
    /// println!("Generated {} links", report.links.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_generate(config: Config) -> Result<GenerateReport> {
        run_generate_with(config, &LocalSink).await
    }

    /// Runs a link generation against a caller-provided [`Sink`].
    ///
    /// Identical to [`run_generate`] except that link hand-off and document
    /// writing go through `sink`, which lets tests and embedders capture the
    /// output instead of touching stdout and the filesystem.
    pub async fn run_generate_with(config: Config, sink: &dyn Sink) -> Result<GenerateReport> {
        let start_time = Instant::now();

        let vocabulary = Vocabulary::resolve(config.vocabulary.as_deref())
            .context("Failed to load vocabulary")?;

        // An empty URL argument counts as no override
        let explicit = config.url.as_deref().filter(|url| !url.is_empty());

        // The candidate list is only needed when no explicit URL overrides it
        let candidates = if explicit.is_none() {
            load_candidates(&config)
                .await
                .context("Failed to initialize HTTP client")?
        } else {
            Vec::new()
        };
        let candidate_count = candidates.len();

        let mut session = Session::new(vocabulary, candidates);
        if let Some(url) = explicit {
            session.set_search_url(url);
        }
        let overrides = [
            (UtmField::Source, config.source.as_deref()),
            (UtmField::Medium, config.medium.as_deref()),
            (UtmField::Campaign, config.campaign.as_deref()),
            (UtmField::Content, config.content.as_deref()),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                session.apply_param_change(field, value);
            }
        }

        session.generate();
        if session.links().is_empty() {
            info!("No links generated: no explicit URL and the candidate list is empty");
        }

        for link in session.links() {
            if let Err(e) = sink.copy_text(&link.utm_url) {
                // A single failed hand-off should not abort the batch
                warn!("Failed to hand off link {}: {}", link.utm_url, e);
            }
        }

        let exported = if config.export || config.output.is_some() {
            let options = ExportOptions {
                format: config.format,
                output: config.output.clone(),
                brand: config.brand.clone(),
            };
            let bytes = match options.format {
                ExportFormat::Xlsx => export::write_xlsx(session.links()),
                ExportFormat::Csv => export::write_csv(session.links()),
            }
            .context("Failed to serialize export document")?;

            let name = options.file_name();
            let path = sink
                .write_document(&name, &bytes)
                .with_context(|| format!("Failed to write export document {}", name.display()))?;
            info!("Exported {} link(s) to {}", session.links().len(), path.display());
            Some(path)
        } else {
            None
        };

        Ok(GenerateReport {
            links: session.links().to_vec(),
            candidate_count,
            exported,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
