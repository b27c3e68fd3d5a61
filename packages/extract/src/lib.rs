#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Extraction pipeline for the LWF and ESIC state-wise PDFs.
//!
//! For each document the pipeline checks the input exists, extracts its
//! text, and writes the corresponding state table plus the raw text.
//! The tables come from the transcriptions in [`labour_compliance`]; the
//! extracted text is previewed and archived but does not change them.
//!
//! Nothing here returns an error to the caller. Every failure is logged
//! and reported as a [`DocumentOutcome`], so one broken document never
//! stops the other.

pub mod output;

use std::path::{Path, PathBuf};

use labour_compliance::matching::StateMatching;
use labour_compliance::{esic, lwf};
use labour_compliance_pdf::TextExtractor;

use crate::output::{OutputError, WrittenFiles};

/// Default directory holding the input PDFs.
pub const DEFAULT_DATA_DIR: &str = "/data";

/// Default LWF input file name.
pub const DEFAULT_LWF_PDF: &str = "LWF.pdf";

/// Default ESIC input file name.
pub const DEFAULT_ESIC_PDF: &str = "ESIC State Wise.pdf";

/// Default number of extracted characters echoed to stdout.
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// Resolved settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory holding the input PDFs.
    pub data_dir: PathBuf,
    /// Directory receiving the JSON and text outputs.
    pub output_dir: PathBuf,
    /// LWF input, relative to `data_dir`.
    pub lwf_pdf: PathBuf,
    /// ESIC input, relative to `data_dir`.
    pub esic_pdf: PathBuf,
    /// Characters of extracted text to echo to stdout.
    pub preview_chars: usize,
    /// How ESIC state names are matched.
    pub state_matching: StateMatching,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl ExtractConfig {
    /// Default settings rooted at `data_dir`, writing to
    /// `<data_dir>/scripts`.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            output_dir: data_dir.join("scripts"),
            data_dir,
            lwf_pdf: PathBuf::from(DEFAULT_LWF_PDF),
            esic_pdf: PathBuf::from(DEFAULT_ESIC_PDF),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            state_matching: StateMatching::default(),
        }
    }

    /// Full path of the input PDF for `kind`.
    #[must_use]
    pub fn input_path(&self, kind: DocumentKind) -> PathBuf {
        match kind {
            DocumentKind::Lwf => self.data_dir.join(&self.lwf_pdf),
            DocumentKind::Esic => self.data_dir.join(&self.esic_pdf),
        }
    }
}

/// The two source documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Labour Welfare Fund rates.
    Lwf,
    /// ESIC state-wise applicability.
    Esic,
}

impl DocumentKind {
    /// Both documents, in processing order.
    pub const ALL: &[Self] = &[Self::Lwf, Self::Esic];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lwf => "LWF",
            Self::Esic => "ESIC",
        }
    }

    /// Prefix of the output file names.
    #[must_use]
    pub const fn output_stem(self) -> &'static str {
        match self {
            Self::Lwf => "lwf",
            Self::Esic => "esic",
        }
    }

    /// Serializes this document's state table.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Json`] if serialization fails.
    pub fn table_json(self, state_matching: StateMatching) -> Result<String, OutputError> {
        match self {
            Self::Lwf => output::to_json(&lwf::monthly_table()),
            Self::Esic => output::to_json(&esic::applicability_table(state_matching.matcher())),
        }
    }
}

/// Why a document produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The input PDF does not exist.
    MissingInput(PathBuf),
    /// No backend extracted enough text.
    NoUsableText(PathBuf),
}

/// Result of processing one document.
#[derive(Debug)]
pub enum DocumentOutcome {
    /// Both output files were written.
    Written(WrittenFiles),
    /// The document was skipped before any output was written.
    Skipped(SkipReason),
    /// Text was extracted but the outputs could not be written.
    Failed(OutputError),
}

impl DocumentOutcome {
    /// Returns `true` if the outputs were written.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Outcome of a full run, one entry per document.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Per-document outcomes in processing order.
    pub outcomes: Vec<(DocumentKind, DocumentOutcome)>,
}

impl RunSummary {
    /// Number of documents whose outputs were written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_written())
            .count()
    }
}

/// Extracts, previews and writes one document.
#[must_use]
pub fn process_document(
    kind: DocumentKind,
    config: &ExtractConfig,
    backends: &[&dyn TextExtractor],
) -> DocumentOutcome {
    let input = config.input_path(kind);

    if !input.exists() {
        println!("{} not found at {}", file_label(&input), input.display());
        log::warn!("[{}] Input {} does not exist, skipping", kind.label(), input.display());
        return DocumentOutcome::Skipped(SkipReason::MissingInput(input));
    }

    println!("Extracting {} data from {}...", kind.label(), input.display());

    let Some(extracted) = labour_compliance_pdf::extract_text(&input, backends) else {
        println!("Failed to extract text from {}", file_label(&input));
        return DocumentOutcome::Skipped(SkipReason::NoUsableText(input));
    };

    let backend = extracted.backend;
    log::info!("[{}] Extracted text with {backend}", kind.label());

    println!("Extracted {} characters", extracted.char_count());
    println!();
    println!("First {} characters:", config.preview_chars);
    println!("{}", output::preview(&extracted.text, config.preview_chars));
    println!();

    match write_outputs(kind, config, &extracted.text) {
        Ok(files) => {
            println!();
            println!("Saved to: {}", files.json.display());
            println!("Full text saved to: {}", files.text.display());
            DocumentOutcome::Written(files)
        }
        Err(e) => {
            log::error!("[{}] Failed to write outputs: {e}", kind.label());
            DocumentOutcome::Failed(e)
        }
    }
}

fn write_outputs(
    kind: DocumentKind,
    config: &ExtractConfig,
    text: &str,
) -> Result<WrittenFiles, OutputError> {
    let json = kind.table_json(config.state_matching)?;

    println!("Parsed {} Data:", kind.label());
    println!("{json}");

    output::write_document(&config.output_dir, kind.output_stem(), &json, text)
}

/// Processes both documents and logs a summary.
#[must_use]
pub fn run(config: &ExtractConfig, backends: &[&dyn TextExtractor]) -> RunSummary {
    println!("PDF Data Extraction");
    println!("{}", "=".repeat(50));
    println!();

    let mut summary = RunSummary::default();

    for (i, &kind) in DocumentKind::ALL.iter().enumerate() {
        if i > 0 {
            println!();
            println!();
        }
        let outcome = process_document(kind, config, backends);
        summary.outcomes.push((kind, outcome));
    }

    log::info!(
        "Extraction complete: {}/{} documents written to {}",
        summary.written(),
        summary.outcomes.len(),
        config.output_dir.display()
    );

    summary
}

fn file_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
