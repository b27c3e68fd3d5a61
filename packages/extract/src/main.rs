#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the labour compliance PDF extractor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use labour_compliance::matching::StateMatching;
use labour_compliance::{esic, lwf};
use labour_compliance_extract::{
    DEFAULT_DATA_DIR, DEFAULT_ESIC_PDF, DEFAULT_LWF_PDF, DEFAULT_PREVIEW_CHARS, ExtractConfig,
    output,
};

#[derive(Parser)]
#[command(
    name = "labour_compliance_extract",
    about = "Extract LWF and ESIC state tables from the state-wise PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    extract: ExtractArgs,
}

#[derive(Args)]
struct ExtractArgs {
    /// Directory containing the input PDFs
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Directory receiving the outputs (default: `<data-dir>/scripts`)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// LWF input file name, relative to the data directory
    #[arg(long, default_value = DEFAULT_LWF_PDF)]
    lwf_pdf: PathBuf,
    /// ESIC input file name, relative to the data directory
    #[arg(long, default_value = DEFAULT_ESIC_PDF)]
    esic_pdf: PathBuf,
    /// Number of extracted characters to echo for each document
    #[arg(long, default_value_t = DEFAULT_PREVIEW_CHARS)]
    preview_chars: usize,
    /// How ESIC state names are matched (`loose` or `alias`)
    #[arg(long, default_value = "loose")]
    state_matching: StateMatching,
}

impl ExtractArgs {
    fn into_config(self) -> ExtractConfig {
        let mut config = ExtractConfig::with_data_dir(self.data_dir);
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        config.lwf_pdf = self.lwf_pdf;
        config.esic_pdf = self.esic_pdf;
        config.preview_chars = self.preview_chars;
        config.state_matching = self.state_matching;
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract both PDFs and write the JSON and text outputs (default)
    Extract,
    /// Print the monthly LWF amounts as JSON without reading any PDF
    LwfTable,
    /// Print the ESIC applicability table as JSON without reading any PDF
    EsicTable,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = cli.extract.into_config();

    match cli.command.unwrap_or(Commands::Extract) {
        Commands::Extract => {
            let backends = labour_compliance_pdf::default_backends();
            let summary = labour_compliance_extract::run(&config, &backends);
            log::debug!("{} document(s) written", summary.written());
        }
        Commands::LwfTable => {
            println!("{}", output::to_json(&lwf::monthly_amounts())?);
        }
        Commands::EsicTable => {
            let table = esic::applicability_table(config.state_matching.matcher());
            println!("{}", output::to_json(&table)?);
        }
    }

    Ok(())
}
