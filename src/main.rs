//! pdf-chunker CLI: convert a tree of PDFs into markdown chunks.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use miette::Result;

use pdf_chunker::chunker::{ChunkConfig, DEFAULT_MAX_CHARS};
use pdf_chunker::convert::{ConvertConfig, convert_tree};
use pdf_chunker::parser::pdf::PdfPageSource;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-chunker",
    version,
    about = "Convert a directory tree of PDFs into markdown chunk files"
)]
struct Cli {
    /// Directory searched recursively for PDF files.
    input_pdf_dir: PathBuf,

    /// Directory the markdown chunks are written to (mirrors the input tree).
    output_md_dir: PathBuf,

    /// Maximum characters per output file.
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
    chunk_size: usize,

    /// Stop at the first file that fails instead of warning and continuing.
    #[arg(long)]
    fail_fast: bool,
}

/// Parse arguments, exiting with status 1 on a usage error.
///
/// `--help` and `--version` still exit successfully.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

fn main() -> Result<ExitCode> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli();

    let config = ConvertConfig {
        input_dir: cli.input_pdf_dir,
        output_dir: cli.output_md_dir,
        chunk: ChunkConfig::new(cli.chunk_size)?,
        fail_fast: cli.fail_fast,
    };

    let report = convert_tree(&config, &PdfPageSource)?;
    println!("{report}");

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
