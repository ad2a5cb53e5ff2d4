// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scrollpress -- convert a tall scrollshot image into a paginated,
// optionally searchable PDF.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use scrollpress_core::config::{ConvertConfig, NumberingSpec, TitleSpec};
use scrollpress_core::error::Result;
use scrollpress_core::types::{
    CornerPosition, TitleAlignment, lookup_page_size, page_size_names, title_from_filename,
};
use scrollpress_core::units::parse_margin;
use scrollpress_document::convert_image;

#[derive(Parser)]
#[command(name = "scrollpress")]
#[command(version)]
#[command(about = "Convert a tall scrollshot image to a multi-page PDF", long_about = None)]
struct Cli {
    /// Input image file
    #[arg(value_name = "IMAGE")]
    input: PathBuf,

    /// Output PDF file (default: input name with a .pdf extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Page size name; append "-landscape" to swap width and height
    #[arg(short, long, default_value = "a4")]
    page_size: String,

    /// Margin on all sides: "10mm", "10px", or a bare pixel count
    #[arg(short, long, default_value = "10mm")]
    margin: String,

    /// Minimum blank-run height in pixels to qualify as a page-break point
    #[arg(short = 'g', long, default_value_t = 50)]
    min_gap: u32,

    /// Fraction of non-background pixels a row may contain and still count
    /// as blank (0.0 to 1.0)
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    blank_ratio: f64,

    /// Fail instead of cutting through a content block
    #[arg(long)]
    no_split_content: bool,

    /// Number of columns per page (default: auto-calculated)
    #[arg(short, long)]
    columns: Option<u32>,

    /// Gap between columns in points
    #[arg(long, default_value_t = 20.0)]
    column_gap: f64,

    /// Disable page numbers
    #[arg(long)]
    no_page_numbers: bool,

    /// Position of page numbers
    #[arg(long, value_enum, default_value = "bottom-left")]
    number_position: NumberPosition,

    /// Font for page numbers
    #[arg(long, default_value = "Helvetica")]
    number_font: String,

    /// Font size for page numbers in points
    #[arg(long, default_value_t = 10.0)]
    number_size: f64,

    /// Also number the first page (skipped by default)
    #[arg(long)]
    number_first_page: bool,

    /// Add a title to the first page; "from-filename" derives it from the
    /// input name
    #[arg(long)]
    title: Option<String>,

    /// Position of the title
    #[arg(long, value_enum, default_value = "center")]
    title_position: TitlePosition,

    /// Font for the title
    #[arg(long, default_value = "Helvetica-Bold")]
    title_font: String,

    /// Font size for the title in points
    #[arg(long, default_value_t = 14.0)]
    title_size: f64,

    /// Page range to output: N, N-M, N-, or -M
    #[arg(long)]
    page_range: Option<String>,

    /// Add an invisible OCR text layer so the PDF is searchable
    #[arg(long)]
    ocr: bool,

    /// OCR language tag
    #[arg(long, default_value = "eng")]
    ocr_lang: String,

    /// Show detailed debug information
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NumberPosition {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl From<NumberPosition> for CornerPosition {
    fn from(position: NumberPosition) -> Self {
        match position {
            NumberPosition::BottomLeft => Self::BottomLeft,
            NumberPosition::BottomRight => Self::BottomRight,
            NumberPosition::TopLeft => Self::TopLeft,
            NumberPosition::TopRight => Self::TopRight,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TitlePosition {
    Left,
    Center,
    Right,
}

impl From<TitlePosition> for TitleAlignment {
    fn from(position: TitlePosition) -> Self {
        match position {
            TitlePosition::Left => Self::Left,
            TitlePosition::Center => Self::Center,
            TitlePosition::Right => Self::Right,
        }
    }
}

fn parse_ratio(value: &str) -> std::result::Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("blank ratio must be between 0.0 and 1.0, got {ratio}"))
    }
}

/// Build the conversion config from parsed arguments.
fn build_config(cli: &Cli) -> Result<ConvertConfig> {
    let (page_width, page_height) = lookup_page_size(&cli.page_size)?;
    let margin = parse_margin(&cli.margin)?;

    let title = cli.title.as_deref().map(|raw| {
        let text = if raw == "from-filename" {
            title_from_filename(&cli.input.to_string_lossy())
        } else {
            raw.to_string()
        };
        TitleSpec {
            text,
            position: cli.title_position.into(),
            font: cli.title_font.clone(),
            size: cli.title_size,
        }
    });

    Ok(ConvertConfig {
        page_width,
        page_height,
        margin,
        min_gap_size: cli.min_gap,
        blank_ratio: cli.blank_ratio,
        no_split_content: cli.no_split_content,
        columns: cli.columns,
        column_gap: cli.column_gap,
        numbering: NumberingSpec {
            enabled: !cli.no_page_numbers,
            position: cli.number_position.into(),
            font: cli.number_font.clone(),
            size: cli.number_size,
            skip_first: !cli.number_first_page,
        },
        title,
        page_range: cli.page_range.clone(),
        ocr: cli.ocr,
        ocr_language: cli.ocr_lang.clone(),
    })
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("pdf"));

    let summary = convert_image(&cli.input, &output, &config)?;

    println!(
        "Successfully created PDF: {} ({} page{}, {} column{})",
        output.display(),
        summary.written_pages,
        if summary.written_pages == 1 { "" } else { "s" },
        summary.columns,
        if summary.columns == 1 { "" } else { "s" },
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            if matches!(
                err,
                scrollpress_core::ScrollpressError::UnknownPageSize { .. }
            ) {
                eprintln!("Valid page sizes: {}", page_size_names().join(", "));
            }
            ExitCode::FAILURE
        }
    }
}
