use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "pdfn", about = "Crop, merge and lay out PDF pages", version)]
struct Cli {
    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop and merge PDF files, optionally laying pages out on sheets
    Process {
        /// Input PDF files, merged in the given order
        #[arg(short, long, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Merged output PDF file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet layout for an additional laid-out PDF
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Draw a border around every placed page
        #[arg(long)]
        border: bool,

        /// Laid-out output PDF file (default: merged name + _4in1/_6in1)
        #[arg(long)]
        layout_output: Option<PathBuf>,

        #[command(flatten)]
        crop: CropArgs,

        /// Keep pages uncropped
        #[arg(long, conflicts_with_all = ["left", "top", "right", "bottom"])]
        no_crop: bool,

        /// Load job options from a JSON file; other arguments override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the effective job options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show statistics only, don't write any PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Lay out an already merged PDF on sheets
    Layout {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Sheet layout
        #[arg(long, default_value = "grid4", value_enum)]
        layout: LayoutArg,

        /// Draw a border around every placed page
        #[arg(long)]
        border: bool,

        /// Show statistics only, don't write any PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Crop every page of a PDF
    Crop {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        crop: CropArgs,
    },
}

/// Crop margins in points; unset sides use the defaults
#[derive(clap::Args, Default)]
struct CropArgs {
    /// Points trimmed from the left edge
    #[arg(long)]
    left: Option<f32>,

    /// Points trimmed from the top edge
    #[arg(long)]
    top: Option<f32>,

    /// Points trimmed from the right edge
    #[arg(long)]
    right: Option<f32>,

    /// Points trimmed from the bottom edge
    #[arg(long)]
    bottom: Option<f32>,
}

impl CropArgs {
    fn is_set(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .any(Option::is_some)
    }

    fn apply(&self, base: pdf_nup::CropMargins) -> pdf_nup::CropMargins {
        pdf_nup::CropMargins {
            left: self.left.unwrap_or(base.left),
            top: self.top.unwrap_or(base.top),
            right: self.right.unwrap_or(base.right),
            bottom: self.bottom.unwrap_or(base.bottom),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Merged document only
    None,
    /// 4 pages per portrait A4 sheet (2 x 2)
    Grid4,
    /// 6 pages per landscape A4 sheet (2 rows x 3 columns)
    Grid6,
}

impl From<LayoutArg> for pdf_nup::LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::None => Self::None,
            LayoutArg::Grid4 => Self::Grid4,
            LayoutArg::Grid6 => Self::Grid6,
        }
    }
}

/// Crop margins after command-line overrides.
///
/// Without crop flags the configured margins are kept as they are,
/// including a configuration that disables cropping.
fn resolve_crop(
    configured: Option<pdf_nup::CropMargins>,
    args: &CropArgs,
    no_crop: bool,
) -> Option<pdf_nup::CropMargins> {
    if no_crop {
        None
    } else if args.is_set() {
        Some(args.apply(configured.unwrap_or_default()))
    } else {
        configured
    }
}

fn print_statistics(stats: &pdf_nup::LayoutStatistics) {
    println!("Layout Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Pages per sheet: {}", stats.pages_per_sheet);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Pages on last sheet: {}", stats.last_sheet_pages);
    println!("  Blank cells: {}", stats.blank_cells);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose).context("Failed to install logger")?;

    match cli.command {
        Commands::Process {
            input,
            output,
            layout,
            border,
            layout_output,
            crop,
            no_crop,
            config,
            save_config,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => pdf_nup::JobOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load config: {}", path.display()))?,
                None => pdf_nup::JobOptions::default(),
            };

            if !input.is_empty() {
                options.input_files = input;
            }
            if let Some(output) = output {
                options.merged_output = output;
            } else if config.is_none() {
                bail!("No output file given (use --output or --config)");
            }
            if let Some(layout) = layout {
                options.layout.mode = layout.into();
            }
            if border {
                options.layout.with_border = true;
            }
            if layout_output.is_some() {
                options.layout_output = layout_output;
            }
            options.crop = resolve_crop(options.crop, &crop, no_crop);

            options.validate()?;

            if let Some(path) = &save_config {
                options
                    .save(path)
                    .await
                    .with_context(|| format!("Failed to save config: {}", path.display()))?;
                println!("Saved options → {}", path.display());
            }

            if stats_only {
                let documents = pdf_nup::load_multiple_pdfs(&options.input_files).await?;
                let stats =
                    pdf_nup::calculate_document_statistics(&documents, options.layout.mode)?;
                print_statistics(&stats);
                return Ok(());
            }

            let report = pdf_nup::run_job(&options).await?;
            println!(
                "Merged {} pages → {}",
                report.source_pages,
                report.merged_path.display()
            );
            if let Some(path) = &report.layout_path {
                println!(
                    "Laid out {} sheets → {}",
                    report.layout_sheets,
                    path.display()
                );
            }
        }

        Commands::Layout {
            input,
            output,
            layout,
            border,
            stats_only,
        } => {
            let options = pdf_nup::LayoutOptions::new(layout.into(), border);
            let document = pdf_nup::load_pdf(&input)
                .await
                .with_context(|| format!("Failed to load PDF: {}", input.display()))?;

            let stats = pdf_nup::calculate_statistics(document.get_pages().len(), options.mode);
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            match pdf_nup::layout_pdf(document, &options).await? {
                Some(laid_out) => {
                    pdf_nup::save_pdf(laid_out, &output).await?;
                    println!("Laid out → {}", output.display());
                }
                None => println!("Nothing to lay out, no file written"),
            }
        }

        Commands::Crop {
            input,
            output,
            crop,
        } => {
            let margins = crop.apply(pdf_nup::CropMargins::default());
            let mut document = pdf_nup::load_pdf(&input)
                .await
                .with_context(|| format!("Failed to load PDF: {}", input.display()))?;

            pdf_nup::crop_document(&mut document, &margins)?;
            pdf_nup::save_pdf(document, &output).await?;
            println!("Cropped → {}", output.display());
        }
    }

    Ok(())
}
