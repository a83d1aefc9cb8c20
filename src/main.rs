use clap::{Parser, Subcommand};
use quickshrink::config::AppConfig;
use quickshrink::output;
use quickshrink::presets::{CompressionLevel, SocialPreset};
use quickshrink::services::{DirExporter, FsSizer, JpegCodec, PathPicker};
use quickshrink::workflow::{CompressionReport, CompressionWorkflow, SelectOutcome, WorkflowError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quickshrink")]
#[command(about = "Photo compressor with quality presets and size savings reports")]
#[command(long_about = "\
Photo compressor with quality presets and size savings reports

Pick one or more photos, compress them with a quality preset (and an
optional social-media resize), and get a before/after size report. The
compressed copies are exported to the output directory; source files are
never touched.

Presets (see 'quickshrink presets' for the full tables):

  Levels:  high-quality (0.9), balanced (0.7), small-file (0.5), super-small (0.3)
  Social:  instagram-square, instagram-portrait, story, x-post

Configuration is read from quickshrink.toml in the working directory;
CLI flags override it. Compressing more than one image per run requires
batch mode ([batch] unlocked = true).")]
#[command(version)]
struct Cli {
    /// Directory holding quickshrink.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Directory for intermediate compressed files
    #[arg(long, default_value = ".quickshrink-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress images with an explicit preset and export the results
    Compress {
        /// Image files or directories to compress
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Compression level (default from config, stock default: balanced)
        #[arg(long, value_enum)]
        level: Option<CompressionLevel>,

        /// Resize to a social-media preset before compressing
        #[arg(long, value_enum)]
        social: Option<SocialPreset>,

        /// Export destination (default from config, stock default: compressed/)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Select multiple images (requires batch mode unlocked in config)
        #[arg(long)]
        batch: bool,

        /// Emit the compression report as JSON
        #[arg(long)]
        json: bool,
    },
    /// One-tap shrink: balanced quality, original dimensions
    Shrink {
        /// Image file to shrink
        path: PathBuf,

        /// Export destination (default from config, stock default: compressed/)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Emit the compression report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the compression and social preset tables
    Presets,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config_dir)?;

    match cli.command {
        Command::Compress {
            paths,
            level,
            social,
            output_dir,
            batch,
            json,
        } => {
            let level = level.unwrap_or(config.default_level);
            let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.output_dir));
            run(
                config.batch.unlocked,
                paths,
                batch,
                &cli.temp_dir,
                &output_dir,
                json,
                |workflow, codec, sizer| workflow.compress(codec, sizer, level, social),
            )
        }
        Command::Shrink {
            path,
            output_dir,
            json,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.output_dir));
            run(
                config.batch.unlocked,
                vec![path],
                false,
                &cli.temp_dir,
                &output_dir,
                json,
                |workflow, codec, sizer| workflow.auto_shrink(codec, sizer),
            )
        }
        Command::Presets => {
            output::print_presets();
            Ok(())
        }
    }
}

/// Drive one full workflow pass: select → compress → export every result.
fn run(
    batch_unlocked: bool,
    paths: Vec<PathBuf>,
    multiple: bool,
    temp_dir: &Path,
    output_dir: &Path,
    json: bool,
    compress: impl FnOnce(
        &mut CompressionWorkflow,
        &JpegCodec,
        &FsSizer,
    ) -> Result<CompressionReport, WorkflowError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut workflow = CompressionWorkflow::new(batch_unlocked);
    let picker = PathPicker::new(paths);
    let sizer = FsSizer;

    match workflow.select_images(&picker, &sizer, multiple)? {
        SelectOutcome::Cancelled => {
            println!("No images selected");
            return Ok(());
        }
        SelectOutcome::Selected { total_bytes, .. } => {
            if !json {
                output::print_selection(workflow.sources(), total_bytes);
            }
        }
    }

    let codec = JpegCodec::new(temp_dir);
    let report = compress(&mut workflow, &codec, &sizer)?;

    if json {
        println!("{}", output::report_json(&report)?);
    } else {
        output::print_report(&report);
    }

    let exporter = DirExporter::new(output_dir);
    for index in 0..report.images.len() {
        let outcome = workflow.export_result(&exporter, index)?;
        if !json {
            output::print_export(&outcome);
        }
    }

    Ok(())
}
