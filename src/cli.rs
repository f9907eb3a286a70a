use crate::layout::CanvasConfig;
use crate::utils::Result;
use clap::{ArgAction, Parser, ValueEnum};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name = "motifmark",
          version = &**FULL_VERSION,
          about = "Draws degenerate motif occurrences along the intron/exon structure of FASTA sequences",
          long_about = None,
          arg_required_else_help = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(flatten)]
    pub args: MarkArgs,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
    Pdf,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

#[derive(Parser, Debug)]
pub struct MarkArgs {
    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "fasta")]
    #[clap(help = "FASTA file(s) with exons in uppercase and introns in lowercase")]
    #[clap(value_name = "FASTA")]
    #[clap(num_args = 1..)]
    #[arg(value_parser = check_file_exists)]
    pub fasta_paths: Vec<PathBuf>,

    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motifs")]
    #[clap(help = "Text file(s) with one motif per line (IUPAC codes allowed)")]
    #[clap(value_name = "MOTIFS")]
    #[clap(num_args = 1..)]
    #[arg(value_parser = check_file_exists)]
    pub motif_paths: Vec<PathBuf>,

    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory for output images [default: next to each FASTA]")]
    #[clap(value_name = "DIR")]
    #[arg(value_parser = check_dir_exists)]
    pub output_dir: Option<PathBuf>,

    #[clap(long = "format")]
    #[clap(value_name = "FORMAT")]
    #[clap(help = "Image format")]
    #[clap(default_value = "png")]
    pub format: ImageFormat,

    #[clap(long = "write-oneline")]
    #[clap(help = "Also write each FASTA with one sequence line per record (oneline_<name>); off unless given")]
    pub write_oneline: bool,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "lane-width")]
    #[clap(value_name = "POINTS")]
    #[clap(help = "Width of the longest sequence")]
    #[clap(default_value = "750")]
    #[arg(value_parser = positive_float)]
    pub lane_width: f64,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "lane-height")]
    #[clap(value_name = "POINTS")]
    #[clap(help = "Height of each sequence lane, label included (at least 28)")]
    #[clap(default_value = "60")]
    #[arg(value_parser = positive_float)]
    pub lane_height: f64,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "padding")]
    #[clap(value_name = "POINTS")]
    #[clap(help = "Margin around the figure")]
    #[clap(default_value = "12")]
    #[arg(value_parser = non_negative_float)]
    pub padding: f64,
}

impl MarkArgs {
    pub fn canvas(&self) -> CanvasConfig {
        CanvasConfig::with_lanes(self.lane_width, self.lane_height, self.padding)
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_file() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_dir_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        Err(format!("Directory does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn parse_float(s: &str) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("Could not parse float: {}", e))?;
    if !value.is_finite() {
        return Err(format!("The value must be finite, got: {}", value));
    }
    Ok(value)
}

fn positive_float(s: &str) -> Result<f64> {
    let value = parse_float(s)?;
    if value <= 0.0 {
        Err(format!("The value must be greater than 0, got: {}", value))
    } else {
        Ok(value)
    }
}

fn non_negative_float(s: &str) -> Result<f64> {
    let value = parse_float(s)?;
    if value < 0.0 {
        Err(format!("The value must not be negative, got: {}", value))
    } else {
        Ok(value)
    }
}
