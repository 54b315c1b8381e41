use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sukashi::{
    Config,
    watermark::{Anchor, BatchSummary, Color, StampConfig, Watermarker, font},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image file or directory of images to stamp
    input_path: PathBuf,

    /// Font size of the date text in pixels
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Text color: a name like "white", or "#RGB" / "#RRGGBB" hex
    #[arg(short, long)]
    color: Option<Color>,

    /// Where to place the text (top-left, center, bottom-right, ...)
    #[arg(short, long)]
    position: Option<Anchor>,

    /// Distance from the image edge in pixels
    #[arg(short, long)]
    margin: Option<u32>,

    /// Preferred TrueType/OpenType font file
    #[arg(long)]
    font: Option<PathBuf>,

    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Set up logging first
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let summary = match run(&cli) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Done: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    if !summary.errors.is_empty() {
        println!("Failures:");
        for failure in &summary.errors {
            println!("  {}: {}", failure.path.display(), failure.reason);
        }
    }

    if summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<BatchSummary, Box<dyn std::error::Error>> {
    let config = if cli.config.exists() {
        let config_content = std::fs::read_to_string(&cli.config)?;
        toml_edit::de::from_str::<Config>(&config_content)?
    } else {
        info!("Config file not found at {:?}, using defaults", cli.config);
        Config::default()
    };

    // CLI flags win over the config file
    let settings = &config.watermark;
    let font_size = cli.size.unwrap_or(settings.font_size);
    let color = match cli.color {
        Some(color) => color,
        None => settings.color.parse::<Color>()?,
    };
    let anchor = match cli.position {
        Some(anchor) => anchor,
        None => settings.position.parse::<Anchor>()?,
    };
    let margin = cli.margin.unwrap_or(settings.margin);
    let font_path = cli.font.clone().or_else(|| settings.font_path.clone());
    let jpeg_quality = settings.jpeg_quality.unwrap_or(95);

    let font = font::load_font(font_path.as_deref())?;

    let stamp_config = StampConfig {
        font_size: font_size as f32,
        color,
        anchor,
        margin,
    };

    info!("Processing {}", cli.input_path.display());
    let watermarker = Watermarker::new(stamp_config, font, jpeg_quality);
    let summary = watermarker.process(&cli.input_path)?;
    Ok(summary)
}
