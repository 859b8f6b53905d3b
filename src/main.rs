use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tinhatben_branding::{
    BrandingError, Config, RecordingSurface, StampOverrides, StampSettings, add_watermark,
    stamp_file,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Global options that apply to all commands
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw the watermark onto an existing chart image
    Stamp {
        /// Chart image to annotate
        input: PathBuf,
        /// Where to write the result (format follows the extension)
        output: PathBuf,

        #[arg(long)]
        x: Option<f64>,

        #[arg(long)]
        y: Option<f64>,

        /// TrueType font file
        #[arg(long)]
        font: Option<PathBuf>,

        #[arg(long)]
        dpi: Option<f32>,

        /// Treat the whole image as the axes area
        #[arg(long)]
        figure: bool,
    },

    /// Print the draw calls the watermark makes, as JSON
    Preview {
        #[arg(long)]
        x: Option<f64>,

        #[arg(long)]
        y: Option<f64>,
    },
}

fn main() -> Result<(), BrandingError> {
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

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {}", e);
    }

    let config = Config::load(&cli.config)?;

    let result = match cli.command {
        Commands::Stamp {
            input,
            output,
            x,
            y,
            font,
            dpi,
            figure,
        } => {
            let overrides = StampOverrides {
                x,
                y,
                font,
                dpi,
                figure,
            };
            stamp_file(
                &input,
                &output,
                &StampSettings::resolve(&config, &overrides),
            )
        }
        Commands::Preview { x, y } => {
            let (default_x, default_y) = config.watermark.position;
            preview((x.unwrap_or(default_x), y.unwrap_or(default_y)))
        }
    };

    if let Err(e) = &result {
        tracing::error!("{}", e);
    }
    result
}

fn preview(pos: (f64, f64)) -> Result<(), BrandingError> {
    let mut surface = RecordingSurface::new();
    // Recording never fails
    let Ok(()) = add_watermark(&mut surface, pos);

    println!("{}", serde_json::to_string_pretty(surface.calls())?);
    Ok(())
}
