use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use autosub_core::config::{ConfigManager, Settings};
use autosub_core::logging::{init_tracing, LogLevel};
use autosub_core::subtitles::{load_segments, render_to_file, SubtitleFormat};

const DEFAULT_CONFIG: &str = "autosub.toml";

#[derive(Parser, Debug)]
#[command(name = "autosub", version, about = "Render styled ASS subtitles from transcripts")]
struct Cli {
    /// Settings file. Defaults to ./autosub.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render transcript segments to a subtitle file.
    Render(RenderArgs),
    /// List built-in theme names.
    Themes,
    /// Print a theme with every default filled in, as YAML.
    ShowTheme {
        /// Built-in theme name or theme file path.
        theme: String,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input segments JSON.
    #[arg(long)]
    segments: PathBuf,

    /// Output subtitle path.
    #[arg(long)]
    out: PathBuf,

    /// Built-in theme name or theme file path.
    #[arg(long)]
    theme: Option<String>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Output format. Defaults to the output extension.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Ass,
    Srt,
}

impl From<OutputFormat> for SubtitleFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Ass => SubtitleFormat::Ass,
            OutputFormat::Srt => SubtitleFormat::Srt,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_ref())?;
    init_tracing(cli.log_level.unwrap_or(settings.logging.level));

    match cli.cmd {
        Command::Render(args) => cmd_render(&settings, args),
        Command::Themes => cmd_themes(&settings),
        Command::ShowTheme { theme } => cmd_show_theme(&settings, &theme),
    }
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<Settings> {
    let manager = match path {
        Some(path) => {
            let mut manager = ConfigManager::new(path);
            manager
                .load()
                .with_context(|| format!("load config '{}'", path.display()))?;
            manager
        }
        None => {
            let mut manager = ConfigManager::new(DEFAULT_CONFIG);
            manager
                .load_or_default()
                .with_context(|| format!("load config '{DEFAULT_CONFIG}'"))?;
            manager
        }
    };

    Ok(manager.settings().clone())
}

fn cmd_render(settings: &Settings, args: RenderArgs) -> anyhow::Result<()> {
    let segments = load_segments(&args.segments)
        .with_context(|| format!("read segments '{}'", args.segments.display()))?;

    let theme_ref = args
        .theme
        .as_deref()
        .unwrap_or(&settings.render.default_theme);
    let resolved = settings.theme_library().resolve(theme_ref);
    if resolved.is_fallback() {
        warn!(theme = theme_ref, "Rendering with the default theme");
    }

    let mut canvas = settings.canvas();
    if let Some(width) = args.width {
        canvas.width = width;
    }
    if let Some(height) = args.height {
        canvas.height = height;
    }

    let format = args
        .format
        .map(SubtitleFormat::from)
        .or_else(|| SubtitleFormat::from_extension(&args.out))
        .unwrap_or(settings.render.output_format);

    render_to_file(
        &segments,
        &resolved.theme,
        canvas,
        &settings.render_options(),
        Some(format),
        &args.out,
    )
    .with_context(|| format!("render '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_themes(settings: &Settings) -> anyhow::Result<()> {
    for name in settings.theme_library().list() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_show_theme(settings: &Settings, theme_ref: &str) -> anyhow::Result<()> {
    let resolved = settings
        .theme_library()
        .try_resolve(theme_ref)
        .with_context(|| format!("load theme '{theme_ref}'"))?
        .with_context(|| format!("theme '{theme_ref}' not found"))?;

    print!("{}", resolved.theme.to_yaml_string()?);
    Ok(())
}
