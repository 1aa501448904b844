use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Render a JSON scene with the Prism ray tracer")]
pub struct Args {
    /// Scene description to render
    #[arg(default_value = "scenes/c.json")]
    pub scene: String,

    /// Image width in pixels
    #[arg(long, default_value = "640", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: String,

    /// Maximum ray recursion depth
    #[arg(long, default_value_t = prism_renderer::DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Trace scanlines on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Trace a single pixel X,Y (0,0 is bottom-left) and report it instead of rendering
    #[arg(long, value_name = "X,Y", value_parser = parse_pixel)]
    pub pick: Option<(u32, u32)>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}

fn parse_pixel(value: &str) -> Result<(u32, u32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}
