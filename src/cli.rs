use crate::config::load_config;
use crate::figure::SavedFigure;
use crate::generate::{DiagramKind, generate_diagrams};
use crate::render::OutputFormat;
use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "rfid-door-diagrams",
    version,
    about = "Render the RFID door system structural and technical diagrams"
)]
pub struct Args {
    /// Directory the diagrams are written to
    #[arg(short = 'o', long = "outputDir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "png")]
    pub output_format: OutputFormat,

    /// Config JSON file (style and render overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_level);
    debug!("parsed arguments: {args:?}");

    let config = load_config(args.config.as_deref())?;
    let saved = generate_diagrams(&args.output_dir, args.output_format, &config)?;

    for line in status_lines(&saved) {
        println!("{line}");
    }
    Ok(())
}

/// Success report: the saved artifacts followed by one line per diagram kind.
pub fn status_lines(saved: &[SavedFigure]) -> Vec<String> {
    let mut lines = vec![
        "Diagrams generated successfully!".to_string(),
        "Files saved:".to_string(),
    ];
    for figure in saved {
        lines.push(match figure.pixel_size {
            Some((width, height)) => format!("   - {} ({width}x{height})", figure.path.display()),
            None => format!("   - {}", figure.path.display()),
        });
    }
    lines.push(String::new());
    for kind in DiagramKind::ALL {
        lines.push(format!("{:<10}  {}", kind.to_string(), kind.description()));
    }
    lines
}

fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });
    // Ignore a second initialization when run() is driven more than once in-process.
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_match_no_argument_invocation() {
        let args = Args::try_parse_from(["rfid-door-diagrams"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.output_format, OutputFormat::Png);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn accepts_svg_output_into_a_directory() {
        let args =
            Args::try_parse_from(["rfid-door-diagrams", "-o", "out", "-e", "svg"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.output_format, OutputFormat::Svg);
    }

    #[test]
    fn status_lists_both_png_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = crate::config::Config::default();
        config.render.dpi = 24.0;
        let saved = generate_diagrams(dir.path(), OutputFormat::Png, &config).unwrap();
        let lines = status_lines(&saved);
        assert_eq!(lines[0], "Diagrams generated successfully!");
        assert_eq!(lines[1], "Files saved:");
        for name in ["rfid_door_structural.png", "rfid_door_technical.png"] {
            assert_eq!(
                lines.iter().filter(|line| line.contains(name)).count(),
                1,
                "{name} missing from {lines:?}"
            );
        }
        assert!(lines[2].ends_with("(348x252)"));
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }
}
