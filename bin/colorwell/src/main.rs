//! colorwell - detect, validate and convert colors from the command line.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorwell::{ColorFormat, ColorRepresentation, Validation};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "colorwell")]
#[command(author, version, about = "Parse, validate and convert colors")]
#[command(long_about = "
Parse, validate and convert single color values.

Formats: rgb, hex, hsl, hsv, cmyk, lab.

Examples:
  colorwell detect '#1E90FF'
  colorwell validate 'rgb(256, 0, 0)' --format rgb
  colorwell parse 'hsl(210, 50%, 40%)'
  colorwell parse lab(53.24,80.09,67.2) --json
  colorwell convert '#F00' --to hsl
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the detected format of a color
    Detect {
        /// The color text
        text: String,
    },

    /// Check that a color is valid in a format
    Validate {
        /// The color text
        text: String,

        /// The format to validate against (detected when omitted)
        #[arg(short, long)]
        format: Option<ColorFormat>,
    },

    /// Print a color in every format
    Parse {
        /// The color text
        text: String,

        /// The format of the text (detected when omitted)
        #[arg(short, long)]
        format: Option<ColorFormat>,

        /// Print the representation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a color to another format
    Convert {
        /// The color text
        text: String,

        /// The format of the text (detected when omitted)
        #[arg(short, long)]
        from: Option<ColorFormat>,

        /// The format to convert to
        #[arg(short, long)]
        to: ColorFormat,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "colorwell=debug",
        _ => "colorwell=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Use the given format or fall back to detecting it.
fn resolve_format(text: &str, format: Option<ColorFormat>) -> Result<ColorFormat> {
    match format {
        Some(format) => Ok(format),
        None => {
            let format = colorwell::detect_format(text)
                .with_context(|| format!("unable to detect the color format of \"{text}\""))?;
            debug!(%format, "detected format");
            Ok(format)
        }
    }
}

fn print_representation(color: &ColorRepresentation) {
    for format in ColorFormat::ALL {
        println!("{:<5} {}", format.name(), color.format(format));
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Detect { text } => match colorwell::detect_format(&text) {
            Some(format) => {
                println!("{format}");
                Ok(ExitCode::SUCCESS)
            }
            None => {
                println!("unknown");
                Ok(ExitCode::FAILURE)
            }
        },

        Commands::Validate { text, format } => {
            let format = resolve_format(&text, format)?;
            match colorwell::validate(&text, format) {
                Validation::Valid => {
                    println!("valid {format}");
                    Ok(ExitCode::SUCCESS)
                }
                Validation::Invalid(reason) => {
                    println!("{reason}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::Parse { text, format, json } => {
            let format = resolve_format(&text, format)?;
            let color = colorwell::parse(&text, format)?;
            info!(hex = color.hex(), flags = ?color.flags(), "parsed color");

            if json {
                let json = serde_json::to_string_pretty(&color)
                    .context("failed to serialize the color")?;
                println!("{json}");
            } else {
                print_representation(&color);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Convert { text, from, to } => {
            let from = resolve_format(&text, from)?;
            println!("{}", colorwell::convert(&text, from, to)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn formats_parse_from_arguments() {
        let cli = Cli::try_parse_from(["colorwell", "convert", "#F00", "--to", "hsl"]).unwrap();
        match cli.command {
            Commands::Convert { text, from, to } => {
                assert_eq!(text, "#F00");
                assert_eq!(from, None);
                assert_eq!(to, ColorFormat::Hsl);
            }
            _ => panic!("expected convert"),
        }

        assert!(Cli::try_parse_from(["colorwell", "convert", "#F00", "--to", "xyz"]).is_err());
    }

    #[test]
    fn explicit_formats_win_over_detection() {
        assert_eq!(
            resolve_format("#F00", Some(ColorFormat::Rgb)).unwrap(),
            ColorFormat::Rgb
        );
        assert_eq!(resolve_format("#F00", None).unwrap(), ColorFormat::Hex);
        assert!(resolve_format("chartreuse", None).is_err());
    }
}
