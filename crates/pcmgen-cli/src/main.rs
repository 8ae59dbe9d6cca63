//! pcmgen CLI - Command-line interface for raw PCM test-signal generation
//!
//! This binary provides commands for generating headerless PCM files,
//! inspecting existing ones, and listing the supported sample formats.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
// Use modules from the library crate
use pcmgen_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            sample_rate,
            duration,
            waveform,
            format,
            channels,
            tone_freq,
            output,
            out_dir,
            seed,
            json,
        } => commands::generate::run(
            &commands::generate::GenerateOptions {
                sample_rate,
                duration_seconds: duration,
                waveform,
                format: &format,
                channels,
                tone_frequency: tone_freq,
                output: output.as_deref(),
                out_dir: out_dir.as_deref(),
                seed,
            },
            json,
        ),
        Commands::Inspect {
            input,
            format,
            channels,
            json,
        } => commands::inspect::run(&input, &format, channels, json),
        Commands::Formats { json } => commands::formats::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcmgen_spec::Waveform;

    #[test]
    fn test_cli_generate_defaults() {
        let cli = Cli::try_parse_from(["pcmgen", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                sample_rate,
                duration,
                waveform,
                format,
                channels,
                tone_freq,
                output,
                out_dir,
                seed,
                json,
            } => {
                assert_eq!(sample_rate, 8000);
                assert_eq!(duration, 5.0);
                assert_eq!(waveform, Waveform::Sine);
                assert_eq!(format, "S16_LE");
                assert_eq!(channels, 1);
                assert_eq!(tone_freq, 1000.0);
                assert!(output.is_none());
                assert!(out_dir.is_none());
                assert!(seed.is_none());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_generate_short_flags() {
        let cli = Cli::try_parse_from([
            "pcmgen", "generate", "-r", "44100", "-d", "0.5", "-w", "whitenoise", "-f", "U8",
            "-c", "2", "-t", "440", "-o", "out.pcm", "--seed", "7", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                sample_rate,
                waveform,
                format,
                channels,
                tone_freq,
                output,
                seed,
                json,
                ..
            } => {
                assert_eq!(sample_rate, 44100);
                assert_eq!(waveform, Waveform::WhiteNoise);
                assert_eq!(format, "U8");
                assert_eq!(channels, 2);
                assert_eq!(tone_freq, 440.0);
                assert_eq!(output.as_deref(), Some("out.pcm"));
                assert_eq!(seed, Some(7));
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_waveform() {
        assert!(Cli::try_parse_from(["pcmgen", "generate", "-w", "triangle"]).is_err());
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli =
            Cli::try_parse_from(["pcmgen", "inspect", "-i", "a.pcm", "-f", "S32_BE", "-c", "4"])
                .unwrap();
        match cli.command {
            Commands::Inspect {
                input,
                format,
                channels,
                json,
            } => {
                assert_eq!(input, "a.pcm");
                assert_eq!(format, "S32_BE");
                assert_eq!(channels, 4);
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_inspect_requires_format() {
        assert!(Cli::try_parse_from(["pcmgen", "inspect", "-i", "a.pcm"]).is_err());
    }
}
