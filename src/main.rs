use clap::Parser;
use clp::{ClipboardFormat, ClpError, ConversionMode, Direction, Options};
use std::process::ExitCode;

/// Copy data from and/or to the clipboard
///
/// Piped into (`... | clp`), standard input is copied to the clipboard.
/// Otherwise (`clp | ...` or plain `clp`) the clipboard is written to
/// standard output.
#[derive(Parser, Debug)]
#[command(name = "clp")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
struct Args {
    /// Convert DOS line endings to Unix (dos2unix)
    #[arg(short = 'u', long = "dos2unix", overrides_with = "unix2dos")]
    dos2unix: bool,

    /// Convert Unix line endings to DOS (unix2dos)
    #[arg(short = 'd', long = "unix2dos", overrides_with = "dos2unix")]
    unix2dos: bool,

    /// Use the unicode text format (default)
    #[arg(short = 'U', long = "unicode", overrides_with = "text")]
    unicode: bool,

    /// Use the plain text format
    #[arg(short = 'T', long = "text", overrides_with = "unicode")]
    text: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> Options {
        let mode = if self.dos2unix {
            ConversionMode::DosToUnix
        } else if self.unix2dos {
            ConversionMode::UnixToDos
        } else {
            ConversionMode::AsIs
        };

        let format = if self.text {
            ClipboardFormat::PlainText
        } else {
            ClipboardFormat::UnicodeText
        };

        Options { mode, format }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), ClpError> {
    let options = args.options();

    match Direction::detect() {
        Direction::Capture => {
            log::debug!("capturing stdin with {:?}", options);
            let len = clp::copy_stdin_to_clipboard(options)?;
            log::info!("Copied {} bytes from stdin to clipboard", len);
        }
        Direction::Emit => {
            log::debug!("emitting clipboard with {:?}", options);
            let len = clp::paste_clipboard_to_stdout(options)?;
            log::info!("Wrote {} bytes from clipboard to stdout", len);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["clp"]);
        assert!(!args.verbose);
        assert_eq!(args.options(), Options::default());
    }

    #[test]
    fn test_args_parsing_dos2unix() {
        let args = Args::parse_from(["clp", "-u"]);
        assert_eq!(args.options().mode, ConversionMode::DosToUnix);
    }

    #[test]
    fn test_args_parsing_unix2dos() {
        let args = Args::parse_from(["clp", "-d"]);
        assert_eq!(args.options().mode, ConversionMode::UnixToDos);
    }

    #[test]
    fn test_args_parsing_plain_text() {
        let args = Args::parse_from(["clp", "-T"]);
        assert_eq!(args.options().format, ClipboardFormat::PlainText);
    }

    #[test]
    fn test_args_parsing_last_flag_wins() {
        let args = Args::parse_from(["clp", "-u", "-d"]);
        assert_eq!(args.options().mode, ConversionMode::UnixToDos);

        let args = Args::parse_from(["clp", "-d", "-u"]);
        assert_eq!(args.options().mode, ConversionMode::DosToUnix);

        let args = Args::parse_from(["clp", "-T", "-U"]);
        assert_eq!(args.options().format, ClipboardFormat::UnicodeText);
    }

    #[test]
    fn test_args_parsing_repeated_flags() {
        let args = Args::parse_from(["clp", "-u", "-u"]);
        assert_eq!(args.options().mode, ConversionMode::DosToUnix);

        let args = Args::parse_from(["clp", "-dd", "-T", "-T"]);
        assert_eq!(
            args.options(),
            Options {
                mode: ConversionMode::UnixToDos,
                format: ClipboardFormat::PlainText,
            }
        );

        let args = Args::parse_from(["clp", "-u", "-d", "-u"]);
        assert_eq!(args.options().mode, ConversionMode::DosToUnix);
    }

    #[test]
    fn test_args_parsing_combined_short_flags() {
        let args = Args::parse_from(["clp", "-dTv"]);
        assert!(args.verbose);
        assert_eq!(
            args.options(),
            Options {
                mode: ConversionMode::UnixToDos,
                format: ClipboardFormat::PlainText,
            }
        );
    }

    #[test]
    fn test_args_parsing_long_flags() {
        let args = Args::parse_from(["clp", "--dos2unix", "--text", "--verbose"]);
        assert!(args.verbose);
        assert_eq!(args.options().mode, ConversionMode::DosToUnix);
        assert_eq!(args.options().format, ClipboardFormat::PlainText);
    }

    #[test]
    fn test_args_rejects_positional() {
        let result = Args::try_parse_from(["clp", "file.txt"]);
        assert!(result.is_err());
    }
}
