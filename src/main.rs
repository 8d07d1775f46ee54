//! HT32 Loader CLI
//!
//! Command-line tool for recognizing and mapping raw HT32 flash images.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ht32_loader::formatter::{HumanFormatter, JsonFormatter, ShortFormatter, ViewFormatter};
use ht32_loader::{check, load_file, parse_address, Address, DeviceProfile};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

/// Raw HT32 flash image loader.
///
/// Checks that each file looks like flash firmware for the selected device,
/// maps it at the given base address, and prints the resulting segments,
/// entry points, and symbols.
#[derive(Parser, Debug)]
#[command(name = "ht32-load")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Flash image file(s) to load
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Address the image is mapped at (hex with 0x, or decimal)
    #[arg(
        short,
        long,
        env = "HT32_LOAD_BASE",
        value_parser = parse_base,
        required_unless_present = "check"
    )]
    base: Option<Address>,

    /// Device profile
    #[arg(short, long, default_value = "ht32f1654", value_parser = parse_device)]
    device: &'static DeviceProfile<'static>,

    /// Output format
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// List every symbol
    #[arg(short, long)]
    symbols: bool,

    /// Only run the recognizer
    #[arg(short, long)]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (only output essential info)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Compact single-line output
    Short,
}

fn parse_base(input: &str) -> std::result::Result<Address, String> {
    parse_address(input).map_err(|e| e.to_string())
}

fn parse_device(input: &str) -> std::result::Result<&'static DeviceProfile<'static>, String> {
    DeviceProfile::by_name(input).ok_or_else(|| {
        let known: Vec<_> = ht32_loader::supported_devices()
            .iter()
            .map(|d| d.name)
            .collect();
        format!("unknown device '{}' (known: {})", input, known.join(", "))
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging if verbose
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("ht32_loader=debug,ht32_load=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let formatter = make_formatter(&args);
    let mut success = true;

    for path in &args.files {
        match process_file(path, &args, formatter.as_ref()) {
            Ok(true) => {}
            Ok(false) => success = false,
            Err(e) => {
                if !args.quiet {
                    eprintln!("Error loading {}: {:#}", path.display(), e);
                }
                success = false;
            }
        }
    }

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn make_formatter(args: &Args) -> Box<dyn ViewFormatter> {
    match args.format {
        OutputFormat::Human => {
            let base = if args.quiet {
                HumanFormatter::quiet()
            } else if args.verbose {
                HumanFormatter::verbose()
            } else {
                HumanFormatter::new()
            };
            Box::new(HumanFormatter {
                show_symbols: args.symbols,
                ..base
            })
        }
        // Quiet JSON is one line per file.
        OutputFormat::Json if args.quiet => Box::new(JsonFormatter::compact()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Short => Box::new(ShortFormatter::new()),
    }
}

/// Returns whether the file was recognized.
fn process_file(path: &Path, args: &Args, formatter: &dyn ViewFormatter) -> Result<bool> {
    if args.check {
        let data =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        debug!(file = %path.display(), size = data.len(), "checking image");
        let verdict = check(&data, args.device);
        print!("{}", formatter.format_verdict(path, args.device.name, &verdict));
        return Ok(verdict.is_ok());
    }

    let base = args
        .base
        .context("no base address given (use --base or HT32_LOAD_BASE)")?;
    let view = load_file(path, base, args.device)?;
    print!("{}", formatter.format_view(&view, path));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["ht32-load", "--base", "0x0", "fw.bin"]).unwrap();
        assert_eq!(args.files.len(), 1);
        assert_eq!(args.base, Some(0));
        assert_eq!(args.device.name, "HT32F1654");
        assert!(!args.verbose);
        assert!(!args.check);
    }

    #[test]
    fn test_multiple_files() {
        let args =
            Args::try_parse_from(["ht32-load", "-b", "4096", "a.bin", "b.bin"]).unwrap();
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.base, Some(4096));
    }

    #[test]
    fn test_format_options() {
        let args =
            Args::try_parse_from(["ht32-load", "-b", "0", "-f", "json", "fw.bin"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[test]
    fn test_check_needs_no_base() {
        let args = Args::try_parse_from(["ht32-load", "--check", "fw.bin"]).unwrap();
        assert!(args.check);
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(Args::try_parse_from(["ht32-load", "-b", "flash", "fw.bin"]).is_err());
    }

    #[test]
    fn test_device_lookup() {
        let args =
            Args::try_parse_from(["ht32-load", "-b", "0", "-d", "HT32f1654", "fw.bin"]).unwrap();
        assert_eq!(args.device.name, "HT32F1654");
        assert!(Args::try_parse_from(["ht32-load", "-b", "0", "-d", "stm32", "fw.bin"]).is_err());
    }

    #[test]
    fn test_quiet_json_is_single_line() {
        let profile = DeviceProfile::default();
        let mut data = vec![0u8; profile.minimum_image_size()];
        data[0..4].copy_from_slice(&0x2000_1000u32.to_le_bytes());
        data[4..8].copy_from_slice(&0x0000_0101u32.to_le_bytes());
        let view = ht32_loader::load(&data, 0, &profile).unwrap();
        let path = Path::new("fw.bin");

        let args =
            Args::try_parse_from(["ht32-load", "-b", "0", "-f", "json", "-q", "x"]).unwrap();
        let output = make_formatter(&args).format_view(&view, path);
        assert_eq!(output.lines().count(), 1);

        let args =
            Args::try_parse_from(["ht32-load", "-b", "0", "-f", "json", "x"]).unwrap();
        let output = make_formatter(&args).format_view(&view, path);
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_human_formatter_flags() {
        let profile = DeviceProfile::default();
        let mut data = vec![0u8; profile.minimum_image_size()];
        data[0..4].copy_from_slice(&0x2000_1000u32.to_le_bytes());
        data[4..8].copy_from_slice(&0x0000_0101u32.to_le_bytes());
        let view = ht32_loader::load(&data, 0, &profile).unwrap();
        let path = Path::new("fw.bin");

        let args = Args::try_parse_from(["ht32-load", "-b", "0", "-q", "x"]).unwrap();
        let quiet = make_formatter(&args).format_view(&view, path);
        assert_eq!(quiet.lines().count(), 1);

        let args = Args::try_parse_from(["ht32-load", "-b", "0", "-s", "x"]).unwrap();
        let listed = make_formatter(&args).format_view(&view, path);
        assert!(listed.contains("Reset_Handler"));
        assert!(listed.contains("GPIOA_DIRCR"));
    }

    #[test]
    fn test_process_file_check_mode() {
        let profile = DeviceProfile::default();
        let mut data = vec![0u8; profile.minimum_image_size()];
        data[0..4].copy_from_slice(&0x2000_1000u32.to_le_bytes());
        data[4..8].copy_from_slice(&0x0000_0101u32.to_le_bytes());

        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.bin");
        let bad = dir.path().join("bad.bin");
        std::fs::write(&good, &data).unwrap();
        std::fs::write(&bad, &data[..8]).unwrap();

        let args = Args::try_parse_from(["ht32-load", "--check", "-f", "short", "x"]).unwrap();
        let formatter = make_formatter(&args);
        assert!(process_file(&good, &args, formatter.as_ref()).unwrap());
        assert!(!process_file(&bad, &args, formatter.as_ref()).unwrap());
    }

    #[test]
    fn test_process_file_load() {
        let profile = DeviceProfile::default();
        let mut data = vec![0u8; profile.minimum_image_size()];
        data[0..4].copy_from_slice(&0x2000_1000u32.to_le_bytes());
        data[4..8].copy_from_slice(&0x0000_0101u32.to_le_bytes());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fw.bin");
        std::fs::write(&path, &data).unwrap();

        let args = Args::try_parse_from(["ht32-load", "-b", "0", "-q", "x"]).unwrap();
        let formatter = make_formatter(&args);
        assert!(process_file(&path, &args, formatter.as_ref()).unwrap());

        let missing = dir.path().join("missing.bin");
        assert!(process_file(&missing, &args, formatter.as_ref()).is_err());
    }
}
