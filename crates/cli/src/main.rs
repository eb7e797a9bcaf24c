mod settings;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use vmeta_core::{BinaryCodec, FormatVersion, MetadataRecord, RecordCodec, Tag};

use settings::Settings;

/// Encode, decode and inspect video metadata records.
#[derive(Parser)]
#[command(name = "vmeta")]
struct Cli {
    /// Settings file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON record into the binary format.
    Encode {
        /// JSON record file.
        input: PathBuf,
        /// Binary output file.
        output: PathBuf,
        /// Wire format version (1 or 2).
        #[arg(long)]
        format_version: Option<u16>,
    },
    /// Decode a binary record and print it as JSON.
    Decode {
        /// Binary record file.
        input: PathBuf,
        /// Print JSON on a single line.
        #[arg(long)]
        compact: bool,
    },
    /// Print the header and field table of a binary record.
    Inspect {
        /// Binary record file.
        input: PathBuf,
    },
    /// Re-encode a binary record under another format version.
    Convert {
        /// Binary record file.
        input: PathBuf,
        /// Binary output file.
        output: PathBuf,
        /// Target wire format version (1 or 2).
        #[arg(long)]
        format_version: u16,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref());
    let codec = BinaryCodec::new();

    match cli.command {
        Command::Encode {
            input,
            output,
            format_version,
        } => {
            let version = format_version.unwrap_or(settings.default_version);
            validate_version(version)?;
            let size = run_encode(&codec, &input, &output, version)?;
            log::info!("Wrote {size} bytes to {}", output.display());
        }
        Command::Decode { input, compact } => {
            let json = run_decode(&codec, &input, settings.pretty && !compact)?;
            println!("{json}");
        }
        Command::Inspect { input } => {
            let bytes = read_input(&input)?;
            print!("{}", describe(&codec, &bytes)?);
        }
        Command::Convert {
            input,
            output,
            format_version,
        } => {
            validate_version(format_version)?;
            let bytes = read_input(&input)?;
            let converted = codec.transcode(&bytes, format_version)?;
            fs::write(&output, &converted)?;
            log::info!(
                "Converted {} to format v{format_version}: {} -> {} bytes",
                input.display(),
                bytes.len(),
                converted.len()
            );
        }
    }

    Ok(())
}

fn validate_version(version: u16) -> Result<(), Box<dyn std::error::Error>> {
    if FormatVersion::from_u16(version).is_none() {
        let supported: Vec<String> = FormatVersion::ALL
            .iter()
            .map(|v| v.as_u16().to_string())
            .collect();
        return Err(format!(
            "Format version must be one of {}, got {version}",
            supported.join(", ")
        )
        .into());
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    fs::read(path).map_err(|e| -> Box<dyn std::error::Error> {
        match e.kind() {
            io::ErrorKind::NotFound => format!("Input file not found: {}", path.display()).into(),
            _ => e.into(),
        }
    })
}

fn run_encode(
    codec: &BinaryCodec,
    input: &Path,
    output: &Path,
    version: u16,
) -> Result<usize, Box<dyn std::error::Error>> {
    let json = read_input(input)?;
    let record: MetadataRecord = serde_json::from_slice(&json)
        .map_err(|e| format!("Invalid record in {}: {e}", input.display()))?;
    let bytes = codec.encode(&record, version)?;
    fs::write(output, &bytes)?;
    Ok(bytes.len())
}

fn run_decode(
    codec: &BinaryCodec,
    input: &Path,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = read_input(input)?;
    let record = codec.decode(&bytes)?;
    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

fn describe(codec: &BinaryCodec, bytes: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let header = BinaryCodec::read_header(bytes)?;
    let spans = codec.field_spans(bytes)?;
    let mut out = format!(
        "format {}, {} fields, {} bytes\n",
        header.version, header.field_count, header.total_len
    );
    for span in spans {
        let name = span.tag.map(Tag::name).unwrap_or("(opaque)");
        out.push_str(&format!(
            "  tag {:>5}  {:<20} {:>8} bytes @ {}\n",
            span.tag_id, name, span.len, span.offset
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmeta_core::Value;

    fn sample_record() -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record
            .set(Tag::CaptureTimestamp, Value::Timestamp(1_000_000))
            .unwrap();
        record.set(Tag::Gain, Value::Gain(100)).unwrap();
        record.set_opaque(3000, vec![1, 2]).unwrap();
        record
    }

    #[test]
    fn test_validate_version() {
        assert!(validate_version(1).is_ok());
        assert!(validate_version(2).is_ok());
        let err = validate_version(7).unwrap_err();
        assert_eq!(err.to_string(), "Format version must be one of 1, 2, got 7");
    }

    #[test]
    fn test_encode_then_decode_files() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("record.json");
        let bin_path = dir.path().join("record.bin");
        fs::write(&json_path, serde_json::to_string(&sample_record()).unwrap()).unwrap();

        let codec = BinaryCodec::new();
        let size = run_encode(&codec, &json_path, &bin_path, 2).unwrap();
        assert_eq!(fs::metadata(&bin_path).unwrap().len() as usize, size);

        let json = run_decode(&codec, &bin_path, false).unwrap();
        let back: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_record());
    }

    #[test]
    fn test_encode_rejects_invalid_json_record() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("record.json");
        fs::write(&json_path, r#"[{"tag":9,"field":{"known":{"percentage":120}}}]"#).unwrap();
        let result = run_encode(
            &BinaryCodec::new(),
            &json_path,
            &dir.path().join("out.bin"),
            2,
        );
        assert!(result.unwrap_err().to_string().starts_with("Invalid record in"));
    }

    #[test]
    fn test_missing_input() {
        let err = read_input(Path::new("/nonexistent/record.bin")).unwrap_err();
        assert_eq!(err.to_string(), "Input file not found: /nonexistent/record.bin");
    }

    #[test]
    fn test_read_input_other_errors_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert!(!err.to_string().starts_with("Input file not found"));
    }

    #[test]
    fn test_describe_lists_fields() {
        let codec = BinaryCodec::new();
        let bytes = codec.encode(&sample_record(), 2).unwrap();
        let text = describe(&codec, &bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("format v2, 3 fields, {} bytes", bytes.len()));
        assert!(lines[1].contains("capture_timestamp"));
        assert!(lines[2].contains("gain"));
        assert!(lines[3].contains("(opaque)"));
    }

    #[test]
    fn test_describe_reports_truncation() {
        let err = describe(&BinaryCodec::new(), &[0, 1, 0]).unwrap_err();
        assert!(err.to_string().contains("truncated"), "{err}");
    }
}
