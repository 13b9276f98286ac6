//! Command implementations for Scour CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, ScourError};
use crate::preprocess::{Preprocessor, PreprocessorConfig};

/// Execute a CLI command.
pub fn execute_command(args: ScourArgs) -> Result<()> {
    let summary = run(&args)?;
    log::info!(
        "preprocessed {} documents into {} stems in {} ms",
        summary.documents,
        summary.stems,
        summary.duration_ms
    );
    Ok(())
}

/// Preprocess every input document and write one output line per document.
pub fn run(args: &ScourArgs) -> Result<RunSummary> {
    if args.batch_size == 0 {
        return Err(ScourError::invalid_argument(
            "batch size must be at least 1",
        ));
    }

    let start = Instant::now();
    let preprocessor = Preprocessor::new(resolve_config(args)?)?;
    let mut writer = open_output(args.output.as_deref())?;
    let mut summary = RunSummary::default();

    if args.inputs.is_empty() {
        process_reader(io::stdin().lock(), &preprocessor, args, &mut *writer, &mut summary)?;
    } else {
        for input in &args.inputs {
            if input.as_os_str() == "-" {
                process_reader(io::stdin().lock(), &preprocessor, args, &mut *writer, &mut summary)?;
            } else {
                log::debug!("reading documents from {}", input.display());
                let reader = BufReader::new(open_input(input)?);
                process_reader(reader, &preprocessor, args, &mut *writer, &mut summary)?;
            }
        }
    }

    writer.flush()?;
    summary.duration_ms = start.elapsed().as_millis() as u64;
    Ok(summary)
}

/// Build the preprocessor configuration from the config file and flags.
pub fn resolve_config(args: &ScourArgs) -> Result<PreprocessorConfig> {
    let mut config = match &args.config {
        Some(path) => PreprocessorConfig::from_json_file(path)?,
        None => PreprocessorConfig::default(),
    };
    if args.keep_digits {
        config.remove_digits = false;
    }
    log::debug!("using {config:?}");
    Ok(config)
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        ScourError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open input file '{}': {}", path.display(), e),
        ))
    })
}

/// Read documents line by line and preprocess them in batches.
fn process_reader<R: BufRead>(
    reader: R,
    preprocessor: &Preprocessor,
    args: &ScourArgs,
    writer: &mut dyn Write,
    summary: &mut RunSummary,
) -> Result<()> {
    let mut batch = Vec::with_capacity(args.batch_size);

    for line in reader.lines() {
        batch.push(line?);
        if batch.len() >= args.batch_size {
            write_batch(&batch, preprocessor, args.output_format, writer, summary)?;
            batch.clear();
        }
    }

    if !batch.is_empty() {
        write_batch(&batch, preprocessor, args.output_format, writer, summary)?;
    }

    Ok(())
}

fn write_batch(
    batch: &[String],
    preprocessor: &Preprocessor,
    format: OutputFormat,
    writer: &mut dyn Write,
    summary: &mut RunSummary,
) -> Result<()> {
    for stems in preprocessor.preprocess_batch(batch)? {
        write_tokens(writer, &stems, format)?;
        summary.documents += 1;
        summary.stems += stems.len();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> ScourArgs {
        let mut argv = vec!["scour"];
        argv.extend_from_slice(extra);
        ScourArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_process_reader_batches_preserve_order() {
        let preprocessor = Preprocessor::default();
        let args = args(&["--batch-size", "2"]);
        let input = Cursor::new("Great movie!\n\nslow pacing\nRated 10 out of 10\nloved it\n");
        let mut out = Vec::new();
        let mut summary = RunSummary::default();

        process_reader(input, &preprocessor, &args, &mut out, &mut summary).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "great\n\nslow pace\nrate\nlove\n"
        );
        assert_eq!(summary.documents, 5);
        assert_eq!(summary.stems, 5);
    }

    #[test]
    fn test_resolve_config_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"remove_digits": true}"#).unwrap();
        let path = path.to_string_lossy().to_string();
        let path = path.as_str();

        assert!(resolve_config(&args(&["-c", path])).unwrap().remove_digits);
        assert!(
            !resolve_config(&args(&["-c", path, "--keep-digits"]))
                .unwrap()
                .remove_digits
        );
        assert!(resolve_config(&args(&[])).unwrap().remove_digits);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let result = run(&args(&["--batch-size", "0"]));

        assert!(matches!(result, Err(ScourError::Other(_))));
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt").to_string_lossy().to_string();
        let output = dir.path().join("out.txt").to_string_lossy().to_string();

        let err = run(&args(&["-o", output.as_str(), missing.as_str()])).unwrap_err();

        assert!(err.to_string().contains("missing.txt"));
    }
}
