//! Output formatting for CLI commands.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Summary of one CLI run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub documents: usize,
    pub stems: usize,
    pub duration_ms: u64,
}

/// Open the output sink: `path` when given, stdout otherwise.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}

/// Write the stems of one document as a single line.
pub fn write_tokens(writer: &mut dyn Write, tokens: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{}", tokens.join(" "))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, tokens)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: &[&str], format: OutputFormat) -> String {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let mut buf = Vec::new();
        write_tokens(&mut buf, &tokens, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_output() {
        assert_eq!(render(&["great", "act"], OutputFormat::Human), "great act\n");
        assert_eq!(render(&[], OutputFormat::Human), "\n");
    }

    #[test]
    fn test_json_lines_output() {
        assert_eq!(
            render(&["great", "act"], OutputFormat::Json),
            "[\"great\",\"act\"]\n"
        );
        assert_eq!(render(&[], OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_open_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        {
            let mut writer = open_output(Some(&path)).unwrap();
            write_tokens(&mut *writer, &["ok".to_string()], OutputFormat::Human).unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ok\n");
    }
}
