//! Reading the items to filter.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::Result;

/// Collects the items to test.
///
/// Items given on the command line win; otherwise lines are read from
/// `input` (`-` meaning stdin) or from stdin.
pub fn read_items(items: &[String], input: Option<&Path>) -> Result<Vec<String>> {
    if !items.is_empty() {
        return Ok(items.to_vec());
    }

    let items = match input {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading items from file");
            parse_lines(BufReader::new(File::open(path)?))?
        }
        _ => {
            debug!("reading items from stdin");
            parse_lines(io::stdin().lock())?
        }
    };

    Ok(items)
}

/// Reads one item per line, trimming whitespace and skipping blank lines.
pub fn parse_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            items.push(trimmed.to_string());
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_lines_trims_and_skips_blanks() {
        let input = Cursor::new("web-api\n\n  billing-docs  \r\n\t\nsearch\n");
        let items = parse_lines(input).unwrap();
        assert_eq!(items, vec!["web-api", "billing-docs", "search"]);
    }

    #[test]
    fn test_parse_lines_empty_input() {
        assert!(parse_lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_arguments_take_precedence() {
        let items = vec!["a".to_string(), "b".to_string()];
        let read = read_items(&items, Some(Path::new("/nonexistent/items.txt"))).unwrap();
        assert_eq!(read, items);
    }

    #[test]
    fn test_read_items_from_file() {
        use std::io::Write;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one").unwrap();
        writeln!(file, "two").unwrap();

        let items = read_items(&[], Some(file.path())).unwrap();
        assert_eq!(items, vec!["one", "two"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_items(&[], Some(Path::new("/nonexistent/items.txt")));
        assert!(matches!(result, Err(super::super::CommandError::Io(_))));
    }
}
