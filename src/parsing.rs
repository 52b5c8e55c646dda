/*!
# Parsing

Small line-oriented parsing helpers for text files: whole files as lines, one
integer per line, whitespace- or character-delimited grids, and key-value
records. Every helper comes in two flavors, a reader-generic core working on
any [`BufRead`] and a thin wrapper opening a file path, so tests can run on
in-memory cursors.

Errors carry the 1-based line number of the offending input.
*/

use std::{
    fmt::Debug,
    fs::File,
    hash::Hash,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use fxhash::FxHashMap;
use thiserror::Error;

/// Errors signalled while parsing a text file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A token failed to convert into the requested type.
    #[error("invalid token {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },
    /// A key-value entry did not contain the expected delimiter.
    #[error("missing delimiter {delimiter:?} in entry {entry:?} on line {line}")]
    MissingDelimiter {
        line: usize,
        delimiter: char,
        entry: String,
    },
}

/// Reads a file into a vector of lines, line terminators stripped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    read_lines_from(BufReader::new(File::open(path)?))
}

/// Reader-generic core of [`read_lines`].
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Reads a file with one integer per line. Surrounding whitespace is
/// tolerated, anything else is an [`ParseError::InvalidToken`].
pub fn read_ints<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, ParseError> {
    read_ints_from(BufReader::new(File::open(path)?))
}

/// Reader-generic core of [`read_ints`].
pub fn read_ints_from<R: BufRead>(reader: R) -> Result<Vec<i64>, ParseError> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line?;
            parse_token(line.trim(), i + 1)
        })
        .collect()
}

/// Reads a file into a row-major grid of `T`.
///
/// Each line becomes one row. With `delimiter: Some(c)` the line is split on
/// `c` (empty tokens skipped); with `None` every character is its own token.
///
/// # Examples
/// ```no_run
/// use toolbox::parsing::parse_grid;
///
/// // "1,2,3\n4,5,6" parses to vec![vec![1, 2, 3], vec![4, 5, 6]]
/// let grid: Vec<Vec<i32>> = parse_grid("grid.txt", Some(',')).unwrap();
/// # let _ = grid;
/// ```
pub fn parse_grid<T, P>(path: P, delimiter: Option<char>) -> Result<Vec<Vec<T>>, ParseError>
where
    T: FromStr,
    P: AsRef<Path>,
{
    parse_grid_from(BufReader::new(File::open(path)?), delimiter)
}

/// Reader-generic core of [`parse_grid`].
pub fn parse_grid_from<T, R>(reader: R, delimiter: Option<char>) -> Result<Vec<Vec<T>>, ParseError>
where
    T: FromStr,
    R: BufRead,
{
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line?;
            match delimiter {
                Some(c) => line
                    .split(c)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(|t| parse_token(t, i + 1))
                    .collect(),
                None => line
                    .chars()
                    .map(|c| parse_token(&c.to_string(), i + 1))
                    .collect(),
            }
        })
        .collect()
}

/// Reads a file of key-value records into a map.
///
/// Each line holds entries separated by `entry_delimiter`; each entry is
/// split once on `kv_delimiter` into key and value. Keys and values are
/// trimmed; empty entries (e.g. from a trailing delimiter) are skipped.
/// Later occurrences of a key overwrite earlier ones.
pub fn parse_key_value_pairs<K, V, P>(
    path: P,
    entry_delimiter: char,
    kv_delimiter: char,
) -> Result<FxHashMap<K, V>, ParseError>
where
    K: FromStr + Eq + Hash,
    V: FromStr,
    P: AsRef<Path>,
{
    parse_key_value_pairs_from(
        BufReader::new(File::open(path)?),
        entry_delimiter,
        kv_delimiter,
    )
}

/// Reader-generic core of [`parse_key_value_pairs`].
pub fn parse_key_value_pairs_from<K, V, R>(
    reader: R,
    entry_delimiter: char,
    kv_delimiter: char,
) -> Result<FxHashMap<K, V>, ParseError>
where
    K: FromStr + Eq + Hash,
    V: FromStr,
    R: BufRead,
{
    let mut map = FxHashMap::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        for entry in line.split(entry_delimiter) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let (key, value) =
                entry
                    .split_once(kv_delimiter)
                    .ok_or_else(|| ParseError::MissingDelimiter {
                        line: i + 1,
                        delimiter: kv_delimiter,
                        entry: entry.to_string(),
                    })?;

            map.insert(
                parse_token(key.trim(), i + 1)?,
                parse_token(value.trim(), i + 1)?,
            );
        }
    }

    Ok(map)
}

/// Converts one token, mapping failure to [`ParseError::InvalidToken`] with
/// the given 1-based line number.
fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn lines_keep_content_order() {
        let lines = read_lines_from(Cursor::new("alpha\nbeta\n\ngamma")).unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "", "gamma"]);
    }

    #[test]
    fn ints_parse_with_whitespace() {
        let ints = read_ints_from(Cursor::new("1\n  -2 \n30")).unwrap();
        assert_eq!(ints, vec![1, -2, 30]);
    }

    #[test]
    fn ints_report_offending_line() {
        let err = read_ints_from(Cursor::new("1\ntwo\n3")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidToken { line: 2, ref token } if token == "two"
        ));
    }

    #[test]
    fn delimited_grid() {
        let grid: Vec<Vec<i32>> =
            parse_grid_from(Cursor::new("1,2,3\n4, 5, 6\n"), Some(',')).unwrap();
        assert_eq!(grid, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn char_grid() {
        let grid: Vec<Vec<u32>> = parse_grid_from(Cursor::new("123\n456"), None).unwrap();
        assert_eq!(grid, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn grid_cast_failure_names_the_line() {
        let err = parse_grid_from::<i32, _>(Cursor::new("1,2\n3,x"), Some(',')).unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { line: 2, .. }));
    }

    #[test]
    fn ragged_rows_are_allowed() {
        let grid: Vec<Vec<i32>> = parse_grid_from(Cursor::new("1 2 3\n4\n"), Some(' ')).unwrap();
        assert_eq!(grid, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn key_value_pairs() {
        let map: FxHashMap<String, i32> =
            parse_key_value_pairs_from(Cursor::new("a=1;b=2\nc=3;"), ';', '=').unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["a"], 1);
        assert_eq!(map["b"], 2);
        assert_eq!(map["c"], 3);
    }

    #[test]
    fn later_keys_overwrite() {
        let map: FxHashMap<String, i32> =
            parse_key_value_pairs_from(Cursor::new("a=1\na=2"), ';', '=').unwrap();
        assert_eq!(map["a"], 2);
    }

    #[test]
    fn entry_without_delimiter_errs() {
        let err =
            parse_key_value_pairs_from::<String, i32, _>(Cursor::new("a=1;bogus"), ';', '=')
                .unwrap_err();

        assert!(matches!(
            err,
            ParseError::MissingDelimiter { line: 1, delimiter: '=', ref entry } if entry == "bogus"
        ));
    }

    #[test]
    fn value_split_only_once() {
        let map: FxHashMap<String, String> =
            parse_key_value_pairs_from(Cursor::new("url=http://x/y=z"), ';', '=').unwrap();
        assert_eq!(map["url"], "http://x/y=z");
    }
}
