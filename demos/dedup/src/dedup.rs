//! Line-oriented deduplication on top of a [Tracker].

use hashsearch_cryptography::Hasher;
use hashsearch_tracker::Tracker;
use std::io::{self, BufRead, Write};
use tracing::trace;

/// Outcome of filtering an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub unique: usize,
    pub duplicates: usize,
}

/// Split `reader` into lines, without their `\n` or `\r\n` terminator.
///
/// Lines are raw bytes: they need not be valid UTF-8.
fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader.split(b'\n').map(|line| {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(line)
    })
}

/// Record every line of `reader` as already seen.
///
/// Lines are appended without ordering and sorted once at the end, which is much cheaper than
/// inserting each line at its sorted position. The tracker is sorted even if `reader` fails, so
/// the lines loaded before the failure remain usable. Returns the number of lines loaded.
pub fn load<H: Hasher, R: BufRead>(tracker: &Tracker<H>, reader: R) -> io::Result<usize> {
    let mut loaded = 0;
    let result = lines(reader).try_for_each(|line| {
        tracker.unordered_append(line?);
        loaded += 1;
        Ok(())
    });
    tracker.sort();
    result.map(|()| loaded)
}

/// Copy every line of `reader` that was not seen before to `writer`, in input order.
pub fn filter<H: Hasher, R: BufRead, W: Write>(
    tracker: &Tracker<H>,
    reader: R,
    mut writer: W,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for line in lines(reader) {
        let line = line?;
        summary.lines += 1;
        if tracker.has_or_add(&line) {
            summary.duplicates += 1;
            trace!(line = summary.lines, "skipping duplicate");
            continue;
        }
        summary.unique += 1;
        writer.write_all(&line)?;
        writer.write_all(b"\n")?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashsearch_tracker::{Tracker128, Tracker64};
    use std::io::{BufReader, Read};

    #[test]
    fn test_filter() {
        let tracker = Tracker64::new();
        let input = "a\nb\na\nc\nb\n\n\n";
        let mut output = Vec::new();
        let summary = filter(&tracker, input.as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a\nb\nc\n\n");
        assert_eq!(
            summary,
            Summary {
                lines: 7,
                unique: 4,
                duplicates: 3,
            }
        );
    }

    #[test]
    fn test_filter_with_known() {
        let tracker = Tracker128::new();
        let loaded = load(&tracker, "c\na\nb\na\n".as_bytes()).unwrap();
        assert_eq!(loaded, 4);
        assert_eq!(tracker.len(), 4);

        let mut output = Vec::new();
        let summary = filter(&tracker, "a\nd\ne\nd\nb\n".as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "d\ne\n");
        assert_eq!(summary.unique, 2);
        assert_eq!(summary.duplicates, 3);
    }

    #[test]
    fn test_filter_latin1() {
        let tracker = Tracker64::new();
        let input: &[u8] = b"a\ncaf\xe9\na\nb\ncaf\xe9\n";
        let mut output = Vec::new();
        let summary = filter(&tracker, input, &mut output).unwrap();
        assert_eq!(output, b"a\ncaf\xe9\nb\n");
        assert_eq!(
            summary,
            Summary {
                lines: 5,
                unique: 3,
                duplicates: 2,
            }
        );
        assert!(tracker.has(b"caf\xe9"));
    }

    #[test]
    fn test_filter_crlf() {
        let tracker = Tracker128::new();
        let mut output = Vec::new();
        let summary = filter(&tracker, "a\r\nb\na\nb\r\nc".as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a\nb\nc\n");
        assert_eq!(summary.unique, 3);
        assert_eq!(summary.duplicates, 2);
    }

    /// A reader that fails once its contents are exhausted.
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream broken"))
        }
    }

    #[test]
    fn test_load_error_keeps_index_sorted() {
        let tracker = Tracker64::new();
        let reader = BufReader::new((&b"zzz\nfoo\nbar\n"[..]).chain(FailingReader));
        let result = load(&tracker, reader);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);

        // Lines read before the failure are recorded and can be queried
        assert_eq!(tracker.len(), 3);
        let snapshot = tracker.snapshot();
        assert!(snapshot.windows(2).all(|w| w[0] <= w[1]));
        assert!(tracker.has("bar"));
        assert!(tracker.has("foo"));
        assert!(tracker.has("zzz"));
    }
}
