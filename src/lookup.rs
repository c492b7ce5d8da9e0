use std::io::{self, BufRead};

/// Minimum number of whitespace separated fields for a line to count as a metric.
/// Matches the `<key> <value> <timestamp>` layout of metric plugin output.
pub const MIN_FIELDS: usize = 3;

/// A single parsed metric line. Fields after the value are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRecord {
    pub key: String,
    pub value: String,
}

impl MetricRecord {
    /// Splits a line on runs of whitespace. Returns `None` for lines with less than
    /// [MIN_FIELDS] fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let key = fields.next()?;
        let value = fields.next()?;
        fields.next()?;

        Some(MetricRecord {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Scans `reader` line by line and returns the first record whose key equals `target`.
///
/// Reading stops at the first match, lines after it are never consumed. `Ok(None)` means the
/// stream ended without a match.
pub fn find_target<R: BufRead>(mut reader: R, target: &str) -> io::Result<Option<MetricRecord>> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let Some(record) = MetricRecord::parse(&line) else {
            tracing::trace!(line_no, "skipping line with too few fields");
            continue;
        };

        if record.key == target {
            tracing::debug!(line_no, key = %record.key, value = %record.value, "found target");
            return Ok(Some(record));
        }
    }
}
