use crate::model::LineCounts;

/// Parse raw `git log --numstat` text into line-count records, lazily.
///
/// Lines of length <= 1 are the blank separators between commits and are
/// skipped. Each remaining line carries `added<TAB>deleted<TAB>path`; the
/// path is dropped. Binary changes report `-` instead of a count, so any
/// field that does not parse as a number counts as zero rather than
/// corrupting the sum.
pub fn parse_numstat(raw: &str) -> impl Iterator<Item = LineCounts> + '_ {
    raw.lines().filter(|line| line.len() > 1).map(|line| {
        let mut fields = line.split('\t');
        LineCounts {
            added: numeric_field(fields.next()),
            deleted: numeric_field(fields.next()),
        }
    })
}

fn numeric_field(field: Option<&str>) -> u64 {
    field.and_then(|f| f.parse().ok()).unwrap_or(0)
}
