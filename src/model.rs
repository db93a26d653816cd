use std::path::PathBuf;

/// Added/deleted line counts: one parsed numstat record, one repository
/// total, or the grand total, depending on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub added: u64,
    pub deleted: u64,
}

impl LineCounts {
    pub fn new(added: u64, deleted: u64) -> Self {
        Self { added, deleted }
    }

    pub fn absorb(&mut self, other: LineCounts) {
        self.added += other.added;
        self.deleted += other.deleted;
    }
}

/// One report row: a repository and its summed line counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTotal {
    pub repo: PathBuf,
    pub counts: LineCounts,
}

impl RepoTotal {
    pub fn new(repo: PathBuf, counts: LineCounts) -> Self {
        Self { repo, counts }
    }

    /// A present, well-typed zero row. Used both for repositories with no
    /// matching history and for repositories whose query failed.
    pub fn zero(repo: PathBuf) -> Self {
        Self {
            repo,
            counts: LineCounts::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<RepoTotal>,
    pub total: LineCounts,
}

impl Report {
    /// Rows keep the order they were given in; the grand total is the
    /// field-wise sum over all rows.
    pub fn from_totals(rows: Vec<RepoTotal>) -> Self {
        let mut total = LineCounts::default();
        for row in &rows {
            total.absorb(row.counts);
        }
        Self { rows, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, added: u64, deleted: u64) -> RepoTotal {
        RepoTotal::new(PathBuf::from(name), LineCounts::new(added, deleted))
    }

    #[test]
    fn grand_total_is_field_wise_sum() {
        let report = Report::from_totals(vec![row("a", 3, 1), row("b", 7, 4)]);
        assert_eq!(report.total, LineCounts::new(10, 5));
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn grand_total_is_order_independent() {
        let rows = vec![row("a", 3, 1), row("b", 7, 4), row("c", 0, 9)];
        let mut reversed = rows.clone();
        reversed.reverse();

        let forward = Report::from_totals(rows);
        let backward = Report::from_totals(reversed);
        assert_eq!(forward.total, backward.total);
    }

    #[test]
    fn empty_row_set_yields_zero_total() {
        let report = Report::from_totals(Vec::new());
        assert_eq!(report.total, LineCounts::default());
        assert!(report.rows.is_empty());
    }
}
