use crate::model::Report;
use crate::util::repo_label;
use std::fmt::Write;
use std::path::Path;

/// Width the repository label column is padded to.
pub const LABEL_WIDTH: usize = 40;
/// Width the numeric columns are right-aligned to.
pub const COUNT_WIDTH: usize = 3;
/// Dash run substituted for each tab when deriving a divider.
const TAB_DASHES: usize = 8;

/// Render a report as a fixed-width table: header (`Repo`, `+`, `-`), a
/// divider, one row per repository in the order the report carries them, a
/// divider, and the grand-total row. Rendering the same report twice yields
/// byte-identical text.
pub fn render(report: &Report, root: &Path) -> String {
    let header = row("Repo", "+", "-");
    let total = row(
        "Total",
        &report.total.added.to_string(),
        &report.total.deleted.to_string(),
    );
    let divider = divider_for(&total);

    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{divider}");
    for entry in &report.rows {
        let label = repo_label(&entry.repo, root);
        let _ = writeln!(
            out,
            "{}",
            row(
                &label,
                &entry.counts.added.to_string(),
                &entry.counts.deleted.to_string(),
            )
        );
    }
    let _ = writeln!(out, "{divider}");
    let _ = writeln!(out, "{total}");
    out
}

fn row(label: &str, added: &str, deleted: &str) -> String {
    format!(
        "{label:<lw$}\t{added:>cw$}\t{deleted:>cw$}",
        lw = LABEL_WIDTH,
        cw = COUNT_WIDTH
    )
}

/// Divider derived from the shape of the row above it: every tab becomes a
/// fixed dash run and every other character a single dash, so the rule spans
/// the row whatever the column widths are.
fn divider_for(row: &str) -> String {
    let mut divider = String::with_capacity(row.len() + 2 * TAB_DASHES);
    for c in row.chars() {
        if c == '\t' {
            for _ in 0..TAB_DASHES {
                divider.push('-');
            }
        } else {
            divider.push('-');
        }
    }
    divider
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineCounts, RepoTotal};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn report(rows: Vec<(&str, u64, u64)>) -> Report {
        Report::from_totals(
            rows.into_iter()
                .map(|(name, added, deleted)| {
                    RepoTotal::new(PathBuf::from(name), LineCounts::new(added, deleted))
                })
                .collect(),
        )
    }

    #[test]
    fn empty_report_is_header_divider_divider_total() {
        let text = render(&report(Vec::new()), Path::new("/code"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Repo"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].starts_with("Total"));
        assert!(lines[3].ends_with("\t  0\t  0"));
    }

    #[test]
    fn rows_and_total_line_up() {
        let text = render(
            &report(vec![("/code/a", 3, 1), ("/code/b", 7, 4)]),
            Path::new("/code"),
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], format!("{:<40}\t  3\t  1", "/a"));
        assert_eq!(lines[3], format!("{:<40}\t  7\t  4", "/b"));
        assert_eq!(lines[5], format!("{:<40}\t 10\t  5", "Total"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let rep = report(vec![("/code/a", 8, 2)]);
        assert_eq!(render(&rep, Path::new("/code")), render(&rep, Path::new("/code")));
    }

    #[test]
    fn divider_matches_total_row_shape() {
        let rep = report(vec![("/code/a", 1234, 5)]);
        let text = render(&rep, Path::new("/code"));
        let lines: Vec<&str> = text.lines().collect();
        let total = lines.last().unwrap();
        let divider = lines[lines.len() - 2];

        let tabs = total.matches('\t').count();
        let plain = total.chars().count() - tabs;
        assert_eq!(divider.len(), plain + tabs * 8);
        assert!(divider.chars().all(|c| c == '-'));
        assert_eq!(divider, lines[1]);
    }

    #[test]
    fn counts_wider_than_the_column_are_not_truncated() {
        let text = render(&report(vec![("/code/a", 12345, 0)]), Path::new("/code"));
        assert!(text.contains("\t12345\t"));
    }
}
