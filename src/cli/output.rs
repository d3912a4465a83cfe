//! Output formatting utilities

use crate::application::ConsolidateReport;

/// Format a consolidation pass report for display
pub fn format_report(report: &ConsolidateReport) -> String {
    if report.saves == 0 {
        return format!(
            "Nothing to consolidate ({} bookmark(s) checked).\n",
            report.fetched
        );
    }

    let mut output = String::new();
    for change in &report.changes {
        output.push_str(&format!(
            "{} -> {}  {} bookmark(s)\n",
            change.old_tag, change.parent, change.bookmarks
        ));
    }
    output.push_str(&format!(
        "Updated {} bookmark(s) with {} tag substitution(s).\n",
        report.changed_bookmarks, report.saves
    ));
    output
}

/// Format a list of tags for display
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }

    output
}
