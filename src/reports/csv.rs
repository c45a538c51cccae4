//! CSV renderers for engine outputs.
//!
//! Comma-separated reports suitable for spreadsheet import, which is where
//! the rationalization team actually reviews them.

use crate::aggregate::Dashboard;
use crate::engine::NormalizedName;
use crate::flags::UtilityEntry;
use crate::model::{Bundle, ConflictEntry};

/// Render a dashboard (versioned or not) with a trailing totals section.
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut content = String::new();
    content.push_str("Publisher,Application,Version,All Entries,Duplicate Installations,Unique Installations\n");

    for group in &dashboard.groups {
        content.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",{},{},{}\n",
            escape_csv(&group.key.publisher),
            escape_csv(&group.key.application),
            escape_csv(group.key.version.as_deref().unwrap_or("")),
            group.all_entries,
            group.duplicate_entries,
            group.unique_entries
        ));
    }

    content.push_str("\n# Totals\n");
    content.push_str(&format!(
        "Distinct Applications,{}\nTotal Duplicate Installations,{}\n",
        dashboard.distinct_applications, dashboard.total_duplicates
    ));
    content
}

/// Render bundles: one row per bundle, anchor label first, then the
/// anchor's unique count, then each member label.
#[must_use]
pub fn render_bundles(bundles: &[Bundle]) -> String {
    let mut content = String::new();
    for bundle in bundles {
        let mut fields = vec![
            format!("\"{}\"", escape_csv(&bundle.anchor.display_label())),
            bundle.anchor_count.to_string(),
        ];
        fields.extend(
            bundle
                .members
                .iter()
                .map(|member| format!("\"{}\"", escape_csv(&member.display_label()))),
        );
        content.push_str(&fields.join(","));
        content.push('\n');
    }
    content
}

/// Render publisher conflicts.
#[must_use]
pub fn render_conflicts(conflicts: &[ConflictEntry]) -> String {
    let mut content = String::new();
    content.push_str("Application,Publishers\n");
    for conflict in conflicts {
        content.push_str(&format!(
            "\"{}\",\"{}\"\n",
            escape_csv(&conflict.application),
            escape_csv(&conflict.publishers.join(", "))
        ));
    }
    content
}

/// Render the utility list.
#[must_use]
pub fn render_utilities(utilities: &[UtilityEntry]) -> String {
    let mut content = String::new();
    content.push_str("Publisher,Application,Count\n");
    for entry in utilities {
        content.push_str(&format!(
            "\"{}\",\"{}\",{}\n",
            escape_csv(&entry.publisher),
            escape_csv(&entry.application),
            entry.count
        ));
    }
    content
}

/// Render the name-normalization report.
#[must_use]
pub fn render_normalized_names(names: &[NormalizedName]) -> String {
    let mut content = String::new();
    content.push_str("Old Name,New Name,Count\n");
    for name in names {
        content.push_str(&format!(
            "\"{}\",\"{}\",{}\n",
            escape_csv(&name.old_name),
            escape_csv(&name.new_name),
            name.count
        ));
    }
    content
}

/// Escape a string for CSV embedding: double-quote escaping per RFC 4180,
/// plus newline flattening since fields are already wrapped in double
/// quotes.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}
