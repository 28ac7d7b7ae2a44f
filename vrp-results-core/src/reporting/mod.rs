//! Human readable, family grouped display of instance name sets.

#[cfg(test)]
#[path = "../../tests/unit/reporting/reporting_test.rs"]
mod reporting_test;

use crate::utils::GenericResult;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::io::Write;

/// Family groups which start their own paragraph, in display order.
const GROUP_BREAKS: &[&str] = &["c2", "r1", "r2", "rc1", "rc2"];

/// Wrap width of grouped name listings.
const WRAP_WIDTH: usize = 70;

lazy_static! {
    static ref SOLOMON_LIKE: Regex = Regex::new(r"^r?c?\d{3}$").expect("invalid solomon selector");
    static ref HOMBERGER_LIKE: Regex =
        Regex::new(r"^r?c?[0-9_]{5}$").expect("invalid homberger selector");
}

/// Selects the names shaped like full Solomon instances.
pub fn select_solomon_like(names: &BTreeSet<String>) -> BTreeSet<String> {
    names.iter().filter(|name| SOLOMON_LIKE.is_match(name)).cloned().collect()
}

/// Selects the names shaped like Homberger instances.
pub fn select_homberger_like(names: &BTreeSet<String>) -> BTreeSet<String> {
    names.iter().filter(|name| HOMBERGER_LIKE.is_match(name)).cloned().collect()
}

/// Formats a name set for display: a `(count)` header, names sorted with `_` collating as
/// `0`, one paragraph per family group, lines wrapped at a fixed width.
pub fn format_grouped(names: &BTreeSet<String>) -> String {
    let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
    sorted.sort_by_key(|name| name.replace('_', "0"));

    let mut break_at = BTreeSet::new();
    for group in GROUP_BREAKS {
        if let Some(index) = sorted.iter().position(|name| name.starts_with(group)) {
            break_at.insert(index);
        }
    }

    let mut paragraphs: Vec<Vec<&str>> = vec![Vec::default()];
    for (index, &name) in sorted.iter().enumerate() {
        if index > 0 && break_at.contains(&index) {
            paragraphs.push(Vec::default());
        }
        if let Some(last) = paragraphs.last_mut() {
            last.push(name);
        }
    }

    let body = paragraphs
        .iter()
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| wrap(paragraph, WRAP_WIDTH))
        .collect::<Vec<_>>()
        .join("\n\n");

    match body.is_empty() {
        true => format!("({})", names.len()),
        false => format!("({})\n{body}", names.len()),
    }
}

/// Writes the set as two grouped sections, full Solomon instances first, Homberger second.
pub fn write_benchmark_report(
    writer: &mut dyn Write,
    names: &BTreeSet<String>,
) -> GenericResult<()> {
    writeln!(writer, "Full Solomon tests:")?;
    writeln!(writer, "{}", format_grouped(&select_solomon_like(names)))?;
    writeln!(writer, "Homberger tests:")?;
    writeln!(writer, "{}", format_grouped(&select_homberger_like(names)))?;

    Ok(())
}

fn wrap(words: &[&str], width: usize) -> String {
    let mut lines = Vec::default();
    let mut current = String::new();

    for word in words {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
