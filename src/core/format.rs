//! Text formatting for documentation fragments
//!
//! Renders fixed-width tables with `=` borders, bulleted descriptions,
//! and canonical short version strings.

use crate::error::TableError;

/// Marker bitbake puts in versions built from an auto-incremented git revision
pub const GIT_AUTOINC_MARKER: &str = "gitAUTOINC";

/// Shorten a version for display
///
/// Versions built from git collapse to `git`, and an `<epoch>:` prefix is
/// dropped.
///
/// # Examples
/// ```
/// use bsp_metadoc::core::format::format_version;
///
/// assert_eq!(format_version("1:2.3.4"), "2.3.4");
/// assert_eq!(format_version("2014.04+gitAUTOINC+6a99a4a8bb"), "git");
/// ```
pub fn format_version(version: &str) -> String {
    if version.contains(GIT_AUTOINC_MARKER) {
        return "git".to_string();
    }

    match version.split_once(':') {
        Some((epoch, rest)) if !epoch.is_empty() && epoch.bytes().all(|b| b.is_ascii_digit()) => {
            rest.to_string()
        }
        _ => version.to_string(),
    }
}

/// Render rows as an aligned plain-text table
///
/// Body rows are sorted by their first column; the header stays on top.
/// An empty header renders as an empty string.
pub fn render_table(
    header: &[String],
    rows: &[Vec<String>],
    spacing: usize,
) -> Result<String, TableError> {
    if spacing == 0 {
        return Err(TableError::InvalidSpacing);
    }

    for (index, row) in rows.iter().enumerate() {
        if row.len() != header.len() {
            return Err(TableError::ShapeMismatch {
                row: index,
                expected: header.len(),
                actual: row.len(),
            });
        }
    }

    if header.is_empty() {
        return Ok(String::new());
    }

    let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = " ".repeat(spacing);
    let border = widths
        .iter()
        .map(|w| "=".repeat(*w))
        .collect::<Vec<_>>()
        .join(&separator);
    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(&separator)
    };

    let mut body: Vec<&Vec<String>> = rows.iter().collect();
    body.sort_by(|a, b| a[0].cmp(&b[0]));

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_line(header));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in body {
        out.push_str(&format_line(row));
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');

    Ok(out)
}

/// Render `(name, description)` pairs as a bulleted list
pub fn describe<S: AsRef<str>>(items: &[(S, S)]) -> String {
    items
        .iter()
        .map(|(name, description)| format!("* **{}**: {}\n", name.as_ref(), description.as_ref()))
        .collect()
}
