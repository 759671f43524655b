use std::io::Write;

use crate::{Result, ResultRecord};

/// Default file name for the CSV export.
pub const DEFAULT_CSV_NAME: &str = "profile_urls.csv";

const COLUMNS: [&str; 7] = [
    "Platform",
    "Input URL",
    "Uploader",
    "Uploader ID",
    "Channel (Username)",
    "Profile URL",
    "Error",
];

/// Serialize the result set as UTF-8 CSV with a header row. Quoting follows
/// RFC 4180, so error messages containing commas or newlines stay intact.
pub fn write_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render a fixed-width text table over the unioned column set. Cells that
/// do not apply to a row's shape stay empty.
pub fn render_table(records: &[ResultRecord]) -> String {
    let rows: Vec<Vec<&str>> = records.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn row_cells(record: &ResultRecord) -> Vec<&str> {
    vec![
        record.platform.as_str(),
        record.input_url.as_str(),
        cell(&record.uploader),
        cell(&record.uploader_id),
        cell(&record.channel),
        cell(&record.profile_url),
        cell(&record.error),
    ]
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let cell = cell.as_ref();
        out.push_str(cell);
        for _ in cell.len()..*width {
            out.push(' ');
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
