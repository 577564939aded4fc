//! Delimited-text rendering of a report.
//!
//! The export is a flat table: a summary section followed by the status
//! and per-offense breakdowns. Minor currency units are converted to a
//! major-unit display value here and nowhere earlier, so aggregation
//! itself never rounds.

use finexpress_core::{AppError, AppResult};

use super::model::FineReport;

/// Render the report as CSV text.
pub fn to_csv(report: &FineReport) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    let summary: [(&str, String); 7] = [
        ("generated_at", report.generated_at.to_rfc3339()),
        ("window", format!("{:?}", report.window)),
        ("total_count", report.total_count.to_string()),
        ("total_amount", major_units(report.total_amount)),
        ("paid_amount", major_units(report.paid_amount)),
        ("pending_amount", major_units(report.pending_amount)),
        ("collection_rate", format!("{:.4}", report.collection_rate)),
    ];

    write_row(&mut writer, &["field", "value"])?;
    for (field, value) in &summary {
        write_row(&mut writer, &[field, value.as_str()])?;
    }

    write_row(&mut writer, &["status", "count"])?;
    for (status, count) in &report.status_distribution {
        let count = count.to_string();
        write_row(&mut writer, &[status.as_str(), count.as_str()])?;
    }

    write_row(&mut writer, &["offense", "count", "revenue"])?;
    for (description, count) in &report.offense_distribution {
        let revenue = report
            .revenue_by_offense
            .get(description)
            .copied()
            .unwrap_or(0);
        let count = count.to_string();
        let revenue = major_units(revenue);
        write_row(
            &mut writer,
            &[description.as_str(), count.as_str(), revenue.as_str()],
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::internal(format!("CSV encoding error: {e}")))
}

fn write_row(writer: &mut csv::Writer<Vec<u8>>, fields: &[&str]) -> AppResult<()> {
    writer
        .write_record(fields)
        .map_err(|e| AppError::internal(format!("CSV write error: {e}")))
}

/// Format minor units as a major-unit decimal string (5000 → "50.00").
fn major_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let amount = amount.unsigned_abs();
    format!("{sign}{}.{:02}", amount / 100, amount % 100)
}
