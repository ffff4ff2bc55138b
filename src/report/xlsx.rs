use camino::Utf8Path;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;

use crate::report::rows::{ReportRow, COLUMNS};

/// Write the report as a single-sheet XLSX workbook: a bold header row
/// followed by one row per patch, in the fixed column order.
pub fn write_report(rows: &[ReportRow], dest: &Utf8Path) -> crate::Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = dest.parent() {
        if !parent.as_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Patches")?;

    let header_format = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *name, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write(r, 0, row.severity.as_str())?;
        worksheet.write(r, 1, row.patch_name.as_str())?;
        worksheet.write(r, 2, row.patch_detail.as_str())?;
        worksheet.write(r, 3, row.products.as_str())?;
        worksheet.write(r, 4, row.arch.as_str())?;
        worksheet.write(r, 5, row.release.as_str())?;
        worksheet.write(r, 6, row.issues_fixed.as_str())?;
    }

    workbook.save(dest.as_std_path())?;

    Ok(())
}
