use crate::domain::{BuildingSummary, TableRow};
use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{Workbook, Worksheet};

fn write_headers(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<()> {
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| AppError::Xlsx(format!("Failed to write header '{}': {}", header, e)))?;
    }
    Ok(())
}

/// Writes the table view to a one-sheet workbook and returns its bytes.
pub fn export_table_xlsx(rows: &[TableRow], sheet_name: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    write_headers(
        worksheet,
        &[
            "Project",
            "Unit",
            "Address",
            "District",
            "Price",
            "Size",
            "PSF",
            "Beds",
            "Baths",
            "Type",
            "Tenure",
            "Year",
            "Status",
            "Agency",
            "Transaction Date",
        ],
    )?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &row.title)?;
        worksheet.write_string(r, 1, &row.unit_number)?;
        worksheet.write_string(r, 2, &row.address)?;
        worksheet.write_string(r, 3, &row.district)?;
        worksheet.write_string(r, 4, &row.price)?;
        worksheet.write_string(r, 5, &row.size)?;
        worksheet.write_string(r, 6, &row.psf)?;
        worksheet.write_number(r, 7, row.bedrooms as f64)?;
        worksheet.write_number(r, 8, row.bathrooms as f64)?;
        worksheet.write_string(r, 9, &row.property_type)?;
        worksheet.write_string(r, 10, &row.tenure)?;
        worksheet.write_string(r, 11, &row.year)?;
        worksheet.write_string(r, 12, row.status.as_str())?;
        worksheet.write_string(r, 13, &row.agency)?;

        let date = row
            .transaction_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        worksheet.write_string(r, 14, &date)?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| AppError::Xlsx(format!("Failed to save workbook: {}", e)))?;

    Ok(buffer)
}

/// Writes the building view to a one-sheet workbook and returns its bytes.
pub fn export_buildings_xlsx(buildings: &[BuildingSummary], sheet_name: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    write_headers(
        worksheet,
        &[
            "Project",
            "Address",
            "District",
            "Type",
            "Tenure",
            "Year",
            "Total Units",
            "Active Listings",
            "Past Transactions",
            "Price Range",
            "Size Range",
            "PLB",
            "Other Agencies",
        ],
    )?;

    for (i, b) in buildings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &b.name)?;
        worksheet.write_string(r, 1, &b.address)?;
        worksheet.write_string(r, 2, &b.district)?;
        worksheet.write_string(r, 3, &b.property_type)?;
        worksheet.write_string(r, 4, &b.tenure)?;
        worksheet.write_string(r, 5, &b.completion_year)?;
        worksheet.write_number(r, 6, b.total_units.unwrap_or(0) as f64)?;
        worksheet.write_number(r, 7, b.active_listings as f64)?;
        worksheet.write_number(r, 8, b.past_transactions as f64)?;
        worksheet.write_string(r, 9, &b.price_range)?;
        worksheet.write_string(r, 10, &b.size_range)?;
        worksheet.write_string(r, 11, if b.has_plb_units { "Yes" } else { "No" })?;
        worksheet.write_string(r, 12, if b.has_other_units { "Yes" } else { "No" })?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| AppError::Xlsx(format!("Failed to save workbook: {}", e)))?;

    Ok(buffer)
}
