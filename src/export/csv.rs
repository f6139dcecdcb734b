use crate::error::ExportError;
use crate::summary::ConfigurationSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(
    summary: &ConfigurationSummary,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(summary, file)
}

/// One row per picked item, then the price breakdown.
pub fn write_csv<W: Write>(summary: &ConfigurationSummary, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(["Category", "Item", "Price"])?;

    if let Some(chassis) = &summary.chassis {
        let price = if summary.owns_van { 0 } else { chassis.price };
        writer.write_record(["Base Van", &chassis.name, &price.to_string()])?;
    }
    if let Some(model) = &summary.model {
        writer.write_record(["Package", &model.name, &model.price.to_string()])?;
    }

    for group in &summary.groups {
        let title = group.category.title();
        for item in &group.items {
            writer.write_record([title, &item.name, &item.price.to_string()])?;
        }
    }

    let p = &summary.price;
    for (label, amount) in [
        ("Base Van", p.chassis),
        ("Package", p.model),
        ("Upgrades", p.upgrades),
        ("Total", p.total),
    ] {
        writer.write_record(["Price Summary", label, &amount.to_string()])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
