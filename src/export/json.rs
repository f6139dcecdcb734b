use crate::error::ExportError;
use crate::summary::ConfigurationSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn export_json<P: AsRef<Path>>(
    summary: &ConfigurationSummary,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_json(summary, file)
}

/// Writes the pretty-printed summary to any sink.
pub fn write_json<W: Write>(summary: &ConfigurationSummary, mut out: W) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(summary)?;

    out.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::builtin_catalog;
    use crate::model::SelectionState;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_breakdown_and_groups() {
        let catalog = builtin_catalog().unwrap();
        let state = SelectionState::new()
            .select_chassis("sprinter144")
            .select_model(&catalog, "san-saba")
            .toggle_option(&catalog, "heating-diesel");
        let summary = ConfigurationSummary::new(&state, &catalog);

        let mut buf = Vec::new();
        write_json(&summary, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["price"]["total"], summary.price.total);
        assert_eq!(value["groups"][0]["category"], "wall-color");
        assert_eq!(value["groups"][3]["category"], "heating");
        assert_eq!(value["owns_van"], false);
    }
}
