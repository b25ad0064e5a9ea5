// src/export/logic.rs

use crate::core::pipeline::filter;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::xlsx::export_xlsx;
use crate::models::selection::{Selection, ViewFilter};
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use chrono::Local;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export events to `file`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `view`: None exports the whole collection (completed included);
    ///   Some(view) exports what that view shows right now.
    /// - `force`: overwrite without asking.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        view: Option<ViewFilter>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let state = queries::load_state(pool)?;

        let selected = match view {
            None => state.events().to_vec(),
            Some(v) => {
                let selection = Selection {
                    view: v,
                    ..Selection::default()
                };
                filter::apply_view_filter(state.events(), &selection, Local::now())
            }
        };

        if selected.is_empty() {
            warning("No events found for the selected view. Nothing to export.");
            return Ok(());
        }

        let rows: Vec<EventExport> = selected
            .iter()
            .map(|e| EventExport::from_event(e, &state))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} events as {}", rows.len(), format.as_str()),
        )?;

        Ok(())
    }
}
