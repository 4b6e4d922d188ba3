//! High-level export logic.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::auth::Session;
use crate::config::Config;
use crate::core::month_view::build_month_view;
use crate::errors::{AppError, AppResult};
use crate::export::csv::build_csv;
use crate::export::html::build_html;
use crate::export::model::{EntryRow, entry_to_row};
use crate::export::{ArtifactRef, DocumentPayload, DocumentRenderer, ExportFormat};
use crate::models::day_entry::DayEntry;
use crate::store::EntryStore;
use crate::store::repository::EntryRepository;
use crate::utils::date::month_name;

pub struct ExportLogic;

impl ExportLogic {
    /// Build the document payload for one month's entries.
    ///
    /// Fails with `NoEntries` on an empty set so callers can tell the user
    /// instead of invoking the renderer. Rows are ordered ascending by date.
    pub fn build_payload(
        entries_by_date: &BTreeMap<NaiveDate, DayEntry>,
        year: i32,
        month: u32,
        format: ExportFormat,
        cfg: &Config,
    ) -> AppResult<DocumentPayload> {
        if entries_by_date.is_empty() {
            return Err(AppError::NoEntries);
        }

        let title = build_title(&cfg.export_title, year, month);

        // BTreeMap iterates in ascending date order, which for ISO dates is
        // calendar order.
        let rows: Vec<EntryRow> = entries_by_date
            .values()
            .map(|e| entry_to_row(e, &cfg.show_weekday))
            .collect();

        let content = match format {
            ExportFormat::Html => build_html(&title, &rows),
            ExportFormat::Csv => build_csv(&rows)?,
        };

        Ok(DocumentPayload {
            format,
            title,
            content,
        })
    }

    /// Query, aggregate, build the payload and hand it to the renderer.
    pub fn export<S: EntryStore, R: DocumentRenderer>(
        repo: &EntryRepository<S>,
        session: &Session,
        year: i32,
        month: u32,
        format: ExportFormat,
        cfg: &Config,
        renderer: &R,
    ) -> AppResult<ArtifactRef> {
        let entries = repo.query_by_month(session.user_id(), year, month)?;
        let view = build_month_view(year, month, entries, None);

        let payload = Self::build_payload(&view.entries_by_date, year, month, format, cfg)?;

        let artifact = renderer.render(&payload).map_err(|e| {
            tracing::error!(error = %e, "document renderer failed");
            match e {
                remote @ AppError::Remote(_) => remote,
                other => AppError::Remote(other.to_string()),
            }
        })?;

        tracing::info!(uri = %artifact.uri, "month exported");
        Ok(artifact)
    }
}

/// Document title, e.g. "Planner - February 2024".
fn build_title(prefix: &str, year: i32, month: u32) -> String {
    format!("{} - {} {}", prefix, month_name(month), year)
}
