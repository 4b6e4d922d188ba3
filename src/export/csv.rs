//! CSV payload (header included thanks to serde).

use std::io;

use crate::errors::{AppError, AppResult};
use crate::export::model::EntryRow;

pub(crate) fn build_csv(rows: &[EntryRow]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV encoding error: {e}"))))
}
