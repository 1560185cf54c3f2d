//! Async dataset loading into the shared store.
//!
//! One load per request, no cancellation token: if a reload is started
//! while an earlier load is still in flight, whichever finishes last
//! wins. Load generations are logged so an overwrite is visible in the
//! log file.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{info, warn};
use serde_json::Value;

use rowpane_core::{Record, Shared, TableStore};

use crate::wakeup::WakeupSender;

static LOAD_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Parse a JSON document into records.
///
/// The document must be an array; object entries become rows, anything
/// else is skipped with a warning. A top-level object is rejected.
pub fn parse_records(text: &str) -> Result<Vec<Record>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let Value::Array(entries) = value else {
        return Err("dataset must be a JSON array of objects".into());
    };

    let mut records = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Object(map) => records.push(map),
            other => warn!("skipping non-object dataset entry {i}: {other}"),
        }
    }
    Ok(records)
}

/// Spawn a background load of `path` into `store`.
///
/// Sets the loading flag, reads and parses the file, replaces the rows
/// (which clears any selection), clears the flag, and wakes the event
/// loop. On failure the rows are left untouched and the error lands in
/// `load_error` for the status line.
pub fn spawn_load(
    path: PathBuf,
    store: Shared<TableStore>,
    load_error: Shared<Option<String>>,
    wakeup: WakeupSender,
) {
    let generation = LOAD_GENERATION.fetch_add(1, Ordering::SeqCst) + 1;
    store.update(|s| s.set_loading(true));
    wakeup.send();

    tokio::spawn(async move {
        info!("load #{generation}: reading {}", path.display());
        let result = match tokio::fs::read_to_string(&path).await {
            Ok(text) => parse_records(&text),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(records) => {
                info!("load #{generation}: {} rows", records.len());
                load_error.set(None);
                store.update(|s| {
                    s.replace_rows(records);
                    s.set_loading(false);
                });
            }
            Err(message) => {
                warn!("load #{generation} failed: {message}");
                load_error.set(Some(message));
                store.update(|s| s.set_loading(false));
            }
        }
        wakeup.send();
    });
}
