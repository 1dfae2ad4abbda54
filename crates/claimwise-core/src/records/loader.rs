//! CSV ingestion for the three structured tables.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::records::error::DataLoadError;
use crate::records::model::{DenialRecord, MemberRecord, PlanRecord};
use crate::records::Tables;

/// File names expected under the data directory.
pub const DENIAL_FILE: &str = "denial_reason.csv";
pub const MEMBER_FILE: &str = "member_subscription.csv";
pub const PLAN_FILE: &str = "plan_coverage.csv";

const DENIAL_TABLE: &str = "denial_reason";
const MEMBER_TABLE: &str = "member_subscription";
const PLAN_TABLE: &str = "plan_coverage";

const DENIAL_COLUMNS: &[&str] = &["user_code", "denial_code", "description", "suggested_action"];
const MEMBER_COLUMNS: &[&str] = &[
    "member_id",
    "member_name",
    "plan_id",
    "status",
    "effective_date",
    "end_date",
];
const PLAN_COLUMNS: &[&str] = &["plan_id", "covered_services", "copay"];

/// Loads all three tables from `dir`.
///
/// A failure for one table is logged and leaves that table absent; the
/// others still load. This never errors: total failure surfaces as a
/// `Tables` value with nothing loaded.
pub fn load_tables(dir: &Path) -> Tables {
    Tables {
        denials: load_or_log(&dir.join(DENIAL_FILE), DENIAL_TABLE, DENIAL_COLUMNS),
        members: load_or_log(&dir.join(MEMBER_FILE), MEMBER_TABLE, MEMBER_COLUMNS),
        plans: load_or_log(&dir.join(PLAN_FILE), PLAN_TABLE, PLAN_COLUMNS),
    }
}

fn load_or_log<T: DeserializeOwned>(
    path: &Path,
    table: &'static str,
    required: &[&'static str],
) -> Option<Vec<T>> {
    match load_table(path, table, required) {
        Ok(rows) => {
            info!(table, rows = rows.len(), "loaded table");
            Some(rows)
        }
        Err(e) => {
            error!(table, error = %e, "table unavailable");
            None
        }
    }
}

/// Loads the denial-reason table from `path`.
pub fn load_denials(path: &Path) -> Result<Vec<DenialRecord>, DataLoadError> {
    load_table(path, DENIAL_TABLE, DENIAL_COLUMNS)
}

/// Loads the member-subscription table from `path`.
pub fn load_members(path: &Path) -> Result<Vec<MemberRecord>, DataLoadError> {
    load_table(path, MEMBER_TABLE, MEMBER_COLUMNS)
}

/// Loads the plan-coverage table from `path`.
pub fn load_plans(path: &Path) -> Result<Vec<PlanRecord>, DataLoadError> {
    load_table(path, PLAN_TABLE, PLAN_COLUMNS)
}

fn load_table<T: DeserializeOwned>(
    path: &Path,
    table: &'static str,
    required: &[&'static str],
) -> Result<Vec<T>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::MalformedHeader {
            table,
            reason: e.to_string(),
        })?
        .clone();

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::MissingColumn { table, column });
        }
    }

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<T>().enumerate() {
        let row = record.map_err(|e| DataLoadError::MalformedRow {
            table,
            // Header is line 1.
            row: i as u64 + 2,
            reason: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}
