use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoryRow, ScanHistoryRecord},
        value_objects::RecordScanInput,
    },
};

/// External store holding past scans.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryStore: Send + Sync {
    fn save(&self, row: HistoryRow) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Newest first, at most `limit` rows.
    fn recent(&self, limit: usize)
    -> impl Future<Output = Result<Vec<HistoryRow>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryService: Send + Sync {
    fn record_scan(
        &self,
        input: RecordScanInput,
    ) -> impl Future<Output = Result<ScanHistoryRecord, CoreError>> + Send;

    fn recent_scans(
        &self,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<HistoryRow>, CoreError>> + Send;
}
