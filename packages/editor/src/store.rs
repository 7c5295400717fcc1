use folio_model::{Element, Report};
use std::future::Future;

/// Persistence collaborator for a report's layout
///
/// Implementations send the whole ordered layout and return the report as
/// stored. No retry or timeout is expected of them.
pub trait ReportStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn save_layout(
        &self,
        report_id: &str,
        layout: &[Element],
    ) -> impl Future<Output = Result<Report, Self::Error>> + Send;
}
