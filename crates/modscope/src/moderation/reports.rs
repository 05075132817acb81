use std::sync::Arc;

use modscope_api::present;
use modscope_api::reports::{
    GenerateReport, GenerateReportOutput, GeneratedReport, GetReportById, GetReportByIdOutput,
    GetReportEntries, GetReportEntriesOutput, GetReports, GetReportsOutput, LogReport,
    LogReportOutput, Report, ReportDetail, ReportEntry,
};
use modscope_common::error::ClientError;
use modscope_common::http_client::HttpClient;

use crate::client::ModClient;
use crate::query::{Mutation, MutationState, Query, QueryState};

/// Page size of the report list until [`Reports::set_limit`] changes it.
pub const DEFAULT_REPORTS_LIMIT: i64 = 10;

/// Entries fetched with a report detail unless a page is requested.
pub const DEFAULT_ENTRIES_LIMIT: i64 = 50;

/// Paged report list, report details and report-producing writes.
pub struct Reports<C: HttpClient> {
    client: Arc<ModClient<C>>,
    list: Query<GetReports, C>,
    detail: Query<GetReportById, C>,
    entries: Query<GetReportEntries, C>,
    generate: Mutation<GenerateReport>,
    log: Mutation<LogReport>,
}

impl<C: HttpClient> Reports<C> {
    /// Build the unit and load the first page of reports.
    pub async fn load(client: Arc<ModClient<C>>) -> Self {
        let unit = Self {
            list: Query::new(client.clone()),
            detail: Query::new(client.clone()),
            entries: Query::new(client.clone()),
            generate: Mutation::new(),
            log: Mutation::new(),
            client,
        };
        unit.list
            .trigger(
                GetReports::new()
                    .limit(DEFAULT_REPORTS_LIMIT)
                    .offset(0)
                    .build(),
            )
            .await;
        unit
    }

    /// Reports on the current page.
    pub fn reports(&self) -> Vec<Report> {
        self.list
            .data()
            .map(|out| present(&out.get_reports))
            .unwrap_or_default()
    }

    /// State of the report list read.
    pub fn reports_state(&self) -> QueryState<GetReportsOutput> {
        self.list.state()
    }

    fn paging(&self) -> (i64, i64) {
        let params = self.list.params().unwrap_or_default();
        (
            params.limit.unwrap_or(DEFAULT_REPORTS_LIMIT),
            params.offset.unwrap_or(0),
        )
    }

    /// Current page size.
    pub fn limit(&self) -> i64 {
        self.paging().0
    }

    /// Current page offset.
    pub fn offset(&self) -> i64 {
        self.paging().1
    }

    /// Advance the offset by one page and load it.
    pub async fn load_more(&self) -> QueryState<GetReportsOutput> {
        let (limit, offset) = self.paging();
        self.list
            .trigger(GetReports::new().limit(limit).offset(offset + limit).build())
            .await
    }

    /// Change the page size and reload at the current offset.
    pub async fn set_limit(&self, limit: i64) -> QueryState<GetReportsOutput> {
        let (_, offset) = self.paging();
        self.list
            .trigger(GetReports::new().limit(limit).offset(offset).build())
            .await
    }

    /// Reload the current page from the server.
    pub async fn refetch_reports(&self) -> QueryState<GetReportsOutput> {
        self.list.refetch().await
    }

    /// Load one report with the first page of its entries.
    pub async fn report(&self, id: &str) -> Option<ReportDetail> {
        self.detail
            .trigger(GetReportById::new().id(id).build())
            .await
            .data
            .and_then(|out| out.get_report_by_id)
    }

    /// Reload the current report with a different page of entries.
    ///
    /// Returns `None` without a request when no report was loaded yet.
    pub async fn report_entries_page(&self, limit: i64, offset: i64) -> Option<ReportDetail> {
        let current = self.detail.params()?;
        let params = GetReportById::new()
            .id(current.id)
            .entries_limit(limit)
            .entries_offset(offset)
            .build();
        self.detail
            .trigger(params)
            .await
            .data
            .and_then(|out| out.get_report_by_id)
    }

    /// Latest loaded report detail.
    pub fn report_detail(&self) -> Option<ReportDetail> {
        self.detail.data().and_then(|out| out.get_report_by_id)
    }

    /// State of the report detail read.
    pub fn report_detail_state(&self) -> QueryState<GetReportByIdOutput> {
        self.detail.state()
    }

    /// Query the entry log directly.
    pub async fn report_entries(&self, params: GetReportEntries) -> Vec<ReportEntry> {
        self.entries
            .trigger(params)
            .await
            .data
            .map(|out| present(&out.get_report_entries))
            .unwrap_or_default()
    }

    /// State of the entry log read.
    pub fn report_entries_state(&self) -> QueryState<GetReportEntriesOutput> {
        self.entries.state()
    }

    /// Generate a report for the date range, then reload the report list.
    ///
    /// A failure is recorded in [`generate_state`](Self::generate_state) and
    /// also returned.
    pub async fn generate_report(
        &self,
        start_date: &str,
        end_date: &str,
        title: Option<&str>,
    ) -> Result<Option<GeneratedReport>, Arc<ClientError>> {
        let request = GenerateReport::new()
            .start_date(start_date)
            .end_date(end_date)
            .maybe_title(title)
            .build();
        let output = self.generate.track(self.client.mutate(&request)).await?;
        self.list.refetch().await;
        Ok(output.generate_report)
    }

    /// Loading flag and last error of [`generate_report`](Self::generate_report).
    pub fn generate_state(&self) -> MutationState<GenerateReportOutput> {
        self.generate.state()
    }

    /// Log one flagged-word occurrence. Errors are recorded and returned.
    pub async fn log_report(
        &self,
        request: LogReport,
    ) -> Result<Option<ReportEntry>, Arc<ClientError>> {
        let output = self.log.track(self.client.mutate(&request)).await?;
        Ok(output.log_report)
    }

    /// Loading flag and last error of [`log_report`](Self::log_report).
    pub fn log_state(&self) -> MutationState<LogReportOutput> {
        self.log.state()
    }
}
