use std::sync::Arc;

use modscope_api::analysis::{GetRecentAnalyses, SentimentAnalysis};
use modscope_api::dashboard::{
    DashboardCategory, GetDashboardCategories, GetRecentReports, GetTopCategories, RecentReport,
    ReportCategories,
};
use modscope_api::present;
use modscope_api::reports::CategoryCount;
use modscope_common::error::ClientError;
use modscope_common::http_client::HttpClient;

use crate::client::ModClient;
use crate::query::{Query, QueryState};

const RECENT_ANALYSES_LIMIT: i64 = 5;
const RECENT_REPORTS_LIMIT: i64 = 3;
const TOP_CATEGORY_REPORTS_LIMIT: i64 = 10;
const TOP_CATEGORIES: usize = 4;

/// Sum of `totalFlagged` across reports; a missing count adds nothing.
pub fn total_flagged<'a>(reports: impl IntoIterator<Item = &'a RecentReport>) -> i64 {
    reports
        .into_iter()
        .map(|report| report.total_flagged.unwrap_or(0))
        .fold(0, i64::saturating_add)
}

/// Merge category counts across reports and keep the four largest.
///
/// Counts for the same name are summed. Ordering is by count, descending;
/// equal counts keep the order in which their names first appeared.
pub fn top_categories<'a>(
    reports: impl IntoIterator<Item = &'a ReportCategories>,
) -> Vec<CategoryCount> {
    let mut merged: Vec<CategoryCount> = Vec::new();
    for count in reports
        .into_iter()
        .flat_map(|report| present(&report.categories))
        .filter(|count| !count.name.is_empty())
    {
        match merged.iter_mut().find(|seen| seen.name == count.name) {
            Some(seen) => seen.count = seen.count.saturating_add(count.count),
            None => merged.push(count),
        }
    }
    // stable: ties stay in first-seen order
    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged.truncate(TOP_CATEGORIES);
    merged
}

/// Overview combining four independent reads.
///
/// The reads run concurrently and settle independently: one failing leaves
/// the others' data in place.
pub struct Dashboard<C: HttpClient> {
    categories: Query<GetDashboardCategories, C>,
    analyses: Query<GetRecentAnalyses, C>,
    recent_reports: Query<GetRecentReports, C>,
    top_reports: Query<GetTopCategories, C>,
}

impl<C: HttpClient> Dashboard<C> {
    /// Build the dashboard and run all four reads.
    pub async fn load(client: Arc<ModClient<C>>) -> Self {
        let dashboard = Self {
            categories: Query::new(client.clone()),
            analyses: Query::new(client.clone()),
            recent_reports: Query::new(client.clone()),
            top_reports: Query::new(client),
        };
        tokio::join!(
            dashboard.categories.trigger(GetDashboardCategories {}),
            dashboard.analyses.trigger(
                GetRecentAnalyses::new()
                    .limit(RECENT_ANALYSES_LIMIT)
                    .build()
            ),
            dashboard.recent_reports.trigger(
                GetRecentReports::new()
                    .limit(RECENT_REPORTS_LIMIT)
                    .build()
            ),
            dashboard.top_reports.trigger(
                GetTopCategories::new()
                    .limit(TOP_CATEGORY_REPORTS_LIMIT)
                    .build()
            ),
        );
        dashboard
    }

    /// Categories, empty until loaded.
    pub fn categories(&self) -> Vec<DashboardCategory> {
        self.categories
            .data()
            .map(|out| present(&out.get_all_categories))
            .unwrap_or_default()
    }

    /// The five most recent sentiment analyses (ids only).
    pub fn recent_analyses(&self) -> Vec<SentimentAnalysis> {
        self.analyses
            .data()
            .map(|out| present(&out.get_recent_analyses))
            .unwrap_or_default()
    }

    /// The three most recent reports.
    pub fn recent_reports(&self) -> Vec<RecentReport> {
        self.recent_reports
            .data()
            .map(|out| present(&out.get_reports))
            .unwrap_or_default()
    }

    /// Flagged words across the recent reports.
    pub fn total_flagged(&self) -> i64 {
        total_flagged(&self.recent_reports())
    }

    /// Four largest categories across the latest reports.
    pub fn top_categories(&self) -> Vec<CategoryCount> {
        let reports = self
            .top_reports
            .data()
            .map(|out| present(&out.get_reports))
            .unwrap_or_default();
        top_categories(&reports)
    }

    /// Number of categories.
    pub fn categories_count(&self) -> usize {
        self.categories().len()
    }

    /// Number of recent reports.
    pub fn reports_count(&self) -> usize {
        self.recent_reports().len()
    }

    /// Number of recent analyses.
    pub fn analyses_count(&self) -> usize {
        self.recent_analyses().len()
    }

    /// True while any of the four reads is in flight.
    pub fn loading(&self) -> bool {
        self.categories.state().is_loading()
            || self.analyses.state().is_loading()
            || self.recent_reports.state().is_loading()
            || self.top_reports.state().is_loading()
    }

    /// First error in the order categories, analyses, recent reports,
    /// top categories.
    pub fn error(&self) -> Option<Arc<ClientError>> {
        self.categories
            .state()
            .error
            .or_else(|| self.analyses.state().error)
            .or_else(|| self.recent_reports.state().error)
            .or_else(|| self.top_reports.state().error)
    }

    /// State of the recent analyses read on its own.
    pub fn analyses_state(&self) -> QueryState<modscope_api::analysis::GetRecentAnalysesOutput> {
        self.analyses.state()
    }

    /// Reload the recent reports from the server.
    pub async fn refetch(&self) {
        self.recent_reports.refetch().await;
    }
}
