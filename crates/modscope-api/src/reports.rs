//! Generated reports and the flagged-word log entries behind them.

use modscope_common::graphql::{GraphqlRequest, GraphqlResp, OperationKind};
use smol_str::SmolStr;

/// Number of flagged words attributed to one category.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub name: SmolStr,
    #[serde(default)]
    pub count: i64,
}

/// Report as listed by `getReports`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: SmolStr,
    pub title: String,
    pub start_date: SmolStr,
    pub end_date: SmolStr,
    pub created_at: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub summary: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub total_flagged: std::option::Option<i64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub categories: std::option::Option<Vec<std::option::Option<CategoryCount>>>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub insights: std::option::Option<Vec<std::option::Option<String>>>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub risk_assessment: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub ai_generated: std::option::Option<bool>,
}

/// Full report with its breakdown and a page of entries, from `getReportById`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetail {
    pub id: SmolStr,
    pub title: String,
    pub start_date: SmolStr,
    pub end_date: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub summary: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub total_flagged: std::option::Option<i64>,
    /// Free-form category name to count map
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub category_breakdown: std::option::Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub insights: std::option::Option<Vec<std::option::Option<String>>>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub risk_assessment: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub entries: std::option::Option<Vec<std::option::Option<ReportEntry>>>,
}

/// What `generateReport` hands back about the report it created.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub id: SmolStr,
    pub title: String,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub summary: std::option::Option<String>,
}

/// One logged occurrence of a flagged word.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub id: SmolStr,
    pub word: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<SmolStr>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub context: std::option::Option<String>,
    pub timestamp: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub severity: std::option::Option<i64>,
}

/// `GetReports` query, paged.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetReports {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetReportsOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_reports: std::option::Option<Vec<std::option::Option<Report>>>,
}

/// Response type for `GetReports`
pub struct GetReportsResponse;

impl GraphqlResp for GetReportsResponse {
    const OPERATION_NAME: &'static str = "GetReports";
    type Output = GetReportsOutput;
}

impl GraphqlRequest for GetReports {
    const OPERATION_NAME: &'static str = "GetReports";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetReports($limit: Int, $offset: Int) {
  getReports(limit: $limit, offset: $offset) {
    id
    title
    startDate
    endDate
    summary
    totalFlagged
    categories {
      name
      count
    }
    insights
    riskAssessment
    createdAt
  }
}"#;
    type Response = GetReportsResponse;
}

/// `GetReportById` query.
///
/// The nested entries page defaults to 50 entries from offset 0 when the
/// paging variables are left out.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetReportById {
    #[builder(into)]
    pub id: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entries_limit: std::option::Option<i64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entries_offset: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetReportByIdOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_report_by_id: std::option::Option<ReportDetail>,
}

/// Response type for `GetReportById`
pub struct GetReportByIdResponse;

impl GraphqlResp for GetReportByIdResponse {
    const OPERATION_NAME: &'static str = "GetReportById";
    type Output = GetReportByIdOutput;
}

impl GraphqlRequest for GetReportById {
    const OPERATION_NAME: &'static str = "GetReportById";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetReportById($id: ID!, $entriesLimit: Int = 50, $entriesOffset: Int = 0) {
  getReportById(id: $id) {
    id
    title
    startDate
    endDate
    summary
    totalFlagged
    categoryBreakdown
    insights
    riskAssessment
    entries(limit: $entriesLimit, offset: $entriesOffset) {
      id
      word
      category
      context
      timestamp
      severity
    }
  }
}"#;
    type Response = GetReportByIdResponse;
}

/// `GetReportEntries` query: log entries filtered by report or date range.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetReportEntries {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub report_id: std::option::Option<SmolStr>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub start_date: std::option::Option<SmolStr>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub end_date: std::option::Option<SmolStr>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetReportEntriesOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_report_entries: std::option::Option<Vec<std::option::Option<ReportEntry>>>,
}

/// Response type for `GetReportEntries`
pub struct GetReportEntriesResponse;

impl GraphqlResp for GetReportEntriesResponse {
    const OPERATION_NAME: &'static str = "GetReportEntries";
    type Output = GetReportEntriesOutput;
}

impl GraphqlRequest for GetReportEntries {
    const OPERATION_NAME: &'static str = "GetReportEntries";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetReportEntries($reportId: ID, $startDate: String, $endDate: String, $limit: Int, $offset: Int) {
  getReportEntries(reportId: $reportId, startDate: $startDate, endDate: $endDate, limit: $limit, offset: $offset) {
    id
    word
    category
    context
    timestamp
    severity
  }
}"#;
    type Response = GetReportEntriesResponse;
}

/// `GenerateReport` mutation.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    #[builder(into)]
    pub start_date: SmolStr,
    #[builder(into)]
    pub end_date: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub title: std::option::Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub generate_report: std::option::Option<GeneratedReport>,
}

/// Response type for `GenerateReport`
pub struct GenerateReportResponse;

impl GraphqlResp for GenerateReportResponse {
    const OPERATION_NAME: &'static str = "GenerateReport";
    type Output = GenerateReportOutput;
}

impl GraphqlRequest for GenerateReport {
    const OPERATION_NAME: &'static str = "GenerateReport";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation GenerateReport($startDate: String!, $endDate: String!, $title: String) {
  generateReport(startDate: $startDate, endDate: $endDate, title: $title) {
    id
    title
    summary
  }
}"#;
    type Response = GenerateReportResponse;
}

/// `LogReport` mutation: record one flagged-word occurrence.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct LogReport {
    #[builder(into)]
    pub word: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub context: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub category: std::option::Option<SmolStr>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub severity: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogReportOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub log_report: std::option::Option<ReportEntry>,
}

/// Response type for `LogReport`
pub struct LogReportResponse;

impl GraphqlResp for LogReportResponse {
    const OPERATION_NAME: &'static str = "LogReport";
    type Output = LogReportOutput;
}

impl GraphqlRequest for LogReport {
    const OPERATION_NAME: &'static str = "LogReport";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation LogReport($word: String!, $context: String, $category: String, $severity: Int) {
  logReport(word: $word, context: $context, category: $category, severity: $severity) {
    id
    word
    category
    context
    timestamp
    severity
  }
}"#;
    type Response = LogReportResponse;
}
