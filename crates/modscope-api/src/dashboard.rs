//! Slim documents backing the dashboard overview.
//!
//! These reuse schema fields the other modules already cover but select
//! less, so they are cached separately from the full lists.

use modscope_common::graphql::{GraphqlRequest, GraphqlResp, OperationKind};
use smol_str::SmolStr;

use crate::reports::CategoryCount;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCategory {
    pub id: SmolStr,
    pub name: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub severity_level: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentReport {
    pub id: SmolStr,
    pub title: String,
    pub start_date: SmolStr,
    pub end_date: SmolStr,
    pub created_at: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub total_flagged: std::option::Option<i64>,
}

/// Category counts of one report, all `GetTopCategories` selects.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportCategories {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub categories: std::option::Option<Vec<std::option::Option<CategoryCount>>>,
}

/// `GetDashboardCategories` query. Takes no variables.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetDashboardCategories {}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetDashboardCategoriesOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_all_categories: std::option::Option<Vec<std::option::Option<DashboardCategory>>>,
}

/// Response type for `GetDashboardCategories`
pub struct GetDashboardCategoriesResponse;

impl GraphqlResp for GetDashboardCategoriesResponse {
    const OPERATION_NAME: &'static str = "GetDashboardCategories";
    type Output = GetDashboardCategoriesOutput;
}

impl GraphqlRequest for GetDashboardCategories {
    const OPERATION_NAME: &'static str = "GetDashboardCategories";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetDashboardCategories {
  getAllCategories {
    id
    name
    severityLevel
  }
}"#;
    type Response = GetDashboardCategoriesResponse;
}

/// `GetRecentReports` query.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetRecentReports {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetRecentReportsOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_reports: std::option::Option<Vec<std::option::Option<RecentReport>>>,
}

/// Response type for `GetRecentReports`
pub struct GetRecentReportsResponse;

impl GraphqlResp for GetRecentReportsResponse {
    const OPERATION_NAME: &'static str = "GetRecentReports";
    type Output = GetRecentReportsOutput;
}

impl GraphqlRequest for GetRecentReports {
    const OPERATION_NAME: &'static str = "GetRecentReports";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetRecentReports($limit: Int) {
  getReports(limit: $limit) {
    id
    title
    startDate
    endDate
    createdAt
    totalFlagged
  }
}"#;
    type Response = GetRecentReportsResponse;
}

/// `GetTopCategories` query: category counts of the latest reports.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetTopCategories {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetTopCategoriesOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_reports: std::option::Option<Vec<std::option::Option<ReportCategories>>>,
}

/// Response type for `GetTopCategories`
pub struct GetTopCategoriesResponse;

impl GraphqlResp for GetTopCategoriesResponse {
    const OPERATION_NAME: &'static str = "GetTopCategories";
    type Output = GetTopCategoriesOutput;
}

impl GraphqlRequest for GetTopCategories {
    const OPERATION_NAME: &'static str = "GetTopCategories";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetTopCategories($limit: Int) {
  getReports(limit: $limit) {
    categories {
      name
      count
    }
  }
}"#;
    type Response = GetTopCategoriesResponse;
}
