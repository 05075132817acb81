//! Free-text checks: profanity scan and sentiment scoring.

use modscope_common::graphql::{GraphqlRequest, GraphqlResp, OperationKind};
use smol_str::SmolStr;

use crate::profanity::FlaggedWord;

/// Sentiment scores for one piece of text.
///
/// `getRecentAnalyses` selects only `id`, hence the optional scores.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub id: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub text: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub sentiment: std::option::Option<SmolStr>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub appropriateness_score: std::option::Option<f64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub toxicity_score: std::option::Option<f64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub professionalism_score: std::option::Option<f64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub review: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub analysis_date: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub ai_generated: std::option::Option<bool>,
}

/// `CheckText` query: scan free text for flagged words.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct CheckText {
    #[builder(into)]
    pub input: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckTextOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub check_text: std::option::Option<Vec<std::option::Option<FlaggedWord>>>,
}

/// Response type for `CheckText`
pub struct CheckTextResponse;

impl GraphqlResp for CheckTextResponse {
    const OPERATION_NAME: &'static str = "CheckText";
    type Output = CheckTextOutput;
}

impl GraphqlRequest for CheckText {
    const OPERATION_NAME: &'static str = "CheckText";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query CheckText($input: String!) {
  checkText(input: $input) {
    word
    severity
    contextDependent
    aiDetectable
    geminiExplanation
    suggestions
    category
  }
}"#;
    type Response = CheckTextResponse;
}

/// `AnalyzeSentiment` query.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentiment {
    #[builder(into)]
    pub text: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub analyze_sentiment: std::option::Option<SentimentAnalysis>,
}

/// Response type for `AnalyzeSentiment`
pub struct AnalyzeSentimentResponse;

impl GraphqlResp for AnalyzeSentimentResponse {
    const OPERATION_NAME: &'static str = "AnalyzeSentiment";
    type Output = AnalyzeSentimentOutput;
}

impl GraphqlRequest for AnalyzeSentiment {
    const OPERATION_NAME: &'static str = "AnalyzeSentiment";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query AnalyzeSentiment($text: String!) {
  analyzeSentiment(text: $text) {
    id
    sentiment
    appropriatenessScore
    toxicityScore
    professionalismScore
    review
  }
}"#;
    type Response = AnalyzeSentimentResponse;
}

/// `GetSentimentAnalysis` query: a stored analysis by id.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetSentimentAnalysis {
    #[builder(into)]
    pub id: SmolStr,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetSentimentAnalysisOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_sentiment_analysis: std::option::Option<SentimentAnalysis>,
}

/// Response type for `GetSentimentAnalysis`
pub struct GetSentimentAnalysisResponse;

impl GraphqlResp for GetSentimentAnalysisResponse {
    const OPERATION_NAME: &'static str = "GetSentimentAnalysis";
    type Output = GetSentimentAnalysisOutput;
}

impl GraphqlRequest for GetSentimentAnalysis {
    const OPERATION_NAME: &'static str = "GetSentimentAnalysis";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetSentimentAnalysis($id: ID!) {
  getSentimentAnalysis(id: $id) {
    id
    text
    sentiment
    appropriatenessScore
    toxicityScore
    professionalismScore
    review
    analysisDate
    aiGenerated
  }
}"#;
    type Response = GetSentimentAnalysisResponse;
}

/// `GetRecentAnalyses` query. Selects ids only.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetRecentAnalyses {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetRecentAnalysesOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_recent_analyses: std::option::Option<Vec<std::option::Option<SentimentAnalysis>>>,
}

/// Response type for `GetRecentAnalyses`
pub struct GetRecentAnalysesResponse;

impl GraphqlResp for GetRecentAnalysesResponse {
    const OPERATION_NAME: &'static str = "GetRecentAnalyses";
    type Output = GetRecentAnalysesOutput;
}

impl GraphqlRequest for GetRecentAnalyses {
    const OPERATION_NAME: &'static str = "GetRecentAnalyses";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetRecentAnalyses($limit: Int) {
  getRecentAnalyses(limit: $limit) {
    id
  }
}"#;
    type Response = GetRecentAnalysesResponse;
}
