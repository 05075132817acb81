//! Category reference data and per-word classification.

use modscope_common::graphql::{GraphqlRequest, GraphqlResp, OperationKind};
use smol_str::SmolStr;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: SmolStr,
    pub name: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub severity_level: std::option::Option<i64>,
}

/// Classification of a single word, as returned by `getCategoryForWord`
/// and `saveWordCategory`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordCategoryResult {
    pub word: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<SmolStr>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub severity_level: std::option::Option<i64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub confidence: std::option::Option<f64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub explanation: std::option::Option<String>,
}

/// `GetAllCategories` query. Takes no variables.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllCategories {}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAllCategoriesOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_all_categories: std::option::Option<Vec<std::option::Option<Category>>>,
}

/// Response type for `GetAllCategories`
pub struct GetAllCategoriesResponse;

impl GraphqlResp for GetAllCategoriesResponse {
    const OPERATION_NAME: &'static str = "GetAllCategories";
    type Output = GetAllCategoriesOutput;
}

impl GraphqlRequest for GetAllCategories {
    const OPERATION_NAME: &'static str = "GetAllCategories";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetAllCategories {
  getAllCategories {
    id
    name
    description
    severityLevel
  }
}"#;
    type Response = GetAllCategoriesResponse;
}

/// `GetCategoryForWord` query.
///
/// Units always send a context, using `""` when the caller gave none.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoryForWord {
    #[builder(into)]
    pub word: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub context: std::option::Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoryForWordOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_category_for_word: std::option::Option<WordCategoryResult>,
}

/// Response type for `GetCategoryForWord`
pub struct GetCategoryForWordResponse;

impl GraphqlResp for GetCategoryForWordResponse {
    const OPERATION_NAME: &'static str = "GetCategoryForWord";
    type Output = GetCategoryForWordOutput;
}

impl GraphqlRequest for GetCategoryForWord {
    const OPERATION_NAME: &'static str = "GetCategoryForWord";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetCategoryForWord($word: String!, $context: String) {
  getCategoryForWord(word: $word, context: $context) {
    word
    category
    description
    severityLevel
    confidence
    explanation
  }
}"#;
    type Response = GetCategoryForWordResponse;
}

/// `CreateCategory` mutation.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[builder(into)]
    pub name: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub description: std::option::Option<String>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub severity_level: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub create_category: std::option::Option<Category>,
}

/// Response type for `CreateCategory`
pub struct CreateCategoryResponse;

impl GraphqlResp for CreateCategoryResponse {
    const OPERATION_NAME: &'static str = "CreateCategory";
    type Output = CreateCategoryOutput;
}

impl GraphqlRequest for CreateCategory {
    const OPERATION_NAME: &'static str = "CreateCategory";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation CreateCategory($name: String!, $description: String, $severityLevel: Int) {
  createCategory(name: $name, description: $description, severityLevel: $severityLevel) {
    id
    name
    description
    severityLevel
  }
}"#;
    type Response = CreateCategoryResponse;
}

/// `SaveWordCategory` mutation: assign a word to an existing category.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct SaveWordCategory {
    #[builder(into)]
    pub word: SmolStr,
    #[builder(into)]
    pub category_id: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub confidence: std::option::Option<f64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveWordCategoryOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub save_word_category: std::option::Option<WordCategoryResult>,
}

/// Response type for `SaveWordCategory`
pub struct SaveWordCategoryResponse;

impl GraphqlResp for SaveWordCategoryResponse {
    const OPERATION_NAME: &'static str = "SaveWordCategory";
    type Output = SaveWordCategoryOutput;
}

impl GraphqlRequest for SaveWordCategory {
    const OPERATION_NAME: &'static str = "SaveWordCategory";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation SaveWordCategory($word: String!, $categoryId: ID!, $confidence: Float) {
  saveWordCategory(word: $word, categoryId: $categoryId, confidence: $confidence) {
    word
    category
    description
    severityLevel
    confidence
    explanation
  }
}"#;
    type Response = SaveWordCategoryResponse;
}
