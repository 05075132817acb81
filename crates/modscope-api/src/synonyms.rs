//! Replacement suggestions and stored synonym sets.

use modscope_common::graphql::{GraphqlRequest, GraphqlResp, OperationKind};
use smol_str::SmolStr;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct Synonym {
    #[builder(into)]
    pub word: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub suggestions: std::option::Option<Vec<std::option::Option<String>>>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub appropriateness_score: std::option::Option<i64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated: std::option::Option<String>,
}

/// `GetSuggestions` query. The result is a bare list of strings.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetSuggestions {
    #[builder(into)]
    pub word: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub context: std::option::Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetSuggestionsOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_suggestions: std::option::Option<Vec<std::option::Option<String>>>,
}

/// Response type for `GetSuggestions`
pub struct GetSuggestionsResponse;

impl GraphqlResp for GetSuggestionsResponse {
    const OPERATION_NAME: &'static str = "GetSuggestions";
    type Output = GetSuggestionsOutput;
}

impl GraphqlRequest for GetSuggestions {
    const OPERATION_NAME: &'static str = "GetSuggestions";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetSuggestions($word: String!, $context: String) {
  getSuggestions(word: $word, context: $context)
}"#;
    type Response = GetSuggestionsResponse;
}

/// `GetAllSynonyms` query. Takes no variables.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllSynonyms {}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAllSynonymsOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_all_synonyms: std::option::Option<Vec<std::option::Option<Synonym>>>,
}

impl GetAllSynonymsOutput {
    /// Insert `entry`, replacing a stored set for the same word.
    ///
    /// Returns `false` when there is no fetched list to merge into.
    pub fn merge(&mut self, entry: Synonym) -> bool {
        let Some(list) = self.get_all_synonyms.as_mut() else {
            return false;
        };
        match list
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|s| s.word == entry.word))
        {
            Some(slot) => *slot = Some(entry),
            None => list.push(Some(entry)),
        }
        true
    }
}

/// Response type for `GetAllSynonyms`
pub struct GetAllSynonymsResponse;

impl GraphqlResp for GetAllSynonymsResponse {
    const OPERATION_NAME: &'static str = "GetAllSynonyms";
    type Output = GetAllSynonymsOutput;
}

impl GraphqlRequest for GetAllSynonyms {
    const OPERATION_NAME: &'static str = "GetAllSynonyms";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetAllSynonyms {
  getAllSynonyms {
    word
    suggestions
    appropriatenessScore
  }
}"#;
    type Response = GetAllSynonymsResponse;
}

/// `SaveSynonyms` mutation: store the replacement set for a word.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct SaveSynonyms {
    #[builder(into)]
    pub word: SmolStr,
    pub synonyms: Vec<std::option::Option<String>>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub appropriateness_score: std::option::Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveSynonymsOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub save_synonyms: std::option::Option<Synonym>,
}

/// Response type for `SaveSynonyms`
pub struct SaveSynonymsResponse;

impl GraphqlResp for SaveSynonymsResponse {
    const OPERATION_NAME: &'static str = "SaveSynonyms";
    type Output = SaveSynonymsOutput;
}

impl GraphqlRequest for SaveSynonyms {
    const OPERATION_NAME: &'static str = "SaveSynonyms";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation SaveSynonyms($word: String!, $synonyms: [String]!, $appropriatenessScore: Int) {
  saveSynonyms(word: $word, synonyms: $synonyms, appropriatenessScore: $appropriatenessScore) {
    word
    suggestions
    appropriatenessScore
    lastUpdated
  }
}"#;
    type Response = SaveSynonymsResponse;
}
