//! Profane word list and additions to it.

use modscope_common::graphql::{GraphqlRequest, GraphqlResp, OperationKind};
use smol_str::SmolStr;

/// A word the moderation service flags.
///
/// Shared by the profane-word list, `addProfaneWord` and `checkText`; each
/// document selects a different subset, so everything but `word` is optional.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedWord {
    #[builder(into)]
    pub word: SmolStr,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub severity: std::option::Option<i64>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub context_dependent: std::option::Option<bool>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub ai_detectable: std::option::Option<bool>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub gemini_explanation: std::option::Option<String>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub suggestions: std::option::Option<Vec<std::option::Option<String>>>,
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub category: std::option::Option<SmolStr>,
}

/// `GetAllProfaneWords` query. Takes no variables.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProfaneWords {}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAllProfaneWordsOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub get_all_profane_words: std::option::Option<Vec<std::option::Option<FlaggedWord>>>,
}

impl GetAllProfaneWordsOutput {
    /// Insert `entry`, replacing a listed word with the same spelling.
    ///
    /// Returns `false` (and leaves the output alone) when the list itself is
    /// absent: there is nothing fetched to merge into.
    pub fn merge(&mut self, entry: FlaggedWord) -> bool {
        let Some(list) = self.get_all_profane_words.as_mut() else {
            return false;
        };
        match list
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|w| w.word == entry.word))
        {
            Some(slot) => *slot = Some(entry),
            None => list.push(Some(entry)),
        }
        true
    }
}

/// Response type for `GetAllProfaneWords`
pub struct GetAllProfaneWordsResponse;

impl GraphqlResp for GetAllProfaneWordsResponse {
    const OPERATION_NAME: &'static str = "GetAllProfaneWords";
    type Output = GetAllProfaneWordsOutput;
}

impl GraphqlRequest for GetAllProfaneWords {
    const OPERATION_NAME: &'static str = "GetAllProfaneWords";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"query GetAllProfaneWords {
  getAllProfaneWords {
    word
    severity
    contextDependent
  }
}"#;
    type Response = GetAllProfaneWordsResponse;
}

/// `AddProfaneWord` mutation.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct AddProfaneWord {
    #[builder(into)]
    pub word: SmolStr,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub severity: std::option::Option<i64>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub context_dependent: std::option::Option<bool>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddProfaneWordOutput {
    #[serde(default, skip_serializing_if = "std::option::Option::is_none")]
    pub add_profane_word: std::option::Option<FlaggedWord>,
}

/// Response type for `AddProfaneWord`
pub struct AddProfaneWordResponse;

impl GraphqlResp for AddProfaneWordResponse {
    const OPERATION_NAME: &'static str = "AddProfaneWord";
    type Output = AddProfaneWordOutput;
}

impl GraphqlRequest for AddProfaneWord {
    const OPERATION_NAME: &'static str = "AddProfaneWord";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"mutation AddProfaneWord($word: String!, $severity: Int, $contextDependent: Boolean) {
  addProfaneWord(word: $word, severity: $severity, contextDependent: $contextDependent) {
    word
    severity
  }
}"#;
    type Response = AddProfaneWordResponse;
}
