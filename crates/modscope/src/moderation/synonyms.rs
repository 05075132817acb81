use std::sync::Arc;

use modscope_api::present;
use modscope_api::synonyms::{
    GetAllSynonyms, GetAllSynonymsOutput, GetSuggestions, GetSuggestionsOutput, SaveSynonyms,
    SaveSynonymsOutput, Synonym,
};
use modscope_common::http_client::HttpClient;

use crate::client::ModClient;
use crate::query::{Mutation, MutationState, Query, QueryState};

/// Stored synonym sets and on-demand replacement suggestions.
pub struct Synonyms<C: HttpClient> {
    client: Arc<ModClient<C>>,
    all: Query<GetAllSynonyms, C>,
    suggestions: Query<GetSuggestions, C>,
    save: Mutation<SaveSynonyms>,
}

impl<C: HttpClient> Synonyms<C> {
    /// Build the unit and load every stored synonym set.
    pub async fn load(client: Arc<ModClient<C>>) -> Self {
        let unit = Self {
            all: Query::new(client.clone()),
            suggestions: Query::new(client.clone()),
            save: Mutation::new(),
            client,
        };
        unit.all.trigger(GetAllSynonyms {}).await;
        unit
    }

    /// Every stored synonym set.
    pub fn all_synonyms(&self) -> Vec<Synonym> {
        self.all
            .data()
            .map(|out| present(&out.get_all_synonyms))
            .unwrap_or_default()
    }

    /// State of the synonym list read.
    pub fn all_synonyms_state(&self) -> QueryState<GetAllSynonymsOutput> {
        self.all.state()
    }

    /// Reload the synonym list from the server.
    pub async fn refetch_synonyms(&self) -> QueryState<GetAllSynonymsOutput> {
        self.all.refetch().await
    }

    /// Ask for replacements for `word`. A missing context is sent as `""`.
    pub async fn suggestions(&self, word: &str, context: Option<&str>) -> Vec<String> {
        let params = GetSuggestions::new()
            .word(word)
            .context(context.unwrap_or_default())
            .build();
        self.suggestions
            .trigger(params)
            .await
            .data
            .map(|out| present(&out.get_suggestions))
            .unwrap_or_default()
    }

    /// Suggestions from the latest call.
    pub fn current_suggestions(&self) -> Vec<String> {
        self.suggestions
            .data()
            .map(|out| present(&out.get_suggestions))
            .unwrap_or_default()
    }

    /// State of the suggestions read.
    pub fn suggestions_state(&self) -> QueryState<GetSuggestionsOutput> {
        self.suggestions.state()
    }

    /// Store the replacement set for `word`, merging the result into the
    /// cached list.
    pub async fn save_synonyms(
        &self,
        word: &str,
        synonyms: Vec<String>,
        appropriateness_score: Option<i64>,
    ) -> Option<Synonym> {
        let request = SaveSynonyms::new()
            .word(word)
            .synonyms(synonyms.into_iter().map(Some).collect())
            .maybe_appropriateness_score(appropriateness_score)
            .build();
        let output = self
            .save
            .track(
                self.client
                    .mutate_with(&request, &GetAllSynonyms {}, |cached, saved| {
                        if let Some(entry) = &saved.save_synonyms {
                            cached.merge(entry.clone());
                        }
                    }),
            )
            .await
            .ok()?;
        self.all.sync_from_cache().await;
        output.save_synonyms
    }

    /// Loading flag and last error of [`save_synonyms`](Self::save_synonyms).
    pub fn save_state(&self) -> MutationState<SaveSynonymsOutput> {
        self.save.state()
    }
}
