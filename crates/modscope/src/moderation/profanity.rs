use std::sync::Arc;

use modscope_api::present;
use modscope_api::profanity::{
    AddProfaneWord, AddProfaneWordOutput, FlaggedWord, GetAllProfaneWords,
    GetAllProfaneWordsOutput,
};
use modscope_common::http_client::HttpClient;

use crate::client::ModClient;
use crate::query::{Mutation, MutationState, Query, QueryState};

/// Profane word list with cache-merged additions.
pub struct Profanity<C: HttpClient> {
    client: Arc<ModClient<C>>,
    all: Query<GetAllProfaneWords, C>,
    add: Mutation<AddProfaneWord>,
}

impl<C: HttpClient> Profanity<C> {
    /// Build the unit and load the word list.
    pub async fn load(client: Arc<ModClient<C>>) -> Self {
        let unit = Self {
            all: Query::new(client.clone()),
            add: Mutation::new(),
            client,
        };
        unit.all.trigger(GetAllProfaneWords {}).await;
        unit
    }

    /// Every profane word, empty until loaded or when the server sent none.
    pub fn profane_words(&self) -> Vec<FlaggedWord> {
        self.all
            .data()
            .map(|out| present(&out.get_all_profane_words))
            .unwrap_or_default()
    }

    /// State of the word list read.
    pub fn profane_words_state(&self) -> QueryState<GetAllProfaneWordsOutput> {
        self.all.state()
    }

    /// Reload the word list from the server.
    pub async fn refetch_profane_words(&self) -> QueryState<GetAllProfaneWordsOutput> {
        self.all.refetch().await
    }

    /// Add a word to the list.
    ///
    /// On success the returned entry is merged into the cached list (same
    /// word replaced, otherwise appended) and [`profane_words`](Self::profane_words)
    /// reflects it without a refetch.
    pub async fn add_profane_word(
        &self,
        word: &str,
        severity: Option<i64>,
        context_dependent: Option<bool>,
    ) -> Option<FlaggedWord> {
        let request = AddProfaneWord::new()
            .word(word)
            .maybe_severity(severity)
            .maybe_context_dependent(context_dependent)
            .build();
        let output = self
            .add
            .track(
                self.client
                    .mutate_with(&request, &GetAllProfaneWords {}, |cached, added| {
                        if let Some(entry) = &added.add_profane_word {
                            cached.merge(entry.clone());
                        }
                    }),
            )
            .await
            .ok()?;
        self.all.sync_from_cache().await;
        output.add_profane_word
    }

    /// Loading flag and last error of [`add_profane_word`](Self::add_profane_word).
    pub fn add_state(&self) -> MutationState<AddProfaneWordOutput> {
        self.add.state()
    }
}
