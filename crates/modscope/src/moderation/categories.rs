use std::sync::Arc;

use modscope_api::categories::{
    Category, CreateCategory, CreateCategoryOutput, GetAllCategories, GetAllCategoriesOutput,
    GetCategoryForWord, GetCategoryForWordOutput, SaveWordCategory, SaveWordCategoryOutput,
    WordCategoryResult,
};
use modscope_api::present;
use modscope_common::http_client::HttpClient;

use crate::client::ModClient;
use crate::query::{Mutation, MutationState, Query, QueryState};

/// Category reference list and per-word classification.
pub struct Categories<C: HttpClient> {
    client: Arc<ModClient<C>>,
    all: Query<GetAllCategories, C>,
    word_category: Query<GetCategoryForWord, C>,
    create: Mutation<CreateCategory>,
    save_word: Mutation<SaveWordCategory>,
}

impl<C: HttpClient> Categories<C> {
    /// Build the unit and load the category list.
    pub async fn load(client: Arc<ModClient<C>>) -> Self {
        let unit = Self {
            all: Query::new(client.clone()),
            word_category: Query::new(client.clone()),
            create: Mutation::new(),
            save_word: Mutation::new(),
            client,
        };
        unit.all.trigger(GetAllCategories {}).await;
        unit
    }

    /// Every category, empty until loaded or when the server sent none.
    pub fn categories(&self) -> Vec<Category> {
        self.all
            .data()
            .map(|out| present(&out.get_all_categories))
            .unwrap_or_default()
    }

    /// State of the category list read.
    pub fn categories_state(&self) -> QueryState<GetAllCategoriesOutput> {
        self.all.state()
    }

    /// Reload the category list from the server.
    pub async fn refetch_categories(&self) -> QueryState<GetAllCategoriesOutput> {
        self.all.refetch().await
    }

    /// Classify `word`. A missing context is sent as an empty string.
    pub async fn category_for_word(
        &self,
        word: &str,
        context: Option<&str>,
    ) -> Option<WordCategoryResult> {
        let params = GetCategoryForWord::new()
            .word(word)
            .context(context.unwrap_or_default())
            .build();
        self.word_category
            .trigger(params)
            .await
            .data
            .and_then(|out| out.get_category_for_word)
    }

    /// Latest classification result.
    pub fn word_category(&self) -> Option<WordCategoryResult> {
        self.word_category
            .data()
            .and_then(|out| out.get_category_for_word)
    }

    /// State of the classification read.
    pub fn word_category_state(&self) -> QueryState<GetCategoryForWordOutput> {
        self.word_category.state()
    }

    /// Create a category and append it to the cached list.
    pub async fn create_category(&self, request: CreateCategory) -> Option<Category> {
        let output = self
            .create
            .track(self.client.mutate_with(
                &request,
                &GetAllCategories {},
                |cached, created| {
                    if let (Some(list), Some(category)) =
                        (cached.get_all_categories.as_mut(), &created.create_category)
                    {
                        list.push(Some(category.clone()));
                    }
                },
            ))
            .await
            .ok()?;
        self.all.sync_from_cache().await;
        output.create_category
    }

    /// Loading flag and last error of [`create_category`](Self::create_category).
    pub fn create_state(&self) -> MutationState<CreateCategoryOutput> {
        self.create.state()
    }

    /// Assign `word` to an existing category.
    pub async fn save_word_category(
        &self,
        request: SaveWordCategory,
    ) -> Option<WordCategoryResult> {
        self.save_word
            .track(self.client.mutate(&request))
            .await
            .ok()?
            .save_word_category
    }

    /// Loading flag and last error of [`save_word_category`](Self::save_word_category).
    pub fn save_word_category_state(
        &self,
    ) -> MutationState<SaveWordCategoryOutput> {
        self.save_word.state()
    }
}
