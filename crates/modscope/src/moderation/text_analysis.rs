use std::sync::Arc;

use modscope_api::analysis::{
    AnalyzeSentiment, AnalyzeSentimentOutput, CheckText, CheckTextOutput, GetSentimentAnalysis,
    GetSentimentAnalysisOutput, SentimentAnalysis,
};
use modscope_api::present;
use modscope_api::profanity::FlaggedWord;
use modscope_common::http_client::HttpClient;
use tokio::sync::watch;

use crate::client::ModClient;
use crate::query::{Query, QueryState};

/// Profanity scan and sentiment scoring of free text. Nothing runs until
/// called.
pub struct TextAnalysis<C: HttpClient> {
    text: watch::Sender<String>,
    check: Query<CheckText, C>,
    sentiment: Query<AnalyzeSentiment, C>,
    stored: Query<GetSentimentAnalysis, C>,
}

impl<C: HttpClient> TextAnalysis<C> {
    /// Build the unit. Nothing is sent until a check is requested.
    pub fn new(client: Arc<ModClient<C>>) -> Self {
        Self {
            text: watch::Sender::new(String::new()),
            check: Query::new(client.clone()),
            sentiment: Query::new(client.clone()),
            stored: Query::new(client),
        }
    }

    /// Last text submitted to either check.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Scan `input` and return the flagged words.
    pub async fn check_text(&self, input: &str) -> Vec<FlaggedWord> {
        self.text.send_replace(input.to_string());
        self.check
            .trigger(CheckText::new().input(input).build())
            .await
            .data
            .map(|out| present(&out.check_text))
            .unwrap_or_default()
    }

    /// Flagged words of the latest scan.
    pub fn flagged_words(&self) -> Vec<FlaggedWord> {
        self.check
            .data()
            .map(|out| present(&out.check_text))
            .unwrap_or_default()
    }

    /// State of the profanity scan.
    pub fn check_state(&self) -> QueryState<CheckTextOutput> {
        self.check.state()
    }

    /// Score the sentiment of `text`.
    pub async fn analyze_sentiment(&self, text: &str) -> Option<SentimentAnalysis> {
        self.text.send_replace(text.to_string());
        self.sentiment
            .trigger(AnalyzeSentiment::new().text(text).build())
            .await
            .data
            .and_then(|out| out.analyze_sentiment)
    }

    /// Result of the latest sentiment analysis.
    pub fn sentiment(&self) -> Option<SentimentAnalysis> {
        self.sentiment.data().and_then(|out| out.analyze_sentiment)
    }

    /// State of the sentiment analysis.
    pub fn sentiment_state(&self) -> QueryState<AnalyzeSentimentOutput> {
        self.sentiment.state()
    }

    /// Fetch a stored analysis by id.
    pub async fn sentiment_analysis(&self, id: &str) -> Option<SentimentAnalysis> {
        self.stored
            .trigger(GetSentimentAnalysis::new().id(id).build())
            .await
            .data
            .and_then(|out| out.get_sentiment_analysis)
    }

    /// State of the stored-analysis lookup.
    pub fn sentiment_analysis_state(&self) -> QueryState<GetSentimentAnalysisOutput> {
        self.stored.state()
    }
}
