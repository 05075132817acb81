use std::sync::Arc;

use http::header::{ACCEPT, CONTENT_TYPE};
use miette::Diagnostic;
use modscope_api::profanity::FlaggedWord;
use modscope_common::error::{ClientError, DecodeError, HttpError, TransportError};
use modscope_common::graphql::{JSON_CONTENT_TYPE, server_errors};
use modscope_common::http_client::HttpClient;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tokio::sync::watch;
use url::Url;

use super::TextAnalysis;
use crate::client::ModClient;

const REVIEWS_QUERY: &str = r#"query GetReviews {
  reviews {
    id
    patient_id
    doctor_id
    appointment_id
    comment
    comment_censored
    rating
    sentiment
    createdAt
    updatedAt
  }
}"#;

const FALLBACK_SERVER_MESSAGE: &str = "Error fetching reviews";

/// A patient review from the healthcare service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    /// Review id
    pub id: SmolStr,
    /// Author of the review
    pub patient_id: i64,
    /// Reviewed doctor
    pub doctor_id: i64,
    /// Appointment the review belongs to
    pub appointment_id: i64,
    /// Free-text comment as written
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Comment with profanity masked, when the service computed one
    pub comment_censored: Option<String>,
    /// Star rating
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Sentiment label from the service
    pub sentiment: Option<SmolStr>,
    #[serde(rename = "createdAt")]
    /// Creation timestamp
    pub created_at: SmolStr,
    #[serde(rename = "updatedAt")]
    /// Last update timestamp
    pub updated_at: SmolStr,
}

/// Errors of the healthcare reviews collaborator.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ReviewsError {
    /// Transport or decoding failure talking to the reviews service
    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] ClientError),

    /// The reviews service answered with an `errors` array
    #[error("{0}")]
    #[diagnostic(code(modscope::reviews::server))]
    Server(String),

    /// The batched profanity check of the fetched comments failed
    #[error("review processing failed: {0}")]
    #[diagnostic(code(modscope::reviews::processing))]
    Processing(Arc<ClientError>),
}

/// Everything the collaborator tracks. Fetch and processing failures are
/// kept apart so one never hides the other.
#[derive(Debug, Clone, Default)]
pub struct ReviewsState {
    /// Reviews of the last successful fetch
    pub reviews: Vec<Review>,
    /// Reviews that went through the last completed processing run
    pub processed: Vec<Review>,
    /// A fetch is in flight
    pub loading: bool,
    /// Why the last fetch failed
    pub fetch_error: Option<Arc<ReviewsError>>,
    /// The last processing run has finished, successfully or not
    pub processing_complete: bool,
    /// Why the last processing run failed
    pub processing_error: Option<Arc<ReviewsError>>,
}

#[derive(Deserialize)]
struct ReviewsData {
    #[serde(default)]
    reviews: Option<Vec<Review>>,
}

#[derive(Deserialize)]
struct ReviewsEnvelope {
    #[serde(default)]
    data: Option<ReviewsData>,
}

/// Reviews from the separate healthcare service, batch-checked for
/// profanity.
///
/// Talks to its own endpoint with a hand-built `{query}` body and skips the
/// shared cache. Only the profanity check goes through [`TextAnalysis`].
pub struct HealthcareReviews<C: HttpClient> {
    client: Arc<ModClient<C>>,
    endpoint: Url,
    analysis: TextAnalysis<C>,
    state: watch::Sender<ReviewsState>,
}

impl<C: HttpClient> HealthcareReviews<C> {
    /// Build the collaborator for the reviews service at `endpoint`.
    pub fn new(client: Arc<ModClient<C>>, endpoint: Url) -> Self {
        Self {
            analysis: TextAnalysis::new(client.clone()),
            client,
            endpoint,
            state: watch::Sender::new(ReviewsState::default()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> ReviewsState {
        self.state.borrow().clone()
    }

    /// Watch every state change.
    pub fn subscribe(&self) -> watch::Receiver<ReviewsState> {
        self.state.subscribe()
    }

    /// Reviews of the last fetch.
    pub fn reviews(&self) -> Vec<Review> {
        self.state.borrow().reviews.clone()
    }

    /// Flagged words found by the last processing run.
    pub fn flagged_words(&self) -> Vec<FlaggedWord> {
        self.analysis.flagged_words()
    }

    /// The text analysis unit used for the batched check.
    pub fn analysis(&self) -> &TextAnalysis<C> {
        &self.analysis
    }

    /// Fetch every review.
    ///
    /// On failure the error is recorded as the fetch error, the stored
    /// reviews are cleared and an empty list is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), fields(endpoint = %self.endpoint)))]
    pub async fn fetch_reviews(&self) -> Vec<Review> {
        self.state.send_modify(|state| {
            state.loading = true;
            state.fetch_error = None;
        });
        match self.request_reviews().await {
            Ok(reviews) => {
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.reviews = reviews.clone();
                });
                reviews
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "failed to fetch reviews");
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.reviews.clear();
                    state.fetch_error = Some(Arc::new(e));
                });
                Vec::new()
            }
        }
    }

    /// Fetch the reviews and check all their comments in one `checkText`.
    ///
    /// Comments are joined with single spaces, skipping empty ones. An empty
    /// fetch completes immediately without a check.
    pub async fn process_reviews(&self) -> Vec<Review> {
        self.state.send_modify(|state| {
            state.processing_complete = false;
            state.processing_error = None;
        });

        let reviews = self.fetch_reviews().await;
        if reviews.is_empty() {
            self.state.send_modify(|state| {
                state.processed.clear();
                state.processing_complete = true;
            });
            return Vec::new();
        }

        let comments = batch_comments(&reviews);
        self.analysis.check_text(&comments).await;

        match self.analysis.check_state().error {
            Some(e) => {
                self.state.send_modify(|state| {
                    state.processing_error = Some(Arc::new(ReviewsError::Processing(e)));
                    state.processing_complete = true;
                });
                Vec::new()
            }
            None => {
                self.state.send_modify(|state| {
                    state.processed = reviews.clone();
                    state.processing_complete = true;
                });
                reviews
            }
        }
    }

    async fn request_reviews(&self) -> Result<Vec<Review>, ReviewsError> {
        let body = serde_json::to_vec(&serde_json::json!({ "query": REVIEWS_QUERY }))
            .map_err(|e| ClientError::from(TransportError::InvalidRequest(e.to_string())))?;
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(self.endpoint.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(body)
            .map_err(|e| ClientError::from(TransportError::InvalidRequest(e.to_string())))?;

        let response = self
            .client
            .transport()
            .send_http(request)
            .await
            .map_err(|e| ClientError::from(TransportError::classify(e)))?;
        let status = response.status();
        let body = response.into_body();

        // A failed status without an errors array is reported as the status
        let errors = match server_errors(&body, "GetReviews") {
            Ok(errors) => errors,
            Err(e) if status.is_success() => return Err(ClientError::from(e).into()),
            Err(_) => None,
        };
        if let Some(errors) = errors {
            let message = errors
                .message()
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_SERVER_MESSAGE);
            return Err(ReviewsError::Server(message.to_string()));
        }
        if !status.is_success() {
            return Err(ClientError::from(HttpError {
                status,
                body: Some(body.into()),
            })
            .into());
        }

        let envelope: ReviewsEnvelope =
            serde_json::from_slice(&body).map_err(|e| ClientError::from(DecodeError::Json(e)))?;
        Ok(envelope
            .data
            .and_then(|data| data.reviews)
            .unwrap_or_default())
    }
}

/// Join every non-empty comment with single spaces.
pub(crate) fn batch_comments(reviews: &[Review]) -> String {
    reviews
        .iter()
        .map(|review| review.comment.as_str())
        .filter(|comment| !comment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
