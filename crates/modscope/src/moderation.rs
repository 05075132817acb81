//! Data-access units for the moderation API
//!
//! Each unit wraps one domain area of [`modscope_api`] and owns the
//! [`Query`](crate::query::Query) and [`Mutation`](crate::query::Mutation)
//! handles for its operations. Units are built from a shared
//! `Arc<ModClient<C>>`; the ones with reference lists load them in an async
//! constructor, everything else waits for an explicit call.
//!
//! # Error policy
//!
//! Every operation records its latest error in its own state handle. Reads
//! and most writes then return an empty value; only report generation and
//! report logging also hand the error back to the caller.
//!
//! # Example
//!
//! ```ignore
//! # use std::sync::Arc;
//! # use modscope::moderation::Dashboard;
//! # async fn example(client: Arc<modscope::client::ModClient<reqwest::Client>>) {
//! let dashboard = Dashboard::load(client).await;
//! for category in dashboard.top_categories() {
//!     println!("{}: {}", category.name, category.count);
//! }
//! # }
//! ```

mod categories;
mod dashboard;
mod profanity;
mod reports;
mod reviews;
mod synonyms;
mod text_analysis;


pub use categories::Categories;
pub use dashboard::{Dashboard, top_categories, total_flagged};
pub use profanity::Profanity;
pub use reports::{DEFAULT_ENTRIES_LIMIT, DEFAULT_REPORTS_LIMIT, Reports};
pub use reviews::{HealthcareReviews, Review, ReviewsError, ReviewsState};
pub use synonyms::Synonyms;
pub use text_analysis::TextAnalysis;
