use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use modscope::client::ModClient;
use modscope::config::{self, ClientConfig, parse_endpoint};
use modscope::moderation::{
    Categories, Dashboard, HealthcareReviews, Profanity, Reports, Synonyms, TextAnalysis,
};
use modscope_api::categories::CreateCategory;
use modscope_api::reports::LogReport;
use modscope_common::error::ClientError;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "modscope - browse content-moderation data")]
struct Args {
    /// GraphQL endpoint of the moderation backend
    #[arg(long, env = config::ENDPOINT_ENV, default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// GraphQL endpoint of the healthcare reviews service
    #[arg(long, env = config::REVIEWS_ENDPOINT_ENV, default_value = config::DEFAULT_REVIEWS_ENDPOINT)]
    reviews_endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every category
    Categories,
    /// Classify a word, optionally in context
    WordCategory {
        word: String,
        #[arg(long)]
        context: Option<String>,
    },
    /// Create a category
    CreateCategory {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        severity: Option<i64>,
    },
    /// List every profane word
    ProfaneWords,
    /// Add a word to the profane word list
    AddWord {
        word: String,
        #[arg(long)]
        severity: Option<i64>,
        #[arg(long)]
        context_dependent: Option<bool>,
    },
    /// Scan text for profanity
    Check { text: String },
    /// Score the sentiment of text
    Sentiment { text: String },
    /// Fetch a stored sentiment analysis
    Analysis { id: String },
    /// Ask for replacements for a word
    Suggest {
        word: String,
        #[arg(long)]
        context: Option<String>,
    },
    /// List every stored synonym set
    Synonyms,
    /// Store replacements for a word
    SaveSynonyms {
        word: String,
        #[arg(required = true)]
        synonyms: Vec<String>,
        #[arg(long)]
        score: Option<i64>,
    },
    /// List reports, one page at a time
    Reports {
        #[arg(long, default_value_t = modscope::moderation::DEFAULT_REPORTS_LIMIT)]
        limit: i64,
        /// Number of pages to skip
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Show one report with a page of its entries
    Report {
        id: String,
        #[arg(long)]
        entries_limit: Option<i64>,
        #[arg(long, default_value_t = 0)]
        entries_offset: i64,
    },
    /// Generate a report for a date range
    GenerateReport {
        start_date: String,
        end_date: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// Log a flagged-word occurrence
    LogReport {
        word: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        severity: Option<i64>,
    },
    /// Summary counts, recent reports and top categories
    Dashboard,
    /// Fetch healthcare reviews and batch-check their comments
    Reviews,
}

#[derive(Serialize)]
struct DashboardView {
    categories: usize,
    reports: usize,
    analyses: usize,
    total_flagged: i64,
    recent_reports: Vec<modscope_api::dashboard::RecentReport>,
    top_categories: Vec<modscope_api::reports::CategoryCount>,
}

#[derive(Serialize)]
struct ReviewsView {
    reviews: Vec<modscope::moderation::Review>,
    flagged_words: Vec<modscope_api::profanity::FlaggedWord>,
}

fn print<T: Serialize>(value: &T) -> miette::Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

fn failed(error: Option<Arc<ClientError>>) -> miette::Result<()> {
    match error {
        Some(e) => Err(miette::Report::msg(e.to_string())),
        None => Ok(()),
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("MODSCOPE_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ClientConfig::builder()
        .endpoint(parse_endpoint("--endpoint", &args.endpoint)?)
        .reviews_endpoint(parse_endpoint("--reviews-endpoint", &args.reviews_endpoint)?)
        .build();
    let client = Arc::new(ModClient::from_config(reqwest::Client::new(), &config));

    match args.command {
        Command::Categories => {
            let unit = Categories::load(client).await;
            failed(unit.categories_state().error)?;
            print(&unit.categories())
        }
        Command::WordCategory { word, context } => {
            let unit = Categories::load(client).await;
            let result = unit.category_for_word(&word, context.as_deref()).await;
            failed(unit.word_category_state().error)?;
            print(&result)
        }
        Command::CreateCategory {
            name,
            description,
            severity,
        } => {
            let unit = Categories::load(client).await;
            let request = CreateCategory::new()
                .name(name)
                .maybe_description(description)
                .maybe_severity_level(severity)
                .build();
            let created = unit.create_category(request).await;
            failed(unit.create_state().error)?;
            print(&created)
        }
        Command::ProfaneWords => {
            let unit = Profanity::load(client).await;
            failed(unit.profane_words_state().error)?;
            print(&unit.profane_words())
        }
        Command::AddWord {
            word,
            severity,
            context_dependent,
        } => {
            let unit = Profanity::load(client).await;
            let added = unit
                .add_profane_word(&word, severity, context_dependent)
                .await;
            failed(unit.add_state().error)?;
            print(&added)
        }
        Command::Check { text } => {
            let unit = TextAnalysis::new(client);
            let flagged = unit.check_text(&text).await;
            failed(unit.check_state().error)?;
            print(&flagged)
        }
        Command::Sentiment { text } => {
            let unit = TextAnalysis::new(client);
            let analysis = unit.analyze_sentiment(&text).await;
            failed(unit.sentiment_state().error)?;
            print(&analysis)
        }
        Command::Analysis { id } => {
            let unit = TextAnalysis::new(client);
            let analysis = unit.sentiment_analysis(&id).await;
            failed(unit.sentiment_analysis_state().error)?;
            print(&analysis)
        }
        Command::Suggest { word, context } => {
            let unit = Synonyms::load(client).await;
            let suggestions = unit.suggestions(&word, context.as_deref()).await;
            failed(unit.suggestions_state().error)?;
            print(&suggestions)
        }
        Command::Synonyms => {
            let unit = Synonyms::load(client).await;
            failed(unit.all_synonyms_state().error)?;
            print(&unit.all_synonyms())
        }
        Command::SaveSynonyms {
            word,
            synonyms,
            score,
        } => {
            let unit = Synonyms::load(client).await;
            let saved = unit.save_synonyms(&word, synonyms, score).await;
            failed(unit.save_state().error)?;
            print(&saved)
        }
        Command::Reports { limit, page } => {
            let unit = Reports::load(client).await;
            if limit != unit.limit() {
                unit.set_limit(limit).await;
            }
            for _ in 0..page {
                unit.load_more().await;
            }
            failed(unit.reports_state().error)?;
            print(&unit.reports())
        }
        Command::Report {
            id,
            entries_limit,
            entries_offset,
        } => {
            let unit = Reports::load(client).await;
            let mut detail = unit.report(&id).await;
            if entries_limit.is_some() || entries_offset != 0 {
                let limit = entries_limit.unwrap_or(modscope::moderation::DEFAULT_ENTRIES_LIMIT);
                detail = unit.report_entries_page(limit, entries_offset).await;
            }
            failed(unit.report_detail_state().error)?;
            print(&detail)
        }
        Command::GenerateReport {
            start_date,
            end_date,
            title,
        } => {
            let unit = Reports::load(client).await;
            let generated = unit
                .generate_report(&start_date, &end_date, title.as_deref())
                .await
                .map_err(|e| miette::Report::msg(e.to_string()))?;
            print(&generated)
        }
        Command::LogReport {
            word,
            context,
            category,
            severity,
        } => {
            let unit = Reports::load(client).await;
            let request = LogReport::new()
                .word(word)
                .maybe_context(context)
                .maybe_category(category)
                .maybe_severity(severity)
                .build();
            let entry = unit
                .log_report(request)
                .await
                .map_err(|e| miette::Report::msg(e.to_string()))?;
            print(&entry)
        }
        Command::Dashboard => {
            let dashboard = Dashboard::load(client).await;
            failed(dashboard.error())?;
            print(&DashboardView {
                categories: dashboard.categories_count(),
                reports: dashboard.reports_count(),
                analyses: dashboard.analyses_count(),
                total_flagged: dashboard.total_flagged(),
                recent_reports: dashboard.recent_reports(),
                top_categories: dashboard.top_categories(),
            })
        }
        Command::Reviews => {
            let reviews = HealthcareReviews::new(client, config.reviews_endpoint.clone());
            let processed = reviews.process_reviews().await;
            let state = reviews.state();
            if let Some(e) = state.fetch_error.or(state.processing_error) {
                return Err(miette::Report::msg(e.to_string()));
            }
            print(&ReviewsView {
                reviews: processed,
                flagged_words: reviews.flagged_words(),
            })
        }
    }
}
