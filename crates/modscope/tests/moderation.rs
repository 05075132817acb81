use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use modscope::client::ModClient;
use modscope::moderation::{
    Categories, Dashboard, HealthcareReviews, Profanity, Reports, ReviewsError, Synonyms,
    TextAnalysis,
};
use modscope::query::{Phase, Query};
use modscope_api::categories::GetCategoryForWord;
use modscope_common::http_client::HttpClient;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use url::Url;

/// Answers by `operationName`. The last queued answer for an operation is
/// repeated; the reviews body has no operation name and routes under `""`.
#[derive(Clone, Default)]
struct MockServer {
    routes: Arc<Mutex<HashMap<String, VecDeque<(StatusCode, Value)>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    log: Arc<Mutex<Vec<Value>>>,
}

impl MockServer {
    async fn route(&self, operation: &str, body: Value) {
        self.route_status(operation, StatusCode::OK, body).await;
    }

    async fn route_status(&self, operation: &str, status: StatusCode, body: Value) {
        self.routes
            .lock()
            .await
            .entry(operation.to_string())
            .or_default()
            .push_back((status, body));
    }

    async fn delay_word(&self, word: &str, delay: Duration) {
        self.delays.lock().await.insert(word.to_string(), delay);
    }

    async fn requests(&self, operation: &str) -> Vec<Value> {
        self.log
            .lock()
            .await
            .iter()
            .filter(|body| body["operationName"].as_str().unwrap_or("") == operation)
            .cloned()
            .collect()
    }

    async fn calls(&self, operation: &str) -> usize {
        self.requests(operation).await.len()
    }
}

impl HttpClient for MockServer {
    type Error = std::convert::Infallible;
    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let server = self.clone();
        async move {
            let body: Value = serde_json::from_slice(request.body()).expect("json body");
            let operation = body["operationName"].as_str().unwrap_or("").to_string();
            let word = body["variables"]["word"].as_str().map(str::to_string);
            server.log.lock().await.push(body);

            let (status, answer) = {
                let mut routes = server.routes.lock().await;
                let queue = routes
                    .get_mut(&operation)
                    .unwrap_or_else(|| panic!("no route for {operation:?}"));
                if queue.len() > 1 {
                    queue.pop_front().expect("queued answer")
                } else {
                    queue.front().cloned().expect("queued answer")
                }
            };

            let delay = match word {
                Some(word) => server.delays.lock().await.get(&word).copied(),
                None => None,
            };
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            Ok(http::Response::builder()
                .status(status)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&answer).expect("json answer"))
                .expect("response"))
        }
    }
}

fn client(server: &MockServer) -> Arc<ModClient<MockServer>> {
    Arc::new(ModClient::new(
        server.clone(),
        Url::parse("http://localhost:4000/graphql").expect("valid url"),
    ))
}

fn reviews_endpoint() -> Url {
    Url::parse("https://reviews.test/graphql").expect("valid url")
}

fn review(id: &str, comment: &str) -> Value {
    json!({
        "id": id,
        "patient_id": 1,
        "doctor_id": 2,
        "appointment_id": 3,
        "comment": comment,
        "rating": 4.5,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn category_list_mirrors_server_array() {
    let server = MockServer::default();
    server
        .route(
            "GetAllCategories",
            json!({"data": {"getAllCategories": [
                {"id": "1", "name": "Insult", "severityLevel": 2},
                {"id": "2", "name": "Slur", "description": "targeted", "severityLevel": 5}
            ]}}),
        )
        .await;

    let categories = Categories::load(client(&server)).await;
    let list = categories.categories();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Insult");
    assert_eq!(list[1].description.as_deref(), Some("targeted"));
    assert_eq!(categories.categories_state().phase, Phase::Ready);
}

#[tokio::test]
async fn null_list_reads_as_empty() {
    let server = MockServer::default();
    server
        .route("GetAllProfaneWords", json!({"data": {"getAllProfaneWords": null}}))
        .await;

    let profanity = Profanity::load(client(&server)).await;
    assert!(profanity.profane_words().is_empty());
    let state = profanity.profane_words_state();
    assert_eq!(state.phase, Phase::Ready);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn failed_read_records_error_and_no_data() {
    let server = MockServer::default();
    server
        .route(
            "GetAllSynonyms",
            json!({"data": null, "errors": [{"message": "synonym store offline"}]}),
        )
        .await;

    let synonyms = Synonyms::load(client(&server)).await;
    let state = synonyms.all_synonyms_state();
    assert_eq!(state.phase, Phase::Failed);
    assert!(state.data.is_none());
    let error = state.error.expect("error recorded");
    assert!(error.to_string().contains("synonym store offline"));
    assert!(synonyms.all_synonyms().is_empty());
}

#[tokio::test]
async fn retrigger_with_same_params_is_served_from_cache() {
    let server = MockServer::default();
    server
        .route("GetAllCategories", json!({"data": {"getAllCategories": []}}))
        .await;
    server
        .route(
            "GetCategoryForWord",
            json!({"data": {"getCategoryForWord": {"word": "darn", "category": "Mild"}}}),
        )
        .await;

    let categories = Categories::load(client(&server)).await;
    let first = categories.category_for_word("darn", None).await;
    let second = categories.category_for_word("darn", None).await;
    assert_eq!(first, second);
    assert_eq!(server.calls("GetCategoryForWord").await, 1);

    categories.category_for_word("heck", None).await;
    assert_eq!(server.calls("GetCategoryForWord").await, 2);
}

#[tokio::test]
async fn missing_context_is_sent_as_empty_string() {
    let server = MockServer::default();
    server
        .route("GetAllSynonyms", json!({"data": {"getAllSynonyms": []}}))
        .await;
    server
        .route(
            "GetSuggestions",
            json!({"data": {"getSuggestions": ["fool", null, "nitwit"]}}),
        )
        .await;

    let synonyms = Synonyms::load(client(&server)).await;
    let suggestions = synonyms.suggestions("idiot", None).await;
    assert_eq!(suggestions, vec!["fool".to_string(), "nitwit".to_string()]);

    let requests = server.requests("GetSuggestions").await;
    assert_eq!(requests[0]["variables"]["word"], "idiot");
    assert_eq!(requests[0]["variables"]["context"], "");
}

#[tokio::test]
async fn added_word_is_merged_without_refetch() {
    let server = MockServer::default();
    server
        .route(
            "GetAllProfaneWords",
            json!({"data": {"getAllProfaneWords": [
                {"word": "darn", "severity": 1, "contextDependent": false}
            ]}}),
        )
        .await;
    server
        .route(
            "AddProfaneWord",
            json!({"data": {"addProfaneWord": {"word": "heck", "severity": 2}}}),
        )
        .await;
    server
        .route(
            "AddProfaneWord",
            json!({"data": {"addProfaneWord": {"word": "darn", "severity": 4}}}),
        )
        .await;

    let profanity = Profanity::load(client(&server)).await;

    let added = profanity
        .add_profane_word("heck", Some(2), None)
        .await
        .expect("word added");
    assert_eq!(added.word, "heck");
    let words: Vec<_> = profanity
        .profane_words()
        .into_iter()
        .map(|w| (w.word.to_string(), w.severity))
        .collect();
    assert_eq!(
        words,
        vec![("darn".to_string(), Some(1)), ("heck".to_string(), Some(2))]
    );

    profanity.add_profane_word("darn", Some(4), None).await;
    let words = profanity.profane_words();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].severity, Some(4));

    assert_eq!(server.calls("GetAllProfaneWords").await, 1);
    assert!(profanity.add_state().error.is_none());
}

#[tokio::test]
async fn failed_addition_keeps_list_and_records_error() {
    let server = MockServer::default();
    server
        .route(
            "GetAllProfaneWords",
            json!({"data": {"getAllProfaneWords": [{"word": "darn", "severity": 1}]}}),
        )
        .await;
    server
        .route(
            "AddProfaneWord",
            json!({"data": null, "errors": [{"message": "duplicate word"}]}),
        )
        .await;

    let profanity = Profanity::load(client(&server)).await;
    assert!(profanity.add_profane_word("darn", None, None).await.is_none());

    let state = profanity.add_state();
    assert!(!state.loading);
    assert!(state.error.expect("error").to_string().contains("duplicate word"));
    assert_eq!(profanity.profane_words().len(), 1);
}

#[tokio::test]
async fn created_category_is_appended_to_cached_list() {
    let server = MockServer::default();
    server
        .route(
            "GetAllCategories",
            json!({"data": {"getAllCategories": [{"id": "1", "name": "Insult"}]}}),
        )
        .await;
    server
        .route(
            "CreateCategory",
            json!({"data": {"createCategory": {"id": "2", "name": "Threat", "severityLevel": 5}}}),
        )
        .await;

    let categories = Categories::load(client(&server)).await;
    let request = modscope_api::categories::CreateCategory::new()
        .name("Threat")
        .severity_level(5)
        .build();
    let created = categories.create_category(request).await.expect("created");
    assert_eq!(created.id, "2");

    let names: Vec<_> = categories
        .categories()
        .into_iter()
        .map(|c| c.name.to_string())
        .collect();
    assert_eq!(names, vec!["Insult".to_string(), "Threat".to_string()]);
    assert_eq!(server.calls("GetAllCategories").await, 1);
}

#[tokio::test]
async fn newest_trigger_wins() {
    let server = MockServer::default();
    server
        .route(
            "GetCategoryForWord",
            json!({"data": {"getCategoryForWord": {"word": "slow"}}}),
        )
        .await;
    server
        .route(
            "GetCategoryForWord",
            json!({"data": {"getCategoryForWord": {"word": "fast"}}}),
        )
        .await;
    server.delay_word("slow", Duration::from_millis(50)).await;

    let query: Query<GetCategoryForWord, _> = Query::new(client(&server));
    let (_stale, latest) = tokio::join!(
        query.trigger(GetCategoryForWord::new().word("slow").build()),
        query.trigger(GetCategoryForWord::new().word("fast").build()),
    );

    let word = |out: Option<modscope_api::categories::GetCategoryForWordOutput>| {
        out.and_then(|o| o.get_category_for_word)
            .map(|r| r.word.to_string())
    };
    assert_eq!(word(latest.data), Some("fast".to_string()));
    assert_eq!(word(query.data()), Some("fast".to_string()));
    assert_eq!(query.params().expect("params").word, "fast");
}

#[tokio::test]
async fn dashboard_isolates_failing_read() {
    let server = MockServer::default();
    server
        .route(
            "GetDashboardCategories",
            json!({"data": {"getAllCategories": [
                {"id": "1", "name": "Insult"},
                {"id": "2", "name": "Slur"}
            ]}}),
        )
        .await;
    server
        .route(
            "GetRecentAnalyses",
            json!({"data": null, "errors": [{"message": "analysis backend down"}]}),
        )
        .await;
    server
        .route(
            "GetRecentReports",
            json!({"data": {"getReports": [
                {"id": "r1", "title": "Week 1", "startDate": "2024-01-01", "endDate": "2024-01-07",
                 "createdAt": "2024-01-08", "totalFlagged": 3},
                {"id": "r2", "title": "Week 2", "startDate": "2024-01-08", "endDate": "2024-01-14",
                 "createdAt": "2024-01-15", "totalFlagged": null}
            ]}}),
        )
        .await;
    server
        .route(
            "GetTopCategories",
            json!({"data": {"getReports": [
                {"categories": [{"name": "A", "count": 3}, {"name": "B", "count": 1}]},
                {"categories": [{"name": "A", "count": 2}, {"name": "C", "count": 5}]},
                {"categories": null}
            ]}}),
        )
        .await;

    let dashboard = Dashboard::load(client(&server)).await;

    assert_eq!(dashboard.categories_count(), 2);
    assert_eq!(dashboard.reports_count(), 2);
    assert_eq!(dashboard.analyses_count(), 0);
    assert_eq!(dashboard.total_flagged(), 3);
    assert!(!dashboard.loading());

    let top: Vec<_> = dashboard
        .top_categories()
        .into_iter()
        .map(|c| (c.name.to_string(), c.count))
        .collect();
    assert_eq!(
        top,
        vec![
            ("A".to_string(), 5),
            ("C".to_string(), 5),
            ("B".to_string(), 1)
        ]
    );

    let error = dashboard.error().expect("analyses error surfaced");
    assert!(error.to_string().contains("analysis backend down"));
    assert_eq!(server.requests("GetRecentAnalyses").await[0]["variables"]["limit"], 5);
    assert_eq!(server.requests("GetRecentReports").await[0]["variables"]["limit"], 3);
    assert_eq!(server.requests("GetTopCategories").await[0]["variables"]["limit"], 10);
}

fn reports_page(ids: &[&str]) -> Value {
    let reports: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({"id": id, "title": format!("Report {id}"), "startDate": "2024-01-01",
                   "endDate": "2024-01-31", "createdAt": "2024-02-01"})
        })
        .collect();
    json!({"data": {"getReports": reports}})
}

#[tokio::test]
async fn report_paging_moves_offset_and_limit() {
    let server = MockServer::default();
    server.route("GetReports", reports_page(&["1", "2"])).await;
    server.route("GetReports", reports_page(&["3"])).await;

    let reports = Reports::load(client(&server)).await;
    assert_eq!((reports.limit(), reports.offset()), (10, 0));
    assert_eq!(reports.reports().len(), 2);

    reports.load_more().await;
    assert_eq!((reports.limit(), reports.offset()), (10, 10));
    assert_eq!(reports.reports()[0].id, "3");

    reports.set_limit(25).await;
    assert_eq!((reports.limit(), reports.offset()), (25, 10));

    let variables: Vec<_> = server
        .requests("GetReports")
        .await
        .into_iter()
        .map(|body| body["variables"].clone())
        .collect();
    assert_eq!(
        variables,
        vec![
            json!({"limit": 10, "offset": 0}),
            json!({"limit": 10, "offset": 10}),
            json!({"limit": 25, "offset": 10}),
        ]
    );
}

#[tokio::test]
async fn generated_report_refetches_list() {
    let server = MockServer::default();
    server.route("GetReports", reports_page(&["1"])).await;
    server.route("GetReports", reports_page(&["2", "1"])).await;
    server
        .route(
            "GenerateReport",
            json!({"data": {"generateReport": {"id": "2", "title": "January", "summary": "quiet"}}}),
        )
        .await;

    let reports = Reports::load(client(&server)).await;
    let generated = reports
        .generate_report("2024-01-01", "2024-01-31", Some("January"))
        .await
        .expect("generated")
        .expect("report returned");
    assert_eq!(generated.id, "2");

    assert_eq!(server.calls("GetReports").await, 2);
    assert_eq!(reports.reports().len(), 2);

    let request = &server.requests("GenerateReport").await[0];
    assert_eq!(
        request["variables"],
        json!({"startDate": "2024-01-01", "endDate": "2024-01-31", "title": "January"})
    );
}

#[tokio::test]
async fn failed_generation_is_returned_and_recorded() {
    let server = MockServer::default();
    server.route("GetReports", reports_page(&["1"])).await;
    server
        .route(
            "GenerateReport",
            json!({"data": null, "errors": [{"message": "no entries in range"}]}),
        )
        .await;

    let reports = Reports::load(client(&server)).await;
    let error = reports
        .generate_report("2030-01-01", "2030-01-31", None)
        .await
        .expect_err("generation fails");
    assert!(error.to_string().contains("no entries in range"));
    assert!(reports.generate_state().error.is_some());
    assert_eq!(server.calls("GetReports").await, 1);
}

#[tokio::test]
async fn entries_page_needs_a_loaded_report() {
    let server = MockServer::default();
    server.route("GetReports", reports_page(&[])).await;
    server
        .route(
            "GetReportById",
            json!({"data": {"getReportById": {"id": "7", "title": "July", "startDate": "2024-07-01",
                   "endDate": "2024-07-31", "entries": []}}}),
        )
        .await;

    let reports = Reports::load(client(&server)).await;
    assert!(reports.report_entries_page(20, 40).await.is_none());
    assert_eq!(server.calls("GetReportById").await, 0);

    reports.report("7").await.expect("report loaded");
    reports.report_entries_page(20, 40).await;
    let requests = server.requests("GetReportById").await;
    assert_eq!(requests[0]["variables"], json!({"id": "7"}));
    assert_eq!(
        requests[1]["variables"],
        json!({"id": "7", "entriesLimit": 20, "entriesOffset": 40})
    );
}

#[tokio::test]
async fn review_server_errors_become_fetch_error() {
    let server = MockServer::default();
    server
        .route("", json!({"errors": [{"message": "reviews unavailable"}]}))
        .await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    assert!(reviews.fetch_reviews().await.is_empty());

    let state = reviews.state();
    assert!(state.reviews.is_empty());
    assert!(!state.loading);
    match state.fetch_error.as_deref() {
        Some(ReviewsError::Server(message)) => assert_eq!(message, "reviews unavailable"),
        other => panic!("unexpected fetch error: {other:?}"),
    }
}

#[tokio::test]
async fn review_errors_without_message_use_fallback() {
    let server = MockServer::default();
    server.route("", json!({"errors": [{"message": ""}]})).await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    reviews.fetch_reviews().await;
    match reviews.state().fetch_error.as_deref() {
        Some(ReviewsError::Server(message)) => assert_eq!(message, "Error fetching reviews"),
        other => panic!("unexpected fetch error: {other:?}"),
    }
}

#[tokio::test]
async fn review_comments_are_checked_in_one_batch() {
    let server = MockServer::default();
    server
        .route(
            "",
            json!({"data": {"reviews": [
                review("1", "you idiot"),
                review("2", ""),
                review("3", "great doctor")
            ]}}),
        )
        .await;
    server
        .route(
            "CheckText",
            json!({"data": {"checkText": [{"word": "idiot", "severity": 3}]}}),
        )
        .await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    let processed = reviews.process_reviews().await;
    assert_eq!(processed.len(), 3);

    let checks = server.requests("CheckText").await;
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0]["variables"]["input"], "you idiot great doctor");

    let state = reviews.state();
    assert!(state.processing_complete);
    assert!(state.processing_error.is_none());
    assert_eq!(state.processed.len(), 3);
    assert_eq!(reviews.flagged_words()[0].word, "idiot");

    let fetch = &server.requests("").await[0];
    assert!(fetch["query"].as_str().expect("query").contains("reviews"));
}

#[tokio::test]
async fn empty_review_list_completes_without_check() {
    let server = MockServer::default();
    server.route("", json!({"data": {"reviews": []}})).await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    assert!(reviews.process_reviews().await.is_empty());
    assert!(reviews.state().processing_complete);
    assert_eq!(server.calls("CheckText").await, 0);
}

#[tokio::test]
async fn failed_check_is_a_processing_error() {
    let server = MockServer::default();
    server
        .route("", json!({"data": {"reviews": [review("1", "fine")]}}))
        .await;
    server
        .route(
            "CheckText",
            json!({"data": null, "errors": [{"message": "checker overloaded"}]}),
        )
        .await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    reviews.process_reviews().await;

    let state = reviews.state();
    assert!(state.processing_complete);
    assert!(state.fetch_error.is_none());
    assert_eq!(state.reviews.len(), 1);
    assert!(matches!(
        state.processing_error.as_deref(),
        Some(ReviewsError::Processing(_))
    ));
}

#[tokio::test]
async fn review_http_failure_is_a_fetch_error() {
    let server = MockServer::default();
    server
        .route_status("", StatusCode::BAD_GATEWAY, json!("upstream gone"))
        .await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    assert!(reviews.fetch_reviews().await.is_empty());
    assert!(matches!(
        reviews.state().fetch_error.as_deref(),
        Some(ReviewsError::Client(_))
    ));
}

#[tokio::test]
async fn review_http_failure_with_object_body_is_a_fetch_error() {
    let server = MockServer::default();
    server
        .route_status(
            "",
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"message": "upstream down"}),
        )
        .await;

    let reviews = HealthcareReviews::new(client(&server), reviews_endpoint());
    reviews.process_reviews().await;

    let state = reviews.state();
    assert!(state.reviews.is_empty());
    match state.fetch_error.as_deref() {
        Some(ReviewsError::Client(modscope_common::ClientError::Http(e))) => {
            assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("unexpected fetch error: {other:?}"),
    }
    assert!(state.processing_complete);
    assert_eq!(server.calls("CheckText").await, 0);
}

#[tokio::test]
async fn saved_synonyms_are_merged_without_refetch() {
    let server = MockServer::default();
    server
        .route(
            "GetAllSynonyms",
            json!({"data": {"getAllSynonyms": [
                {"word": "idiot", "suggestions": ["fool"]}
            ]}}),
        )
        .await;
    server
        .route(
            "SaveSynonyms",
            json!({"data": {"saveSynonyms": {
                "word": "idiot", "suggestions": ["fool", "nitwit"], "appropriatenessScore": 7
            }}}),
        )
        .await;

    let synonyms = Synonyms::load(client(&server)).await;
    let saved = synonyms
        .save_synonyms("idiot", vec!["fool".into(), "nitwit".into()], Some(7))
        .await
        .expect("synonyms saved");
    assert_eq!(saved.appropriateness_score, Some(7));

    let all = synonyms.all_synonyms();
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].suggestions,
        Some(vec![Some("fool".to_string()), Some("nitwit".to_string())])
    );
    assert_eq!(server.calls("GetAllSynonyms").await, 1);

    let request = &server.requests("SaveSynonyms").await[0];
    assert_eq!(
        request["variables"],
        json!({"word": "idiot", "synonyms": ["fool", "nitwit"], "appropriatenessScore": 7})
    );
    assert!(synonyms.save_state().error.is_none());
}

#[tokio::test]
async fn logged_report_error_is_returned_and_recorded() {
    let server = MockServer::default();
    server.route("GetReports", reports_page(&[])).await;
    server
        .route(
            "LogReport",
            json!({"data": {"logReport": {
                "id": "e1", "word": "darn", "category": "Mild", "timestamp": "2024-03-01T10:00:00Z"
            }}}),
        )
        .await;
    server
        .route(
            "LogReport",
            json!({"data": null, "errors": [{"message": "unknown category"}]}),
        )
        .await;

    let reports = Reports::load(client(&server)).await;
    let request = modscope_api::reports::LogReport::new()
        .word("darn")
        .category("Mild")
        .build();
    let entry = reports
        .log_report(request.clone())
        .await
        .expect("logged")
        .expect("entry returned");
    assert_eq!(entry.id, "e1");
    assert!(reports.log_state().error.is_none());

    let error = reports
        .log_report(request)
        .await
        .expect_err("second log fails");
    assert!(error.to_string().contains("unknown category"));
    let state = reports.log_state();
    assert!(!state.loading);
    assert!(state.error.expect("error recorded").to_string().contains("unknown category"));
}

#[tokio::test]
async fn report_entries_are_queried_with_filters() {
    let server = MockServer::default();
    server.route("GetReports", reports_page(&[])).await;
    server
        .route(
            "GetReportEntries",
            json!({"data": {"getReportEntries": [
                {"id": "e1", "word": "darn", "timestamp": "2024-03-01T10:00:00Z", "severity": 1},
                null
            ]}}),
        )
        .await;

    let reports = Reports::load(client(&server)).await;
    let params = modscope_api::reports::GetReportEntries::new()
        .report_id("7")
        .limit(20)
        .build();
    let entries = reports.report_entries(params).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "darn");
    assert_eq!(
        server.requests("GetReportEntries").await[0]["variables"],
        json!({"reportId": "7", "limit": 20})
    );
}

#[tokio::test]
async fn sentiment_reads_return_analyses() {
    let server = MockServer::default();
    server
        .route(
            "AnalyzeSentiment",
            json!({"data": {"analyzeSentiment": {
                "id": "s1", "sentiment": "negative", "toxicityScore": 0.8
            }}}),
        )
        .await;
    server
        .route(
            "GetSentimentAnalysis",
            json!({"data": {"getSentimentAnalysis": {"id": "s0", "sentiment": "positive"}}}),
        )
        .await;

    let analysis = TextAnalysis::new(client(&server));
    let scored = analysis
        .analyze_sentiment("this is awful")
        .await
        .expect("analysis returned");
    assert_eq!(scored.toxicity_score, Some(0.8));
    assert_eq!(analysis.text(), "this is awful");
    assert_eq!(
        analysis.sentiment().map(|s| s.id.to_string()),
        Some("s1".to_string())
    );
    assert_eq!(
        server.requests("AnalyzeSentiment").await[0]["variables"],
        json!({"text": "this is awful"})
    );

    let stored = analysis
        .sentiment_analysis("s0")
        .await
        .expect("stored analysis");
    assert_eq!(stored.sentiment.as_deref(), Some("positive"));
    assert!(analysis.sentiment_analysis_state().error.is_none());
}

#[tokio::test]
async fn word_category_save_reports_result_and_errors() {
    let server = MockServer::default();
    server
        .route("GetAllCategories", json!({"data": {"getAllCategories": []}}))
        .await;
    server
        .route(
            "SaveWordCategory",
            json!({"data": {"saveWordCategory": {"word": "darn", "category": "Mild", "confidence": 0.9}}}),
        )
        .await;
    server
        .route(
            "SaveWordCategory",
            json!({"data": null, "errors": [{"message": "no such category"}]}),
        )
        .await;

    let categories = Categories::load(client(&server)).await;
    let request = modscope_api::categories::SaveWordCategory::new()
        .word("darn")
        .category_id("3")
        .confidence(0.9)
        .build();
    let saved = categories
        .save_word_category(request.clone())
        .await
        .expect("saved");
    assert_eq!(saved.category.as_deref(), Some("Mild"));
    assert_eq!(
        server.requests("SaveWordCategory").await[0]["variables"],
        json!({"word": "darn", "categoryId": "3", "confidence": 0.9})
    );

    assert!(categories.save_word_category(request).await.is_none());
    let error = categories.save_word_category_state().error.expect("error recorded");
    assert!(error.to_string().contains("no such category"));
}

