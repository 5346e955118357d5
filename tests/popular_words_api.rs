//! End-to-end tests for the popular-words API, driving the real router
//! with a scripted suggest backend.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use popword::state::{AppState, SuggestDefaults};
use popword::suggest::cache::SuggestionCache;
use popword::suggest::client::{
    PopularWordQuery, SuggestClient, SuggestClientError, SuggestTerm,
};
use popword::suggest::roles::StaticRoleResolver;
use popword::suggest::service::{PopularWordService, QueryLimits};
use popword::web::create_router;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::util::ServiceExt;

/// Suggest backend double that records queries and replays a fixed outcome.
struct ScriptedBackend {
    outcome: Result<Vec<&'static str>, ()>,
    calls: AtomicUsize,
    queries: Mutex<Vec<PopularWordQuery>>,
}

impl ScriptedBackend {
    fn returning(terms: &'static [&'static str]) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(terms.to_vec()),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(()),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SuggestClient for ScriptedBackend {
    async fn popular_words(
        &self,
        query: &PopularWordQuery,
    ) -> Result<Vec<SuggestTerm>, SuggestClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        match &self.outcome {
            Ok(terms) => Ok(terms
                .iter()
                .map(|t| SuggestTerm {
                    text: (*t).to_owned(),
                })
                .collect()),
            Err(()) => Err(SuggestClientError::BadStatus {
                status: 502,
                url: "http://suggest.test/".to_owned(),
            }),
        }
    }
}

fn strs(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn app_state(backend: Arc<ScriptedBackend>, defaults: SuggestDefaults, enabled: bool) -> AppState {
    let service = PopularWordService::new(
        SuggestionCache::new(16, Duration::from_secs(60)),
        backend,
        Arc::new(StaticRoleResolver::new(strs(&["guest"]))),
        QueryLimits {
            size: 10,
            window_size: 30,
        },
    );
    AppState {
        word_service: service,
        suggest_defaults: Arc::new(defaults),
        popular_words_enabled: enabled,
    }
}

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn words_are_returned_in_backend_order() {
    let backend = ScriptedBackend::returning(&["ocean", "boat", "tide"]);
    let router = create_router(app_state(backend, SuggestDefaults::default(), true));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/popular-words?seed=sea")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::CACHE_CONTROL));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["words"], serde_json::json!(["ocean", "boat", "tide"]));
}

#[tokio::test]
async fn omitted_dimensions_fall_back_to_configured_defaults() {
    let backend = ScriptedBackend::returning(&["ocean"]);
    let defaults = SuggestDefaults {
        tags: strs(&["news"]),
        fields: strs(&["content"]),
        excludes: strs(&["spam"]),
    };
    let router = create_router(app_state(backend.clone(), defaults, true));

    let (status, _) = get_json(router, "/api/popular-words").await;
    assert_eq!(status, StatusCode::OK);

    let queries = backend.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query.seed, None);
    assert_eq!(query.tags, strs(&["news"]));
    assert_eq!(query.roles, strs(&["guest"]));
    assert_eq!(query.fields, strs(&["content"]));
    assert_eq!(query.excludes, strs(&["spam"]));
    assert_eq!(query.size, 10);
    assert_eq!(query.window_size, 30);
}

#[tokio::test]
async fn supplied_dimensions_override_defaults() {
    let backend = ScriptedBackend::returning(&["ocean"]);
    let defaults = SuggestDefaults {
        tags: strs(&["news"]),
        fields: strs(&["content"]),
        excludes: strs(&["spam"]),
    };
    let router = create_router(app_state(backend.clone(), defaults, true));

    let (status, _) = get_json(
        router,
        "/api/popular-words?tag=sports&tag=travel&field=title&exclude=boring",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let queries = backend.queries.lock().unwrap();
    let query = &queries[0];
    assert_eq!(query.tags, strs(&["sports", "travel"]));
    assert_eq!(query.fields, strs(&["title"]));
    assert_eq!(query.excludes, strs(&["boring"]));
}

#[tokio::test]
async fn backend_failure_yields_empty_words_with_200() {
    let backend = ScriptedBackend::failing();
    let router = create_router(app_state(backend, SuggestDefaults::default(), true));

    let (status, json) = get_json(router, "/api/popular-words?seed=sea").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["words"], serde_json::json!([]));
}

#[tokio::test]
async fn permuted_tag_order_is_served_from_one_backend_call() {
    let backend = ScriptedBackend::returning(&["ocean", "boat"]);
    let router = create_router(app_state(backend.clone(), SuggestDefaults::default(), true));

    let (_, first) = get_json(router.clone(), "/api/popular-words?seed=sea&tag=b&tag=a").await;
    let (_, second) = get_json(router, "/api/popular-words?seed=sea&tag=a&tag=b").await;

    assert_eq!(first, second);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn disabled_flag_unregisters_the_route() {
    let backend = ScriptedBackend::returning(&["ocean"]);
    let router = create_router(app_state(backend, SuggestDefaults::default(), false));

    let (status, _) = get_json(router.clone(), "/api/popular-words").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The rest of the API stays up.
    let (status, json) = get_json(router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
