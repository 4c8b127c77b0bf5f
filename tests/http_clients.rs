use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use semdiff::{
    Batcher, CompareConfig, Comparer, DocumenterClient, EmbedError, EmbeddingClient,
    GenerationParams, PromptLanguage, SummarizerError,
};
use serde_json::{Value, json};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serve `app` on an ephemeral local port and return its base URL
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Unnormalized [chars, 1] vector per text
fn length_embeddings(body: &Value) -> Value {
    let embeddings: Vec<Vec<f32>> = body["texts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| vec![t.as_str().unwrap().chars().count() as f32, 1.0])
        .collect();
    json!({ "embeddings": embeddings })
}

fn embed_router(requests: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/embed",
            post(move |Json(body): Json<Value>| {
                let requests = requests.clone();
                async move {
                    requests.fetch_add(1, Ordering::SeqCst);
                    Json(length_embeddings(&body))
                }
            }),
        )
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok", "model": "BAAI/bge-base-en-v1.5", "device": "cuda" })) }),
        )
}

fn generate_router() -> Router {
    Router::new()
        .route(
            "/generate",
            post(|Json(body): Json<Value>| async move {
                // Echo the prompt like a decoder-only model does
                let text = format!(
                    "{} The texts agree. max_new_tokens={} do_sample={}",
                    body["prompt"].as_str().unwrap(),
                    body["max_new_tokens"],
                    body["do_sample"]
                );
                Json(json!({ "text": text }))
            }),
        )
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok", "model": "mistralai/Mistral-7B-Instruct-v0.3", "device": "cpu" })) }),
        )
}

#[tokio::test]
async fn embed_batched_preserves_order_and_normalizes() {
    let requests = Arc::new(AtomicUsize::new(0));
    let url = spawn(embed_router(requests.clone())).await;
    let client = EmbeddingClient::new(url);

    let texts: Vec<String> = (1..=5).map(|n| "x".repeat(n)).collect();
    let embeddings = client.embed_batched(&texts, &Batcher::new(2)).await.unwrap();

    assert_eq!(requests.load(Ordering::SeqCst), 3);
    assert_eq!(embeddings.len(), 5);
    for (n, v) in (1..=5).zip(&embeddings) {
        let norm = (n as f32 * n as f32 + 1.0).sqrt();
        assert!((v[0] - n as f32 / norm).abs() < 1e-5);
        assert!((v[1] - 1.0 / norm).abs() < 1e-5);
    }
}

#[tokio::test]
async fn embed_without_normalization_returns_raw_vectors() {
    let url = spawn(embed_router(Arc::new(AtomicUsize::new(0)))).await;
    let client = EmbeddingClient::new(url).normalize(false);

    let embeddings = client.embed(vec!["abc".to_string()]).await.unwrap();
    assert_eq!(embeddings, vec![vec![3.0, 1.0]]);
}

#[tokio::test]
async fn embed_server_error_is_reported() {
    let app = Router::new().route(
        "/embed",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "CUDA out of memory") }),
    );
    let client = EmbeddingClient::new(spawn(app).await);

    let err = client.embed(vec!["a".to_string()]).await.unwrap_err();
    match err {
        EmbedError::ServerError { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "CUDA out of memory");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn embed_count_mismatch_is_rejected() {
    let app = Router::new().route(
        "/embed",
        post(|| async { Json(json!({ "embeddings": [[1.0, 0.0]] })) }),
    );
    let client = EmbeddingClient::new(spawn(app).await);

    let err = client
        .embed(vec!["a".to_string(), "b".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, EmbedError::CountMismatch { expected: 2, actual: 1 }));
}

#[tokio::test]
async fn embed_mixed_dimensions_are_rejected() {
    let app = Router::new().route(
        "/embed",
        post(|| async { Json(json!({ "embeddings": [[1.0, 0.0], [1.0]] })) }),
    );
    let client = EmbeddingClient::new(spawn(app).await);

    let err = client
        .embed(vec!["a".to_string(), "b".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EmbedError::DimensionMismatch {
            index: 1,
            expected: 2,
            actual: 1
        }
    ));
}

#[tokio::test]
async fn embed_empty_vector_is_rejected() {
    let app = Router::new().route(
        "/embed",
        post(|| async { Json(json!({ "embeddings": [[]] })) }),
    );
    let client = EmbeddingClient::new(spawn(app).await);

    let err = client.embed(vec!["a".to_string()]).await.unwrap_err();
    assert!(matches!(err, EmbedError::EmptyVector(0)));
}

#[tokio::test]
async fn embed_batched_rejects_dimension_drift_between_batches() {
    // Each batch is consistent on its own, but the second is wider
    let app = Router::new().route(
        "/embed",
        post(|Json(body): Json<Value>| async move {
            let texts = body["texts"].as_array().unwrap();
            let dim = if texts[0] == "first" { 2 } else { 3 };
            let embeddings: Vec<Vec<f32>> = texts.iter().map(|_| vec![1.0; dim]).collect();
            Json(json!({ "embeddings": embeddings }))
        }),
    );
    let client = EmbeddingClient::new(spawn(app).await);

    let texts = vec!["first".to_string(), "second".to_string()];
    let err = client
        .embed_batched(&texts, &Batcher::new(1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EmbedError::DimensionMismatch {
            index: 1,
            expected: 2,
            actual: 3
        }
    ));
}

#[tokio::test]
async fn health_checks_report_device() {
    let embed_url = spawn(embed_router(Arc::new(AtomicUsize::new(0)))).await;
    let generate_url = spawn(generate_router()).await;

    let health = EmbeddingClient::new(embed_url).health_check().await.unwrap();
    assert!(health.is_gpu());
    assert_eq!(health.model, "BAAI/bge-base-en-v1.5");

    let health = DocumenterClient::new(generate_url)
        .unwrap()
        .health_check()
        .await
        .unwrap();
    assert!(!health.is_gpu());
}

#[tokio::test]
async fn conclusion_is_extracted_from_echoed_completion() {
    let url = spawn(generate_router()).await;
    let client = DocumenterClient::new(url).unwrap().params(GenerationParams {
        max_new_tokens: 42,
        do_sample: false,
        ..Default::default()
    });

    let conclusion = client
        .generate_conclusion(&["a".to_string()], &["b".to_string()])
        .await
        .unwrap();
    assert_eq!(conclusion, "The texts agree. max_new_tokens=42 do_sample=false");
}

#[tokio::test]
async fn conclusion_in_portuguese() {
    let url = spawn(generate_router()).await;
    let client = DocumenterClient::new(url)
        .unwrap()
        .language(PromptLanguage::Portuguese);

    let conclusion = client
        .generate_conclusion(&["a".to_string()], &["b".to_string()])
        .await
        .unwrap();
    assert!(conclusion.starts_with("The texts agree."));
}

#[tokio::test]
async fn blank_completion_is_an_error() {
    let app = Router::new().route(
        "/generate",
        post(|| async { Json(json!({ "text": "Technical conclusion:\n[/INST]\n   " })) }),
    );
    let client = DocumenterClient::new(spawn(app).await).unwrap();

    let err = client
        .generate_conclusion(&["a".to_string()], &["b".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, SummarizerError::EmptyCompletion));
}

#[tokio::test]
async fn compare_files_end_to_end() {
    let embed_url = spawn(embed_router(Arc::new(AtomicUsize::new(0)))).await;
    let generate_url = spawn(generate_router()).await;

    let mut file_a = tempfile::NamedTempFile::new().unwrap();
    let mut file_b = tempfile::NamedTempFile::new().unwrap();
    file_a.write_all("A".repeat(2500).as_bytes()).unwrap();
    file_b.write_all("B".repeat(1300).as_bytes()).unwrap();

    let comparer = Comparer::new(
        EmbeddingClient::new(embed_url),
        DocumenterClient::new(generate_url).unwrap(),
        CompareConfig::default(),
    )
    .unwrap();
    let comparison = comparer
        .compare_files(file_a.path(), file_b.path())
        .await
        .unwrap();

    // A: 1200 + 1200 + 100 chars; B: 1200 + 100 chars
    assert_eq!(comparison.stats.chunks_a, 3);
    assert_eq!(comparison.stats.chunks_b, 2);
    assert_eq!(comparison.stats.embedding_dim, 2);
    assert_eq!(comparison.pairs.len(), 3);
    assert!(comparison.pairs.iter().all(|p| p.excerpt_a.chars().count() <= 500));
    assert!(comparison.pairs.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(comparison.conclusion.starts_with("The texts agree."));
}
