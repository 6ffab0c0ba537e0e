use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Response,
    Router,
};
use polymarket_api::{
    ActivityParams, ActivityType, ClientOptions, ErrorKind, EventsListParams, HttpMethod, LogLevel,
    Logger, PolymarketClient, PolymarketError, PositionsParams, QueryParams, RequestOptions,
};
use serde_json::{json, Value as JsonValue};

#[derive(Clone)]
struct MockResponse {
    status: StatusCode,
    body: String,
    headers: Vec<(&'static str, String)>,
    delay: Duration,
}

impl MockResponse {
    fn json(status: StatusCode, body: JsonValue) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: vec![("content-type", "application/json".to_owned())],
            delay: Duration::from_millis(0),
        }
    }

    fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            headers: vec![("content-type", "text/plain".to_owned())],
            delay: Duration::from_millis(0),
        }
    }

    fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_owned()));
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug)]
struct RecordedRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: String,
}

#[derive(Clone)]
struct MockState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    hits: Arc<AtomicUsize>,
}

async fn record_handler(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .requests
        .lock()
        .expect("request log mutex must not be poisoned")
        .push(RecordedRequest {
            method,
            path: uri.path().to_owned(),
            query: url::form_urlencoded::parse(uri.query().unwrap_or("").as_bytes())
                .into_owned()
                .collect(),
            headers,
            body,
        });

    let response = {
        let mut queue = state
            .responses
            .lock()
            .expect("response queue mutex must not be poisoned");
        queue.pop_front().unwrap_or_else(|| {
            MockResponse::json(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "no mock response available"}),
            )
        })
    };

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(*name, value.as_str());
    }
    builder
        .body(Body::from(response.body))
        .expect("mock response must build")
}

struct TestServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl TestServer {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("request log mutex must not be poisoned")
            .clone()
    }

    fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("server must have received a request")
    }

    /// Options pointing every API at this server, with short delays.
    fn options(&self) -> ClientOptions {
        ClientOptions::new()
            .gamma_base_url(&self.base_url)
            .data_base_url(&self.base_url)
            .pnl_base_url(&self.base_url)
            .timeout_ms(2_000)
            .retry_count(3)
            .retry_delay_ms(20)
            .log_level(LogLevel::Silent)
    }

    fn client(&self) -> PolymarketClient {
        PolymarketClient::with_options(self.options())
    }
}

async fn spawn_server(responses: Vec<MockResponse>) -> TestServer {
    let state = MockState {
        responses: Arc::new(Mutex::new(responses.into())),
        requests: Arc::new(Mutex::new(Vec::new())),
        hits: Arc::new(AtomicUsize::new(0)),
    };

    let app = Router::new()
        .fallback(record_handler)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind test listener");
    let address = listener.local_addr().expect("must have local addr");
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock server must run");
    });

    TestServer {
        base_url: format!("http://{address}"),
        hits: state.hits,
        requests: state.requests,
        task,
    }
}

/// Accepts TCP connections and closes them without answering.
async fn spawn_dropping_server() -> (String, Arc<AtomicUsize>, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind test listener");
    let address = listener.local_addr().expect("must have local addr");
    let accepts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepts);
    let task = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });

    (format!("http://{address}"), accepts, task)
}

#[derive(Debug, Default)]
struct RecordingLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    fn lines_at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .expect("log mutex must not be poisoned")
            .iter()
            .filter(|(line_level, _)| *line_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, _component: &str, message: &str) {
        self.lines
            .lock()
            .expect("log mutex must not be poisoned")
            .push((level, message.to_owned()));
    }
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

#[tokio::test]
async fn unset_params_are_not_sent() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        json!([{"id": "1", "title": "Election", "slug": "election"}]),
    )])
    .await;

    let events = server
        .client()
        .gamma()
        .events()
        .list(&EventsListParams {
            active: Some(true),
            limit: Some(5),
            ..Default::default()
        })
        .await
        .expect("list must succeed");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].slug, "election");

    let request = server.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/events");
    assert_eq!(request.query, pairs(&[("active", "true"), ("limit", "5")]));
}

#[tokio::test]
async fn stringified_numbers_do_not_fail_the_list() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        json!([
            {"id": 1, "title": "x", "openInterest": "12.5"},
            {"id": 2, "title": "y", "openInterest": 3}
        ]),
    )])
    .await;

    let events = server
        .client()
        .gamma()
        .events()
        .list(&Default::default())
        .await
        .expect("list must decode");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].open_interest, Some(12.5));
    assert_eq!(events[1].open_interest, Some(3.0));
}

#[tokio::test]
async fn empty_params_leave_no_query_string() {
    let server = spawn_server(vec![MockResponse::json(StatusCode::OK, json!([]))]).await;
    let client = server.client();

    let body = client
        .gamma()
        .http()
        .get("/tags", QueryParams::new().with("slug", None::<String>))
        .await
        .expect("get must succeed");

    assert_eq!(body, json!([]));
    assert!(server.last_request().query.is_empty());
}

#[tokio::test]
async fn requests_carry_json_headers_and_user_agent() {
    let server = spawn_server(vec![MockResponse::json(StatusCode::OK, json!({}))]).await;
    let client = PolymarketClient::with_options(server.options().user_agent("bot/1.0"));

    client
        .gamma()
        .http()
        .get("/status", ())
        .await
        .expect("get must succeed");

    let headers = server.last_request().headers;
    assert_eq!(headers["user-agent"], "bot/1.0");
    assert_eq!(headers["accept"], "application/json");
    assert_eq!(headers["content-type"], "application/json");
}

#[tokio::test]
async fn body_is_sent_only_for_methods_that_carry_one() {
    let ok = || MockResponse::json(StatusCode::OK, json!({"ok": true}));
    let server = spawn_server(vec![ok(), ok(), ok(), ok()]).await;
    let client = server.client();
    let http = client.data().http();
    let payload = json!({"a": 1});

    for method in [
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Get,
        HttpMethod::Delete,
    ] {
        http.request(method, "/echo", RequestOptions::new().body(payload.clone()))
            .await
            .unwrap_or_else(|err| panic!("{method} must succeed: {err}"));
    }

    let requests = server.requests();
    assert_eq!(requests.len(), 4);
    let methods: Vec<Method> = requests.iter().map(|request| request.method.clone()).collect();
    assert_eq!(methods, [Method::POST, Method::PUT, Method::GET, Method::DELETE]);

    for request in &requests[..2] {
        assert_eq!(
            serde_json::from_str::<JsonValue>(&request.body).expect("body must be json"),
            payload,
            "{} must carry the body",
            request.method
        );
    }
    for request in &requests[2..] {
        assert!(
            request.body.is_empty(),
            "{} must not carry a body",
            request.method
        );
    }
}

#[tokio::test]
async fn post_without_body_sends_nothing() {
    let server = spawn_server(vec![MockResponse::json(StatusCode::OK, json!({}))]).await;
    let client = server.client();

    client
        .data()
        .http()
        .post("/echo", None, ())
        .await
        .expect("post must succeed");

    let request = server.last_request();
    assert_eq!(request.method, Method::POST);
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn rate_limit_is_not_retried_and_keeps_retry_after() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": "slow down"}),
    )
    .with_header("retry-after", "3")])
    .await;

    let err = server
        .client()
        .gamma()
        .http()
        .get("/events", ())
        .await
        .expect_err("429 must fail");

    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.retry_after(), Some(3.0));
    assert_eq!(err.to_string(), "[429] Rate limit exceeded");
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "boom"}),
    )])
    .await;

    let err = server
        .client()
        .gamma()
        .markets()
        .get("12")
        .await
        .expect_err("500 must fail");

    match err {
        PolymarketError::Api {
            status,
            ref message,
            ref body,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, r#"{"error":"boom"}"#);
            assert_eq!(body, &json!({"error": "boom"}));
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert_eq!(server.hits(), 1);
    assert_eq!(server.last_request().path, "/markets/12");
}

#[tokio::test]
async fn not_found_with_text_body_uses_text_as_message() {
    let server = spawn_server(vec![MockResponse::text(StatusCode::NOT_FOUND, "no such event")]).await;

    let err = server
        .client()
        .gamma()
        .events()
        .get_by_slug("missing")
        .await
        .expect_err("404 must fail");

    assert!(err.is_api());
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "[404] no such event");
}

#[tokio::test]
async fn timeouts_are_retried_until_attempts_run_out() {
    let slow = || {
        MockResponse::json(StatusCode::OK, json!([])).with_delay(Duration::from_millis(500))
    };
    let server = spawn_server(vec![slow(), slow(), slow()]).await;
    let client =
        PolymarketClient::with_options(server.options().timeout_ms(100).retry_delay_ms(60));

    let started = Instant::now();
    let err = client
        .gamma()
        .http()
        .get("/events", ())
        .await
        .expect_err("every attempt must time out");
    let elapsed = started.elapsed();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_network());
    assert_eq!(err.to_string(), "Request timed out after 100ms");
    assert_eq!(server.hits(), 3);
    assert!(
        elapsed >= Duration::from_millis(2 * 60),
        "retries must wait between attempts, took {elapsed:?}"
    );
}

#[tokio::test]
async fn timeout_then_success_returns_second_attempt() {
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::OK, json!(["late"])).with_delay(Duration::from_millis(500)),
        MockResponse::json(StatusCode::OK, json!(["fresh"])),
    ])
    .await;
    let client = PolymarketClient::with_options(server.options().timeout_ms(100));

    let body = client
        .gamma()
        .http()
        .get("/events", ())
        .await
        .expect("second attempt must succeed");

    assert_eq!(body, json!(["fresh"]));
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn dropped_connections_surface_as_network_error_after_retries() {
    let (base_url, accepts, task) = spawn_dropping_server().await;
    let client = PolymarketClient::with_options(
        ClientOptions::new()
            .data_base_url(&base_url)
            .retry_count(3)
            .retry_delay_ms(10)
            .log_level(LogLevel::Silent),
    );

    let err = client
        .data()
        .http()
        .get("/trades", ())
        .await
        .expect_err("dropped connections must fail");
    task.abort();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().starts_with("HTTP error") || err.to_string().starts_with("Connection failed"));
    assert_eq!(accepts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn refused_connection_is_reported_as_connection_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind test listener");
    let address = listener.local_addr().expect("must have local addr");
    drop(listener);

    let client = PolymarketClient::with_options(
        ClientOptions::new()
            .gamma_base_url(format!("http://{address}"))
            .retry_count(2)
            .retry_delay_ms(10)
            .log_level(LogLevel::Silent),
    );

    let err = client
        .gamma()
        .health_check()
        .await
        .expect_err("nothing listens on the port");

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(
        err.to_string().starts_with("Connection failed"),
        "unexpected message: {err}"
    );
}

#[tokio::test]
async fn text_success_body_is_returned_as_string() {
    let server = spawn_server(vec![
        MockResponse::text(StatusCode::OK, "OK"),
        MockResponse::text(StatusCode::OK, "OK"),
    ])
    .await;
    let client = server.client();

    let raw = client
        .data()
        .http()
        .get("/", ())
        .await
        .expect("text body must not fail");
    assert_eq!(raw, json!("OK"));

    let status = client
        .data()
        .health_check()
        .await
        .expect("text status must decode");
    assert_eq!(status.status, "OK");
}

#[tokio::test]
async fn activity_type_filter_is_comma_joined() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        json!([{"proxyWallet": "0xabc", "type": "MERGE", "size": "10"}]),
    )])
    .await;

    let activity = server
        .client()
        .data()
        .activity(&ActivityParams {
            user: Some("0xabc".to_owned()),
            activity_type: Some([ActivityType::Trade, ActivityType::Merge].into()),
            ..Default::default()
        })
        .await
        .expect("activity must succeed");

    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].activity_type, Some(ActivityType::Merge));

    let request = server.last_request();
    assert_eq!(request.path, "/activity");
    assert_eq!(
        request.query,
        pairs(&[("user", "0xabc"), ("type", "TRADE,MERGE")])
    );
}

#[tokio::test]
async fn positions_use_camel_case_query_names() {
    let server = spawn_server(vec![MockResponse::json(StatusCode::OK, json!([]))]).await;

    server
        .client()
        .data()
        .positions(&PositionsParams {
            user: "0xabc".to_owned(),
            event_id: Some("42".to_owned()),
            size_threshold: Some(1.5),
            ..Default::default()
        })
        .await
        .expect("positions must succeed");

    assert_eq!(
        server.last_request().query,
        pairs(&[("eventId", "42"), ("sizeThreshold", "1.5"), ("user", "0xabc")])
    );
}

#[tokio::test]
async fn blank_required_input_fails_before_sending() {
    let server = spawn_server(Vec::new()).await;
    let client = server.client();

    let err = client
        .data()
        .positions(&PositionsParams::default())
        .await
        .expect_err("user is required");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.field(), Some("user"));

    let err = client
        .gamma()
        .events()
        .get(" ")
        .await
        .expect_err("id is required");
    assert_eq!(err.field(), Some("id"));

    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn invalid_base_url_is_a_validation_error() {
    let client = PolymarketClient::with_options(
        ClientOptions::new()
            .gamma_base_url("not a url")
            .log_level(LogLevel::Silent),
    );

    let err = client
        .gamma()
        .http()
        .get("/events", ())
        .await
        .expect_err("base url must be rejected");

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.field(), Some("base_url"));
}

#[tokio::test]
async fn pnl_failures_become_empty_history() {
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "down"})),
        MockResponse::json(StatusCode::OK, JsonValue::Null),
        MockResponse::text(StatusCode::OK, "maintenance"),
    ])
    .await;
    let client = server.client();

    assert!(!client.pnl().has_history("0xabc").await);
    assert_eq!(client.pnl().latest_value("0xabc").await, None);
    assert!(!client.pnl().has_history("0xabc").await);

    let request = server.last_request();
    assert_eq!(request.path, "/user-pnl");
    assert_eq!(
        request.query,
        pairs(&[("fidelity", "1d"), ("interval", "1m"), ("user_address", "0xabc")])
    );
    assert_eq!(server.hits(), 3);
}

#[tokio::test]
async fn pnl_latest_value_is_last_point() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        json!([{"t": 1_700_000_000, "p": 10.5}, {"t": 1_700_086_400, "p": 12.25}]),
    )])
    .await;

    let value = server.client().pnl().latest_value("0xabc").await;
    assert_eq!(value, Some(12.25));
}

#[tokio::test]
async fn logger_sees_each_attempt_and_each_transient_failure() {
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::OK, json!([])).with_delay(Duration::from_millis(500)),
        MockResponse::json(StatusCode::OK, json!([])).with_delay(Duration::from_millis(500)),
    ])
    .await;
    let logger = Arc::new(RecordingLogger::default());
    let client = PolymarketClient::with_options(server.options().timeout_ms(100).retry_count(2))
        .with_logger(logger.clone());

    let err = client
        .gamma()
        .http()
        .get("/events", ())
        .await
        .expect_err("both attempts must time out");
    assert_eq!(err.kind(), ErrorKind::Timeout);

    let debug = logger.lines_at(LogLevel::Debug);
    let attempts: Vec<&String> = debug
        .iter()
        .filter(|line| line.starts_with("Request: GET "))
        .collect();
    assert_eq!(attempts.len(), 2);
    assert!(attempts[0].ends_with("(attempt 1/2)"));
    assert!(attempts[1].ends_with("(attempt 2/2)"));
    assert_eq!(logger.lines_at(LogLevel::Warn).len(), 2);
}

#[tokio::test]
async fn logger_records_response_status() {
    let server = spawn_server(vec![MockResponse::json(StatusCode::OK, json!([]))]).await;
    let logger = Arc::new(RecordingLogger::default());
    let client = server.client().with_logger(logger.clone());

    client
        .gamma()
        .tags()
        .list(&Default::default())
        .await
        .expect("tags must succeed");

    let debug = logger.lines_at(LogLevel::Debug);
    assert!(debug.iter().any(|line| line == "Response: 200 OK"));
    assert!(logger.lines_at(LogLevel::Warn).is_empty());
}

#[tokio::test]
async fn identical_requests_yield_identical_results() {
    let body = json!([{"id": "7", "label": "Sports", "slug": "sports"}]);
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::OK, body.clone()),
        MockResponse::json(StatusCode::OK, body),
    ])
    .await;
    let client = server.client();
    let params = QueryParams::new().with("limit", 10).with("offset", None::<u32>);

    let first = client
        .gamma()
        .http()
        .get("/tags", params.clone())
        .await
        .expect("first must succeed");
    let second = client
        .gamma()
        .http()
        .get("/tags", params)
        .await
        .expect("second must succeed");

    assert_eq!(first, second);
    let requests = server.requests();
    assert_eq!(requests[0].query, requests[1].query);
    assert_eq!(requests[0].query, pairs(&[("limit", "10")]));
}
