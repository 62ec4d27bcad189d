//! Full client round trips against a local `tiny_http` stand-in for the
//! trivia service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use trivia_client::{ClientOptions, ErrorKind, QuestionQuery, TriviaClient, TriviaError};
use trivia_core::{AggregateEntry, Category, DashboardStatus};

type Route = (&'static str, u16, &'static str);

struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Serve canned bodies. The first route whose path prefix matches wins.
    fn start(routes: Vec<Route>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("mock server should bind");
        let addr = server.server_addr().to_ip().expect("Should be IP address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let url = request.url().to_string();
                log.lock().unwrap().push(url.clone());

                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _, _)| url.starts_with(prefix))
                    .map_or((404, "not found"), |(_, status, body)| (*status, *body));

                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    fn client(&self) -> TriviaClient {
        TriviaClient::with_options(ClientOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(5),
            ..ClientOptions::default()
        })
        .unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

const CATEGORIES: &str = r#"{"trivia_categories":[
    {"id":17,"name":"Science%20%26%20Nature"},
    {"id":23,"name":"History"}
]}"#;

const QUESTIONS: &str = r#"{"response_code":0,"results":[
    {"type":"multiple","difficulty":"easy","category":"Science%20%26%20Nature",
     "question":"What%20is%20H%E2%82%82O%3F","correct_answer":"Water",
     "incorrect_answers":["Salt","Sand","Air"]},
    {"type":"boolean","difficulty":"hard","category":"History",
     "question":"Rome%20fell%20in%20476.","correct_answer":"True",
     "incorrect_answers":["False"]},
    {"type":"multiple","difficulty":"medium","category":"Science%20%26%20Nature",
     "question":"Symbol%20for%20gold%3F","correct_answer":"Au",
     "incorrect_answers":["Ag","Gd","Go"]}
]}"#;

#[tokio::test]
async fn fetch_categories_decodes_names() {
    let server = MockServer::start(vec![("/api_category.php", 200, CATEGORIES)]);
    let categories = server.client().fetch_categories().await.unwrap();

    assert_eq!(
        categories,
        vec![
            Category::new(17, "Science & Nature"),
            Category::new(23, "History"),
        ]
    );
    assert_eq!(server.requests(), vec!["/api_category.php?encode=url3986"]);
}

#[tokio::test]
async fn fetch_questions_sends_filters() {
    let server = MockServer::start(vec![("/api.php", 200, QUESTIONS)]);
    let questions = server
        .client()
        .fetch_questions(3, Some(17), Some("tok"))
        .await
        .unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].question, "What is H₂O?");
    assert_eq!(
        server.requests(),
        vec!["/api.php?amount=3&encode=url3986&category=17&token=tok"]
    );
}

#[tokio::test]
async fn non_success_status_is_network_error() {
    let server = MockServer::start(vec![("/api_category.php", 500, "{}")]);
    let err = server.client().fetch_categories().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(matches!(err, TriviaError::Status { status: 500, .. }));
    assert!(err.to_string().starts_with("Failed to fetch categories"));
}

#[tokio::test]
async fn garbage_body_is_parse_error() {
    let server = MockServer::start(vec![("/api.php", 200, "<!doctype html>")]);
    let err = server.client().fetch_questions(1, None, None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn embedded_code_is_api_error() {
    let server = MockServer::start(vec![(
        "/api.php",
        200,
        r#"{"response_code":1,"results":[]}"#,
    )]);
    let err = server.client().fetch_questions(500, None, None).await.unwrap_err();

    assert!(matches!(err, TriviaError::Api { code: 1, .. }));
    assert!(err.to_string().contains("No results"));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let client = TriviaClient::with_options(ClientOptions {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(2),
        ..ClientOptions::default()
    })
    .unwrap();
    let err = client.fetch_categories().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn token_request_and_reset() {
    let server = MockServer::start(vec![
        (
            "/api_token.php?command=request",
            200,
            r#"{"response_code":0,"token":"abc123"}"#,
        ),
        (
            "/api_token.php?command=reset",
            200,
            r#"{"response_code":3,"token":""}"#,
        ),
    ]);
    let client = server.client();

    assert_eq!(client.get_session_token().await.unwrap(), "abc123");

    let err = client.reset_session_token("abc123").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to reset session token: Token not found: Session Token does not exist."
    );
    assert_eq!(
        server.requests(),
        vec![
            "/api_token.php?command=request",
            "/api_token.php?command=reset&token=abc123",
        ]
    );
}

#[tokio::test]
async fn dashboard_load_end_to_end() {
    let server = MockServer::start(vec![
        ("/api_category.php", 200, CATEGORIES),
        ("/api.php", 200, QUESTIONS),
    ]);
    let client = server.client();
    let mut dashboard = client.load_dashboard(&QuestionQuery::new(3)).await;

    let DashboardStatus::Ready(view) = dashboard.status() else {
        panic!("dashboard should be ready");
    };
    assert_eq!(
        view.category_aggregate,
        vec![
            AggregateEntry::new("Science & Nature", 2),
            AggregateEntry::new("History", 1),
        ]
    );

    dashboard.select_category_by_name("History").unwrap();
    let DashboardStatus::Ready(view) = dashboard.status() else {
        panic!("dashboard should stay ready after selection");
    };
    assert_eq!(view.category_aggregate, vec![AggregateEntry::new("History", 1)]);
    assert_eq!(view.difficulty_aggregate, vec![AggregateEntry::new("hard", 1)]);
}

#[tokio::test]
async fn dashboard_partial_failure_is_failed_status() {
    let server = MockServer::start(vec![
        ("/api_category.php", 200, CATEGORIES),
        ("/api.php", 503, ""),
    ]);
    let dashboard = server.client().load_dashboard(&QuestionQuery::default()).await;

    assert!(dashboard.categories().data().is_some());
    match dashboard.status() {
        DashboardStatus::Failed(message) => {
            assert!(message.starts_with("Failed to fetch questions"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
