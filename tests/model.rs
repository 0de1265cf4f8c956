//! The reqwest model against a local server that records what it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use readable::environment::mock::{make_comment, make_post};
use readable::{Api, ApiError, Model, Vote};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct Received {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: String,
}

impl Received {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Default)]
struct Server {
    responses: HashMap<(Method, String), (StatusCode, String)>,
    received: Mutex<Vec<Received>>,
}

async fn respond(
    State(server): State<Arc<Server>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let path = uri.path().to_string();
    server.received.lock().unwrap().push(Received {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });
    server
        .responses
        .get(&(method, path))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "{}".to_string()))
}

async fn serve(responses: Vec<(Method, &str, StatusCode, Value)>) -> (Model, Arc<Server>) {
    let server = Arc::new(Server {
        responses: responses
            .into_iter()
            .map(|(method, path, status, body)| {
                ((method, path.to_string()), (status, body.to_string()))
            })
            .collect(),
        ..Default::default()
    });
    let app = Router::new().fallback(respond).with_state(server.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let model = Model::new(&format!("http://{address}"), "abc12345".to_string()).unwrap();
    (model, server)
}

fn last(server: &Server) -> Received {
    server.received.lock().unwrap().last().cloned().unwrap()
}

#[tokio::test]
async fn categories_come_wrapped() {
    let (model, server) = serve(vec![(
        Method::GET,
        "/categories",
        StatusCode::OK,
        json!({"categories": [{"name": "react", "path": "react"}]}),
    )])
    .await;

    let categories = model.categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "react");

    let request = last(&server);
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("authorization"), Some("abc12345"));
    assert_eq!(request.header("content-type"), None);
}

#[tokio::test]
async fn votes_send_the_option() {
    let mut voted = make_post("p1", "react");
    voted.vote_score = 2;
    let (model, server) = serve(vec![(
        Method::POST,
        "/posts/p1",
        StatusCode::OK,
        serde_json::to_value(&voted).unwrap(),
    )])
    .await;

    let post = model.vote_post("p1", Vote::UpVote).await.unwrap();
    assert_eq!(post, voted);

    let request = last(&server);
    assert_eq!(request.json(), json!({"option": "upVote"}));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("authorization"), Some("abc12345"));
}

#[tokio::test]
async fn updates_send_only_the_editable_fields() {
    let post = make_post("p1", "react");
    let comment = make_comment("c1", "p1");
    let (model, server) = serve(vec![
        (
            Method::PUT,
            "/posts/p1",
            StatusCode::OK,
            serde_json::to_value(&post).unwrap(),
        ),
        (
            Method::PUT,
            "/comments/c1",
            StatusCode::OK,
            serde_json::to_value(&comment).unwrap(),
        ),
    ])
    .await;

    model.update_post("p1", "Title", "Body").await.unwrap();
    assert_eq!(last(&server).json(), json!({"title": "Title", "body": "Body"}));

    model.update_comment("c1", 42, "Body").await.unwrap();
    assert_eq!(last(&server).json(), json!({"timestamp": 42, "body": "Body"}));
}

#[tokio::test]
async fn deletes_return_the_marked_entity() {
    let mut deleted = make_comment("c1", "p1");
    deleted.deleted = true;
    let (model, server) = serve(vec![(
        Method::DELETE,
        "/comments/c1",
        StatusCode::OK,
        serde_json::to_value(&deleted).unwrap(),
    )])
    .await;

    let comment = model.delete_comment("c1").await.unwrap();
    assert!(comment.deleted);
    let request = last(&server);
    assert_eq!(request.method, Method::DELETE);
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn comments_of_a_post() {
    let (model, server) = serve(vec![(
        Method::GET,
        "/posts/p1/comments",
        StatusCode::OK,
        json!([make_comment("c1", "p1"), make_comment("c2", "p1")]),
    )])
    .await;

    let comments = model.comments("p1").await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(last(&server).path, "/posts/p1/comments");
}

#[tokio::test]
async fn failing_status_is_reported() {
    let (model, _server) = serve(vec![(
        Method::GET,
        "/posts",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "boom"}),
    )])
    .await;

    let error = model.posts().await.unwrap_err();
    assert!(matches!(
        error,
        ApiError::Status {
            call: "posts",
            status: 500
        }
    ));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let (model, _server) = serve(vec![(
        Method::GET,
        "/posts",
        StatusCode::OK,
        json!({"not": "a list"}),
    )])
    .await;

    let error = model.posts().await.unwrap_err();
    assert!(matches!(error, ApiError::Decode { call: "posts", .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let model = Model::new(&format!("http://{address}"), "abc12345".to_string()).unwrap();
    let error = model.categories().await.unwrap_err();
    assert!(matches!(error, ApiError::Transport { .. }));
    assert_eq!(error.call(), "categories");
}
