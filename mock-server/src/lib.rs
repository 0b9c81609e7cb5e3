use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentFields {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Store {
    comments: BTreeMap<u64, Comment>,
    next_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/comments", get(list_comments))
        .route("/comment", post(create_comment))
        .route("/comment/{id}", put(update_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Wrap `data` in the `{status, data}` envelope every endpoint returns.
fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "status": "Success", "data": data }))
}

async fn list_comments(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    let comments: Vec<&Comment> = store.comments.values().collect();
    envelope(json!(comments))
}

// The create endpoint takes multipart form fields; update takes a
// URL-encoded body. The client preserves this asymmetry, so the mock
// enforces it.
async fn create_comment(
    State(db): State<Db>,
    mut multipart: Multipart,
) -> Result<Json<Value>, StatusCode> {
    let mut name = None;
    let mut text = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let field_name = field.name().map(str::to_string);
        let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        match field_name.as_deref() {
            Some("name") => name = Some(value),
            Some("text") => text = Some(value),
            _ => {}
        }
    }
    let (name, text) = match (name, text) {
        (Some(name), Some(text)) => (name, text),
        _ => return Err(StatusCode::BAD_REQUEST),
    };

    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let comment = Comment { id, name, text };
    store.comments.insert(id, comment.clone());
    Ok(envelope(json!(comment)))
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Form(input): Form<CommentFields>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let comment = store.comments.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    comment.name = input.name;
    comment.text = input.text;
    let updated = comment.clone();
    Ok(envelope(json!(updated)))
}
