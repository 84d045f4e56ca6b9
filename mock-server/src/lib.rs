use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Items keyed by id, so listing is ordered by id.
pub type Db = Arc<RwLock<BTreeMap<String, Item>>>;

pub fn app() -> Router {
    app_with(Db::default())
}

/// Build the router over an existing store, for callers that want to seed or
/// inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/items", get(list_items).put(put_item))
        .route("/items/{id}", delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.values().cloned().collect())
}

async fn put_item(State(db): State<Db>, Json(item): Json<Item>) -> Json<Message> {
    let id = item.id.clone();
    let replaced = db.write().await.insert(id.clone(), item).is_some();
    tracing::info!(%id, replaced, "put item");
    Json(Message {
        message: format!("Put item {id}"),
    })
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Message>, StatusCode> {
    let mut items = db.write().await;
    if items.remove(&id).is_none() {
        tracing::info!(%id, "delete of unknown item");
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::info!(%id, "deleted item");
    Ok(Json(Message {
        message: format!("Deleted item {id}"),
    }))
}
