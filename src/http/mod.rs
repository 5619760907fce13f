use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{net::TcpListener, sync::watch};

use crate::{
    log,
    state::{MessageKey, MessageStore, StoreError},
};

/// Everything the handlers need. Built once in `main` and moved into the router.
#[derive(Clone)]
pub struct AppContext {
    pub store: MessageStore,
}

impl AppContext {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        };
        println!("{} {} {}", log::WARN, status, self);
        (status, self.to_string()).into_response()
    }
}

#[derive(Deserialize, Debug)]
pub struct MessagePayload {
    pub header: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ListedMessage {
    pub key: MessageKey,
    pub header: String,
    pub body: String,
}

pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/add", post(add_message))
        .route("/replace/:key", post(replace_message))
        .route("/delete/:key", get(delete_message).delete(delete_message))
        .route("/list", get(list_messages))
        .with_state(context)
}

/// Serves the control API until `shutdown` flips to `true`.
pub async fn serve(
    listener: TcpListener,
    context: AppContext,
    mut shutdown: watch::Receiver<bool>,
) -> std::io::Result<()> {
    println!("{} Listening on {}", log::HTTP, listener.local_addr()?);

    axum::serve(listener, router(context))
        .with_graceful_shutdown(async move {
            // A dropped sender also means shut down.
            let _ = shutdown.wait_for(|stop| *stop).await;
        })
        .await
}

async fn add_message(
    State(context): State<AppContext>,
    Json(payload): Json<MessagePayload>,
) -> String {
    let key = context.store.add(payload.header, payload.body).await;
    println!(
        "{} POST /add -> {} ({} stored)",
        log::HTTP,
        key,
        context.store.len().await
    );
    key.to_string()
}

async fn replace_message(
    State(context): State<AppContext>,
    Path(key): Path<String>,
    Json(payload): Json<MessagePayload>,
) -> Result<&'static str, ApiError> {
    println!("{} POST /replace/{}", log::HTTP, key);
    context
        .store
        .replace(&MessageKey::from(key), payload.header, payload.body)
        .await?;
    Ok("OK")
}

async fn delete_message(
    State(context): State<AppContext>,
    Path(key): Path<String>,
) -> Result<&'static str, ApiError> {
    println!("{} DELETE /delete/{}", log::HTTP, key);
    context.store.delete(&MessageKey::from(key)).await?;
    Ok("OK")
}

async fn list_messages(State(context): State<AppContext>) -> Json<Vec<ListedMessage>> {
    let listed = context
        .store
        .snapshot()
        .await
        .into_iter()
        .map(|(key, message)| ListedMessage {
            key,
            header: message.header,
            body: message.body,
        })
        .collect();
    Json(listed)
}
