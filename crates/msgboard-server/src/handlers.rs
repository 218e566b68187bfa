//! HTTP endpoint handlers for the message board.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | any | `/` | Cached index page |
//! | any | `/style1.css` | Cached stylesheet |
//! | any | `/favicon.ico` | Cached icon |
//! | any | `/messages` | Encoded message snapshot |
//! | any | `/new` | Append `sender`/`msg`, then return the snapshot |
//! | any | anything else | 299 "Disappointed" page |

use std::sync::Arc;

use axum::Form;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of the fallback response.
pub const NOT_FOUND_BODY: &str = "<h2>HTTP 299 Disappointed:</h2> <br/>The server has accepted your request but thinks you can do better";

/// Status code of the fallback response.
const NOT_FOUND_STATUS: u16 = 299;

// ---------------------------------------------------------------------------
// Parameter structs
// ---------------------------------------------------------------------------

/// Parameters for `/new`.
///
/// Read from the query string on every method and from a urlencoded body
/// when one is sent; body fields take priority. Missing fields are empty.
#[derive(Debug, Default, serde::Deserialize)]
pub struct NewMessageParams {
    /// Sender name, optionally wrapped in double quotes.
    pub sender: Option<String>,
    /// Message body, optionally wrapped in double quotes.
    pub msg: Option<String>,
}

impl NewMessageParams {
    /// Fill fields missing from `self` with those of `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            sender: self.sender.or(fallback.sender),
            msg: self.msg.or(fallback.msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Static assets
// ---------------------------------------------------------------------------

/// Serve the cached index page.
pub async fn serve_root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Html(state.assets.index())
}

/// Serve the cached stylesheet.
pub async fn serve_style(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], state.assets.style())
}

/// Serve the cached favicon.
pub async fn serve_favicon(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], state.assets.favicon())
}

// ---------------------------------------------------------------------------
// Message API
// ---------------------------------------------------------------------------

/// Return the encoded snapshot of all live messages.
pub async fn list_messages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    plain_text(state.render().await)
}

/// Append a message and return the full encoded snapshot.
///
/// Each parameter has one pair of surrounding double quotes removed when
/// present; clients send `JSON.stringify`-ed values.
pub async fn new_message(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NewMessageParams>, QueryRejection>,
    form: Result<Form<NewMessageParams>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let body = match form {
        Ok(Form(body)) => body,
        // no urlencoded body: the query string alone carries the fields
        Err(FormRejection::InvalidFormContentType(_)) => NewMessageParams::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let params = body.or(query);
    let sender = params.sender.unwrap_or_default();
    let msg = params.msg.unwrap_or_default();

    info!(sender = %sender, msg = %msg, "new message");

    let body = state.post(strip_quotes(&sender), strip_quotes(&msg)).await;
    Ok(plain_text(body))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Answer unknown paths with status 299 and a short HTML note.
pub async fn not_found() -> impl IntoResponse {
    let status = StatusCode::from_u16(NOT_FOUND_STATUS).unwrap_or(StatusCode::NOT_FOUND);
    (status, Html(NOT_FOUND_BODY))
}

/// Remove one leading and one trailing `"` when both are present.
pub fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

fn plain_text(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], body)
}
