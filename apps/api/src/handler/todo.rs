//! # Todo API ハンドラ
//!
//! Todo リストの CRUD エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /todo` - 一覧（追加順）
//! - `POST /todo` - 追加
//! - `PUT /todo` - 完了
//! - `DELETE /todo/{id}` - 削除
//!
//! 認証はルーター側のミドルウェアで済んでいる前提。
//!
//! ## リクエストボディ
//!
//! `Content-Type` に関わらず JSON として解釈する。
//! 読み込みに失敗した場合は 500、JSON として解釈できない場合は 400。
//! 欠けているフィールドと `null` は空文字列として扱う（型が違う場合は 400）。

use std::sync::Arc;

use axum::{
   Json,
   body::Bytes,
   extract::{Path, State, rejection::BytesRejection},
   http::StatusCode,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tasklist_domain::todo::{Todo, TodoId};
use tasklist_infra::TodoRepository;

use crate::error::ApiError;

/// Todo API の共有状態
pub struct TodoState {
   pub repository: Arc<dyn TodoRepository>,
}

// --- リクエスト型 ---

/// Todo 追加リクエスト
#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
   pub message: Option<String>,
}

/// Todo 完了リクエスト
///
/// SPA は Todo 全体を送ってくるため `message` と `complete` も受け付けるが、
/// 使うのは `id` のみ。
#[derive(Debug, Deserialize)]
pub struct CompleteTodoRequest {
   pub id:       Option<String>,
   pub message:  Option<String>,
   pub complete: Option<bool>,
}

// --- レスポンス型 ---

/// Todo データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoData {
   pub id:       String,
   pub message:  String,
   pub complete: bool,
}

impl From<Todo> for TodoData {
   fn from(todo: Todo) -> Self {
      Self {
         id:       todo.id().to_string(),
         message:  todo.message().to_string(),
         complete: todo.is_complete(),
      }
   }
}

/// Todo 追加レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTodoResponse {
   pub id: String,
}

// --- ハンドラ ---

/// GET /todo
///
/// 全件を追加順で返す。空の場合は `[]`。
#[tracing::instrument(skip_all)]
pub async fn list_todos(State(state): State<Arc<TodoState>>) -> Json<Vec<TodoData>> {
   let items = state
      .repository
      .list()
      .into_iter()
      .map(TodoData::from)
      .collect();

   Json(items)
}

/// POST /todo
///
/// 未完了の Todo を追加し、採番した ID を返す。
#[tracing::instrument(skip_all)]
pub async fn add_todo(
   State(state): State<Arc<TodoState>>,
   body: Result<Bytes, BytesRejection>,
) -> Result<Json<AddTodoResponse>, ApiError> {
   let req: AddTodoRequest = decode_body(body)?;

   let id = state.repository.add(req.message.unwrap_or_default());
   tracing::info!(todo_id = %id, "Todo を追加しました");

   Ok(Json(AddTodoResponse { id: id.to_string() }))
}

/// DELETE /todo/{id}
///
/// 成功時は空ボディの 200。
#[tracing::instrument(skip_all)]
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
   let id = TodoId::from_string(id);

   state.repository.delete(&id)?;
   tracing::info!(todo_id = %id, "Todo を削除しました");

   Ok(StatusCode::OK)
}

/// PUT /todo
///
/// ボディの `id` の Todo を完了済みにする。成功時は空ボディの 200。
#[tracing::instrument(skip_all)]
pub async fn complete_todo(
   State(state): State<Arc<TodoState>>,
   body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, ApiError> {
   let req: CompleteTodoRequest = decode_body(body)?;
   let id = TodoId::from_string(req.id.unwrap_or_default());

   state.repository.complete(&id)?;
   tracing::info!(todo_id = %id, "Todo を完了にしました");

   Ok(StatusCode::OK)
}

/// リクエストボディを JSON として解釈する
fn decode_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
   let bytes = body
      .map_err(|e| anyhow::Error::new(e).context("リクエストボディの読み込みに失敗しました"))?;

   serde_json::from_slice(&bytes).map_err(|e| {
      tracing::debug!(error = %e, "リクエストボディを解釈できません");
      ApiError::BadRequest(e.to_string())
   })
}
