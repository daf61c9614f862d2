//! # アプリケーション構築
//!
//! State の組み立てとルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::{path::PathBuf, sync::Arc};

use axum::{
   Router,
   middleware::{from_fn, from_fn_with_state},
   routing::{delete, get},
};
use tasklist_infra::{TodoRepository, TokenValidator};
use tasklist_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   asset::{AssetState, serve_asset},
   handler::{TodoState, add_todo, complete_todo, delete_todo, health_check, list_todos},
   middleware::{AuthState, no_cache, require_bearer_token},
};

/// ルーターを構築する
///
/// 依存はすべて引数で受け取る。テストではフェイク実装を渡す。
pub fn build_app(
   repository: Arc<dyn TodoRepository>,
   token_validator: Arc<dyn TokenValidator>,
   asset_root: impl Into<PathBuf>,
) -> Router {
   let todo_state = Arc::new(TodoState { repository });
   let auth_state = AuthState { token_validator };
   let asset_state = Arc::new(AssetState::new(asset_root));

   // 認証は /todo 配下のみ。route_layer なので未定義ルートには適用されない
   let todo_routes = Router::new()
      .route(
         "/todo",
         get(list_todos).post(add_todo).put(complete_todo),
      )
      .route("/todo/{id}", delete(delete_todo))
      .route_layer(from_fn_with_state(auth_state, require_bearer_token))
      .with_state(todo_state);

   // レイヤー順序が重要: 下に書いたものが外側
   // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
   // 2. TraceLayer: カスタムスパンに request_id を含める
   // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
   Router::new()
      .route("/health", get(health_check))
      .merge(todo_routes)
      // キャッシュ制御は API ルートのみ（フォールバックより前に適用する）
      .layer(from_fn(no_cache))
      .fallback(serve_asset)
      .with_state(asset_state)
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
