//! # 静的ファイル配信
//!
//! API ルートに一致しないリクエストに対して、ビルド済み SPA を返す。
//!
//! ## ルール
//!
//! | リクエストパス | 返すファイル |
//! |----------------|--------------|
//! | 最後のセグメントに `.` がない（`/`、`/todos/3` など） | `index.html` |
//! | それ以外（`/main.js`、`/assets/logo.png` など） | ルート配下の同じパス（なければ 404） |
//!
//! SPA のクライアントサイドルーティングに対応するため、拡張子のないパスは
//! すべてエントリドキュメントに寄せる。パストラバーサルの拒否は
//! `tower_http::services::ServeDir` に任せる。

use std::{
   convert::Infallible,
   path::PathBuf,
   sync::Arc,
};

use axum::{
   extract::{Request, State},
   response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

/// SPA のエントリドキュメント
pub const ENTRY_DOCUMENT: &str = "index.html";

/// 静的ファイル配信の状態
#[derive(Debug, Clone)]
pub struct AssetState {
   root: PathBuf,
}

impl AssetState {
   pub fn new(root: impl Into<PathBuf>) -> Self {
      Self { root: root.into() }
   }
}

/// フォールバックハンドラ
pub async fn serve_asset(State(state): State<Arc<AssetState>>, request: Request) -> Response {
   let result: Result<_, Infallible> = if serves_entry_document(request.uri().path()) {
      ServeFile::new(state.root.join(ENTRY_DOCUMENT))
         .oneshot(request)
         .await
   } else {
      ServeDir::new(&state.root).oneshot(request).await
   };

   match result {
      Ok(response) => response.into_response(),
      Err(infallible) => match infallible {},
   }
}

/// パスの最後のセグメントに拡張子がなければ `true`
pub fn serves_entry_document(path: &str) -> bool {
   let last_segment = path.rsplit('/').next().unwrap_or_default();
   !last_segment.contains('.')
}
