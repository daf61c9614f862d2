//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//! 認証は不要。
//!
//! ```text
//! GET /health
//! {"status":"healthy","version":"0.1.0"}
//! ```

use axum::Json;
use tasklist_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// ストアや ID プロバイダの状態は確認せず、常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
