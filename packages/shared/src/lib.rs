//! # Tasklist 共有ユーティリティ
//!
//! API サーバーとインフラ層から共通で使用されるユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API 側の責務）
//! - トレーシング関連の依存は `observability` feature の背後に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
