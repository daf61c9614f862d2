//! # Tasklist API サーバー
//!
//! Todo リストの HTTP API と、ビルド済み SPA の配信を担当する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────┐     ┌─────────────┐
//! │   Browser   │────▶│       Tasklist API       │────▶│  ID Provider │
//! │    (SPA)    │     │       (port 3000)        │     │   (JWKS)    │
//! └─────────────┘     └──────────────────────────┘     └─────────────┘
//!                                  │
//!                                  ▼
//!                       InMemoryTodoRepository
//! ```
//!
//! - `/todo` 配下: ベアラートークン認証つきの Todo API
//! - `/health`: 認証なしのヘルスチェック
//! - それ以外: 静的ファイル（SPA）へのフォールバック
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の組み立てとルーター構築
//! - [`asset`] - 静的ファイル配信（SPA フォールバック）
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - 認証・キャッシュ制御ミドルウェア
//!
//! ## 依存関係
//!
//! - `tasklist_domain`: ドメインモデル、エラー定義
//! - `tasklist_infra`: ストア、トークン検証
//! - `tasklist_shared`: エラーレスポンス、Observability

pub mod app_builder;
pub mod asset;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;

pub use app_builder::build_app;
