//! # Tasklist API サーバー
//!
//! Todo API と SPA 配信を 1 プロセスで提供する。
//!
//! ## 環境変数
//!
//! `.env` ファイルがあれば読み込む。一覧は [`tasklist_api::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p tasklist-api
//!
//! # 本番環境（環境変数を直接指定）
//! AUTH0_DOMAIN=tenant.auth0.com AUTH0_API_IDENTIFIER=https://api.example.com \
//!   cargo run -p tasklist-api --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use tasklist_api::{build_app, config::ApiConfig};
use tasklist_infra::{InMemoryTodoRepository, JwksTokenValidator};
use tasklist_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ストアとトークン検証器の作成
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
   dotenvy::dotenv().ok();

   init_tracing(TracingConfig::from_env("tasklist-api"));
   let _tracing_guard = tracing::info_span!("app", service = "tasklist-api").entered();

   let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Tasklist API を起動します: {} (asset_root = {})",
      config.bind_address(),
      config.asset_root.display()
   );

   let repository = Arc::new(InMemoryTodoRepository::new());
   let token_validator = Arc::new(
      JwksTokenValidator::new(
         &config.auth0_domain,
         &config.auth0_api_identifier,
         config.jwks_cache_ttl,
      )
      .context("JWKS クライアントの作成に失敗しました")?,
   );
   tracing::info!(jwks_url = %token_validator.jwks_url(), "トークン検証器を作成しました");

   let app = build_app(repository, token_validator, config.asset_root.clone());

   let listener = TcpListener::bind(config.bind_address())
      .await
      .with_context(|| format!("{} にバインドできません", config.bind_address()))?;
   tracing::info!("Tasklist API が起動しました: {}", listener.local_addr()?);

   axum::serve(listener, app).await?;

   Ok(())
}
