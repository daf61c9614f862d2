//! # トークン検証
//!
//! API リクエストのベアラートークンを検証するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `TokenValidator` trait で検証方法を抽象化
//! - **2 つの実装**: JWKS（本番用）、固定トークン（テスト用、`test-utils` feature）
//! - **失敗理由は呼び出し側に返すが、クライアントには返さない**: ミドルウェアは
//!   ログに記録したうえで一律 401 を返す

mod jwks;

use async_trait::async_trait;
pub use jwks::JwksTokenValidator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 検証済みトークンのクレーム
///
/// 署名・発行者・対象者・有効期限の検証を通過したものだけが作られる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
   /// トークンの主体（ID プロバイダのユーザー ID）
   pub sub:   String,
   pub iss:   String,
   /// 有効期限（UNIX 秒）
   pub exp:   u64,
   #[serde(default)]
   pub scope: Option<String>,
}

/// トークン検証エラー
#[derive(Debug, Error)]
pub enum AuthError {
   /// ヘッダー部が JWT として読めない
   #[error("トークンの形式が不正です: {0}")]
   MalformedToken(#[source] jsonwebtoken::errors::Error),

   #[error("トークンヘッダーに kid がありません")]
   MissingKeyId,

   /// 鍵セットを取り直しても kid に対応する鍵がない
   #[error("署名鍵が見つかりません: kid={0}")]
   UnknownKeyId(String),

   #[error("JWKS の取得に失敗しました: {0}")]
   KeySetFetch(#[source] reqwest::Error),

   /// 鍵セット内の鍵から検証鍵を作れない
   #[error("署名鍵が不正です: {0}")]
   InvalidKey(#[source] jsonwebtoken::errors::Error),

   /// 署名・発行者・対象者・有効期限のいずれかの検証に失敗
   #[error("トークンの検証に失敗しました: {0}")]
   InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// トークン検証トレイト
///
/// 認証ミドルウェアはこのトレイト経由でのみ検証を行う。
#[async_trait]
pub trait TokenValidator: Send + Sync {
   /// トークン文字列（`Bearer ` を除いた部分）を検証し、クレームを返す
   async fn validate(&self, token: &str) -> Result<Claims, AuthError>;
}
