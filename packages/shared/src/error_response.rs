//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスとの対応付けは API 側の `IntoResponse` 実装が持つ
//! - 形状は `{"error": "<message>"}` の 1 フィールドに固定する
//!   （フロントエンドが `error` キーだけを参照するため）

use serde::{Deserialize, Serialize};

/// 認証失敗時の固定メッセージ
///
/// 失敗理由（署名不一致、期限切れ、JWKS 取得失敗など）は呼び出し側に返さない。
pub const TOKEN_INVALID_MESSAGE: &str = "token is not valid";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         error: message.into(),
      }
   }

   /// 401 Unauthorized
   pub fn token_invalid() -> Self {
      Self::new(TOKEN_INVALID_MESSAGE)
   }

   /// 500 Internal Server Error
   ///
   /// メッセージは固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new("internal server error")
   }
}
