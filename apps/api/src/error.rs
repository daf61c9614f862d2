//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError)
//!        ↓ From
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + {"error": "..."})
//! ```
//!
//! ## ステータスコード
//!
//! | ApiError | HTTP Status | ボディ |
//! |----------|-------------|--------|
//! | BadRequest | 400 | パースエラーの内容 |
//! | NotFound | 500 | 見つからなかった ID を含むメッセージ |
//! | Unauthorized | 401 | `token is not valid`（固定） |
//! | Internal | 500 | `internal server error`（固定） |
//!
//! `NotFound` が 500 なのは既存クライアントとの互換のため。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use tasklist_domain::DomainError;
use tasklist_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リクエストボディを解釈できない（400 Bad Request）
   #[error("リクエストボディが不正です: {0}")]
   BadRequest(String),

   /// 操作対象の Todo が存在しない（500 Internal Server Error）
   #[error("Todo が見つかりません: {0}")]
   NotFound(String),

   /// ベアラートークンがない、または検証に失敗した（401 Unauthorized）
   ///
   /// 失敗理由はミドルウェアでログに出力し、ここには持たない。
   #[error("認証エラー")]
   Unauthorized,

   /// 予期しないエラー（500 Internal Server Error）
   ///
   /// 詳細はサーバーサイドのログにのみ出力する。
   #[error("内部サーバーエラー")]
   Internal(#[from] anyhow::Error),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::NotFound { id, .. } => ApiError::NotFound(id),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, ErrorResponse::new(detail)),
         ApiError::NotFound(id) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(format!("could not find todo with id {id}")),
         ),
         ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, ErrorResponse::token_invalid()),
         ApiError::Internal(err) => {
            tracing::error!("内部エラー: {:?}", err);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use axum::body::to_bytes;
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   async fn into_parts(error: ApiError) -> (StatusCode, ErrorResponse) {
      let response = error.into_response();
      let status = response.status();
      let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
      (status, serde_json::from_slice(&bytes).unwrap())
   }

   #[rstest]
   #[case::bad_request(
      ApiError::BadRequest("expected value at line 1 column 1".to_string()),
      StatusCode::BAD_REQUEST,
      "expected value at line 1 column 1"
   )]
   #[case::not_found(
      ApiError::NotFound("abc".to_string()),
      StatusCode::INTERNAL_SERVER_ERROR,
      "could not find todo with id abc"
   )]
   #[case::unauthorized(ApiError::Unauthorized, StatusCode::UNAUTHORIZED, "token is not valid")]
   #[case::internal(
      ApiError::Internal(anyhow::anyhow!("connection reset")),
      StatusCode::INTERNAL_SERVER_ERROR,
      "internal server error"
   )]
   #[tokio::test]
   async fn test_ステータスとボディへの変換(
      #[case] error: ApiError,
      #[case] expected_status: StatusCode,
      #[case] expected_message: &str,
   ) {
      let (status, body) = into_parts(error).await;

      assert_eq!(status, expected_status);
      assert_eq!(body, ErrorResponse::new(expected_message));
   }

   #[test]
   fn test_domain_errorのnot_foundはidを引き継ぐ() {
      let error: ApiError = DomainError::NotFound {
         entity_type: "Todo",
         id:          "nonexistent".to_string(),
      }
      .into();

      assert!(matches!(error, ApiError::NotFound(id) if id == "nonexistent"));
   }
}
