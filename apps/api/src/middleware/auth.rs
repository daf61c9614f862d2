//! # 認証ミドルウェア
//!
//! `Authorization: Bearer <token>` を検証し、Todo API へのアクセスを制御する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = AuthState { token_validator };
//!
//! Router::new()
//!     .route("/todo", get(list_todos))
//!     .route_layer(from_fn_with_state(auth_state, require_bearer_token))
//! ```
//!
//! 検証に失敗した場合はハンドラを呼ばずに 401 を返す。失敗理由はログにのみ出力する。
//! 成功した場合は [`Claims`] をリクエストの extensions に格納する。

use std::sync::Arc;

use axum::{
   extract::{Request, State},
   http::{HeaderMap, header},
   middleware::Next,
   response::{IntoResponse, Response},
};
use tasklist_infra::{Claims, TokenValidator};

use crate::error::ApiError;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthState {
   pub token_validator: Arc<dyn TokenValidator>,
}

/// ベアラートークン認証ミドルウェア
pub async fn require_bearer_token(
   State(state): State<AuthState>,
   mut request: Request,
   next: Next,
) -> Response {
   let claims = match authenticate(state.token_validator.as_ref(), request.headers()).await {
      Ok(claims) => claims,
      Err(err) => return err.into_response(),
   };

   tracing::debug!(sub = %claims.sub, "トークンを検証しました");
   request.extensions_mut().insert(claims);

   next.run(request).await
}

async fn authenticate(
   token_validator: &dyn TokenValidator,
   headers: &HeaderMap,
) -> Result<Claims, ApiError> {
   let Some(token) = bearer_token(headers) else {
      tracing::warn!("Authorization ヘッダーにベアラートークンがありません");
      return Err(ApiError::Unauthorized);
   };

   token_validator.validate(token).await.map_err(|e| {
      tracing::warn!(error = %e, "トークンの検証に失敗しました");
      ApiError::Unauthorized
   })
}

/// `Authorization` ヘッダーからベアラートークンを取り出す
///
/// スキーム名の大文字小文字は区別しない。トークンが空の場合は `None`。
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
   let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
   let (scheme, token) = value.split_once(' ')?;
   let token = token.trim();

   (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
