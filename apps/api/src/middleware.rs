//! # ミドルウェア
//!
//! API ルート用のミドルウェアを提供する。

mod auth;
mod cache_control;

pub use auth::{AuthState, bearer_token, require_bearer_token};
pub use cache_control::no_cache;
