//! # Tasklist インフラ層
//!
//! ストアと外部システム（ID プロバイダ）との接続を担当する。
//!
//! ## 責務
//!
//! - **ストア**: Todo コレクションのスレッドセーフな CRUD（[`repository`]）
//! - **トークン検証**: ID プロバイダの JWKS によるベアラートークン検証（[`auth`]）
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! どちらもトレイト（[`TodoRepository`], [`TokenValidator`]）を境界とし、
//! API 層はトレイトオブジェクト経由でのみ利用する。テストでは差し替え可能。

pub mod auth;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use auth::{AuthError, Claims, JwksTokenValidator, TokenValidator};
pub use repository::{InMemoryTodoRepository, TodoRepository};
