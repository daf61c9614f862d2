//! # Tasklist ドメイン層
//!
//! Todo リストの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 識別子そのもの（[`todo::TodoId`]）
//! - **ドメインエラー**: 参照先が存在しない等の例外状態（[`DomainError`]）
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア、外部サービス）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use tasklist_domain::{DomainError, todo::Todo};
//!
//! let todo = Todo::new("牛乳を買う");
//! assert!(!todo.is_complete());
//!
//! let error = DomainError::NotFound {
//!     entity_type: "Todo",
//!     id:          todo.id().to_string(),
//! };
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
