//! # リポジトリ
//!
//! Todo コレクションの保管を担当する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: API 層は [`TodoRepository`] トレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由で呼び出し回数を数えるフェイク等に差し替え可能

pub mod todo_repository;

pub use todo_repository::{InMemoryTodoRepository, TodoRepository};
