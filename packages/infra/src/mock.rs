//! # テスト用モック
//!
//! API 層のテストで使用する差し替え実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! tasklist-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use tasklist_domain::{
   DomainError,
   todo::{Todo, TodoId},
};

use crate::{
   auth::{AuthError, Claims, TokenValidator},
   repository::{InMemoryTodoRepository, TodoRepository},
};

// ===== StubTokenValidator =====

/// 特定のトークン 1 つだけを有効とみなす検証器
///
/// それ以外のトークンは署名検証に失敗したものとして `InvalidToken` を返す。
pub struct StubTokenValidator {
   valid_token: String,
}

impl StubTokenValidator {
   pub fn new(valid_token: impl Into<String>) -> Self {
      Self {
         valid_token: valid_token.into(),
      }
   }

   /// 有効なトークンに対して返すクレーム
   pub fn claims() -> Claims {
      Claims {
         sub:   "auth0|test-user".to_string(),
         iss:   "https://tenant.example.com/".to_string(),
         exp:   u64::MAX,
         scope: None,
      }
   }
}

#[async_trait]
impl TokenValidator for StubTokenValidator {
   async fn validate(&self, token: &str) -> Result<Claims, AuthError> {
      if token == self.valid_token {
         Ok(Self::claims())
      } else {
         Err(AuthError::InvalidToken(ErrorKind::InvalidToken.into()))
      }
   }
}

// ===== CountingTodoRepository =====

/// 呼び出し回数を数えるリポジトリ
///
/// 実際の保存は [`InMemoryTodoRepository`] に委譲する。
#[derive(Debug, Default)]
pub struct CountingTodoRepository {
   inner: InMemoryTodoRepository,
   calls: AtomicUsize,
}

impl CountingTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// これまでに呼ばれた操作の合計回数
   pub fn call_count(&self) -> usize {
      self.calls.load(Ordering::SeqCst)
   }

   fn record(&self) {
      self.calls.fetch_add(1, Ordering::SeqCst);
   }
}

impl TodoRepository for CountingTodoRepository {
   fn list(&self) -> Vec<Todo> {
      self.record();
      self.inner.list()
   }

   fn add(&self, message: String) -> TodoId {
      self.record();
      self.inner.add(message)
   }

   fn delete(&self, id: &TodoId) -> Result<(), DomainError> {
      self.record();
      self.inner.delete(id)
   }

   fn complete(&self, id: &TodoId) -> Result<(), DomainError> {
      self.record();
      self.inner.complete(id)
   }
}
