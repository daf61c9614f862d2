//! # Todo
//!
//! タスクリストの唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! ```text
//! 追加（id 採番, complete = false）
//!   ↓ 完了（complete = true、何度呼んでも同じ）
//! 削除（コレクションから除去）
//! ```
//!
//! `message` は作成時に決まり、以後変更されない。
//! 完了状態を未完了に戻す操作は存在しない。
//!
//! ## 設計判断
//!
//! ### `TodoId` は文字列の Newtype
//!
//! 採番は UUID v7 で行うが、外部から受け取る ID は任意の文字列として扱う。
//! パスパラメータ等で UUID として解釈できない値が来ても、
//! 「該当なし」として扱えるようにするため。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo の一意識別子
///
/// ストアの生存期間内で一意。生成後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(String);

impl TodoId {
   /// 新しい ID を生成する（UUID v7）
   pub fn new() -> Self {
      Self(Uuid::now_v7().to_string())
   }

   /// 外部から受け取った文字列から ID を作成する
   ///
   /// # 例
   ///
   /// ```rust
   /// use tasklist_domain::todo::TodoId;
   ///
   /// let id = TodoId::from_string("nonexistent");
   /// assert_eq!(id.as_str(), "nonexistent");
   /// ```
   pub fn from_string(s: impl Into<String>) -> Self {
      Self(s.into())
   }

   /// 内部の文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl Default for TodoId {
   fn default() -> Self {
      Self::new()
   }
}

/// Todo エンティティ
///
/// ストアがコレクションを排他的に所有し、呼び出し側には常に複製を渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
   id:       TodoId,
   message:  String,
   complete: bool,
}

impl Todo {
   /// 新しい未完了の Todo を作成する
   ///
   /// ID はここで採番される。
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         id:       TodoId::new(),
         message:  message.into(),
         complete: false,
      }
   }

   /// 既存の値から Todo を復元する
   pub fn from_parts(id: TodoId, message: String, complete: bool) -> Self {
      Self {
         id,
         message,
         complete,
      }
   }

   pub fn id(&self) -> &TodoId {
      &self.id
   }

   pub fn message(&self) -> &str {
      &self.message
   }

   pub fn is_complete(&self) -> bool {
      self.complete
   }

   /// 完了済みにする
   ///
   /// すでに完了済みの場合は何もしない。
   pub fn mark_complete(&mut self) {
      self.complete = true;
   }
}
