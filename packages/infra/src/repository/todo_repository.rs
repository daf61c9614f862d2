//! # TodoRepository
//!
//! Todo コレクションのスレッドセーフな CRUD を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一の RwLock**: 一覧取得は共有ロック、追加・削除・完了は排他ロック
//! - **検索と変更は同一クリティカルセクション**: 位置の検索と変更の間でロックを
//!   解放しない。解放すると並行削除で位置がずれ、別の要素を消してしまう
//! - **挿入順を保持**: コレクションは `Vec` で持ち、一覧は追加順で返す
//! - **複製のみを返す**: 呼び出し側はストア内部の要素への参照を持たない
//!
//! 検索は索引なしの線形走査（O(n)）。

use parking_lot::RwLock;
use tasklist_domain::{
   DomainError,
   todo::{Todo, TodoId},
};

/// Todo リポジトリトレイト
///
/// すべての操作は同期的で、ロック待ち以外でブロックしない。
pub trait TodoRepository: Send + Sync {
   /// 全件のスナップショットを追加順で取得する
   fn list(&self) -> Vec<Todo>;

   /// 未完了の Todo を追加し、採番した ID を返す
   fn add(&self, message: String) -> TodoId;

   /// 指定 ID の Todo を削除する
   ///
   /// 存在しない場合は [`DomainError::NotFound`]。
   fn delete(&self, id: &TodoId) -> Result<(), DomainError>;

   /// 指定 ID の Todo を完了済みにする（冪等）
   ///
   /// 存在しない場合は [`DomainError::NotFound`]。
   fn complete(&self, id: &TodoId) -> Result<(), DomainError>;
}

/// インメモリ実装
///
/// プロセス起動時に 1 つだけ作成し、`Arc` で各ハンドラに渡す。
/// 再起動で内容は失われる。
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
   todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }
}

/// 線形走査で最初に一致した位置を返す
fn find_position(todos: &[Todo], id: &TodoId) -> Result<usize, DomainError> {
   todos
      .iter()
      .position(|todo| todo.id() == id)
      .ok_or_else(|| DomainError::NotFound {
         entity_type: "Todo",
         id:          id.to_string(),
      })
}

impl TodoRepository for InMemoryTodoRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   fn list(&self) -> Vec<Todo> {
      self.todos.read().clone()
   }

   #[tracing::instrument(skip_all, level = "debug")]
   fn add(&self, message: String) -> TodoId {
      let todo = Todo::new(message);
      let id = todo.id().clone();

      self.todos.write().push(todo);

      id
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   fn delete(&self, id: &TodoId) -> Result<(), DomainError> {
      let mut todos = self.todos.write();
      let position = find_position(&todos, id)?;
      todos.remove(position);
      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   fn complete(&self, id: &TodoId) -> Result<(), DomainError> {
      let mut todos = self.todos.write();
      let position = find_position(&todos, id)?;
      todos[position].mark_complete();
      Ok(())
   }
}
