//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは HTTP とストアの変換のみを行う
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェックハンドラ
//!     └── todo.rs     # Todo API ハンドラ
//! ```

pub mod health;
pub mod todo;

pub use health::health_check;
pub use todo::{TodoState, add_todo, complete_todo, delete_todo, list_todos};
