//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `NotFound` | 500 Internal Server Error | 指定 ID の Todo が存在しない |
//!
//! `NotFound` を 404 ではなく 500 に対応付けているのは、公開 API の
//! ステータスコード契約を維持するため。変換は API 層の責務。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// エンティティが見つからない
   ///
   /// 削除・完了などの操作対象 ID がストアに存在しない場合に使用する。
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（"Todo" など）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_not_found_のメッセージに種類と_idが含まれる() {
      let error = DomainError::NotFound {
         entity_type: "Todo",
         id:          "abc".to_string(),
      };

      assert_eq!(error.to_string(), "Todo が見つかりません: abc");
   }
}
