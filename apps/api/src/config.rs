//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `AUTH0_DOMAIN` | **Yes** | - | ID プロバイダのドメイン |
//! | `AUTH0_API_IDENTIFIER` | **Yes** | - | トークンの対象者（API 識別子） |
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `3000` | ポート番号 |
//! | `ASSET_ROOT` | No | `./ui/dist/ui` | ビルド済み SPA のディレクトリ |
//! | `JWKS_CACHE_TTL_SECS` | No | `600` | JWKS キャッシュの有効期間（秒） |
//!
//! ログ出力形式（`LOG_FORMAT`）は `tasklist_shared::observability` が読む。

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSET_ROOT: &str = "./ui/dist/ui";
const DEFAULT_JWKS_CACHE_TTL_SECS: u64 = 600;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("環境変数 {0} が設定されていません")]
   Missing(&'static str),

   #[error("環境変数 {name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// API サーバーの設定
///
/// 起動時に一度だけ構築する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:                 String,
   /// ポート番号
   pub port:                 u16,
   /// ID プロバイダのドメイン（例: `tenant.auth0.com`）
   pub auth0_domain:         String,
   /// トークンの `aud` に期待する値
   pub auth0_api_identifier: String,
   /// 静的ファイルのルートディレクトリ
   pub asset_root:           PathBuf,
   pub jwks_cache_ttl:       Duration,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| std::env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 空文字列は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

      let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

      Ok(Self {
         host:                 get("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port:                 parse_or("API_PORT", get("API_PORT"), DEFAULT_PORT)?,
         auth0_domain:         required("AUTH0_DOMAIN")?,
         auth0_api_identifier: required("AUTH0_API_IDENTIFIER")?,
         asset_root:           get("ASSET_ROOT")
            .map_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT), PathBuf::from),
         jwks_cache_ttl:       Duration::from_secs(parse_or(
            "JWKS_CACHE_TTL_SECS",
            get("JWKS_CACHE_TTL_SECS"),
            DEFAULT_JWKS_CACHE_TTL_SECS,
         )?),
      })
   }

   /// `host:port` 形式のバインドアドレス
   pub fn bind_address(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}

fn parse_or<T: std::str::FromStr>(
   name: &'static str,
   value: Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      None => Ok(default),
      Some(value) => value
         .parse()
         .map_err(|_| ConfigError::Invalid { name, value }),
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
         .collect();
      ApiConfig::from_lookup(|name| vars.get(name).cloned())
   }

   const REQUIRED: [(&str, &str); 2] = [
      ("AUTH0_DOMAIN", "tenant.example.com"),
      ("AUTH0_API_IDENTIFIER", "https://api.example.com"),
   ];

   #[test]
   fn test_必須項目のみでデフォルト値が使われる() {
      let config = load(&REQUIRED).unwrap();

      assert_eq!(
         config,
         ApiConfig {
            host:                 "0.0.0.0".to_string(),
            port:                 3000,
            auth0_domain:         "tenant.example.com".to_string(),
            auth0_api_identifier: "https://api.example.com".to_string(),
            asset_root:           PathBuf::from("./ui/dist/ui"),
            jwks_cache_ttl:       Duration::from_secs(600),
         }
      );
      assert_eq!(config.bind_address(), "0.0.0.0:3000");
   }

   #[test]
   fn test_任意項目を上書きできる() {
      let mut vars = REQUIRED.to_vec();
      vars.extend([
         ("API_HOST", "127.0.0.1"),
         ("API_PORT", "8080"),
         ("ASSET_ROOT", "/srv/ui"),
         ("JWKS_CACHE_TTL_SECS", "30"),
      ]);

      let config = load(&vars).unwrap();

      assert_eq!(config.bind_address(), "127.0.0.1:8080");
      assert_eq!(config.asset_root, PathBuf::from("/srv/ui"));
      assert_eq!(config.jwks_cache_ttl, Duration::from_secs(30));
   }

   #[rstest]
   #[case::domain("AUTH0_DOMAIN", "AUTH0_API_IDENTIFIER")]
   #[case::identifier("AUTH0_API_IDENTIFIER", "AUTH0_DOMAIN")]
   fn test_必須項目がないとmissing(#[case] missing: &'static str, #[case] present: &str) {
      let result = load(&[(present, "value")]);

      assert_eq!(result, Err(ConfigError::Missing(missing)));
   }

   #[test]
   fn test_空文字列は未設定として扱う() {
      let result = load(&[("AUTH0_DOMAIN", ""), ("AUTH0_API_IDENTIFIER", "aud")]);

      assert_eq!(result, Err(ConfigError::Missing("AUTH0_DOMAIN")));
   }

   #[rstest]
   #[case::port_not_number("API_PORT", "abc")]
   #[case::port_out_of_range("API_PORT", "70000")]
   #[case::ttl_negative("JWKS_CACHE_TTL_SECS", "-1")]
   fn test_数値項目が不正ならinvalid(#[case] name: &'static str, #[case] value: &str) {
      let mut vars = REQUIRED.to_vec();
      vars.push((name, value));

      let result = load(&vars);

      assert_eq!(
         result,
         Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
         })
      );
   }
}
