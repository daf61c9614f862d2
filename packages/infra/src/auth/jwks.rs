//! # JWKS によるトークン検証
//!
//! ID プロバイダが公開する JSON Web Key Set で RS256 署名を検証する。
//!
//! ## 鍵セットのキャッシュ
//!
//! ```text
//! キャッシュなし / TTL 切れ ──▶ 取得してキャッシュ
//! kid がキャッシュにない
//!   ├─ 取得から MIN_REFRESH_INTERVAL 未満 ──▶ UnknownKeyId
//!   └─ それ以外 ──▶ 1 回だけ取り直す（鍵ローテーション対応）
//! ```
//!
//! 取得には HTTP 呼び出しを伴うため、キャッシュは `tokio::sync::RwLock` で保持する。
//! 取り直しは書き込みロック内で行い、同時に来たリクエストは 1 回の取得を共有する。

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
   Algorithm,
   DecodingKey,
   Validation,
   decode,
   decode_header,
   jwk::JwkSet,
};
use tokio::sync::RwLock;

use super::{AuthError, Claims, TokenValidator};

/// 鍵セット取得のタイムアウト
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// 未知の kid による再取得の最小間隔
///
/// 不正な kid を付けたリクエストで ID プロバイダへの取得が連発しないようにする。
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

struct CachedKeySet {
   keys:       JwkSet,
   fetched_at: Instant,
}

/// JWKS トークン検証の実装
pub struct JwksTokenValidator {
   http_client: reqwest::Client,
   jwks_url:    String,
   validation:  Validation,
   cache_ttl:   Duration,
   cache:       RwLock<Option<CachedKeySet>>,
}

impl JwksTokenValidator {
   /// ID プロバイダのドメインから検証器を作成する
   ///
   /// - 鍵セット: `https://{domain}/.well-known/jwks.json`
   /// - 発行者: `https://{domain}/`
   /// - 対象者: `audience`（API 識別子）
   pub fn new(domain: &str, audience: &str, cache_ttl: Duration) -> Result<Self, reqwest::Error> {
      let domain = domain.trim_end_matches('/');
      Self::with_endpoints(
         &format!("https://{domain}/.well-known/jwks.json"),
         &format!("https://{domain}/"),
         audience,
         cache_ttl,
      )
   }

   /// 鍵セットの URL と発行者を個別に指定して作成する
   pub fn with_endpoints(
      jwks_url: &str,
      issuer: &str,
      audience: &str,
      cache_ttl: Duration,
   ) -> Result<Self, reqwest::Error> {
      let http_client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

      let mut validation = Validation::new(Algorithm::RS256);
      validation.set_issuer(&[issuer]);
      validation.set_audience(&[audience]);
      validation.set_required_spec_claims(&["exp", "iss", "aud"]);

      Ok(Self {
         http_client,
         jwks_url: jwks_url.to_string(),
         validation,
         cache_ttl,
         cache: RwLock::new(None),
      })
   }

   pub fn jwks_url(&self) -> &str {
      &self.jwks_url
   }

   /// kid に対応する検証鍵を取得する
   ///
   /// 取得は書き込みロックを保持したまま行い、待っていた側はロック取得後に
   /// キャッシュを見直す。同時に TTL 切れを検知しても取得は 1 回で済む。
   async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
      {
         let cache = self.cache.read().await;
         if let Some(key) = self.cached_decoding_key(cache.as_ref(), kid)? {
            return Ok(key);
         }
      }

      let mut cache = self.cache.write().await;
      if let Some(key) = self.cached_decoding_key(cache.as_ref(), kid)? {
         return Ok(key);
      }

      let keys = self.fetch_key_set().await?;
      let key = find_decoding_key(&keys, kid)?;
      *cache = Some(CachedKeySet {
         keys,
         fetched_at: Instant::now(),
      });

      key.ok_or_else(|| AuthError::UnknownKeyId(kid.to_string()))
   }

   /// キャッシュだけで結論が出れば返す。`Ok(None)` は取り直しが必要なことを表す
   fn cached_decoding_key(
      &self,
      cached: Option<&CachedKeySet>,
      kid: &str,
   ) -> Result<Option<DecodingKey>, AuthError> {
      let Some(cached) = cached else {
         return Ok(None);
      };
      let age = cached.fetched_at.elapsed();
      if age >= self.cache_ttl {
         return Ok(None);
      }
      if let Some(key) = find_decoding_key(&cached.keys, kid)? {
         return Ok(Some(key));
      }
      if age < MIN_REFRESH_INTERVAL {
         return Err(AuthError::UnknownKeyId(kid.to_string()));
      }
      Ok(None)
   }

   async fn fetch_key_set(&self) -> Result<JwkSet, AuthError> {
      tracing::info!(url = %self.jwks_url, "JWKS を取得します");

      let response = self
         .http_client
         .get(&self.jwks_url)
         .send()
         .await
         .and_then(reqwest::Response::error_for_status)
         .map_err(AuthError::KeySetFetch)?;

      let keys = response
         .json::<JwkSet>()
         .await
         .map_err(AuthError::KeySetFetch)?;

      tracing::debug!(key_count = keys.keys.len(), "JWKS を取得しました");
      Ok(keys)
   }

   #[cfg(test)]
   async fn seed_cache(&self, keys: JwkSet, fetched_at: Instant) {
      *self.cache.write().await = Some(CachedKeySet { keys, fetched_at });
   }
}

fn find_decoding_key(keys: &JwkSet, kid: &str) -> Result<Option<DecodingKey>, AuthError> {
   keys
      .find(kid)
      .map(|jwk| DecodingKey::from_jwk(jwk).map_err(AuthError::InvalidKey))
      .transpose()
}

#[async_trait]
impl TokenValidator for JwksTokenValidator {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn validate(&self, token: &str) -> Result<Claims, AuthError> {
      let header = decode_header(token).map_err(AuthError::MalformedToken)?;
      let kid = header.kid.ok_or(AuthError::MissingKeyId)?;

      let key = self.decoding_key(&kid).await?;
      let data = decode::<Claims>(token, &key, &self.validation).map_err(AuthError::InvalidToken)?;

      Ok(data.claims)
   }
}
