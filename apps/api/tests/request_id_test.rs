//! # Request ID レイヤーのテスト
//!
//! `build_app` の Request ID レイヤー（SetRequestIdLayer + PropagateRequestIdLayer +
//! カスタム make_span_with）が正しく動作することを検証する。
//!
//! - レスポンスに `X-Request-Id` ヘッダーが含まれる（401 や静的ファイルでも）
//! - クライアント提供の `X-Request-Id` がそのまま返される
//! - 自動生成の `X-Request-Id` が UUID v7 形式である

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode};
use rstest::rstest;
use tasklist_api::build_app;
use tasklist_infra::{
   InMemoryTodoRepository,
   mock::StubTokenValidator,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// テスト用ルーターを構築する
///
/// 返した `TempDir` はテスト終了まで保持すること。
fn test_app() -> (Router, TempDir) {
   let assets = tempfile::tempdir().unwrap();
   std::fs::write(assets.path().join("index.html"), "<html></html>").unwrap();

   let router = build_app(
      Arc::new(InMemoryTodoRepository::new()),
      Arc::new(StubTokenValidator::new("valid-token")),
      assets.path(),
   );
   (router, assets)
}

#[rstest]
#[case::health("/health", StatusCode::OK)]
#[case::unauthorized_api("/todo", StatusCode::UNAUTHORIZED)]
#[case::static_fallback("/", StatusCode::OK)]
#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる(
   #[case] uri: &str,
   #[case] expected_status: StatusCode,
) {
   let (app, _assets) = test_app();

   let response = app
      .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
      .await
      .unwrap();

   assert_eq!(response.status(), expected_status);
   assert!(
      response.headers().contains_key("x-request-id"),
      "レスポンスに x-request-id ヘッダーが含まれること"
   );
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let (app, _assets) = test_app();
   let custom_id = "client-provided-request-id-123";

   let response = app
      .oneshot(
         Request::builder()
            .uri("/health")
            .header("x-request-id", custom_id)
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      response
         .headers()
         .get("x-request-id")
         .unwrap()
         .to_str()
         .unwrap(),
      custom_id,
      "クライアント提供の Request ID がそのまま返されること"
   );
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式である() {
   let (app, _assets) = test_app();

   let response = app
      .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
      .await
      .unwrap();

   let request_id = response
      .headers()
      .get("x-request-id")
      .unwrap()
      .to_str()
      .unwrap();

   let uuid = uuid::Uuid::parse_str(request_id)
      .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
   assert_eq!(
      uuid.get_version(),
      Some(uuid::Version::SortRand),
      "UUID v7（SortRand）であること"
   );
}
