//! 静的ファイル配信の統合テスト
//!
//! 一時ディレクトリに SPA のビルド成果物を模したファイルを置き、
//! API ルートに一致しないリクエストの振る舞いを検証する。
//!
//! ## テストケース
//!
//! - 拡張子のないパスは `index.html` を返す（認証不要）
//! - 拡張子のあるパスは同じパスのファイルを返す
//! - 存在しないファイルは 404
//! - ルート外へのパストラバーサルは配信されない

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tasklist_api::build_app;
use tasklist_infra::{InMemoryTodoRepository, mock::StubTokenValidator};
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><title>tasklist</title>";
const MAIN_JS: &str = "console.log('tasklist');";
const LOGO_SVG: &str = "<svg></svg>";

/// `root/ui` を配信ルートにしたアプリケーション
///
/// `root/secret.txt` はルート外のファイルとして置く。
struct TestApp {
   router: Router,
   _root:  TempDir,
}

impl TestApp {
   fn new() -> Self {
      let root = tempfile::tempdir().unwrap();
      let asset_root = root.path().join("ui");
      std::fs::create_dir_all(asset_root.join("assets")).unwrap();
      std::fs::write(asset_root.join("index.html"), INDEX_HTML).unwrap();
      std::fs::write(asset_root.join("main.js"), MAIN_JS).unwrap();
      std::fs::write(asset_root.join("assets").join("logo.svg"), LOGO_SVG).unwrap();
      std::fs::write(root.path().join("secret.txt"), "secret").unwrap();

      let router = build_app(
         Arc::new(InMemoryTodoRepository::new()),
         Arc::new(StubTokenValidator::new("valid-token")),
         asset_root,
      );

      Self {
         router,
         _root: root,
      }
   }

   async fn get(&self, uri: &str) -> (StatusCode, String) {
      let response = self
         .router
         .clone()
         .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
         .await
         .unwrap();
      let status = response.status();
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      (status, String::from_utf8_lossy(&body).into_owned())
   }
}

#[rstest]
#[case::root("/")]
#[case::client_route("/todos")]
#[case::nested_client_route("/todos/3/edit")]
#[case::with_query("/callback?code=abc&state=xyz")]
#[tokio::test]
async fn test_拡張子のないパスはindex_htmlを返す(#[case] uri: &str) {
   let app = TestApp::new();

   let (status, body) = app.get(uri).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, INDEX_HTML);
}

#[rstest]
#[case::top_level("/main.js", MAIN_JS)]
#[case::nested("/assets/logo.svg", LOGO_SVG)]
#[case::entry_document("/index.html", INDEX_HTML)]
#[tokio::test]
async fn test_拡張子のあるパスは同じパスのファイルを返す(
   #[case] uri: &str,
   #[case] expected_body: &str,
) {
   let app = TestApp::new();

   let (status, body) = app.get(uri).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, expected_body);
}

#[tokio::test]
async fn test_存在しないファイルは404() {
   let app = TestApp::new();

   let (status, _) = app.get("/missing.js").await;

   assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ルート外のファイルは配信されない() {
   let app = TestApp::new();

   let (status, body) = app.get("/../secret.txt").await;

   assert_ne!(status, StatusCode::OK);
   assert!(!body.contains("secret"));
}
