//! The rewrite as HTTP middleware.

use bytes::Bytes;
use edge_index::core::{Context, Request, Response};
use edge_index::middleware::{IndexRewriteMiddleware, MiddlewareChain, ORIGINAL_PATH_KEY};

fn origin(req: Request, ctx: &mut Context) -> Response {
    let res = Response::ok(req.uri().to_string());
    match ctx.get::<String>(ORIGINAL_PATH_KEY) {
        Some(original) => res.with_header("x-original-path", original),
        None => res,
    }
}

fn serve(uri: &str) -> Response {
    let chain = MiddlewareChain::new().add(IndexRewriteMiddleware::new());
    let req = http::Request::builder()
        .uri(uri)
        .header("host", "www.example.com")
        .body(Bytes::new())
        .unwrap();
    let mut ctx = Context::local("it");
    chain.process(Request::from(req), &mut ctx, origin)
}

#[test]
fn test_paths_reach_origin_rewritten() {
    assert_eq!(serve("/blog").body().as_ref(), b"/blog/index.html");
    assert_eq!(serve("/blog/").body().as_ref(), b"/blog/index.html");
    assert_eq!(serve("/").body().as_ref(), b"/index.html");
    assert_eq!(serve("/a.b/").body().as_ref(), b"/a.b/index.html");
    assert_eq!(serve("/styles/main.css").body().as_ref(), b"/styles/main.css");
}

#[test]
fn test_query_string_passthrough() {
    assert_eq!(
        serve("/blog?page=2").body().as_ref(),
        b"/blog/index.html?page=2"
    );
    assert_eq!(serve("/a.css?v=1").body().as_ref(), b"/a.css?v=1");
}

#[test]
fn test_original_path_visible_downstream() {
    let res = serve("/docs/");
    assert_eq!(res.header("x-original-path"), Some("/docs/"));

    let res = serve("/logo.svg");
    assert_eq!(res.header("x-original-path"), None);
}

#[test]
fn test_rewritten_request_converts_back_to_http() {
    let chain = MiddlewareChain::new().add(IndexRewriteMiddleware::new());
    let req = http::Request::builder()
        .method(http::Method::HEAD)
        .uri("https://www.example.com/guide?lang=en")
        .header("accept", "text/html")
        .body(Bytes::new())
        .unwrap();
    let mut ctx = Context::local("it");

    let forwarded = chain
        .process_request(Request::from(req), &mut ctx)
        .into_request()
        .expect("rewrite never short-circuits")
        .into_http()
        .unwrap();

    assert_eq!(forwarded.method(), http::Method::HEAD);
    assert_eq!(forwarded.uri().path(), "/guide/index.html");
    assert_eq!(forwarded.uri().query(), Some("lang=en"));
    assert_eq!(forwarded.uri().host(), Some("www.example.com"));
    assert_eq!(forwarded.headers()["accept"], "text/html");
}

#[test]
fn test_origin_response_converts_to_http() {
    let res = serve("/docs/").into_http().unwrap();

    assert_eq!(res.status(), http::StatusCode::OK);
    assert_eq!(res.headers()["x-original-path"], "/docs/");
    assert_eq!(res.body().as_ref(), b"/docs/index.html");
}

#[test]
fn test_concurrent_use_of_one_chain() {
    let chain = MiddlewareChain::new().add(IndexRewriteMiddleware::new());

    std::thread::scope(|s| {
        for i in 0..8 {
            let chain = chain.clone();
            s.spawn(move || {
                let path = format!("/section-{}", i);
                let mut ctx = Context::local(format!("t{}", i));
                let res = chain.process(Request::get(&path).unwrap(), &mut ctx, origin);
                assert_eq!(res.body().as_ref(), format!("{}/index.html", path).as_bytes());
            });
        }
    });
}
