//! Blog server with slug-based post addressing
//!
//! Every request rebuilds the post index, so edits to the manifest or to a
//! post show up on the next page load without a restart.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{ContentLoader, PostRenderer};
use crate::helpers::url_for;
use crate::templates::{LinkStyle, PageRenderer};
use crate::Blog;

/// Server state
pub struct ServerState {
    blog: Blog,
    loader: ContentLoader,
    renderer: PostRenderer,
}

impl ServerState {
    pub fn new(blog: Blog) -> Result<Self> {
        let loader = blog.loader()?;
        let renderer = blog.renderer();
        Ok(Self {
            blog,
            loader,
            renderer,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PostQuery {
    slug: Option<String>,
}

/// Build the router; static files from the public dir are the fallback
pub fn router(state: Arc<ServerState>) -> Router {
    let static_files = ServeDir::new(&state.blog.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/blog.html", get(blog_list_handler))
        .route("/blog-post.html", get(blog_post_handler))
        .route("/api/posts", get(api_posts_handler))
        .route("/api/posts/:slug", get(api_post_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog.clone())?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}/blog.html", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn blog_list_handler(State(state): State<Arc<ServerState>>) -> Html<String> {
    let index = state.loader.load_posts().await;
    let pages = PageRenderer::new(&state.blog.config, LinkStyle::Query);
    Html(pages.blog_list(&index))
}

async fn blog_post_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PostQuery>,
) -> Response {
    let Some(slug) = query.slug.filter(|s| !s.is_empty()) else {
        return Redirect::to(&url_for(&state.blog.config, "blog.html")).into_response();
    };

    let index = state.loader.load_posts().await;
    let pages = PageRenderer::new(&state.blog.config, LinkStyle::Query);

    match index.find_by_slug(&slug) {
        Some(post) => Html(pages.blog_post(&index, post, &state.renderer)).into_response(),
        None => {
            tracing::debug!("No post for slug {:?}", slug);
            (StatusCode::NOT_FOUND, Html(pages.not_found())).into_response()
        }
    }
}

async fn api_posts_handler(State(state): State<Arc<ServerState>>) -> Response {
    let index = state.loader.load_posts().await;
    Json(index.into_posts()).into_response()
}

async fn api_post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let index = state.loader.load_posts().await;
    match index.find_by_slug(&slug) {
        Some(post) => Json(post).into_response(),
        None => (StatusCode::NOT_FOUND, "Post not found").into_response(),
    }
}
