//! Fallback handler: files under the site root, otherwise the rendered app

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

/// Serve `uri` from the compiled site root (`/pkg`, favicon). Anything that
/// is not a file there is rendered by the app, which shows the generic page.
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    match get_static_file(uri, &options.site_root).await {
        Ok(res) if res.status() == StatusCode::OK => res,
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options.clone(), App);
            handler(req).await.into_response()
        }
        Err((status, message)) => {
            tracing::error!(%status, %message, "static file lookup failed");
            (status, message).into_response()
        }
    }
}

pub(crate) async fn get_static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, format!("Invalid request: {err}")))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_root(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("ar-site-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("pkg")).unwrap();
        std::fs::write(dir.join("pkg").join("ar-site.css"), "body{}").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_static_file_served_from_site_root() {
        let root = site_root("hit");
        let res = get_static_file(Uri::from_static("/pkg/ar-site.css"), root.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let root = site_root("miss");
        let res = get_static_file(Uri::from_static("/pkg/missing.js"), root.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
