use axum::response::Html;

const INDEX_HTML: &str = include_str!("index.html");

/// Upload page: file picker, upload button and the script that posts each
/// selected file to `/upload` on its own request.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
