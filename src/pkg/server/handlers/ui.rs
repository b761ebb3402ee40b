use axum::response::Html;

use crate::prelude::Result;

pub async fn home() -> Result<Html<String>> {
    let page = tokio::fs::read_to_string("public/index.html").await?;
    Ok(Html(page))
}
