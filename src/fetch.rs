use gloo_net::http::Request;
use site_core::{parse_land, parse_reviews, LandGeometry, Review};

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        anyhow::bail!("GET {} returned {}", url, resp.status());
    }
    Ok(resp.text().await?)
}

/// Single attempt, no retry.
pub async fn fetch_land(url: &str) -> anyhow::Result<LandGeometry> {
    let text = fetch_text(url).await?;
    let land = parse_land(&text)?;
    log::info!("[globe] loaded {} land polygons", land.polygons.len());
    Ok(land)
}

/// Missing or malformed data means no reviews.
pub async fn fetch_reviews(url: &str) -> Vec<Review> {
    match fetch_text(url).await {
        Ok(text) => parse_reviews(&text),
        Err(e) => {
            log::warn!("[reviews] {}: {:?}", url, e);
            Vec::new()
        }
    }
}
