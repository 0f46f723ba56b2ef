use axum::response::Html;
use utoipa::openapi::OpenApi;

/// Collects every GET route without path parameters from the OpenAPI document, sorted.
pub fn sitemap_links(api: &OpenApi) -> Vec<String> {
    let mut links: Vec<String> = api
        .paths
        .paths
        .iter()
        .filter(|(path, item)| item.get.is_some() && !path.contains('{'))
        .map(|(path, _)| path.clone())
        .collect();

    links.sort();
    links
}

/// Renders the sitemap page listing the provided links.
pub fn render_sitemap(links: &[String]) -> String {
    let items: String = links
        .iter()
        .map(|link| format!("<li><a href=\"{link}\">{link}</a></li>"))
        .collect();

    format!(
        "<div style=\"text-align: center;\">\
         <h1>Welcome to the Holocron API</h1>\
         <p>Interactive documentation is available at <a href=\"/api/docs\">/api/docs</a></p>\
         <p>Remember to specify a real endpoint path like:</p>\
         <ul style=\"text-align: left;\">{items}</ul>\
         </div>"
    )
}

/// Sitemap of the API's parameterless GET endpoints
pub async fn sitemap(links: Vec<String>) -> Html<String> {
    Html(render_sitemap(&links))
}
