//! GET / lists every route. Parameterless GET routes are rendered as links.

use crate::routes::{RouteInfo, ROUTES};
use axum::response::Html;

pub async fn sitemap() -> Html<String> {
    Html(render(ROUTES))
}

fn render(routes: &[RouteInfo]) -> String {
    let items: String = routes
        .iter()
        .map(|r| {
            if r.method == "GET" && !r.path.contains('{') {
                format!("<li><a href=\"{0}\">{1} {0}</a></li>", r.path, r.method)
            } else {
                format!("<li>{} {}</li>", r.method, r.path)
            }
        })
        .collect();
    format!(
        "<div style=\"text-align: center;\">\
         <h1>Star Wars API</h1>\
         <p>Remember to specify a real endpoint path like:</p>\
         <ul style=\"text-align: left;\">{}</ul>\
         </div>",
        items
    )
}
