// Shared test helpers for page fixtures and proxied downloaders.
//
// The downloader only accepts instagram.com URLs, so integration tests point it at
// an httptest server configured as its HTTP proxy. Plain-http targets are then
// forwarded to the mock server in absolute form.

use httptest::Server;
use insta_media::{MediaDownloader, ProxyConfig};

/// Post URL routed through the mock proxy.
pub const POST_URL: &str = "http://www.instagram.com/p/ABC123/";

/// Creates a downloader whose proxy is the given mock server.
pub fn proxied_downloader(server: &Server) -> MediaDownloader {
    let proxy = ProxyConfig::parse(&format!("http://{}", server.addr()))
        .expect("Mock server address should be a valid proxy");
    MediaDownloader::new(proxy).expect("Failed to build downloader")
}

/// Wraps head markup in a minimal HTML page.
pub fn page(head: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">{}</head><body></body></html>",
        head
    )
}

/// A `window._sharedData` script holding the given shortcode media node.
#[allow(dead_code)] // Used by other test files
pub fn shared_data_script(node_json: &str) -> String {
    format!(
        "<script type=\"text/javascript\">window._sharedData = {{\"config\":{{\"viewer\":null}},\"entry_data\":{{\"PostPage\":[{{\"graphql\":{{\"shortcode_media\":{}}}}}]}}}};</script>",
        node_json
    )
}
