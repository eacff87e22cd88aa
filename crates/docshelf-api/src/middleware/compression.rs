//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer. Image downloads are skipped by the
/// layer's default predicate.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
