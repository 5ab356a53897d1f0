//! Static asset gateway for the production client bundle.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::server::config::Config;

/// Mounts the client bundle as the router fallback in production.
///
/// Paths that match a file under `ASSET_DIR` are served as-is; every other unmatched path
/// returns `index.html` with status 200 so the client router can resolve it. API routes are
/// registered before the fallback and always win. Outside production the router is returned
/// unchanged and unmatched paths get axum's default 404.
pub fn mount<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !config.environment.is_production() {
        return router;
    }

    let assets =
        ServeDir::new(&config.asset_dir).fallback(ServeFile::new(config.index_file()));

    router.fallback_service(assets)
}
