/// HTTP handlers - one module per resource, one service call per endpoint
pub mod comments;
pub mod engagement;
pub mod feed;
pub mod follows;
pub mod notifications;
pub mod posts;

use actix_web::web;
use serde::Deserialize;

/// Register every resource's routes on the authenticated scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    engagement::register_routes(cfg);
    follows::register_routes(cfg);
    feed::register_routes(cfg);
    posts::register_routes(cfg);
    comments::register_routes(cfg);
    notifications::register_routes(cfg);
}

/// Pagination query parameters shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

pub(crate) fn default_limit() -> i64 {
    20
}

impl PaginationParams {
    /// Requested page size, clamped to a sane window.
    pub fn clamped_limit(&self) -> i64 {
        self.limit.clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        let params = PaginationParams { limit: 0, offset: -3 };
        assert_eq!(params.clamped_limit(), 1);
        assert_eq!(params.offset(), 0);

        let params = PaginationParams { limit: 5000, offset: 40 };
        assert_eq!(params.clamped_limit(), 100);
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn missing_fields_default() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, 20);
        assert_eq!(params.offset, 0);
    }
}
