mod service;

pub use service::{GetPublishedPageQuery, PublicPageQueryService};
