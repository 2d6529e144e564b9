pub mod posters;
pub mod providers;
pub mod request_id;

pub use posters::{HttpPosterLoader, PosterLoader};
pub use providers::{http::HttpRecommendationProvider, RecommendationProvider};
pub use request_id::RequestId;
