pub mod controller;
pub mod fetcher;

pub use controller::SearchController;
pub use fetcher::{CentrosFetcher, HttpFetcher};
