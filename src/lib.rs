pub mod config;
pub mod error;
pub mod models;
pub mod modules;

pub use config::Config;
pub use error::{AttachError, ConfigError, CycleOutcome, FetchError};
pub use models::center::Center;
pub use modules::diagnostics::{Diagnostics, MemoryDiagnostics, TracingDiagnostics};
pub use modules::page::{Button, Container, DisplayRegion, Element, Page, TextInput};
pub use modules::search::{CentrosFetcher, HttpFetcher, SearchController};
