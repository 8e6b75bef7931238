use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AttachError, CycleOutcome};
use crate::models::search::SearchQuery;
use crate::modules::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::modules::page::{
    Button, ClickListener, DisplayRegion, Element, Page, TextInput, RESULTS_ID, SEARCH_BUTTON_ID,
    SEARCH_INPUT_ID,
};

use super::fetcher::{CentrosFetcher, HttpFetcher};

/// Binds one trigger activation to one query/fetch/render cycle.
///
/// Cycles are independent: nothing is retained between them and an in-flight
/// request is never cancelled, so the last response to arrive owns the region.
#[derive(Clone)]
pub struct SearchController {
    input: TextInput,
    results: Arc<dyn DisplayRegion>,
    fetcher: Arc<dyn CentrosFetcher>,
    diagnostics: Arc<dyn Diagnostics>,
    config: Config,
}

impl SearchController {
    pub fn new(input: TextInput, results: Arc<dyn DisplayRegion>, config: Config) -> Self {
        Self {
            input,
            results,
            fetcher: Arc::new(HttpFetcher::new()),
            diagnostics: Arc::new(TracingDiagnostics),
            config,
        }
    }

    /// Looks up the `search` input and the `results` container on the page.
    pub fn from_page(page: &Page, config: Config) -> Result<Self, AttachError> {
        let input = page
            .input(SEARCH_INPUT_ID)
            .ok_or_else(|| AttachError::MissingInput(SEARCH_INPUT_ID.to_string()))?;
        let results = page
            .container(RESULTS_ID)
            .ok_or_else(|| AttachError::MissingContainer(RESULTS_ID.to_string()))?;

        Ok(Self::new(input, results, config))
    }

    pub fn with_fetcher(mut self, fetcher: impl CentrosFetcher) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics) -> Self {
        self.diagnostics = Arc::new(diagnostics);
        self
    }

    pub fn attach(self, button: &Button) -> Arc<Self> {
        let controller = Arc::new(self);
        button.add_shared_listener(controller.clone());

        controller
    }

    /// Registers on the page's `searchBtn`.
    pub fn attach_to_page(self, page: &Page) -> Result<Arc<Self>, AttachError> {
        let button = page
            .button(SEARCH_BUTTON_ID)
            .ok_or_else(|| AttachError::MissingButton(SEARCH_BUTTON_ID.to_string()))?;

        Ok(self.attach(&button))
    }

    /// Reads the input now and runs the rest of the cycle as a task.
    pub fn activate(&self) -> JoinHandle<CycleOutcome> {
        let controller = self.clone();
        let query = self.read_query();

        tokio::spawn(async move { controller.run_query(query).await })
    }

    /// Runs a full cycle inline, reading the input first.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let query = self.read_query();
        self.run_query(query).await
    }

    fn read_query(&self) -> SearchQuery {
        SearchQuery::from(self.input.value())
    }

    async fn run_query(&self, query: SearchQuery) -> CycleOutcome {
        let span = info_span!("cycle", id = %Uuid::new_v4(), query = %query);

        async move {
            let url = self.config.request_url(query.as_str());
            debug!(%url, "fetching centros");

            match self.fetcher.fetch(&url).await {
                Ok(centros) => {
                    let elements: Vec<Element> = centros
                        .iter()
                        .map(|centro| Element::text(centro.display_line()))
                        .collect();
                    let count = elements.len();

                    self.results.replace_children(elements);
                    info!(count, "results rendered");

                    CycleOutcome::Rendered(count)
                }
                Err(error) => {
                    self.diagnostics.report(&error);

                    CycleOutcome::Failed(error)
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl ClickListener for SearchController {
    fn on_click(&self) -> BoxFuture<'static, ()> {
        let controller = self.clone();
        let query = self.read_query();

        Box::pin(async move {
            // failures were already reported to diagnostics
            let _ = controller.run_query(query).await;
        })
    }
}
