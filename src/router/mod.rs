use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::error;
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::interactor::PageInteractorImpl;
use crate::presenter::{PagePresenter, PagePresenterImpl};
use crate::view::HtmlPageView;

/// Create the application router.
pub fn create_router(services: Arc<ServiceContainer>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/{page}", get(page))
        .with_state(services)
}

async fn health() -> &'static str {
    "ok"
}

/// The bare path renders the first page.
async fn index(State(services): State<Arc<ServiceContainer>>) -> Response {
    render_page(services, 1).await
}

async fn page(
    State(services): State<Arc<ServiceContainer>>,
    Path(page): Path<u32>,
) -> Response {
    render_page(services, page).await
}

/// One page render is one sequential pipeline run. Collaborators are wired
/// up fresh per request.
async fn render_page(services: Arc<ServiceContainer>, page: u32) -> Response {
    let interactor = Arc::new(PageInteractorImpl::new(
        services.listing_service(),
        services.stake_source(),
    ));
    let view = Arc::new(HtmlPageView::new(
        services.config().marketplace_item_url.clone(),
    ));
    let presenter = PagePresenterImpl::new(interactor, view);

    match presenter.show_page(page).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page {}: {:#}", page, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Internal Server Error</h1>".to_string()),
            )
                .into_response()
        }
    }
}
