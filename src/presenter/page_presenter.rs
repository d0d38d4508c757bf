use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::interactor::PageInteractor;
use crate::view::PageView;

#[async_trait]
pub trait PagePresenter: Send + Sync {
    async fn show_page(&self, page: u32) -> Result<String>;
}

pub struct PagePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> PagePresenterImpl<I, V>
where
    I: PageInteractor,
    V: PageView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> PagePresenter for PagePresenterImpl<I, V>
where
    I: PageInteractor + Send + Sync,
    V: PageView + Send + Sync,
{
    /// Any upstream failure propagates, the router turns it into a
    /// generic error response.
    async fn show_page(&self, page: u32) -> Result<String> {
        let data = self.interactor.load_page(page).await?;

        Ok(self.view.render(&data))
    }
}
