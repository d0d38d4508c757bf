pub mod page_presenter;

pub use page_presenter::{PagePresenter, PagePresenterImpl};
