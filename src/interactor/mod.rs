pub mod page_interactor;

pub use page_interactor::{PageInteractor, PageInteractorImpl, PAGE_SIZE};
