mod app_error;
mod display_item;
mod listing;
mod stake;

pub use app_error::AppError;
pub use display_item::{DisplayItem, PageData};
pub use listing::Listing;
pub use stake::{NftMetadata, StakeRecord};
