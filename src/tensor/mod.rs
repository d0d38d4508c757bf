pub mod listing_service;
pub mod models;

pub use listing_service::{ListingService, TensorListingService};
pub use models::{ActiveListings, GraphQlRequest, GraphQlResponse, ListingTx, ACTIVE_LISTINGS_QUERY};
