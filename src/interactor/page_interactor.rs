use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::{DisplayItem, Listing, PageData};
use crate::tensor::ListingService;
use crate::solana::StakeSource;
use crate::utils::{lamports_to_sol, whole_units};

/// Cards per rendered page.
pub const PAGE_SIZE: usize = 12;

#[async_trait]
pub trait PageInteractor: Send + Sync {
    async fn load_page(&self, page: u32) -> Result<PageData>;
}

/// Joins the marketplace listings with on-chain stake entries for one page.
pub struct PageInteractorImpl {
    listing_service: Arc<dyn ListingService + Send + Sync>,
    stake_source: Arc<dyn StakeSource + Send + Sync>,
}

impl PageInteractorImpl {
    pub fn new(
        listing_service: Arc<dyn ListingService + Send + Sync>,
        stake_source: Arc<dyn StakeSource + Send + Sync>,
    ) -> Self {
        Self {
            listing_service,
            stake_source,
        }
    }
}

/// Price per mint, first listing wins when a mint appears more than once.
fn build_price_table(listings: &[Listing]) -> HashMap<String, u64> {
    let mut prices = HashMap::new();

    for listing in listings {
        prices
            .entry(listing.mint.clone())
            .or_insert(listing.gross_amount_lamports);
    }

    prices
}

/// Half-open page slice over the ordered mint list, 1-indexed pages.
/// Pages past the end are empty, not an error.
fn page_slice<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);

    if start >= items.len() {
        return &[];
    }

    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[async_trait]
impl PageInteractor for PageInteractorImpl {
    async fn load_page(&self, page: u32) -> Result<PageData> {
        let listings = self.listing_service.active_listings().await?;

        let prices = build_price_table(&listings);
        let mints: Vec<String> = listings.into_iter().map(|listing| listing.mint).collect();

        let mut items = Vec::new();

        // One mint at a time; a single failure aborts the whole page
        for mint in page_slice(&mints, page) {
            let stakes = self.stake_source.stakes_by_mint(mint).await?;

            for stake in stakes {
                items.push(DisplayItem {
                    mint: stake.mint,
                    name: stake.name,
                    image: stake.image,
                    withdrawn_whole: whole_units(stake.withdrawn),
                    harvested_whole: whole_units(stake.harvested),
                    bonus_redeemed: stake.bonus_redeemed,
                    sale_price_sol: prices.get(mint).map(|lamports| lamports_to_sol(*lamports)),
                });
            }
        }

        Ok(PageData { page, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StakeRecord;
    use anyhow::anyhow;
    use rust_decimal::Decimal;

    struct FakeListingService {
        listings: Vec<Listing>,
    }

    #[async_trait]
    impl ListingService for FakeListingService {
        async fn active_listings(&self) -> Result<Vec<Listing>> {
            Ok(self.listings.clone())
        }
    }

    struct FakeStakeSource;

    #[async_trait]
    impl StakeSource for FakeStakeSource {
        async fn stakes_by_mint(&self, mint: &str) -> Result<Vec<StakeRecord>> {
            Ok(vec![StakeRecord {
                mint: mint.to_string(),
                name: format!("SSC {}", mint),
                image: format!("https://shdw-drive.genesysgo.net/x/{}.png", mint),
                withdrawn: 2_999_999_999,
                harvested: 12_000_000_000,
                bonus_redeemed: false,
            }])
        }
    }

    struct UnevenStakeSource;

    // A mint can carry several historical entries, or none at all
    #[async_trait]
    impl StakeSource for UnevenStakeSource {
        async fn stakes_by_mint(&self, mint: &str) -> Result<Vec<StakeRecord>> {
            let record = |name: &str| StakeRecord {
                mint: mint.to_string(),
                name: name.to_string(),
                image: String::new(),
                withdrawn: 0,
                harvested: 0,
                bonus_redeemed: false,
            };

            Ok(match mint {
                "M0" => vec![record("M0 first"), record("M0 second"), record("M0 third")],
                "M1" => Vec::new(),
                _ => vec![record("single")],
            })
        }
    }

    struct FailingStakeSource;

    #[async_trait]
    impl StakeSource for FailingStakeSource {
        async fn stakes_by_mint(&self, _mint: &str) -> Result<Vec<StakeRecord>> {
            Err(anyhow!("rpc unavailable"))
        }
    }

    fn listings(count: usize) -> Vec<Listing> {
        (0..count)
            .map(|i| Listing {
                mint: format!("M{}", i),
                gross_amount_lamports: (i as u64 + 1) * 1_000_000_000,
            })
            .collect()
    }

    fn interactor(listings: Vec<Listing>) -> PageInteractorImpl {
        PageInteractorImpl::new(
            Arc::new(FakeListingService { listings }),
            Arc::new(FakeStakeSource),
        )
    }

    #[tokio::test]
    async fn first_page_holds_the_first_twelve_listings() {
        let data = interactor(listings(20)).load_page(1).await.unwrap();

        let mints: Vec<&str> = data.items.iter().map(|item| item.mint.as_str()).collect();
        let expected: Vec<String> = (0..12).map(|i| format!("M{}", i)).collect();

        assert_eq!(mints, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn second_page_holds_the_remainder() {
        let data = interactor(listings(20)).load_page(2).await.unwrap();

        let mints: Vec<&str> = data.items.iter().map(|item| item.mint.as_str()).collect();
        let expected: Vec<String> = (12..20).map(|i| format!("M{}", i)).collect();

        assert_eq!(data.items.len(), 8);
        assert_eq!(mints, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_not_an_error() {
        let data = interactor(listings(20)).load_page(100).await.unwrap();

        assert!(data.items.is_empty());
    }

    #[tokio::test]
    async fn amounts_are_truncated_to_whole_tokens() {
        let data = interactor(listings(1)).load_page(1).await.unwrap();

        assert_eq!(data.items[0].withdrawn_whole, 2);
        assert_eq!(data.items[0].harvested_whole, 12);
    }

    #[tokio::test]
    async fn sale_price_is_lamports_divided_by_1e9() {
        let data = interactor(vec![Listing {
            mint: "T1".to_string(),
            gross_amount_lamports: 1_000_000_000,
        }])
        .load_page(1)
        .await
        .unwrap();

        assert_eq!(data.items[0].sale_price_sol, Some(Decimal::from(1)));
    }

    #[tokio::test]
    async fn first_listing_price_wins_for_duplicate_mints() {
        let data = interactor(vec![
            Listing {
                mint: "T1".to_string(),
                gross_amount_lamports: 1_500_000_000,
            },
            Listing {
                mint: "T1".to_string(),
                gross_amount_lamports: 9_000_000_000,
            },
        ])
        .load_page(1)
        .await
        .unwrap();

        assert_eq!(
            data.items[0].sale_price_sol.unwrap().to_string(),
            "1.5"
        );
    }

    #[tokio::test]
    async fn every_stake_entry_is_kept_in_source_order() {
        let interactor = PageInteractorImpl::new(
            Arc::new(FakeListingService {
                listings: listings(3),
            }),
            Arc::new(UnevenStakeSource),
        );

        let data = interactor.load_page(1).await.unwrap();

        let names: Vec<&str> = data.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["M0 first", "M0 second", "M0 third", "single"]);

        // M1 has no entries and therefore no card, M2's follows M0's
        let mints: Vec<&str> = data.items.iter().map(|item| item.mint.as_str()).collect();
        assert_eq!(mints, vec!["M0", "M0", "M0", "M2"]);
    }

    #[tokio::test]
    async fn stake_query_failure_aborts_the_page() {
        let interactor = PageInteractorImpl::new(
            Arc::new(FakeListingService {
                listings: listings(3),
            }),
            Arc::new(FailingStakeSource),
        );

        assert!(interactor.load_page(1).await.is_err());
    }

    #[tokio::test]
    async fn empty_listings_produce_an_empty_page() {
        let data = interactor(Vec::new()).load_page(1).await.unwrap();

        assert!(data.items.is_empty());
        assert_eq!(data.page, 1);
    }
}
