use rust_decimal::Decimal;
use serde::Serialize;

/// One rendered card: a stake entry merged with its current sale price.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayItem {
    pub mint: String,
    pub name: String,
    pub image: String,
    pub withdrawn_whole: u64, // Base units divided by 10^9, truncated
    pub harvested_whole: u64, // Same scaling
    pub bonus_redeemed: bool,
    pub sale_price_sol: Option<Decimal>, // Lamports divided by 10^9
}

/// Everything the view needs for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub page: u32,
    pub items: Vec<DisplayItem>,
}
