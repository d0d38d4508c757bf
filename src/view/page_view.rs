use crate::entity::{DisplayItem, PageData};
use crate::utils::html_escape;

pub trait PageView: Send + Sync {
    fn render(&self, data: &PageData) -> String;
}

/// Renders a page as a self-contained HTML document: a grid of cards plus
/// Previous/Next navigation.
pub struct HtmlPageView {
    marketplace_item_url: String,
}

impl HtmlPageView {
    pub fn new(marketplace_item_url: String) -> Self {
        Self {
            marketplace_item_url,
        }
    }

    fn render_card(&self, item: &DisplayItem) -> String {
        let mut card = String::new();

        card.push_str("<div class=\"card\">\n");
        card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" width=\"100\" height=\"100\">\n",
            html_escape(&item.image),
            html_escape(&item.name)
        ));
        card.push_str(&format!(
            "<div class=\"name\">{}</div>\n",
            html_escape(&item.name)
        ));
        card.push_str(&format!(
            "<div>Withdrawn: {}</div>\n",
            item.withdrawn_whole
        ));
        card.push_str(&format!(
            "<div>Harvested: {}</div>\n",
            item.harvested_whole
        ));
        card.push_str(&format!(
            "<div>Bonus Redeemed: {}</div>\n",
            if item.bonus_redeemed { "YES" } else { "NO" }
        ));

        if let Some(price) = item.sale_price_sol {
            card.push_str(&format!(
                "<a href=\"{}/{}\">Buy for {} SOL</a>\n",
                html_escape(&self.marketplace_item_url),
                html_escape(&item.mint),
                price
            ));
        }

        card.push_str("</div>\n");

        card
    }

    fn render_navigation(&self, page: u32) -> String {
        let mut nav = String::from("<nav>\n");

        if page > 1 {
            nav.push_str(&format!("<a href=\"/{}\">Previous</a>\n", page - 1));
        }

        // Next is always offered, a page past the end just renders empty
        nav.push_str(&format!("<a href=\"/{}\">Next</a>\n", page + 1));
        nav.push_str("</nav>\n");

        nav
    }
}

impl PageView for HtmlPageView {
    fn render(&self, data: &PageData) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<title>SSC Staking Stats</title>\n");
        html.push_str(
            "<style>\
             body{background:#111;color:#eee;font-family:sans-serif;padding:2rem}\
             .grid{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem}\
             .card{background:#000;border-radius:8px;padding:1rem;text-align:center}\
             .name{font-weight:bold}\
             nav{display:flex;gap:3rem;justify-content:center;margin-top:2rem}\
             a{color:#9cf}\
             </style>\n",
        );
        html.push_str("</head>\n<body>\n<div class=\"grid\">\n");

        for item in &data.items {
            html.push_str(&self.render_card(item));
        }

        html.push_str("</div>\n");
        html.push_str(&self.render_navigation(data.page));
        html.push_str("</body>\n</html>\n");

        html
    }
}
