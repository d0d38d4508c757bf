use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Base units per whole reward token, and lamports per SOL.
pub const BASE_UNITS_PER_WHOLE: u64 = 1_000_000_000;

// Truncate a base-unit amount to whole tokens for display
pub fn whole_units(base_amount: u64) -> u64 {
    base_amount / BASE_UNITS_PER_WHOLE
}

// Convert a lamport amount to SOL without losing precision
pub fn lamports_to_sol(lamports: u64) -> Decimal {
    (Decimal::from(lamports) / Decimal::from(BASE_UNITS_PER_WHOLE)).normalize()
}

// Parse Solana address and convert to pubkey
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|_| anyhow!("Invalid Solana address format: {}", address))
}

// Escape text for inclusion in HTML body or attribute values
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_units_truncates_instead_of_rounding() {
        assert_eq!(whole_units(0), 0);
        assert_eq!(whole_units(999_999_999), 0);
        assert_eq!(whole_units(1_000_000_000), 1);
        assert_eq!(whole_units(2_999_999_999), 2);
        assert_eq!(whole_units(42_000_000_001), 42);
    }

    #[test]
    fn lamports_to_sol_is_exact() {
        assert_eq!(lamports_to_sol(1_000_000_000).to_string(), "1");
        assert_eq!(lamports_to_sol(1_500_000_000).to_string(), "1.5");
        assert_eq!(lamports_to_sol(1).to_string(), "0.000000001");
        assert_eq!(lamports_to_sol(0).to_string(), "0");
    }

    #[test]
    fn html_escape_covers_markup_characters() {
        assert_eq!(
            html_escape(r#"<b>"SSC" & 'friends'</b>"#),
            "&lt;b&gt;&quot;SSC&quot; &amp; &#39;friends&#39;&lt;/b&gt;"
        );
        assert_eq!(html_escape("Shadowy Super Coder #123"), "Shadowy Super Coder #123");
    }
}
