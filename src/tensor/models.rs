use serde::{Deserialize, Serialize};

/// Query for all active listings of a collection, cheapest first.
pub const ACTIVE_LISTINGS_QUERY: &str = r#"
query CollectionStats($slug: String!) {
  activeListingsV2(slug: $slug, sortBy: PriceAsc) {
    txs {
      mint {
        onchainId
      }
      tx {
        grossAmount
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<ListingsData>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsData {
    pub active_listings_v2: ActiveListings,
}

#[derive(Debug, Deserialize)]
pub struct ActiveListings {
    pub txs: Vec<ListingTx>,
}

#[derive(Debug, Deserialize)]
pub struct ListingTx {
    pub mint: MintInfo,
    pub tx: TxInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintInfo {
    pub onchain_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInfo {
    #[serde(with = "string_or_u64")]
    pub gross_amount: u64,
}

// The API encodes lamport amounts either as a JSON number or as a decimal
// string, so accept both
pub mod string_or_u64 {
    use serde::{self, Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrU64;

        impl<'de> serde::de::Visitor<'de> for StringOrU64 {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an unsigned integer or a string containing one")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse::<u64>().map_err(serde::de::Error::custom)
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&value)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(value).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(StringOrU64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listings_response() {
        let payload = r#"{
            "data": {
                "activeListingsV2": {
                    "txs": [
                        { "mint": { "onchainId": "M1" }, "tx": { "grossAmount": "1000000000" } },
                        { "mint": { "onchainId": "M2" }, "tx": { "grossAmount": 2500000000 } }
                    ]
                }
            }
        }"#;

        let response: GraphQlResponse = serde_json::from_str(payload).unwrap();
        let data = response.data.unwrap();
        let txs = &data.active_listings_v2.txs;

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].mint.onchain_id, "M1");
        assert_eq!(txs[0].tx.gross_amount, 1_000_000_000);
        assert_eq!(txs[1].tx.gross_amount, 2_500_000_000);
    }

    #[test]
    fn deserializes_error_payload() {
        let payload = r#"{ "data": null, "errors": [{ "message": "unknown slug" }] }"#;

        let response: GraphQlResponse = serde_json::from_str(payload).unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.unwrap()[0].message, "unknown slug");
    }
}
