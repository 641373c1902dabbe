use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ERC20 and ERC1155 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct BalancesResponse {
    pub balances: Vec<Value>,
}

/// ERC721 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct NftHoldingsResponse {
    #[serde(rename = "is1MillionNadHolder")]
    pub is_1_million_nad_holder: bool,
    pub nfts: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
