use crate::utils::nft_utils::NADS_CONTRACT_ADDRESS;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Token families served by the Insight `tokens` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStandard {
    Erc20,
    Erc721,
    Erc1155,
}

impl TokenStandard {
    /// Resolves the standard from the request path, first match wins.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.contains("/erc20") {
            Some(TokenStandard::Erc20)
        } else if path.contains("/erc721") {
            Some(TokenStandard::Erc721)
        } else if path.contains("/erc1155") {
            Some(TokenStandard::Erc1155)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStandard::Erc20 => "erc20",
            TokenStandard::Erc721 => "erc721",
            TokenStandard::Erc1155 => "erc1155",
        }
    }

    pub fn include_spam(&self) -> bool {
        matches!(self, TokenStandard::Erc20)
    }

    pub fn checks_ownership(&self) -> bool {
        matches!(self, TokenStandard::Erc721)
    }
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of an Insight `tokens` response. Records are kept as raw JSON.
#[derive(Debug, Deserialize)]
pub struct TokenPage {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

#[derive(Debug, Clone)]
pub struct PaginationOptions<'a> {
    pub check_for_nad: bool,
    pub nad_contract_address: &'a str,
}

impl Default for PaginationOptions<'_> {
    fn default() -> Self {
        Self {
            check_for_nad: false,
            nad_contract_address: NADS_CONTRACT_ADDRESS,
        }
    }
}

/// Records of every page, in page order, plus the ownership flag.
#[derive(Debug, Default)]
pub struct PaginatedData {
    pub data: Vec<Value>,
    pub is_nad_holder: bool,
    pub pages_fetched: u32,
}
