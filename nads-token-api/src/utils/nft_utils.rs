use serde_json::Value;
use tracing::{debug, info};

/// The "1 Million Nads" collection.
pub const NADS_CONTRACT_ADDRESS: &str = "0x922da3512e2bebbe32bcce59adf7e6759fb8cea2";

/// Fields of an Insight record that may carry the NFT contract address.
/// The shape depends on the endpoint, so they are probed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractAddressField {
    Contract,
    TokenAddress,
    AssetContract,
    ContractAddress,
}

impl ContractAddressField {
    pub const PRIORITY: [ContractAddressField; 4] = [
        ContractAddressField::Contract,
        ContractAddressField::TokenAddress,
        ContractAddressField::AssetContract,
        ContractAddressField::ContractAddress,
    ];

    pub fn pointer(&self) -> &'static str {
        match self {
            ContractAddressField::Contract => "/contract/address",
            ContractAddressField::TokenAddress => "/token_address",
            ContractAddressField::AssetContract => "/asset_contract/address",
            ContractAddressField::ContractAddress => "/contract_address",
        }
    }
}

/// Returns the contract address of an NFT record together with the field it came from.
/// Only non-empty strings count as an address.
pub fn extract_contract_address(nft: &Value) -> Option<(ContractAddressField, &str)> {
    ContractAddressField::PRIORITY.iter().find_map(|field| {
        nft.pointer(field.pointer())
            .and_then(Value::as_str)
            .filter(|address| !address.is_empty())
            .map(|address| (*field, address))
    })
}

/// Returns true when `nft` belongs to `contract_address`, ignoring case.
pub fn is_nad_nft(nft: &Value, contract_address: &str) -> bool {
    let Some((field, nft_address)) = extract_contract_address(nft) else {
        debug!(
            nft = %truncate(&nft.to_string(), 200),
            "could not extract contract address from NFT"
        );
        return false;
    };

    let is_nad = nft_address.eq_ignore_ascii_case(contract_address);
    if is_nad {
        info!(
            address = nft_address,
            field = ?field,
            token_id = %first_present(nft, &["/token_id", "/tokenId", "/id"]),
            name = %first_present(nft, &["/name", "/metadata/name"]),
            symbol = %first_present(nft, &["/symbol", "/metadata/symbol"]),
            "found 1 Million Nad NFT"
        );
    }
    is_nad
}

/// Returns true when any record of `nfts` belongs to `contract_address`.
pub fn contains_nad_nft(nfts: &[Value], contract_address: &str) -> bool {
    nfts.iter().any(|nft| is_nad_nft(nft, contract_address))
}

static NULL: Value = Value::Null;

fn first_present<'a>(nft: &'a Value, pointers: &[&str]) -> &'a Value {
    pointers
        .iter()
        .filter_map(|pointer| nft.pointer(pointer))
        .find(|value| !value.is_null())
        .unwrap_or(&NULL)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
