use crate::errors::ProxyError;
use crate::managers::insight_access::{fetch_single_request, InsightAccess};
use crate::models::token::{PaginatedData, PaginationOptions, TokenPage};
use crate::utils::http_utils::append_query_param;
use crate::utils::nft_utils::contains_nad_nft;
use serde_json::Value;
use tracing::{debug, error, info};

/// Consecutive empty (or failed) pages after which pagination stops.
pub const MAX_EMPTY_RESPONSES: u32 = 2;

/// Walks the pages of `base_url` from page 0 until `MAX_EMPTY_RESPONSES` consecutive pages
/// come back empty, and concatenates their records.
///
/// A failed page counts exactly like an empty one: it is logged and never surfaced, so an
/// upstream outage truncates the result instead of failing the request.
pub async fn fetch_paginated_data<A: InsightAccess + ?Sized>(
    insight: &A,
    base_url: &str,
    client_id: Option<&str>,
    options: &PaginationOptions<'_>,
) -> PaginatedData {
    let mut data: Vec<Value> = Vec::new();
    let mut current_page: u32 = 0;
    let mut empty_response_count: u32 = 0;
    let mut is_nad_holder = false;

    debug!(base_url, "starting paginated fetch");

    while empty_response_count < MAX_EMPTY_RESPONSES {
        let page_url = append_query_param(base_url, "page", &current_page.to_string());

        match fetch_page(insight, &page_url, client_id).await {
            Ok(items) if items.is_empty() => {
                debug!(page = current_page, "empty page");
                empty_response_count += 1;
            }
            Ok(items) => {
                empty_response_count = 0;
                debug!(page = current_page, items = items.len(), "page fetched");

                if options.check_for_nad
                    && !is_nad_holder
                    && contains_nad_nft(&items, options.nad_contract_address)
                {
                    info!(page = current_page, "found 1 Million Nad NFT in page");
                    is_nad_holder = true;
                }
                data.extend(items);
            }
            Err(e) => {
                error!(page = current_page, "error fetching page: {}", e);
                empty_response_count += 1;
            }
        }

        current_page += 1;
    }

    if options.check_for_nad
        && !is_nad_holder
        && contains_nad_nft(&data, options.nad_contract_address)
    {
        info!("verified 1 Million Nad NFT holder through full data check");
        is_nad_holder = true;
    }

    info!(
        items = data.len(),
        pages = current_page,
        is_nad_holder,
        "pagination complete"
    );

    PaginatedData {
        data,
        is_nad_holder,
        pages_fetched: current_page,
    }
}

async fn fetch_page<A: InsightAccess + ?Sized>(
    insight: &A,
    page_url: &str,
    client_id: Option<&str>,
) -> Result<Vec<Value>, ProxyError> {
    let body = fetch_single_request(insight, page_url, client_id).await?;
    let page: TokenPage = serde_json::from_value(body)?;
    Ok(page.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::insight_access::MockInsight;
    use crate::utils::nft_utils::NADS_CONTRACT_ADDRESS;
    use serde_json::json;

    const BASE_URL: &str = "https://insight/tokens/erc721/0xabc?chain=10143&limit=100";

    fn token(id: u32) -> Value {
        json!({ "token_id": id.to_string(), "token_address": "0x1111111111111111111111111111111111111111" })
    }

    fn nad(id: u32) -> Value {
        json!({ "token_id": id.to_string(), "contract": { "address": NADS_CONTRACT_ADDRESS.to_uppercase() } })
    }

    fn checking() -> PaginationOptions<'static> {
        PaginationOptions {
            check_for_nad: true,
            ..PaginationOptions::default()
        }
    }

    #[tokio::test]
    async fn test_stops_after_two_empty_pages() {
        let insight = MockInsight::with_pages(vec![
            vec![token(1), token(2)],
            vec![token(3)],
            vec![],
            vec![],
            vec![token(99)],
        ]);

        let result =
            fetch_paginated_data(&insight, BASE_URL, Some("cid"), &PaginationOptions::default())
                .await;

        assert_eq!(result.data, vec![token(1), token(2), token(3)]);
        assert_eq!(result.pages_fetched, 4);
        assert!(!result.is_nad_holder);

        let urls = insight.requested_urls();
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[0], format!("{}&page=0&clientId=cid", BASE_URL));
        assert_eq!(urls[3], format!("{}&page=3&clientId=cid", BASE_URL));
    }

    #[tokio::test]
    async fn test_single_empty_page_does_not_stop() {
        let insight = MockInsight::with_pages(vec![
            vec![token(1)],
            vec![],
            vec![token(2)],
            vec![],
            vec![],
        ]);

        let result =
            fetch_paginated_data(&insight, BASE_URL, Some("cid"), &PaginationOptions::default())
                .await;

        assert_eq!(result.data, vec![token(1), token(2)]);
        assert_eq!(result.pages_fetched, 5);
    }

    #[tokio::test]
    async fn test_error_counts_as_empty_page() {
        let insight = MockInsight::new(vec![
            Ok(json!({ "data": [token(1)] })),
            Err(ProxyError::Upstream {
                status: 500,
                body: "boom".to_string(),
            }),
            Ok(json!({ "data": [token(2)] })),
            Err(ProxyError::Upstream {
                status: 502,
                body: "bad gateway".to_string(),
            }),
            Ok(json!({ "data": [] })),
            Ok(json!({ "data": [token(3)] })),
        ]);

        let result =
            fetch_paginated_data(&insight, BASE_URL, Some("cid"), &PaginationOptions::default())
                .await;

        assert_eq!(result.data, vec![token(1), token(2)]);
        assert_eq!(result.pages_fetched, 5);
    }

    #[tokio::test]
    async fn test_undecodable_pages_count_as_empty() {
        let insight = MockInsight::new(vec![
            Ok(json!({ "data": [token(1)] })),
            Ok(json!({ "data": "not a list" })),
            Ok(json!({ "data": null })),
        ]);

        let result =
            fetch_paginated_data(&insight, BASE_URL, Some("cid"), &PaginationOptions::default())
                .await;

        assert_eq!(result.data, vec![token(1)]);
        assert_eq!(result.pages_fetched, 3);
    }

    #[tokio::test]
    async fn test_missing_client_id_returns_empty_result() {
        let insight = MockInsight::with_pages(vec![vec![token(1)]]);

        let result =
            fetch_paginated_data(&insight, BASE_URL, None, &PaginationOptions::default()).await;

        assert!(result.data.is_empty());
        assert_eq!(result.pages_fetched, 2);
        assert!(insight.requested_urls().is_empty());
    }

    #[tokio::test]
    async fn test_detects_nad_holder() {
        let insight = MockInsight::with_pages(vec![
            vec![token(1)],
            vec![token(2), nad(3)],
            vec![token(4)],
        ]);

        let result = fetch_paginated_data(&insight, BASE_URL, Some("cid"), &checking()).await;

        assert!(result.is_nad_holder);
        assert_eq!(result.data.len(), 4);
    }

    #[tokio::test]
    async fn test_ownership_not_checked_unless_requested() {
        let insight = MockInsight::with_pages(vec![vec![nad(1)]]);

        let result =
            fetch_paginated_data(&insight, BASE_URL, Some("cid"), &PaginationOptions::default())
                .await;

        assert!(!result.is_nad_holder);
        assert_eq!(result.data, vec![nad(1)]);
    }

    #[tokio::test]
    async fn test_no_nad_holder_without_match() {
        let insight = MockInsight::with_pages(vec![vec![token(1), json!({ "name": "no address" })]]);

        let result = fetch_paginated_data(&insight, BASE_URL, Some("cid"), &checking()).await;

        assert!(!result.is_nad_holder);
        assert_eq!(result.data.len(), 2);
    }

    #[tokio::test]
    async fn test_custom_target_contract() {
        let target = "0x1111111111111111111111111111111111111111";
        let insight = MockInsight::with_pages(vec![vec![token(1)]]);
        let options = PaginationOptions {
            check_for_nad: true,
            nad_contract_address: target,
        };

        let result = fetch_paginated_data(&insight, BASE_URL, Some("cid"), &options).await;

        assert!(result.is_nad_holder);
    }
}
