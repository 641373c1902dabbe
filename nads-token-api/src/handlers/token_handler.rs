use crate::errors::ProxyError;
use crate::managers::insight_access::InsightAccess;
use crate::managers::pagination::fetch_paginated_data;
use crate::models::token::{PaginationOptions, TokenStandard};
use crate::routes::auth::validate_api_key;
use crate::types::token::{BalancesResponse, NftHoldingsResponse};
use crate::utils::app_config::AppConfig;
use crate::utils::http_utils::{first_query_param, token_query_url, with_cors};
use crate::utils::nft_utils::contains_nad_nft;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

/// Entry point of the proxy.
///
/// `OPTIONS` is answered with the CORS headers only. Any other request must carry the
/// protection key and an `address` query parameter, and is routed on the path:
/// `/erc20` and `/erc1155` return `{ balances }`, `/erc721` returns
/// `{ is1MillionNadHolder, nfts }`.
pub async fn dispatch<A: InsightAccess + 'static>(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    insight: web::Data<A>,
) -> Result<HttpResponse, ProxyError> {
    if req.method() == Method::OPTIONS {
        return Ok(with_cors(&mut HttpResponse::NoContent()).finish());
    }

    validate_api_key(&req, config.protection_api_key.as_deref())?;

    let address = first_query_param(req.query_string(), "address")
        .filter(|address| !address.is_empty())
        .ok_or(ProxyError::MissingAddress)?;
    let client_id = config
        .thirdweb_client_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ProxyError::MissingClientId)?;
    let standard = TokenStandard::from_path(req.path())
        .ok_or_else(|| ProxyError::InvalidEndpoint(req.path().to_string()))?;

    let base_url = token_query_url(&config, standard, &address);
    let options = PaginationOptions {
        check_for_nad: standard.checks_ownership(),
        nad_contract_address: &config.nad_contract_address,
    };
    let result = fetch_paginated_data(insight.get_ref(), &base_url, Some(client_id), &options).await;

    let mut builder = HttpResponse::Ok();
    with_cors(&mut builder);

    match standard {
        TokenStandard::Erc721 => {
            let direct_check = contains_nad_nft(&result.data, &config.nad_contract_address);
            let is_holder = result.is_nad_holder || direct_check;
            tracing::info!(
                %standard,
                address = %address,
                nfts = result.data.len(),
                from_pagination = result.is_nad_holder,
                direct_check,
                is_1_million_nad_holder = is_holder,
                "token response"
            );
            Ok(builder.json(NftHoldingsResponse {
                is_1_million_nad_holder: is_holder,
                nfts: result.data,
            }))
        }
        TokenStandard::Erc20 | TokenStandard::Erc1155 => {
            tracing::info!(
                %standard,
                address = %address,
                balances = result.data.len(),
                "token response"
            );
            Ok(builder.json(BalancesResponse {
                balances: result.data,
            }))
        }
    }
}
