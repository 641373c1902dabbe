use crate::models::token::TokenStandard;
use crate::utils::app_config::AppConfig;
use actix_web::HttpResponseBuilder;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Headers attached to every response, preflight included.
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, X-API-Key"),
    ("Access-Control-Max-Age", "86400"),
];

pub fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    for (name, value) in CORS_HEADERS {
        builder.insert_header((name, value));
    }
    builder
}

/// Appends `key=value` to `url`, opening the query string if needed.
pub fn append_query_param(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, key, value)
}

/// Appends the thirdweb `clientId` unless the URL already carries one.
pub fn with_client_id(url: &str, client_id: &str) -> String {
    if url.contains("clientId=") {
        url.to_string()
    } else {
        append_query_param(url, "clientId", &urlencoding::encode(client_id))
    }
}

/// Returns the Insight query for `address` without the page number.
pub fn token_query_url(config: &AppConfig, standard: TokenStandard, address: &str) -> String {
    let mut url = format!(
        "{}/tokens/{}/{}?chain={}&metadata=true",
        config.insight_base_url.trim_end_matches('/'),
        standard,
        urlencoding::encode(address),
        config.chain_id
    );
    if standard.include_spam() {
        url.push_str("&include_spam=true");
    }
    append_query_param(&url, "limit", &config.page_limit.to_string())
}

/// Returns the first value of `key` in a raw query string.
pub fn first_query_param(query_string: &str, key: &str) -> Option<String> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(query_string)
        .ok()?
        .into_iter()
        .find_map(|(k, v)| (k == key).then_some(v))
}
