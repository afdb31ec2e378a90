use reqwest::Url;

use crate::domain::QueryParams;
use crate::errors::FetchError;

/// Build a page request URL by appending the query params to the endpoint
pub fn build_url(base_url: &str, params: &QueryParams) -> Result<String, FetchError> {
    let mut url = parse_base(base_url)?;
    append_params(&mut url, params);
    Ok(url.into())
}

fn parse_base(base_url: &str) -> Result<Url, FetchError> {
    Url::parse(base_url).map_err(|e| FetchError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

fn append_params(url: &mut Url, params: &QueryParams) {
    let mut query = url.query_pairs_mut();
    for (key, value) in params.pairs() {
        query.append_pair(key, &value);
    }
}
