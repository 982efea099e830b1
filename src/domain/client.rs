//! HTTP lookups against the domain-availability API.

use futures::future::try_join_all;
use tracing::{debug, field, info, info_span, warn, Instrument, Span};

use crate::error::AgentError;
use crate::provider::http::status_to_error;

use super::deps::Deps;
use super::types::{AvailabilityResponse, DomainInfo};

/// Credit type sent with every lookup (domain availability credits).
pub const CREDIT_TYPE: &str = "DA";

/// Look up availability for each name, returning one record per name in
/// input order.
///
/// Without an API key every name is reported unavailable and no request is
/// made. With a key, the first failed lookup aborts the batch.
pub async fn check_availability(
    deps: &Deps,
    domain_names: &[String],
) -> Result<Vec<DomainInfo>, AgentError> {
    if domain_names.is_empty() {
        return Err(AgentError::InvalidArgument(
            "at least one domain name is required".into(),
        ));
    }

    let Some(api_key) = deps.domain_api_key() else {
        debug!(
            count = domain_names.len(),
            "no domain API key; returning placeholder availability"
        );
        return Ok(domain_names
            .iter()
            .map(|name| DomainInfo::placeholder(name.as_str()))
            .collect());
    };

    if deps.concurrent_lookups() {
        return try_join_all(
            domain_names
                .iter()
                .map(|name| lookup_domain(deps, api_key, name)),
        )
        .await;
    }

    let mut results = Vec::with_capacity(domain_names.len());
    for name in domain_names {
        results.push(lookup_domain(deps, api_key, name).await?);
    }
    Ok(results)
}

/// Query the API for a single domain name.
pub async fn lookup_domain(
    deps: &Deps,
    api_key: &str,
    domain_name: &str,
) -> Result<DomainInfo, AgentError> {
    let span = info_span!(
        "calling domain availability API",
        domain_name = %domain_name,
        credits = CREDIT_TYPE,
        status = field::Empty,
        response = field::Empty,
    );

    async move {
        let mut request = deps.client().get(deps.endpoint()).query(&[
            ("domainName", domain_name),
            ("credits", CREDIT_TYPE),
            ("apiKey", api_key),
        ]);
        if let Some(timeout) = deps.request_timeout() {
            request = request.timeout(timeout);
        }

        let resp = request.send().await?;
        let status = resp.status();
        Span::current().record("status", status.as_u16());

        let body = resp.text().await?;
        if !status.is_success() {
            warn!("domain availability lookup rejected");
            return Err(status_to_error(status.as_u16(), &body));
        }
        Span::current().record("response", body.as_str());

        let info = serde_json::from_str::<AvailabilityResponse>(&body)?.into_info();
        info!(availability = %info.availability, "domain availability checked");
        Ok(info)
    }
    .instrument(span)
    .await
}
