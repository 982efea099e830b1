//! Domain-availability lookup: records, dependencies, HTTP client and tool.

pub mod client;
pub mod deps;
pub mod tool;
pub mod types;

pub use client::{check_availability, lookup_domain, CREDIT_TYPE};
pub use deps::Deps;
pub use tool::{domain_availability_tool, DomainQuery, TOOL_NAME};
pub use types::{Availability, DomainInfo};

/// Endpoint of the WhoisXML domain availability API.
pub const DOMAIN_AVAILABILITY_API_ENDPOINT: &str =
    "https://domain-availability.whoisxmlapi.com/api/v1";

/// Instructions given to the model on every run.
pub const SYSTEM_PROMPT: &str = "Be concise, reply with one sentence. \
Use the `get_domain_availability` tool to check domain availability. \
If a domain is not available, help the user find an alternative domain name.";

/// Retries allowed per run by default.
pub const DEFAULT_RETRIES: u32 = 2;
