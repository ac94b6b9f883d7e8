//! Location and version of the SAM Entity API.
//!
//! Only the scheme, host, and path are fixed here. Query parameters,
//! including the caller's API key, are added by the caller:
//!
//! ```
//! # fn main() -> Result<(), url::ParseError> {
//! let mut url = sam_entity::api::api_url()?;
//! url.query_pairs_mut()
//!     .append_pair("api_key", "DEMO_KEY")
//!     .append_pair("ueiSAM", "C6M7C2FLKER5");
//! assert!(url.as_str().starts_with("https://api.sam.gov/entity-information/v2/entities?"));
//! # Ok(())
//! # }
//! ```

use url::Url;

/// Version of the upstream entity schema these types describe.
///
/// Declared for reference; responses are not checked against it.
pub const VERSION: &str = "2.5";

pub const API_SCHEME: &str = "https";
pub const API_HOST: &str = "api.sam.gov";
pub const API_PATH: &str = "entity-information/v2/entities";

/// Full endpoint URL assembled from the three parts above.
pub const API_URL: &str = "https://api.sam.gov/entity-information/v2/entities";

/// The SAM Entity API endpoint as a [`Url`] with an empty query string.
///
/// # Errors
///
/// Only if [`API_URL`] itself is malformed.
pub fn api_url() -> Result<Url, url::ParseError> {
    Url::parse(API_URL)
}
