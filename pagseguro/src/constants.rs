//! PagSeguro endpoints and fixed strings.

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.pagseguro.com";

/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.api.pagseguro.com";

/// Path of the order creation endpoint, relative to the base URL.
pub const ORDERS_PATH: &str = "./orders";

/// Suffix appended to errors whose body matches no known envelope.
pub const NON_STANDARD_ERROR_HINT: &str = "non-standard error response, contact pagseguro support";

/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "PAGSEGURO_TOKEN";

/// Environment variable selecting `production` or `sandbox`.
pub const ENV_ENVIRONMENT: &str = "PAGSEGURO_ENVIRONMENT";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "PAGSEGURO_BASE_URL";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PAGSEGURO_TIMEOUT_SECS";
