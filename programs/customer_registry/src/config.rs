//! # Configuration Module
//!
//! Deployment settings for the contract. Defaults reproduce the documented
//! invocation surface; a platform may deserialize overrides from its own
//! configuration source.

use serde::Deserialize;

/// Role a caller must hold to create or update customers
pub const CUSTOMER_ADMIN_ROLE: &str = "Bank_Home_Loan_Admin";

/// Channel every change notification is published on
pub const EVENT_CHANNEL: &str = "evtSender";

/// Credential attribute holding the caller's display name
pub const USERNAME_ATTRIBUTE: &str = "username";

/// Credential attribute holding the caller's role
pub const ROLE_ATTRIBUTE: &str = "role";

/// What an entry point does with an operation name it does not recognize
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownOperationPolicy {
    /// Return no result and no error
    #[default]
    Ignore,
    /// Fail with `UnknownOperation`
    Reject,
}

/// Settings for a deployed registry contract
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Role required by mutating operations
    pub admin_role: String,
    /// Channel change notifications are published on
    pub event_channel: String,
    /// Handling of unrecognized operation names
    pub unknown_operation: UnknownOperationPolicy,
    /// Route `UpdateCustomerInformation` through the invoke entry point
    pub update_enabled: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            admin_role: CUSTOMER_ADMIN_ROLE.to_owned(),
            event_channel: EVENT_CHANNEL.to_owned(),
            unknown_operation: UnknownOperationPolicy::Ignore,
            update_enabled: false,
        }
    }
}
