//! # Access Control
//!
//! Role check run in front of every mutating operation. The caller's role is
//! read from its credential on each invocation and never cached.

use anchor_lang::prelude::*;
use tracing::{debug, warn};

use crate::config::{ROLE_ATTRIBUTE, USERNAME_ATTRIBUTE};
use crate::errors::CustomerRegistryError;
use crate::stub::Stub;

/// The authenticated caller of an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub username: String,
    pub role: String,
}

/// Authorizes callers by exact role match
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessControlGate;

impl AccessControlGate {
    /// Resolve the caller and require that it holds `required_role`
    ///
    /// # Returns
    /// * `Ok(Caller)` - The caller holds the role
    /// * `Err(Unauthorized)` - The role differs, or it could not be resolved.
    ///   The caller's name and role are attached as compared values.
    pub fn authorize(&self, stub: &Stub<'_>, required_role: &str) -> Result<Caller> {
        // A missing name cannot grant access on its own, so it is not fatal here
        let username = stub.read_attribute(USERNAME_ATTRIBUTE).unwrap_or_else(|e| {
            warn!(error = %e, "caller name unavailable");
            String::new()
        });

        let role = match stub.read_attribute(ROLE_ATTRIBUTE) {
            Ok(role) => role,
            Err(e) => {
                warn!(error = %e, caller = %username, "caller role unavailable, denying access");
                return Err(
                    error!(CustomerRegistryError::Unauthorized).with_values((username, String::new()))
                );
            }
        };

        if role != required_role {
            warn!(
                "{} with role {} does not have access, {} required",
                username, role, required_role
            );
            return Err(error!(CustomerRegistryError::Unauthorized).with_values((username, role)));
        }

        debug!(caller = %username, role = %role, "caller authorized");
        Ok(Caller { username, role })
    }
}
