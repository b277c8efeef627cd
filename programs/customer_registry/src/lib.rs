//! # Customer Registry Contract
//!
//! A ledger-backed registry of customer records. The contract stores customers
//! in the ledger's key/value state, gates every mutation on the caller's role,
//! and announces each change on an event channel.
//!
//! ## Features
//! - Customer creation, lookup and full-document update
//! - Role-based authorization of mutating operations
//! - One change notification per successful mutation
//!
//! ## Entry points
//! - [`RegistryContract::init`] - No-op bootstrap hook
//! - [`RegistryContract::query`] - Read-only operations (`GetCustomer`)
//! - [`RegistryContract::invoke`] - Mutating operations (`CreateNewCustomer`,
//!   and `UpdateCustomerInformation` when enabled in [`RegistryConfig`])
//!
//! ## Partial failures
//! The ledger write and the event emission are separate platform calls. When
//! the write succeeds and the emission fails, the invocation returns
//! `EmissionError` and the write is not rolled back: the ledger holds the new
//! record and no notification was published.

use anchor_lang::prelude::*;
use tracing::debug;

pub mod access;
pub mod config;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod memory;
pub mod state;
pub mod stub;

pub use access::*;
pub use config::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use stub::*;

/// The contract's entry points
///
/// Holds only immutable configuration; all invocation state arrives through
/// the [`Stub`] passed to each call.
#[derive(Debug, Clone, Default)]
pub struct RegistryContract {
    config: RegistryConfig,
    gate: AccessControlGate,
}

impl RegistryContract {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            gate: AccessControlGate,
        }
    }

    /// Initialize the contract
    ///
    /// Nothing is stored at bootstrap; this always succeeds.
    ///
    /// # Arguments
    /// * `stub` - The invocation's collaborators
    /// * `_args` - Ignored
    ///
    /// # Returns
    /// * `Result<Option<Vec<u8>>>` - Always `Ok(None)`
    pub fn init(&self, stub: &mut Stub<'_>, _args: &[String]) -> Result<Option<Vec<u8>>> {
        let _entered = stub.span().clone().entered();
        debug!("customer registry initialized");
        Ok(None)
    }

    /// Run a read-only operation
    ///
    /// # Arguments
    /// * `stub` - The invocation's collaborators
    /// * `function` - The operation name
    /// * `args` - The operation's arguments
    ///
    /// # Returns
    /// * `Result<Option<Vec<u8>>>` - The operation's result, if any
    ///
    /// # Errors
    /// * `MissingArgument` - If the operation received too few arguments
    /// * `StateStoreError` - If the ledger read fails
    /// * `UnknownOperation` - If the name is not routed and unknown operations are rejected
    pub fn query(
        &self,
        stub: &mut Stub<'_>,
        function: &str,
        args: &[String],
    ) -> Result<Option<Vec<u8>>> {
        let _entered = stub.span().clone().entered();

        let Some(command) = QueryCommand::from_name(function) else {
            return self.unknown_operation("query", function);
        };
        debug!("running {}", command.name());

        match command {
            QueryCommand::GetCustomer => instructions::get_customer(stub, args),
        }
    }

    /// Run a mutating operation
    ///
    /// The caller must hold the configured admin role before any handler runs.
    ///
    /// # Arguments
    /// * `stub` - The invocation's collaborators
    /// * `function` - The operation name
    /// * `args` - The operation's arguments
    ///
    /// # Returns
    /// * `Result<Option<Vec<u8>>>` - Always `Ok(None)` on success
    ///
    /// # Events
    /// * `newCustomerCreation` / `customerInformationUpdate` - See the handlers
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller does not hold the admin role
    /// * Any error of the routed handler
    /// * `UnknownOperation` - If the name is not routed and unknown operations are rejected
    pub fn invoke(
        &self,
        stub: &mut Stub<'_>,
        function: &str,
        args: &[String],
    ) -> Result<Option<Vec<u8>>> {
        let _entered = stub.span().clone().entered();

        let command = match InvokeCommand::from_name(function) {
            Some(InvokeCommand::UpdateCustomerInformation) if !self.config.update_enabled => None,
            command => command,
        };
        let Some(command) = command else {
            return self.unknown_operation("invoke", function);
        };

        let caller = self.gate.authorize(stub, &self.config.admin_role)?;
        debug!(caller = %caller.username, "running {}", command.name());

        let channel = &self.config.event_channel;
        match command {
            InvokeCommand::CreateNewCustomer => {
                instructions::create_new_customer(stub, args, channel)?
            }
            InvokeCommand::UpdateCustomerInformation => {
                instructions::update_customer_information(stub, args, channel)?
            }
        }
        Ok(None)
    }

    fn unknown_operation(&self, entry_point: &str, function: &str) -> Result<Option<Vec<u8>>> {
        match self.config.unknown_operation {
            UnknownOperationPolicy::Ignore => {
                debug!("{} ignoring unknown operation {:?}", entry_point, function);
                Ok(None)
            }
            UnknownOperationPolicy::Reject => {
                tracing::warn!("{} rejecting unknown operation {:?}", entry_point, function);
                err!(CustomerRegistryError::UnknownOperation)
            }
        }
    }
}
