//! # Instructions Module
//!
//! This module contains the customer operations and the closed sets of
//! operation names each entry point routes.

use anchor_lang::prelude::*;

use crate::errors::CustomerRegistryError;

pub mod create_new_customer;
pub mod get_customer;
pub mod update_customer_information;

pub use create_new_customer::*;
pub use get_customer::*;
pub use update_customer_information::*;

/// Operations routed by the read-only query entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCommand {
    GetCustomer,
}

impl QueryCommand {
    /// Parse an operation name; `None` for anything the query path does not route
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GetCustomer" => Some(Self::GetCustomer),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetCustomer => "GetCustomer",
        }
    }
}

/// Operations routed by the mutating invoke entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeCommand {
    CreateNewCustomer,
    UpdateCustomerInformation,
}

impl InvokeCommand {
    /// Parse an operation name; `None` for anything the invoke path does not route
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateNewCustomer" => Some(Self::CreateNewCustomer),
            "UpdateCustomerInformation" => Some(Self::UpdateCustomerInformation),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateNewCustomer => "CreateNewCustomer",
            Self::UpdateCustomerInformation => "UpdateCustomerInformation",
        }
    }
}

/// Require at least `min` arguments
pub(crate) fn require_args(args: &[String], min: usize) -> Result<()> {
    require!(args.len() >= min, CustomerRegistryError::MissingArgument);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_routes_only_reads() {
        assert_eq!(QueryCommand::from_name("GetCustomer"), Some(QueryCommand::GetCustomer));
        assert_eq!(QueryCommand::from_name("CreateNewCustomer"), None);
        assert_eq!(QueryCommand::from_name("getcustomer"), None);
    }

    #[test]
    fn invoke_names_round_trip() {
        for command in [
            InvokeCommand::CreateNewCustomer,
            InvokeCommand::UpdateCustomerInformation,
        ] {
            assert_eq!(InvokeCommand::from_name(command.name()), Some(command));
        }
        assert_eq!(InvokeCommand::from_name("GetCustomer"), None);
    }
}
