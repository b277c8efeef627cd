//! # Events Module
//!
//! This module contains the change notifications published by the customer
//! registry contract. Events let off-ledger listeners track customer changes.

use anchor_lang::prelude::*;
use serde::Serialize;

use crate::errors::CustomerRegistryError;
use crate::stub::Stub;

/// Kind of change a notification announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CustomerEventKind {
    /// A customer record was written by the create operation
    #[serde(rename = "newCustomerCreation")]
    NewCustomerCreation,
    /// A customer record was replaced by the update operation
    #[serde(rename = "customerInformationUpdate")]
    CustomerInformationUpdate,
}

/// Event payload published after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEvent {
    /// What happened
    pub event_type: CustomerEventKind,
    /// Human-readable summary naming the affected customer
    pub description: String,
}

impl CustomerEvent {
    /// Event emitted when a customer is created
    pub fn created(customer_id: &str) -> Self {
        Self {
            event_type: CustomerEventKind::NewCustomerCreation,
            description: format!("{customer_id} Successfully created"),
        }
    }

    /// Event emitted when a customer's information is updated
    pub fn updated(customer_id: &str) -> Self {
        Self {
            event_type: CustomerEventKind::CustomerInformationUpdate,
            description: format!("{customer_id} Successfully updated information"),
        }
    }

    /// Publish the event on `channel`
    ///
    /// Failure here leaves any preceding ledger write in place.
    pub fn emit(&self, stub: &mut Stub<'_>, channel: &str) -> Result<()> {
        let payload = serde_json::to_vec(self).map_err(|e| {
            tracing::warn!(error = %e, "could not encode event payload");
            error!(CustomerRegistryError::EmissionError)
        })?;
        stub.set_event(channel, &payload).map_err(|e| {
            tracing::warn!(error = %e, event = ?self.event_type, "event emission failed");
            error!(CustomerRegistryError::EmissionError)
        })
    }
}
