//! Update customer instruction for the customer registry contract

use anchor_lang::prelude::*;
use tracing::{info, warn};

use crate::errors::CustomerRegistryError;
use crate::events::CustomerEvent;
use crate::state::Customer;
use crate::stub::Stub;

use super::require_args;

/// Replace a customer's record with an updated document
///
/// The payload must decode as a customer record. Its `customerId` is
/// overwritten with the ledger key so a record can never be moved to another
/// identity, then the record is stored in canonical JSON.
///
/// # Arguments
/// * `stub` - The invocation's collaborators
/// * `args` - `[customer_id, updated_payload]`
/// * `channel` - Channel the update event is published on
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `customerInformationUpdate` - Emitted once the record is written
///
/// # Errors
/// * `MissingArgument` - If fewer than two arguments were supplied
/// * `SerializationError` - If the payload is not a customer record; nothing is written
/// * `StateStoreError` - If the ledger write fails
/// * `EmissionError` - If the event could not be published; the record stays written
pub fn update_customer_information(
    stub: &mut Stub<'_>,
    args: &[String],
    channel: &str,
) -> Result<()> {
    require_args(args, 2)?;
    let customer_id = &args[0];

    let mut customer = Customer::from_slice(args[1].as_bytes()).map_err(|e| {
        warn!(error = %e, "malformed update for customer {}", customer_id);
        error!(CustomerRegistryError::SerializationError)
    })?;
    customer.stamp_id(customer_id);

    let bytes = customer.to_vec().map_err(|e| {
        warn!(error = %e, "could not encode customer {}", customer_id);
        error!(CustomerRegistryError::SerializationError)
    })?;

    stub.put_state(customer_id, &bytes).map_err(|e| {
        warn!(error = %e, "could not save customer {} after update", customer_id);
        error!(CustomerRegistryError::StateStoreError)
    })?;

    CustomerEvent::updated(customer_id).emit(stub, channel)?;

    info!("Customer {} information updated", customer_id);
    Ok(())
}
