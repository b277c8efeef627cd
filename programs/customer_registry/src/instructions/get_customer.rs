//! Get customer instruction for the customer registry contract

use anchor_lang::prelude::*;
use tracing::{debug, warn};

use crate::errors::CustomerRegistryError;
use crate::stub::Stub;

use super::require_args;

/// Read the record stored for a customer
///
/// The stored bytes are returned exactly as written; they are not decoded.
///
/// # Arguments
/// * `stub` - The invocation's collaborators
/// * `args` - `[customer_id]`
///
/// # Returns
/// * `Result<Option<Vec<u8>>>` - The stored bytes, `None` when no record exists
///
/// # Errors
/// * `MissingArgument` - If no customer ID was supplied
/// * `StateStoreError` - If the ledger read fails
pub fn get_customer(stub: &Stub<'_>, args: &[String]) -> Result<Option<Vec<u8>>> {
    require_args(args, 1)?;
    let customer_id = &args[0];

    let bytes = stub.get_state(customer_id).map_err(|e| {
        warn!(error = %e, "could not fetch customer {} from ledger", customer_id);
        error!(CustomerRegistryError::StateStoreError)
    })?;

    debug!(
        found = bytes.is_some(),
        "customer {} read from ledger", customer_id
    );
    Ok(bytes)
}
