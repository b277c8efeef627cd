//! Create customer instruction for the customer registry contract

use anchor_lang::prelude::*;
use tracing::{info, warn};

use crate::errors::CustomerRegistryError;
use crate::events::CustomerEvent;
use crate::stub::Stub;

use super::require_args;

/// Store a new customer record
///
/// The payload is written exactly as received. It is not checked against the
/// customer schema, and an existing record under the same ID is replaced.
///
/// # Arguments
/// * `stub` - The invocation's collaborators
/// * `args` - `[customer_id, customer_payload]`
/// * `channel` - Channel the creation event is published on
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `newCustomerCreation` - Emitted once the record is written
///
/// # Errors
/// * `MissingArgument` - If fewer than two arguments were supplied
/// * `StateStoreError` - If the ledger write fails
/// * `EmissionError` - If the event could not be published; the record stays written
pub fn create_new_customer(stub: &mut Stub<'_>, args: &[String], channel: &str) -> Result<()> {
    require_args(args, 2)?;
    let customer_id = &args[0];
    let customer_data = &args[1];

    stub.put_state(customer_id, customer_data.as_bytes())
        .map_err(|e| {
            warn!(error = %e, "could not save customer {} to ledger", customer_id);
            error!(CustomerRegistryError::StateStoreError)
        })?;

    CustomerEvent::created(customer_id).emit(stub, channel)?;

    info!("Customer {} created", customer_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use anchor_lang::error::Error;

    use super::*;
    use crate::config::EVENT_CHANNEL;
    use crate::memory::{MemoryLedger, RecordingEvents, StaticIdentity};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn writes_payload_verbatim_and_emits() {
        let mut ledger = MemoryLedger::new();
        let identity = StaticIdentity::new();
        let mut events = RecordingEvents::new();
        let mut stub = Stub::new("tx-create", &mut ledger, &identity, &mut events);

        create_new_customer(&mut stub, &args(&["cust-001", "{ not validated"]), EVENT_CHANNEL)
            .unwrap();
        drop(stub);

        assert_eq!(ledger.value("cust-001"), Some(&b"{ not validated"[..]));
        assert_eq!(events.emitted().len(), 1);
        assert_eq!(events.emitted()[0].0, EVENT_CHANNEL);
    }

    #[test]
    fn existing_record_is_replaced() {
        let mut ledger = MemoryLedger::new();
        let identity = StaticIdentity::new();
        let mut events = RecordingEvents::new();
        let mut stub = Stub::new("tx-create", &mut ledger, &identity, &mut events);

        create_new_customer(&mut stub, &args(&["cust-001", "first"]), EVENT_CHANNEL).unwrap();
        create_new_customer(&mut stub, &args(&["cust-001", "second"]), EVENT_CHANNEL).unwrap();
        drop(stub);

        assert_eq!(ledger.value("cust-001"), Some(&b"second"[..]));
        assert_eq!(ledger.writes(), 2);
    }

    #[test]
    fn write_failure_skips_emission() {
        let mut ledger = MemoryLedger::new();
        ledger.fail_writes(true);
        let identity = StaticIdentity::new();
        let mut events = RecordingEvents::new();
        let mut stub = Stub::new("tx-create", &mut ledger, &identity, &mut events);

        let err = create_new_customer(&mut stub, &args(&["cust-001", "{}"]), EVENT_CHANNEL)
            .unwrap_err();
        drop(stub);

        assert_eq!(err, Error::from(CustomerRegistryError::StateStoreError));
        assert!(events.emitted().is_empty());
    }

    #[test]
    fn emission_failure_keeps_the_write() {
        let mut ledger = MemoryLedger::new();
        let identity = StaticIdentity::new();
        let mut events = RecordingEvents::new();
        events.fail(true);
        let mut stub = Stub::new("tx-create", &mut ledger, &identity, &mut events);

        let err = create_new_customer(&mut stub, &args(&["cust-001", "{}"]), EVENT_CHANNEL)
            .unwrap_err();
        drop(stub);

        assert_eq!(err, Error::from(CustomerRegistryError::EmissionError));
        assert_eq!(ledger.value("cust-001"), Some(&b"{}"[..]));
    }
}
