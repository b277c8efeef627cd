//! # Stub Module
//!
//! Interfaces to the collaborators the ledger platform hands the contract for a
//! single invocation: the key/value state store, the caller's identity
//! attributes and the event channel.
//!
//! All three are synchronous. A blocked collaborator call blocks the whole
//! invocation; ordering across invocations is the platform's concern.

use thiserror::Error;
use tracing::{info_span, Span};

/// Failures reported by the platform collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StubError {
    #[error("Ledger read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Ledger write failed for key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Couldn't get attribute {name}: {reason}")]
    Attribute { name: String, reason: String },

    #[error("Event emission failed on channel {channel}: {reason}")]
    Emit { channel: String, reason: String },
}

/// Keyed byte-blob store backed by the ledger
pub trait LedgerState {
    /// Read the value stored at `key`; `None` when nothing is stored there
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError>;

    /// Store `value` at `key`, replacing whatever was there
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError>;
}

/// Read-only view of the attributes bound to the caller's credential
pub trait IdentityAttributes {
    fn read_attribute(&self, name: &str) -> Result<String, StubError>;
}

/// Publisher for the invocation's change notification
pub trait EventSink {
    fn set_event(&mut self, channel: &str, payload: &[u8]) -> Result<(), StubError>;
}

/// Everything one invocation may touch
///
/// Built by the platform per invocation and dropped when it completes, so the
/// contract never carries state from one call to the next. The span scopes all
/// log output of the invocation.
pub struct Stub<'a> {
    ledger: &'a mut dyn LedgerState,
    identity: &'a dyn IdentityAttributes,
    events: &'a mut dyn EventSink,
    span: Span,
}

impl<'a> Stub<'a> {
    pub fn new(
        tx_id: &str,
        ledger: &'a mut dyn LedgerState,
        identity: &'a dyn IdentityAttributes,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            ledger,
            identity,
            events,
            span: info_span!("invocation", tx_id = %tx_id),
        }
    }

    pub fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        self.ledger.get_state(key)
    }

    pub fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError> {
        self.ledger.put_state(key, value)
    }

    pub fn read_attribute(&self, name: &str) -> Result<String, StubError> {
        self.identity.read_attribute(name)
    }

    pub fn set_event(&mut self, channel: &str, payload: &[u8]) -> Result<(), StubError> {
        self.events.set_event(channel, payload)
    }

    /// The span all log output of this invocation belongs to
    pub fn span(&self) -> &Span {
        &self.span
    }
}
