//! In-memory collaborators for running the contract without a ledger platform.
//!
//! Each one can be told to fail so error paths can be exercised.

use std::collections::HashMap;

use crate::stub::{EventSink, IdentityAttributes, LedgerState, StubError};

/// Hash map standing in for the ledger key space
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    data: HashMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Value stored at `key`, bypassing failure injection
    pub fn value(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LedgerState for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        if self.fail_reads {
            return Err(StubError::Read {
                key: key.to_owned(),
                reason: "injected read failure".to_owned(),
            });
        }
        Ok(self.data.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError> {
        if self.fail_writes {
            return Err(StubError::Write {
                key: key.to_owned(),
                reason: "injected write failure".to_owned(),
            });
        }
        self.data.insert(key.to_owned(), value.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Fixed set of caller attributes
#[derive(Debug, Default, Clone)]
pub struct StaticIdentity {
    attributes: HashMap<String, String>,
}

impl StaticIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller with the given `username` and `role` attributes
    pub fn caller(username: &str, role: &str) -> Self {
        Self::new()
            .with_attribute(crate::config::USERNAME_ATTRIBUTE, username)
            .with_attribute(crate::config::ROLE_ATTRIBUTE, role)
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl IdentityAttributes for StaticIdentity {
    fn read_attribute(&self, name: &str) -> Result<String, StubError> {
        self.attributes
            .get(name)
            .cloned()
            .ok_or_else(|| StubError::Attribute {
                name: name.to_owned(),
                reason: "attribute not present in credential".to_owned(),
            })
    }
}

/// Records every emitted event in order
#[derive(Debug, Default, Clone)]
pub struct RecordingEvents {
    emitted: Vec<(String, Vec<u8>)>,
    fail: bool,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent emission fail
    pub fn fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Channel and payload of every successful emission
    pub fn emitted(&self) -> &[(String, Vec<u8>)] {
        &self.emitted
    }
}

impl EventSink for RecordingEvents {
    fn set_event(&mut self, channel: &str, payload: &[u8]) -> Result<(), StubError> {
        if self.fail {
            return Err(StubError::Emit {
                channel: channel.to_owned(),
                reason: "injected emission failure".to_owned(),
            });
        }
        self.emitted.push((channel.to_owned(), payload.to_vec()));
        Ok(())
    }
}
