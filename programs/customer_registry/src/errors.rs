//! # Error Module
//!
//! This module contains all custom error types for the customer registry contract.
//! Every failure is returned to the invoking platform as the invocation's outcome;
//! the contract never retries locally.

use anchor_lang::prelude::*;

/// Custom error codes for the customer registry contract
#[error_code]
pub enum CustomerRegistryError {
    /// Error when fewer arguments were supplied than the operation requires
    #[msg("Missing argument: The operation received fewer arguments than it requires")]
    MissingArgument,

    /// Error when a customer payload is not a well-formed customer record
    #[msg("Serialization error: Failed to serialize or deserialize the customer record")]
    SerializationError,

    /// Error when the ledger state store rejects a read or a write
    #[msg("State store error: The ledger state could not be read or written")]
    StateStoreError,

    /// Error when the caller's role does not grant the operation, or the role
    /// attribute could not be resolved
    ///
    /// The caller's resolved name and role are attached as compared values:
    /// `Left` is the caller's name, `Right` its role (empty if unresolved).
    #[msg("Unauthorized: The caller's role does not have access to this operation")]
    Unauthorized,

    /// Error when the change notification could not be published
    ///
    /// The ledger write that preceded the emission is not rolled back.
    #[msg("Emission error: Failed to publish the change notification")]
    EmissionError,

    /// Error when an operation name is not recognized and the contract is
    /// configured to reject unknown operations
    #[msg("Unknown operation: The operation name is not recognized by this entry point")]
    UnknownOperation,
}
