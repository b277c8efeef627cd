//! # State Module
//!
//! This module contains the customer record stored in the ledger and its
//! canonical JSON encoding. Field names on the wire are fixed and case-sensitive.

use serde::{Deserialize, Deserializer, Serialize};

/// The customer record stored at ledger key `customer_id`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// The customer identifier; also the ledger key, immutable after creation
    #[serde(rename = "customerId", deserialize_with = "null_as_default")]
    pub id: String,
    /// Total number of loans taken
    #[serde(rename = "numberOfLoans", deserialize_with = "null_as_default")]
    pub number_of_loans: u32,
    /// Number of loans still being processed
    #[serde(rename = "numberOfPendingLoans", deserialize_with = "null_as_default")]
    pub number_of_pending_loans: u32,
    /// Number of loans fully repaid
    #[serde(rename = "numberOfCompletedLoans", deserialize_with = "null_as_default")]
    pub number_of_completed_loans: u32,
    /// Personal and contact details
    #[serde(rename = "personalInfo", deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    /// Monthly income and outgoings
    #[serde(rename = "financialInfo", deserialize_with = "null_as_default")]
    pub financial_info: FinancialInfo,
    /// Case references against the customer
    #[serde(rename = "customerHistory", deserialize_with = "null_as_default")]
    pub customer_history: CustomerHistory,
}

/// Personal details of a customer
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    /// Date of birth, kept as the caller formatted it
    #[serde(rename = "DOB", deserialize_with = "null_as_default")]
    pub dob: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identification: IdentificationDocs,
}

/// Government-issued identifiers
///
/// Each value is an opaque number; checksums are not validated here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentificationDocs {
    /// National identity number
    #[serde(rename = "aadhar", deserialize_with = "null_as_default")]
    pub national_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub passport: i64,
    /// Tax identifier
    #[serde(rename = "pan", deserialize_with = "null_as_default")]
    pub tax_id: i64,
    #[serde(rename = "drivingLicense", deserialize_with = "null_as_default")]
    pub driving_license: i64,
    #[serde(rename = "voterId", deserialize_with = "null_as_default")]
    pub voter_id: i64,
}

/// Monthly financial figures, in whatever unit the caller uses
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_salary: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_rent: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub other_expenditure: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_loan_payment: i64,
}

/// Free-text case references; an empty string means no case
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub police_case: String,
    #[serde(deserialize_with = "null_as_default")]
    pub law_case: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fraud_case: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terrorism_case: String,
}

impl Customer {
    /// Decode a customer record from its JSON bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Encode the customer record as canonical JSON
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Replace the record's identifier with the ledger key it is stored under
    pub fn stamp_id(&mut self, customer_id: &str) {
        self.id = customer_id.to_owned();
    }
}

/// Decode a field, treating an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
