//! Property-based tests for the registry's storage invariants.

use customer_registry::memory::{MemoryLedger, RecordingEvents, StaticIdentity};
use customer_registry::{
    Customer, CustomerHistory, FinancialInfo, IdentificationDocs, PersonalInfo, RegistryConfig,
    RegistryContract, Stub, CUSTOMER_ADMIN_ROLE,
};
use proptest::prelude::*;

fn arb_identification() -> impl Strategy<Value = IdentificationDocs> {
    (any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>()).prop_map(
        |(national_id, passport, tax_id, driving_license, voter_id)| IdentificationDocs {
            national_id,
            passport,
            tax_id,
            driving_license,
            voter_id,
        },
    )
}

fn arb_personal_info() -> impl Strategy<Value = PersonalInfo> {
    (
        any::<String>(),
        any::<String>(),
        any::<String>(),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}|.*",
        any::<String>(),
        any::<String>(),
        arb_identification(),
    )
        .prop_map(
            |(firstname, lastname, address, dob, email, mobile, identification)| PersonalInfo {
                firstname,
                lastname,
                address,
                dob,
                email,
                mobile,
                identification,
            },
        )
}

fn arb_financial_info() -> impl Strategy<Value = FinancialInfo> {
    (any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>()).prop_map(
        |(monthly_salary, monthly_rent, other_expenditure, monthly_loan_payment)| FinancialInfo {
            monthly_salary,
            monthly_rent,
            other_expenditure,
            monthly_loan_payment,
        },
    )
}

fn arb_history() -> impl Strategy<Value = CustomerHistory> {
    (
        any::<String>(),
        any::<String>(),
        any::<String>(),
        any::<String>(),
    )
        .prop_map(
            |(police_case, law_case, fraud_case, terrorism_case)| CustomerHistory {
                police_case,
                law_case,
                fraud_case,
                terrorism_case,
            },
        )
}

/// Generates a customer with every field populated, including any embedded id.
fn arb_customer() -> impl Strategy<Value = Customer> {
    (
        any::<String>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        arb_personal_info(),
        arb_financial_info(),
        arb_history(),
    )
        .prop_map(
            |(id, loans, pending, completed, personal_info, financial_info, customer_history)| {
                Customer {
                    id,
                    number_of_loans: loans,
                    number_of_pending_loans: pending,
                    number_of_completed_loans: completed,
                    personal_info,
                    financial_info,
                    customer_history,
                }
            },
        )
}

fn run(
    contract: &RegistryContract,
    ledger: &mut MemoryLedger,
    events: &mut RecordingEvents,
    query: bool,
    function: &str,
    args: Vec<String>,
) -> anchor_lang::Result<Option<Vec<u8>>> {
    let identity = StaticIdentity::caller("asha.clerk", CUSTOMER_ADMIN_ROLE);
    let mut stub = Stub::new("tx-prop", ledger, &identity, events);
    if query {
        contract.query(&mut stub, function, &args)
    } else {
        contract.invoke(&mut stub, function, &args)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The stored record always carries the key it was updated under.
    #[test]
    fn update_stores_record_under_its_key(
        key in any::<String>(),
        customer in arb_customer(),
    ) {
        let contract = RegistryContract::new(RegistryConfig {
            update_enabled: true,
            ..RegistryConfig::default()
        });
        let mut ledger = MemoryLedger::new();
        let mut events = RecordingEvents::new();
        let payload = String::from_utf8(customer.to_vec().unwrap()).unwrap();

        run(&contract, &mut ledger, &mut events, false,
            "UpdateCustomerInformation", vec![key.clone(), payload]).unwrap();
        let stored = run(&contract, &mut ledger, &mut events, true,
            "GetCustomer", vec![key.clone()]).unwrap().unwrap();

        let mut expected = customer;
        expected.id = key.clone();
        let decoded = Customer::from_slice(&stored).unwrap();
        prop_assert_eq!(&decoded.id, &key);
        prop_assert_eq!(decoded, expected);
        prop_assert_eq!(events.emitted().len(), 1);
    }

    /// Created payloads are read back byte-for-byte, whatever they contain.
    #[test]
    fn create_then_get_returns_payload_unchanged(
        key in any::<String>(),
        payload in any::<String>(),
    ) {
        let contract = RegistryContract::default();
        let mut ledger = MemoryLedger::new();
        let mut events = RecordingEvents::new();

        run(&contract, &mut ledger, &mut events, false,
            "CreateNewCustomer", vec![key.clone(), payload.clone()]).unwrap();
        let stored = run(&contract, &mut ledger, &mut events, true,
            "GetCustomer", vec![key]).unwrap();

        prop_assert_eq!(stored, Some(payload.into_bytes()));
    }
}
