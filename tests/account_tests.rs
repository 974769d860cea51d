//! Account Tests
//!
//! Covers the account value model:
//! - Owner and balance accessors
//! - Debit and credit arithmetic
//! - The insufficient-funds failure path
//! - Identity-based equality
//! - Exact decimal behavior

use rust_decimal::Decimal;
use rust_teller::{Account, TellerError};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ============================================================================
// ACCESSORS
// ============================================================================

#[test]
fn test_owner_and_balance() {
    let account = Account::new("bob", dec("1000"));

    assert_eq!(account.owner(), "bob", "Owner should match construction");
    assert_eq!(account.balance(), dec("1000"), "Balance should match construction");
    assert!(account.balance() > Decimal::ZERO);
}

#[test]
fn test_unregistered_account_has_no_bank() {
    let account = Account::new("bob", dec("1000"));
    assert!(account.bank().is_none(), "Fresh account should not belong to a bank");
}

// ============================================================================
// DEBIT / CREDIT
// ============================================================================

#[test]
fn test_debit_reduces_balance() {
    let account = Account::new("bob", dec("1000"));

    account.debit(dec("100")).unwrap();
    assert_eq!(account.balance(), dec("900"));
    assert_eq!(account.balance().to_string(), "900");
}

#[test]
fn test_credit_increases_balance() {
    let account = Account::new("bob", dec("1000"));

    account.credit(dec("100"));
    assert_eq!(account.balance(), dec("1100"));
}

#[test]
fn test_debit_entire_balance() {
    let account = Account::new("bob", dec("1000"));

    // amount == balance is allowed; only amount > balance fails
    account.debit(dec("1000")).unwrap();
    assert_eq!(account.balance(), Decimal::ZERO);
}

#[test]
fn test_debit_insufficient_funds() {
    let account = Account::new("bob", dec("1000"));

    let err = account.debit(dec("1500")).unwrap_err();
    assert!(matches!(err, TellerError::InsufficientFunds));
    assert_eq!(err.to_string(), "Insufficient Funds");
    assert_eq!(account.balance(), dec("1000"), "Failed debit must not touch the balance");
}

#[test]
fn test_debit_various_amounts_keeps_balance_positive() {
    for amount in ["100", "200", "300", "500", "700"] {
        let account = Account::new("bob", dec("1000"));
        account.debit(dec(amount)).unwrap();
        assert!(
            account.balance() > Decimal::ZERO,
            "Balance should stay positive after debit of {}",
            amount
        );
    }
}

#[test]
fn test_repeated_debit() {
    let account = Account::new("bob", dec("1000"));
    for _ in 0..5 {
        account.debit(dec("100")).unwrap();
        account.credit(dec("100"));
    }
    assert_eq!(account.balance(), dec("1000"));
}

// ============================================================================
// EXACT DECIMAL ARITHMETIC
// ============================================================================

#[test]
fn test_cent_arithmetic_is_exact() {
    // 0.1 + 0.2 drifts under binary floating point; Decimal must not.
    let account = Account::new("bob", dec("0.1"));
    account.credit(dec("0.2"));
    assert_eq!(account.balance(), dec("0.3"));

    account.debit(dec("0.3")).unwrap();
    assert_eq!(account.balance(), dec("0.0"));
}

#[test]
fn test_high_precision_debit() {
    let account = Account::new("bob", dec("1000.12345"));
    account.debit(dec("0.00345")).unwrap();
    assert_eq!(account.balance(), dec("1000.12000"));
}

// ============================================================================
// IDENTITY
// ============================================================================

#[test]
fn test_equal_fields_are_not_equal_accounts() {
    let a = Account::new("alice", dec("8900"));
    let b = Account::new("alice", dec("8900"));

    assert_ne!(a, b, "Distinct accounts must compare unequal even with equal fields");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_handle_clone_is_same_account() {
    let a = Account::new("alice", dec("8900"));
    let alias = a.clone();

    assert_eq!(a, alias);
    alias.debit(dec("900")).unwrap();
    assert_eq!(a.balance(), dec("8000"), "Clones share the underlying balance");
}
