use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::bank::{Bank, BankInner};
use crate::error::TellerError;

/// Unique handle assigned to every account at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    fn generate() -> Self {
        AccountId(Uuid::new_v4())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) struct AccountInner {
    id: AccountId,
    owner: String,
    balance: Decimal,
    // Set only by Bank::add_account. Weak so the account never keeps
    // its bank alive.
    bank: Weak<RefCell<BankInner>>,
}

/// A single account: an owner name and an exact decimal balance.
///
/// `Account` is a cheap-to-clone handle; clones refer to the same
/// underlying account. Two separately constructed accounts are never
/// equal, even with identical owner and balance.
#[derive(Clone)]
pub struct Account {
    pub(crate) inner: Rc<RefCell<AccountInner>>,
}

impl Account {
    pub fn new(owner: &str, balance: Decimal) -> Self {
        Account {
            inner: Rc::new(RefCell::new(AccountInner {
                id: AccountId::generate(),
                owner: owner.to_string(),
                balance,
                bank: Weak::new(),
            })),
        }
    }

    pub fn id(&self) -> AccountId {
        self.inner.borrow().id
    }

    pub fn owner(&self) -> String {
        self.inner.borrow().owner.clone()
    }

    pub fn balance(&self) -> Decimal {
        self.inner.borrow().balance
    }

    /// The bank this account is registered with, if any.
    pub fn bank(&self) -> Option<Bank> {
        self.inner.borrow().bank.upgrade().map(|inner| Bank { inner })
    }

    /// Subtract `amount` from the balance.
    pub fn debit(&self, amount: Decimal) -> Result<(), TellerError> {
        let mut inner = self.inner.borrow_mut();
        if amount > inner.balance {
            return Err(TellerError::InsufficientFunds);
        }
        inner.balance -= amount;
        Ok(())
    }

    /// Add `amount` to the balance. No upper bound.
    pub fn credit(&self, amount: Decimal) {
        self.inner.borrow_mut().balance += amount;
    }

    pub(crate) fn attach_to(&self, bank: &Bank) {
        self.inner.borrow_mut().bank = Rc::downgrade(&bank.inner);
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Account {}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Account")
            .field("id", &inner.id)
            .field("owner", &inner.owner)
            .field("balance", &inner.balance)
            .finish()
    }
}
