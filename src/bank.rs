//! Bank: a named registry of accounts with transfer between them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::account::Account;
use crate::error::TellerError;

pub(crate) struct BankInner {
    pub(crate) name: String,
    pub(crate) accounts: Vec<Account>,
}

/// A bank holding registered accounts.
///
/// Like [`Account`], `Bank` is a cheap-to-clone handle over shared state.
#[derive(Clone)]
pub struct Bank {
    pub(crate) inner: Rc<RefCell<BankInner>>,
}

impl Bank {
    pub fn new() -> Self {
        Bank {
            inner: Rc::new(RefCell::new(BankInner {
                name: String::new(),
                accounts: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    pub fn set_name(&self, name: &str) {
        self.inner.borrow_mut().name = name.to_string();
    }

    /// Register an account and point its back-reference at this bank.
    /// Registering the same account twice is a no-op.
    pub fn add_account(&self, account: &Account) {
        if self.holds(account) {
            return;
        }
        account.attach_to(self);
        self.inner.borrow_mut().accounts.push(account.clone());
    }

    /// Move `amount` from one account to another.
    ///
    /// The debit runs first; if it fails the destination is untouched and
    /// the error is returned as-is. Credit cannot fail, so no rollback
    /// path exists.
    pub fn transfer(
        &self,
        from: &Account,
        to: &Account,
        amount: Decimal,
    ) -> Result<(), TellerError> {
        from.debit(amount)?;
        to.credit(amount);
        debug!(
            "transfer {} from {} to {}",
            amount,
            from.owner(),
            to.owner()
        );
        Ok(())
    }

    /// Snapshot of the registered accounts.
    pub fn accounts(&self) -> Vec<Account> {
        self.inner.borrow().accounts.clone()
    }

    /// First registered account with a matching owner name.
    pub fn find_account(&self, owner: &str) -> Option<Account> {
        self.inner
            .borrow()
            .accounts
            .iter()
            .find(|a| a.owner() == owner)
            .cloned()
    }

    /// Membership by identity: true only for the account itself, never
    /// for a different account with equal fields.
    pub fn holds(&self, account: &Account) -> bool {
        self.inner.borrow().accounts.iter().any(|a| a == account)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().accounts.is_empty()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Bank {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Bank {}

impl fmt::Debug for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Bank")
            .field("name", &inner.name)
            .field("accounts", &inner.accounts)
            .finish()
    }
}
