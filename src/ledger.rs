use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of accounts the ledger holds before `create` starts failing.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// The referenced account ID is not present in the ledger.
    #[error("account ID {0} does not exist")]
    AccountNotFound(u32),

    /// The amount is not positive or, for withdrawals and transfers,
    /// exceeds the available balance. Both conditions block the operation
    /// and leave every balance untouched.
    #[error("invalid amount: {0:.2}")]
    InvalidAmount(f64),

    /// The ledger already holds its maximum number of accounts.
    #[error("ledger is full ({0} accounts)")]
    CapacityExceeded(usize),
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Account {
    /// Assigned by the ledger on creation, never reused afterwards.
    pub id: u32,

    pub name: String,

    /// Using an `f64` here is not advised but done for simplicity.
    /// Balances should be stored with fixed precision to ensure correct
    /// and precise arithmetic operations.
    pub balance: f64,
}

/// An in-memory collection of accounts in insertion order.
///
/// Every operation is synchronous and mutates nothing when it fails.
/// The ledger carries no locking of its own; expose it behind external
/// serialization if it is ever shared between threads.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    capacity: usize,
    next_id: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Ledger {
            accounts: Vec::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Opens a new account and returns it.
    ///
    /// The initial balance is accepted as given, sign included; only the
    /// operations after creation guard against bad amounts. Callers are
    /// expected to supply a non-empty name.
    pub fn create(&mut self, name: &str, initial_balance: f64) -> Result<&Account, LedgerError> {
        if self.accounts.len() >= self.capacity {
            return Err(LedgerError::CapacityExceeded(self.capacity));
        }

        let account = Account {
            id: self.next_id,
            name: name.to_owned(),
            balance: initial_balance,
        };
        self.next_id += 1;
        self.accounts.push(account);

        let last = self.accounts.len() - 1;
        Ok(&self.accounts[last])
    }

    /// All accounts in insertion order.
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// Position of the first account with this ID. First match wins.
    pub fn find(&self, id: u32) -> Option<usize> {
        self.accounts.iter().position(|account| account.id == id)
    }

    /// Deletes the account, shifting every following account one position
    /// toward the start. Returns the removed account.
    pub fn remove(&mut self, id: u32) -> Result<Account, LedgerError> {
        let position = self.find(id).ok_or(LedgerError::AccountNotFound(id))?;
        Ok(self.accounts.remove(position))
    }

    pub fn deposit(&mut self, id: u32, amount: f64) -> Result<(), LedgerError> {
        let position = self.find(id).ok_or(LedgerError::AccountNotFound(id))?;

        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.accounts[position].balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, id: u32, amount: f64) -> Result<(), LedgerError> {
        let position = self.find(id).ok_or(LedgerError::AccountNotFound(id))?;

        if amount <= 0.0 || amount > self.accounts[position].balance {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.accounts[position].balance -= amount;
        Ok(())
    }

    /// Moves `amount` between two accounts. Both endpoints must resolve
    /// before any balance changes, so a failed transfer mutates nothing.
    /// A transfer from an account to itself is allowed; the amount is
    /// still validated and the net balance change is nil.
    pub fn transfer(&mut self, from: u32, to: u32, amount: f64) -> Result<(), LedgerError> {
        let from_position = self.find(from).ok_or(LedgerError::AccountNotFound(from))?;
        let to_position = self.find(to).ok_or(LedgerError::AccountNotFound(to))?;

        if amount <= 0.0 || amount > self.accounts[from_position].balance {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.accounts[from_position].balance -= amount;
        self.accounts[to_position].balance += amount;
        Ok(())
    }

    /// Current ID, name and balance of the account.
    pub fn check_balance(&self, id: u32) -> Result<&Account, LedgerError> {
        let position = self.find(id).ok_or(LedgerError::AccountNotFound(id))?;
        Ok(&self.accounts[position])
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
