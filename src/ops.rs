use serde::Deserialize;

use crate::ledger::Ledger;

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OpKind {
    /// Opens a new account with a name and an initial balance. The ID is
    /// assigned by the ledger, so the row carries no account column.
    ///
    /// |type     |account|to     |name   |amount |
    /// |---------|-------|-------|-------|-------|
    /// |create   |       |       |alice  |100.0  |
    Create,

    /// Credits an account.
    ///
    /// |type     |account|to     |name   |amount |
    /// |---------|-------|-------|-------|-------|
    /// |deposit  |1      |       |       |25.0   |
    Deposit,

    /// Debits an account. Fails when the amount is not positive or
    /// exceeds the balance.
    ///
    /// |type     |account|to     |name   |amount |
    /// |---------|-------|-------|-------|-------|
    /// |withdraw |1      |       |       |10.0   |
    Withdraw,

    /// Moves an amount between two accounts, debiting `account` and
    /// crediting `to`. Either both balances change or neither does.
    ///
    /// |type     |account|to     |name   |amount |
    /// |---------|-------|-------|-------|-------|
    /// |transfer |1      |2      |       |30.0   |
    Transfer,

    /// Closes an account. The remaining accounts keep their order and
    /// the freed ID is never handed out again.
    ///
    /// |type     |account|to     |name   |amount |
    /// |---------|-------|-------|-------|-------|
    /// |remove   |1      |       |       |       |
    Remove,

    /// Looks an account up by ID. A pure existence check in batch mode;
    /// the account dump at the end of the run shows the balances.
    ///
    /// |type     |account|to     |name   |amount |
    /// |---------|-------|-------|-------|-------|
    /// |balance  |2      |       |       |       |
    Balance,
}

/// One CSV record of the batch input. Which of the optional columns must
/// be present depends on the operation type; a missing required column is
/// reported as an error rather than applied half-formed.
#[derive(Debug, Deserialize, Clone)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OpKind,

    /// Account ID the operation targets (the source side for transfers).
    pub account: Option<u32>,

    /// Receiving account ID, transfers only.
    pub to: Option<u32>,

    /// Account name, creates only.
    pub name: Option<String>,

    pub amount: Option<f64>,
}

impl Operation {
    pub fn apply_to(&self, ledger: &mut Ledger) -> Result<(), Box<dyn std::error::Error>> {
        match self.kind {
            OpKind::Create => {
                let name = self.name.as_deref().ok_or("create requires a name")?;
                let amount = self.amount.ok_or("create requires an amount")?;
                ledger.create(name, amount)?;
            }
            OpKind::Deposit => {
                let id = self.account.ok_or("deposit requires an account")?;
                let amount = self.amount.ok_or("deposit requires an amount")?;
                ledger.deposit(id, amount)?;
            }
            OpKind::Withdraw => {
                let id = self.account.ok_or("withdraw requires an account")?;
                let amount = self.amount.ok_or("withdraw requires an amount")?;
                ledger.withdraw(id, amount)?;
            }
            OpKind::Transfer => {
                let from = self.account.ok_or("transfer requires an account")?;
                let to = self.to.ok_or("transfer requires a receiving account")?;
                let amount = self.amount.ok_or("transfer requires an amount")?;
                ledger.transfer(from, to, amount)?;
            }
            OpKind::Remove => {
                let id = self.account.ok_or("remove requires an account")?;
                ledger.remove(id)?;
            }
            OpKind::Balance => {
                let id = self.account.ok_or("balance requires an account")?;
                ledger.check_balance(id)?;
            }
        }

        Ok(())
    }
}
