use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::ledger::{Account, Ledger};

const PASSWORD: u32 = 1213;
const MAX_ATTEMPTS: u32 = 3;

/// Prompts for the numeric password, allowing `MAX_ATTEMPTS` tries before
/// denying access. The ledger itself never sees the credential.
pub fn login<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    for _ in 0..MAX_ATTEMPTS {
        write!(output, "Password: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        if line.trim().parse::<u32>() == Ok(PASSWORD) {
            writeln!(output, "Successfully logged in.")?;
            return Ok(true);
        }

        writeln!(output, "Wrong password! Try again.")?;
    }

    writeln!(output, "Too many attempts! Access denied.")?;
    Ok(false)
}

/// Menu loop over the ledger operations. Returns when the user picks
/// "Exit" or the input ends.
pub fn run<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "--- BANK MANAGEMENT ---")?;
        writeln!(output, " 1. Create Account")?;
        writeln!(output, " 2. List Accounts")?;
        writeln!(output, " 3. Remove Account")?;
        writeln!(output, " 4. Deposit")?;
        writeln!(output, " 5. Withdraw")?;
        writeln!(output, " 6. Transfer")?;
        writeln!(output, " 7. Check Balance")?;
        writeln!(output, " 8. Exit")?;

        let choice: u32 = match prompt_parsed(input, output, "Enter a choice: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        match choice {
            1 => {
                let name = match prompt_line(input, output, "Enter name: ")? {
                    Some(name) if !name.is_empty() => name,
                    Some(_) => {
                        writeln!(output, "Name must not be empty!")?;
                        continue;
                    }
                    None => return Ok(()),
                };
                let balance = match prompt_parsed(input, output, "Enter initial balance: ")? {
                    Some(balance) => balance,
                    None => return Ok(()),
                };
                match ledger.create(&name, balance) {
                    Ok(account) => writeln!(
                        output,
                        "Account created with | ID: {} | Name: {} |",
                        account.id, account.name
                    )?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            2 => {
                writeln!(output, "=== Accounts ===")?;
                for account in ledger.list() {
                    print_account(output, account)?;
                }
            }
            3 => {
                let id = match prompt_parsed(input, output, "Enter account ID to remove: ")? {
                    Some(id) => id,
                    None => return Ok(()),
                };
                match ledger.remove(id) {
                    Ok(account) => {
                        writeln!(output, "Account ID | {} | removed successfully", account.id)?
                    }
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            4 => {
                let (id, amount) = match prompt_id_and_amount(input, output, "Deposit money: ")? {
                    Some(pair) => pair,
                    None => return Ok(()),
                };
                match ledger.deposit(id, amount) {
                    Ok(()) => writeln!(
                        output,
                        "Successfully deposited {:.2} MAD to account ID: {}",
                        amount, id
                    )?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            5 => {
                let (id, amount) = match prompt_id_and_amount(input, output, "Withdraw money: ")? {
                    Some(pair) => pair,
                    None => return Ok(()),
                };
                match ledger.withdraw(id, amount) {
                    Ok(()) => writeln!(
                        output,
                        "Successfully withdrew {:.2} MAD from account ID: {}",
                        amount, id
                    )?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            6 => {
                let from = match prompt_parsed(input, output, "From account ID: ")? {
                    Some(from) => from,
                    None => return Ok(()),
                };
                let to = match prompt_parsed(input, output, "To account ID: ")? {
                    Some(to) => to,
                    None => return Ok(()),
                };
                let amount = match prompt_parsed(input, output, "Amount to transfer: ")? {
                    Some(amount) => amount,
                    None => return Ok(()),
                };
                match ledger.transfer(from, to, amount) {
                    Ok(()) => writeln!(
                        output,
                        "Transferred {:.2} MAD from account ID {} to account ID {}",
                        amount, from, to
                    )?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            7 => {
                let id = match prompt_parsed(input, output, "Enter account ID: ")? {
                    Some(id) => id,
                    None => return Ok(()),
                };
                match ledger.check_balance(id) {
                    Ok(account) => print_account(output, account)?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            8 => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice! Try again.")?,
        }
    }
}

fn print_account<W: Write>(output: &mut W, account: &Account) -> io::Result<()> {
    writeln!(
        output,
        "| ID: {} | Name: {} | Balance: {:.2} MAD |",
        account.id, account.name, account.balance
    )
}

/// One trimmed line of input, or `None` when the input ends.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Re-prompts until the line parses, or `None` when the input ends.
fn prompt_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<T>> {
    loop {
        let line = match prompt_line(input, output, label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Invalid input! Try again.")?,
        }
    }
}

fn prompt_id_and_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    amount_label: &str,
) -> io::Result<Option<(u32, f64)>> {
    let id = match prompt_parsed(input, output, "Enter account ID: ")? {
        Some(id) => id,
        None => return Ok(None),
    };
    let amount = match prompt_parsed(input, output, amount_label)? {
        Some(amount) => amount,
        None => return Ok(None),
    };
    Ok(Some((id, amount)))
}
