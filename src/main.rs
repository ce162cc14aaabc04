mod ledger;
mod menu;
mod ops;

use std::path::PathBuf;

use clap::Parser;

use crate::ledger::Ledger;

/// In-memory bank account ledger with an interactive menu and a CSV
/// batch mode.
#[derive(Debug, Parser)]
#[clap(name = "bank-ledger", version)]
struct Cli {
    /// Apply a CSV file of operations instead of running the menu, then
    /// print the resulting accounts as CSV on stdout.
    #[clap(long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Maximum number of accounts the ledger will hold.
    #[clap(long, default_value_t = ledger::DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut ledger = Ledger::with_capacity(cli.capacity);

    match cli.batch {
        Some(path) => {
            let file = std::fs::File::open(path)?;

            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(file);

            for operation in rdr.deserialize::<ops::Operation>() {
                operation?.apply_to(&mut ledger)?;
            }

            let mut wtr = csv::WriterBuilder::new().from_writer(std::io::stdout());

            for account in ledger.list() {
                wtr.serialize(account)?;
            }

            wtr.flush()?;
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut input = stdin.lock();
            let mut output = stdout.lock();

            if menu::login(&mut input, &mut output)? {
                menu::run(&mut ledger, &mut input, &mut output)?;
            }
        }
    }

    Ok(())
}
