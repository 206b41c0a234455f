use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a command file that opens `accounts` accounts with `balance` each,
/// then rotates `rows` unit transfers around them in a ring.
///
/// Every account sends and receives the same number of transfers (when `rows`
/// is a multiple of `accounts`), so the final balances equal the opening ones.
pub fn generate_ring_csv(
    path: &Path,
    accounts: usize,
    balance: &str,
    rows: usize,
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "from", "to", "amount"])?;

    for i in 0..accounts {
        wtr.write_record(["create", &format!("acc-{i}"), "", balance])?;
    }

    for i in 0..rows {
        let from = i % accounts;
        let to = (i + 1) % accounts;
        wtr.write_record([
            "transfer",
            &format!("acc-{from}"),
            &format!("acc-{to}"),
            "1.0",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
