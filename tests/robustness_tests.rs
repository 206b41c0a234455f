use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_malformed_csv_handling() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("robustness_test.csv");
    let mut wtr = csv::Writer::from_path(&output_path).unwrap();
    wtr.write_record(["type", "from", "to", "amount"]).unwrap();

    wtr.write_record(["create", "A", "", "10"]).unwrap();
    wtr.write_record(["create", "B", "", "0"]).unwrap();
    // Invalid type
    wtr.write_record(["deposit", "A", "", "1.0"]).unwrap();
    // Missing amount for transfer (required)
    wtr.write_record(["transfer", "A", "B", ""]).unwrap();
    // Valid transfer
    wtr.write_record(["transfer", "A", "B", "3.5"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("accounts-ledger"));
    cmd.arg(&output_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading command"))
        .stdout(predicate::str::contains("A,6.5"))
        .stdout(predicate::str::contains("B,3.5"));
}

#[test]
fn test_invalid_data_types() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("data_type_test.csv");
    let mut wtr = csv::Writer::from_path(&output_path).unwrap();
    wtr.write_record(["type", "from", "to", "amount"]).unwrap();

    // Text in amount field
    wtr.write_record(["create", "A", "", "not_a_number"]).unwrap();
    // Negative opening balance
    wtr.write_record(["create", "B", "", "-1"]).unwrap();
    // Negative transfer amount
    wtr.write_record(["create", "C", "", "5.0"]).unwrap();
    wtr.write_record(["create", "D", "", "0"]).unwrap();
    wtr.write_record(["transfer", "C", "D", "-2"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("accounts-ledger"));
    cmd.arg(&output_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading command"))
        .stdout(predicate::str::contains("A,").not())
        .stdout(predicate::str::contains("B,").not())
        .stdout(predicate::str::contains("C,5"))
        .stdout(predicate::str::contains("D,0"));
}
