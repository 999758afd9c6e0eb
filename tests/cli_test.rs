//! End-to-end tests for the csvsift binary

mod helpers;

use assert_cmd::Command;
use predicates::prelude::*;

use helpers::{create_custom_csv, create_temp_dir, csvsift, prepare_phones_file};

#[test]
fn test_print_whole_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .assert()
        .success()
        .stdout(predicate::str::contains("| name             | brand   | price | rating |"))
        .stdout(predicate::str::contains("| iphone 15 pro    | apple   |   999 |    4.9 |"))
        .stdout(predicate::str::contains("poco x5 pro"))
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_numeric_filter() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("price<305")
        .assert()
        .success()
        .stdout(predicate::str::contains("HOT 11S NFC"))
        .stdout(predicate::str::contains("redmi note 12"))
        .stdout(predicate::str::contains("poco x5 pro"))
        .stdout(predicate::str::contains("iphone").not())
        .stdout(predicate::str::contains("galaxy").not());

    Ok(())
}

#[test]
fn test_text_filter_with_spaces() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg(" brand = samsung ")
        .assert()
        .success()
        .stdout(predicate::str::contains("galaxy s23 ultra"))
        .stdout(predicate::str::contains("xiaomi").not());

    Ok(())
}

#[test]
fn test_aggregate_whole_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--aggregate")
        .arg("rating:max")
        .assert()
        .success()
        .stdout(predicate::str::contains("| keys       | value |"))
        .stdout(predicate::str::contains("| rating_max |   4.9 |"))
        .stdout(predicate::str::contains("iphone").not());

    Ok(())
}

#[test]
fn test_filter_then_aggregate() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("brand=xiaomi")
        .arg("--aggregate")
        .arg("price:min")
        .assert()
        .success()
        .stdout(predicate::str::contains("price_min"))
        .stdout(predicate::str::contains("199"));

    Ok(())
}

#[test]
fn test_filter_with_no_matches_prints_header() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("price>5000")
        .assert()
        .success()
        .stdout(predicate::str::contains("| name "))
        .stdout(predicate::str::contains("apple").not());

    Ok(())
}

#[test]
fn test_missing_path_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("csvsift")?
        .arg("--where")
        .arg("price<5")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--path"));

    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let path = temp_dir.path().join("absent.csv");

    csvsift(&path)?
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot open file"));

    Ok(())
}

#[test]
fn test_bad_condition() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("price500")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid expression"));

    Ok(())
}

#[test]
fn test_bad_aggregate() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--aggregate")
        .arg("price:sum")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid expression"));

    Ok(())
}

#[test]
fn test_unknown_column() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("color=red")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Column 'color' not found"));

    Ok(())
}

#[test]
fn test_aggregate_non_numeric_column() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--aggregate")
        .arg("brand:avg")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Aggregation error"));

    Ok(())
}

#[test]
fn test_aggregate_after_empty_filter() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("brand=nokia")
        .arg("--aggregate")
        .arg("price:avg")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no rows"));

    Ok(())
}

#[test]
fn test_quoted_fields() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let path = create_custom_csv(
        temp_dir.path(),
        "people.csv",
        "name,city\n\"Smith, John\",Boston\nAlice,Paris\n",
    )?;

    csvsift(&path)?
        .arg("--where")
        .arg("city=Boston")
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith, John"))
        .stdout(predicate::str::contains("Alice").not());

    Ok(())
}

#[test]
fn test_verbose_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("-v")
        .arg("--where")
        .arg("price>1000")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("galaxy s23 ultra"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("kept 1 of 5 rows"));

    Ok(())
}

#[test]
fn test_empty_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let path = create_custom_csv(temp_dir.path(), "empty.csv", "")?;

    csvsift(&path)?
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no header row"));

    Ok(())
}

#[test]
fn test_repeated_operator_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, path) = prepare_phones_file()?;

    csvsift(&path)?
        .arg("--where")
        .arg("price>100>5")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("more than once"));

    Ok(())
}
