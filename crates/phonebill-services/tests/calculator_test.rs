//! End-to-end bill calculation tests
//!
//! Run with: cargo test --package phonebill-services --test calculator_test

use phonebill_core::{traits::BillCalculator, AppError};
use phonebill_services::{calculate, PhoneBillCalculator, TariffRatingService};
use rust_decimal::Decimal;
use std::str::FromStr;

fn amount(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap()
}

/// Assert the exact rendered amount, including the two fractional digits
fn assert_bill(log: &str, expected: &str) {
    let total = calculate(log).unwrap();
    assert_eq!(total, amount(expected));
    assert_eq!(total.to_string(), expected);
}

#[test]
fn test_single_call_is_free() {
    // The only number is trivially the most common one
    assert_bill("1234567890,01-01-2024 08:00:00,01-01-2024 08:04:30", "0.00");
}

#[test]
fn test_multiple_calls_with_one_most_common() {
    let log = "1234567890,01-01-2024 08:00:00,01-01-2024 08:03:00\n\
               1234567890,01-01-2024 09:00:00,01-01-2024 09:07:00\n\
               0987654321,01-01-2024 09:30:00,01-01-2024 09:34:30";
    assert_bill(log, "5.00");
}

#[test]
fn test_most_common_tie_goes_to_highest_number() {
    let log = "1234567890,01-01-2024 08:00:00,01-01-2024 08:03:00\n\
               1234567890,01-01-2024 09:00:00,01-01-2024 09:07:00\n\
               0987654321,01-01-2024 09:30:00,01-01-2024 09:34:30\n\
               0987654321,01-01-2024 10:00:00,01-01-2024 10:09:30";
    // 5 * 1.0 + (5 * 1.0 + 5 * 0.2)
    assert_bill(log, "11.00");
}

#[test]
fn test_calls_in_standard_time() {
    let log = "0987654321,01-01-2024 08:10:00,01-01-2024 08:12:45\n\
               1234567890,01-01-2024 08:00:00,01-01-2024 08:10:00";
    assert_bill(log, "3.00");
}

#[test]
fn test_calls_outside_standard_time() {
    let log = "0987654321,01-01-2024 07:10:00,01-01-2024 07:12:45\n\
               1234567890,01-01-2024 08:00:00,01-01-2024 08:10:00";
    assert_bill(log, "1.50");
}

#[test]
fn test_calls_spanning_time_windows() {
    let log = "0987654321,01-01-2024 07:58:00,01-01-2024 08:02:45\n\
               1234567890,01-01-2024 08:00:00,01-01-2024 08:10:00";
    assert_bill(log, "4.00");
}

#[test]
fn test_calls_longer_than_five_minutes() {
    let log = "0987654321,01-01-2024 08:00:00,01-01-2024 08:09:45\n\
               1234567890,01-01-2024 08:00:00,01-01-2024 08:10:00";
    assert_bill(log, "6.00");
}

#[test]
fn test_exactly_five_and_just_over_five_minutes() {
    let log = "111,01-01-2024 08:00:00,01-01-2024 08:05:00\n\
               222,01-01-2024 08:00:00,01-01-2024 08:05:01\n\
               999,01-01-2024 08:00:00,01-01-2024 08:01:00\n\
               999,01-01-2024 09:00:00,01-01-2024 09:01:00";
    assert_bill(log, "10.20");
}

#[test]
fn test_empty_log() {
    assert_bill("", "0.00");
    assert_bill("\n\n", "0.00");
}

#[test]
fn test_itemized_bill() {
    let log = "420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57\n\
               420776562353,18-01-2020 08:59:20,18-01-2020 09:10:00\n\
               420774577453,20-01-2020 12:00:00,20-01-2020 12:00:59";
    let calculator = PhoneBillCalculator::new(TariffRatingService::default());
    let summary = calculator.itemize(log).unwrap();

    assert_eq!(summary.exempt_number.as_deref(), Some("420774577453"));
    assert_eq!(summary.call_count(), 3);
    assert_eq!(summary.billed_call_count(), 1);
    // 640 s bills 11 minutes: 08:59:20..09:03:20 standard, 6 more discounted
    assert_eq!(summary.calls[1].minutes, 11);
    assert_eq!(summary.calls[1].cost, amount("6.20"));
    assert_eq!(summary.total.to_string(), "6.20");
}

#[test]
fn test_itemized_bill_serializes() {
    let log = "111,01-01-2024 08:00:00,01-01-2024 08:01:00\n\
               222,01-01-2024 09:00:00,01-01-2024 09:02:00";
    let summary = PhoneBillCalculator::new(TariffRatingService::default())
        .itemize(log)
        .unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["exempt_number"], "222");
    assert_eq!(json["total"], "1.00");
    assert_eq!(json["calls"][0]["number"], "111");
    assert_eq!(json["calls"][1]["exempt"], true);
}

#[test]
fn test_malformed_line_fails_whole_bill() {
    let log = "111,01-01-2024 08:00:00,01-01-2024 08:01:00\n\
               222;01-01-2024 09:00:00;01-01-2024 09:02:00";
    assert_eq!(
        calculate(log),
        Err(AppError::MalformedLine { line: 2, fields: 1 })
    );
}

#[test]
fn test_bad_timestamp_fails_whole_bill() {
    let err = calculate("111,01/01/2024 08:00:00,01-01-2024 08:01:00").unwrap_err();
    assert_eq!(err.error_code(), "timestamp_format");
}

#[test]
fn test_reversed_interval_fails_whole_bill() {
    let err = calculate("111,01-01-2024 08:01:00,01-01-2024 08:00:00").unwrap_err();
    assert_eq!(err.error_code(), "invalid_interval");
}

#[test]
fn test_non_numeric_tied_number_fails_whole_bill() {
    let log = "abc,01-01-2024 08:00:00,01-01-2024 08:01:00\n\
               123,01-01-2024 08:00:00,01-01-2024 08:01:00";
    assert_eq!(
        calculate(log),
        Err(AppError::InvalidNumber("abc".to_string()))
    );
}
