//! Integration tests loading the statutory schedule from a CSV fixture
//! and resolving the reference scenarios end to end.

use igs_core::{IgsSchedule, TaxClass};
use igs_data::IgsScheduleLoader;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const STATUTORY_CSV: &str = include_str!("../test-data/igs_schedule.csv");

#[test]
fn loaded_schedule_matches_the_builtin_table() {
    let schedule = IgsScheduleLoader::load(STATUTORY_CSV.as_bytes()).expect("Failed to load");

    assert_eq!(schedule, IgsSchedule::statutory());
}

#[test]
fn loaded_schedule_resolves_reference_scenarios() {
    let schedule = IgsScheduleLoader::load(STATUTORY_CSV.as_bytes()).expect("Failed to load");

    let zero = schedule.resolve(dec!(0), false);
    assert_eq!(zero.tax_class, TaxClass::Class(1));
    assert_eq!(zero.amount, dec!(20000));

    let reduced = schedule.resolve(dec!(499999), true);
    assert_eq!(reduced.amount, dec!(10000));

    let class_two = schedule.resolve(dec!(500000), false);
    assert_eq!(class_two.tax_class, TaxClass::Class(2));
    assert_eq!(class_two.amount, dec!(30000));

    let class_seven = schedule.resolve(dec!(5000000), false);
    assert_eq!(class_seven.tax_class, TaxClass::Class(7));
    assert_eq!(class_seven.amount, dec!(300000));

    let ceiling = schedule.resolve(dec!(50000000), false);
    assert_eq!(ceiling.tax_class, TaxClass::OutOfRange);
    assert_eq!(ceiling.amount, dec!(0));
    assert!(ceiling.out_of_range);

    let top = schedule.resolve(dec!(49999999), true);
    assert_eq!(top.tax_class, TaxClass::Class(10));
    assert_eq!(top.amount, dec!(1000000));
}

#[test]
fn loaded_brackets_carry_derived_range_labels() {
    let schedule = IgsScheduleLoader::load(STATUTORY_CSV.as_bytes()).expect("Failed to load");

    let labels: Vec<String> = schedule
        .brackets()
        .iter()
        .map(|bracket| bracket.range_label())
        .collect();

    assert_eq!(labels[0], "de 0 à 499 999");
    assert_eq!(labels[9], "de 30 000 000 à 49 999 999");
}
