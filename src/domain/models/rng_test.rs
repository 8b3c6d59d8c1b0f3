use anyhow::Result;
use rand::Rng;

use super::RngStrategy;

#[test]
fn it_repeats_seeded_sequences() {
    let mut first = RngStrategy::Seeded(42).build();
    let mut second = RngStrategy::Seeded(42).build();

    let first_rolls = (0..16)
        .map(|_| return first.gen_range(0..1000))
        .collect::<Vec<u32>>();
    let second_rolls = (0..16)
        .map(|_| return second.gen_range(0..1000))
        .collect::<Vec<u32>>();

    assert_eq!(first_rolls, second_rolls);
}

#[test]
fn it_defaults_to_entropy() {
    assert_eq!(RngStrategy::default(), RngStrategy::Default);
}

#[test]
fn it_parses_seeds() -> Result<()> {
    assert_eq!(RngStrategy::parse("7")?, RngStrategy::Seeded(7));
    assert_eq!(RngStrategy::parse("")?, RngStrategy::Default);
    return Ok(());
}

#[test]
fn it_fails_to_parse_invalid_seeds() {
    let res = RngStrategy::parse("-3");
    assert!(res.is_err());
    insta::assert_snapshot!(res.unwrap_err().to_string(), @"Seed must be a positive integer, got '-3'");
}
