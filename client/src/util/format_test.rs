use super::*;

#[test]
fn group_thousands_small_values_untouched() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(250_000), "250,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn format_won_prefixes_currency_sign() {
    assert_eq!(format_won(320_000), "₩320,000");
}
