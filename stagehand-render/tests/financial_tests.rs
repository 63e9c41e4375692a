use pretty_assertions::assert_eq;
use stagehand_render::{
    nibblins_to_decimal, unsigned_nibblins_to_decimal, FinancialFormat, NIBBLIN_SCALE_DIGITS,
};

// ── Observed-scale cases ─────────────────────────────────────────

#[test]
fn whole_and_fractional_units() {
    assert_eq!(nibblins_to_decimal(12_345_678), "1234.5678");
}

#[test]
fn zero() {
    assert_eq!(nibblins_to_decimal(0), "0.0000");
}

#[test]
fn negative_balance() {
    assert_eq!(nibblins_to_decimal(-50_000), "-5.0000");
}

#[test]
fn negative_with_fraction() {
    assert_eq!(nibblins_to_decimal(-12_345), "-1.2345");
}

#[test]
fn sub_unit_amounts_keep_leading_zeros() {
    assert_eq!(nibblins_to_decimal(1), "0.0001");
    assert_eq!(nibblins_to_decimal(-1), "-0.0001");
    assert_eq!(nibblins_to_decimal(42), "0.0042");
}

// ── Range endpoints ──────────────────────────────────────────────

#[test]
fn signed_extremes_are_exact() {
    assert_eq!(nibblins_to_decimal(i64::MAX), "922337203685477.5807");
    assert_eq!(nibblins_to_decimal(i64::MIN), "-922337203685477.5808");
}

#[test]
fn unsigned_extreme_is_exact() {
    assert_eq!(
        unsigned_nibblins_to_decimal(u64::MAX),
        "1844674407370955.1615"
    );
    assert_eq!(unsigned_nibblins_to_decimal(0), "0.0000");
}

// ── Configurable scale ───────────────────────────────────────────

#[test]
fn default_format_uses_nibblin_scale() {
    assert_eq!(FinancialFormat::default().scale_digits, NIBBLIN_SCALE_DIGITS);
    assert_eq!(NIBBLIN_SCALE_DIGITS, 4);
}

#[test]
fn two_digit_scale() {
    let cents = FinancialFormat::new(2);
    assert_eq!(cents.format_signed(12_345), "123.45");
    assert_eq!(cents.format_signed(-5), "-0.05");
    assert_eq!(cents.format_unsigned(100), "1.00");
}
