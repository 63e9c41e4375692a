//! Exact decimal rendering for integer minor-unit currency amounts.
//!
//! A financial value is a signed or unsigned 64-bit count of minor
//! fractional units ("nibblins"): 1/10,000th of a currency unit at the
//! default scale. Rendering inserts the decimal point with integer
//! division and modulo only, so the full 64-bit range round-trips without
//! precision loss. Arithmetic is widened to `u128` so `i64::MIN` is safe.

/// Four decimal digits of sub-unit precision.
pub const NIBBLIN_SCALE_DIGITS: u32 = 4;

/// Decimal-rendering configuration for financial fields.
///
/// A future schema may vary the scale per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialFormat {
    /// Number of decimal digits of sub-unit precision.
    pub scale_digits: u32,
}

impl Default for FinancialFormat {
    fn default() -> Self {
        Self {
            scale_digits: NIBBLIN_SCALE_DIGITS,
        }
    }
}

impl FinancialFormat {
    #[must_use]
    pub const fn new(scale_digits: u32) -> Self {
        Self { scale_digits }
    }

    /// Renders a signed minor-unit count, e.g. `-50000` → `"-5.0000"`.
    #[must_use]
    pub fn format_signed(&self, nibblins: i64) -> String {
        let sign = if nibblins < 0 { "-" } else { "" };
        self.format_magnitude(sign, u128::from(nibblins.unsigned_abs()))
    }

    /// Renders an unsigned minor-unit count.
    #[must_use]
    pub fn format_unsigned(&self, nibblins: u64) -> String {
        self.format_magnitude("", u128::from(nibblins))
    }

    fn format_magnitude(&self, sign: &str, magnitude: u128) -> String {
        let scale = 10u128.pow(self.scale_digits);
        let units = magnitude / scale;
        let fraction = magnitude % scale;
        format!(
            "{sign}{units}.{fraction:0width$}",
            width = self.scale_digits as usize
        )
    }
}

/// Renders at the default nibblin scale.
#[must_use]
pub fn nibblins_to_decimal(nibblins: i64) -> String {
    FinancialFormat::default().format_signed(nibblins)
}

/// Renders at the default nibblin scale.
#[must_use]
pub fn unsigned_nibblins_to_decimal(nibblins: u64) -> String {
    FinancialFormat::default().format_unsigned(nibblins)
}
