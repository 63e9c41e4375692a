//! Display conversion for Stagehand field values.
//!
//! [`render_value`] turns a typed field value into a [`DisplayValue`] the
//! presentation layer can show directly. Dispatch is exhaustive over the
//! declared value type with an explicit unknown arm, so types introduced
//! server-side after this client was built degrade to an annotated marker
//! instead of failing.
//!
//! Financial integers ("nibblins": minor fractional currency units at a
//! fixed four-digit scale) are rendered with exact integer arithmetic;
//! no floating point touches a financial value anywhere in this crate.

mod display;
mod financial;
mod render;

pub use display::DisplayValue;
pub use financial::{
    nibblins_to_decimal, unsigned_nibblins_to_decimal, FinancialFormat, NIBBLIN_SCALE_DIGITS,
};
pub use render::{render_field, render_value};
