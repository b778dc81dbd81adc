use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Largest quantity that survives the round trip through `f64` geometry.
pub const MAX_EXACT_QUANTITY: u64 = 1 << 53;

pub(crate) fn decimal_to_quantity(value: Decimal) -> Result<u64, String> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("quantity must be >= 0, got {value}"));
    }
    if value.fract() != Decimal::ZERO {
        return Err(format!("quantity must be an integer, got {value}"));
    }
    match value.to_u64() {
        Some(quantity) if quantity <= MAX_EXACT_QUANTITY => Ok(quantity),
        _ => Err(format!("quantity {value} is out of range")),
    }
}

pub(crate) fn f64_to_quantity(value: f64) -> Result<u64, String> {
    if !value.is_finite() {
        return Err(format!("quantity must be finite, got {value}"));
    }
    if value < 0.0 {
        return Err(format!("quantity must be >= 0, got {value}"));
    }
    if value.fract() != 0.0 {
        return Err(format!("quantity must be an integer, got {value}"));
    }
    if value > MAX_EXACT_QUANTITY as f64 {
        return Err(format!("quantity {value} is out of range"));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_quantities_must_be_whole_and_non_negative() {
        assert_eq!(decimal_to_quantity(Decimal::new(42, 0)), Ok(42));
        assert_eq!(decimal_to_quantity(Decimal::new(4200, 2)), Ok(42));
        assert!(decimal_to_quantity(Decimal::new(-1, 0)).is_err());
        assert!(decimal_to_quantity(Decimal::new(15, 1)).is_err());
    }

    #[test]
    fn negative_zero_decimal_is_zero() {
        let mut zero = Decimal::ZERO;
        zero.set_sign_negative(true);
        assert_eq!(decimal_to_quantity(zero), Ok(0));
    }

    #[test]
    fn float_quantities_reject_non_finite_values() {
        assert_eq!(f64_to_quantity(7.0), Ok(7));
        assert!(f64_to_quantity(f64::NAN).is_err());
        assert!(f64_to_quantity(f64::INFINITY).is_err());
        assert!(f64_to_quantity(-3.0).is_err());
        assert!(f64_to_quantity(2.5).is_err());
    }
}
