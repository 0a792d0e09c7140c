//! Tests for the numeric accumulator.

use crate::numeric::ArithmeticNumber;

#[test]
fn test_integer_constants() {
    assert_eq!(i32::zero(), 0);
    assert_eq!(i32::one(), 1);
    assert_eq!(i32::not_found(), -1);
    assert_eq!(i8::not_found(), -1);
    assert_eq!(isize::not_found(), -1);
}

#[test]
fn test_float_constants() {
    assert!(f64::zero().abs() < f64::EPSILON);
    assert!((f64::one() - 1.0).abs() < f64::EPSILON);
    assert!((f32::not_found() + 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_sum_and_subtract() {
    assert_eq!(3_i64.sum(4), 7);
    assert_eq!(3_i64.subtract(4), -1);
    assert!((1.5_f64.sum(0.25) - 1.75).abs() < f64::EPSILON);
}

#[test]
fn test_in_place_steps() {
    let mut value = i16::zero();
    value.increment();
    value.increment();
    value.sum_assign(5);
    value.decrement();
    assert_eq!(value, 6);
}

#[test]
fn test_integer_arithmetic_saturates() {
    let mut value = i8::MAX;
    value.increment();
    assert_eq!(value, i8::MAX);
    assert_eq!(i8::MIN.subtract(1), i8::MIN);
}

#[test]
fn test_checked_sum_reports_overflow() {
    assert_eq!(100_i8.checked_sum(27), Some(127));
    assert_eq!(100_i8.checked_sum(28), None);
    assert_eq!(1.5_f64.checked_sum(2.0), Some(3.5));
    assert_eq!(f64::MAX.checked_sum(f64::MAX), None);
}

#[test]
fn test_try_increment_stops_at_max() {
    let mut value = 126_i8;
    assert!(value.try_increment());
    assert_eq!(value, i8::MAX);
    assert!(!value.try_increment());
    assert_eq!(value, i8::MAX);
}

#[test]
fn test_is_found() {
    assert!(0_i32.is_found());
    assert!(12_i32.is_found());
    assert!(!i32::not_found().is_found());
    assert!(0.0_f64.is_found());
    assert!(!f64::not_found().is_found());
}
