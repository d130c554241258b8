// crates/shared-kernel/tests/counts_sum.rs
use county_shared_kernel::LineCount;

#[test]
fn linecount_sum() {
    let total = [1u64, 2, 3].into_iter().map(LineCount::from).sum::<LineCount>();
    assert_eq!(u64::from(total), 6);
}

#[test]
fn linecount_sum_ref() {
    let values = [LineCount::from(5u64), LineCount::from(7u64)];
    let total: LineCount = values.iter().sum();
    assert_eq!(total, 12u64);
}

#[test]
fn linecount_add_assign() {
    let mut lines = LineCount::zero();
    lines += LineCount::new(4);
    lines += LineCount::new(0);
    assert_eq!(lines, LineCount::new(4));
    assert!(!lines.is_zero());
}

#[test]
fn empty_sum_is_zero() {
    let total: LineCount = std::iter::empty::<LineCount>().sum();
    assert!(total.is_zero());
}

#[test]
fn alternate_display_groups_thousands() {
    assert_eq!(format!("{:#}", LineCount::new(0)), "0");
    assert_eq!(format!("{:#}", LineCount::new(999)), "999");
    assert_eq!(format!("{:#}", LineCount::new(1_000)), "1,000");
    assert_eq!(format!("{:#}", LineCount::new(1_234_567)), "1,234,567");
    assert_eq!(format!("{}", LineCount::new(1_234_567)), "1234567");
}
