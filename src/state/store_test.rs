use super::*;

#[test]
fn refcell_mutate_returns_closure_result() {
    let cell = RefCell::new(1_u32);
    let doubled = cell.mutate(|v| {
        *v *= 2;
        *v
    });
    assert_eq!(doubled, Some(2));
    assert_eq!(cell.inspect(|v| *v), Some(2));
}

#[test]
fn generation_first_token_is_current() {
    let mut generation = RequestGeneration::default();
    let first = generation.next();
    assert!(generation.is_current(first));
}

#[test]
fn generation_next_invalidates_previous_token() {
    let mut generation = RequestGeneration::default();
    let first = generation.next();
    let second = generation.next();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
    assert_ne!(first, second);
}
