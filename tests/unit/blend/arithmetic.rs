use super::*;

#[test]
fn multiply_rounds_like_channel_mul() {
    assert_eq!(multiply(200u8, 100), 78);
    assert_eq!(multiply(255u8, 42), 42);
    assert_eq!(multiply(0u16, 42), 0);
}

#[test]
fn screen_identities() {
    for x in [0u8, 13, 128, 255] {
        assert_eq!(screen(0u8, x), x);
        assert_eq!(screen(255u8, x), 255);
    }
}

#[test]
fn addition_and_subtraction_saturate() {
    assert_eq!(addition(200u8, 100), 255);
    assert_eq!(subtract(100u8, 200), 100);
    assert_eq!(subtract(200u8, 100), 0);
    assert_eq!(inverse_subtract(255u8, 77), 77);
    assert!((addition(0.8f32, 0.8) - 1.6).abs() < 1e-6);
}

#[test]
fn divide_edge_cases() {
    assert_eq!(divide(0u8, 0), 0);
    assert_eq!(divide(0u8, 5), 255);
    assert_eq!(divide(255u8, 100), 100);
    assert!((divide(0.5f32, 0.25) - 0.5).abs() < 1e-6);
}

#[test]
fn difference_and_equivalence_mirror() {
    assert_eq!(difference(10u8, 200), 190);
    assert_eq!(difference(200u8, 10), 190);
    assert_eq!(equivalence(10u8, 200), 65);
    assert_eq!(equivalence(90u8, 90), 255);
}

#[test]
fn exclusion_with_white_inverts() {
    assert_eq!(exclusion(255u8, 100), 155);
    assert_eq!(exclusion(0u8, 100), 100);
}

#[test]
fn darken_and_lighten_pick_extremes() {
    assert_eq!(darken_only(3u8, 9), 3);
    assert_eq!(lighten_only(3u8, 9), 9);
}

#[test]
fn arc_tangent_guards_zero_destination() {
    assert_eq!(arc_tangent(0u8, 0), 0);
    assert_eq!(arc_tangent(5u8, 0), 255);
    assert!((arc_tangent(0.5f32, 0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn negation_endpoints() {
    assert_eq!(negation(0u8, 0), 0);
    assert_eq!(negation(255u8, 0), 255);
    assert_eq!(negation(255u8, 255), 0);
}

#[test]
fn additive_subtractive_of_equal_values_is_black() {
    for x in [0u8, 50, 255] {
        assert_eq!(additive_subtractive(x, x), 0);
    }
}
