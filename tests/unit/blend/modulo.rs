use super::*;

#[test]
fn modulo_wraps_destination_by_source() {
    assert!((modulo(0.5f32, 0.75) - 0.25).abs() < 1e-5);
    assert!((modulo(0.5f32, 0.25) - 0.25).abs() < 1e-5);
}

#[test]
fn modulo_shift_adds_and_wraps() {
    assert!((modulo_shift(0.25f32, 0.5) - 0.75).abs() < 1e-5);
    assert_eq!(modulo_shift(1.0f32, 0.0), 0.0);
    assert_eq!(modulo_shift_continuous(1.0f32, 0.0), 1.0);
    assert_eq!(modulo_shift_continuous(255u8, 0), 255);
}

#[test]
fn divisive_modulo_divides_then_wraps() {
    assert!((divisive_modulo(0.5f32, 0.25) - 0.5).abs() < 1e-5);
    assert_eq!(divisive_modulo_continuous(0.3f32, 0.0), 0.0);
    assert_eq!(modulo_continuous(0u8, 0), 0);
}

#[test]
fn modulo_family_stays_in_range() {
    let modes: [fn(u8, u8) -> u8; 6] = [
        modulo,
        modulo_continuous,
        divisive_modulo,
        divisive_modulo_continuous,
        modulo_shift,
        modulo_shift_continuous,
    ];
    for f in modes {
        for s in (0..=255u8).step_by(5) {
            for d in (0..=255u8).step_by(5) {
                let _ = f(s, d);
            }
        }
    }
    for s in [0.0f32, 0.1, 0.5, 1.0] {
        for d in [0.0f32, 0.1, 0.5, 1.0] {
            let v = divisive_modulo_continuous(s, d);
            assert!((0.0..=1.0).contains(&v), "{v}");
        }
    }
}
