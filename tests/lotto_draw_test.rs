use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_tracker_rs::lotto::{HIGHEST_NUMBER, LOWEST_NUMBER, NUMBERS_PER_DRAW, draw, hue_for};

#[test]
fn test_ten_thousand_draws_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..10_000 {
        let d = draw(&mut rng);
        let numbers = d.numbers();

        assert_eq!(numbers.len(), NUMBERS_PER_DRAW);

        let distinct: HashSet<u8> = numbers.iter().copied().collect();
        assert_eq!(distinct.len(), NUMBERS_PER_DRAW, "duplicate in {:?}", numbers);

        assert!(
            numbers
                .iter()
                .all(|n| (LOWEST_NUMBER..=HIGHEST_NUMBER).contains(n)),
            "out of range in {:?}",
            numbers
        );
        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "not ascending: {:?}",
            numbers
        );
    }
}

#[test]
fn test_every_number_eventually_appears() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen: HashSet<u8> = HashSet::new();

    for _ in 0..2_000 {
        seen.extend(draw(&mut rng).numbers().iter().copied());
    }

    assert_eq!(seen.len(), usize::from(HIGHEST_NUMBER));
}

#[test]
fn test_ball_hues_follow_numbers() {
    let d = draw(&mut StdRng::seed_from_u64(5));

    for ball in d.balls() {
        assert!((ball.hue - hue_for(ball.number)).abs() < 1e-9);
        assert!(ball.hue > 0.0 && ball.hue <= 360.0);
    }
}
