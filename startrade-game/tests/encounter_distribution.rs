//! Distribution checks on encounter rolls: band widths, difficulty scaling
//! and the police-record boost.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use startrade_game::EncounterKind;
use startrade_game::catalog;
use startrade_game::encounter::{
    draw_range, effective_police_strength, encounter_probability, roll_encounter,
};

#[test]
fn harder_campaigns_are_never_safer() {
    for index in 0..catalog::politics_count() {
        let politics = catalog::politics(index);
        let mut last = 0;
        for difficulty in 0..=4_u8 {
            let p = encounter_probability(politics, difficulty, 0);
            assert!(p >= last, "{} at difficulty {difficulty}", politics.name);
            last = p;
        }
    }
}

#[test]
fn worse_records_are_never_safer() {
    for index in 0..catalog::politics_count() {
        let politics = catalog::politics(index);
        let clean = encounter_probability(politics, 2, 0);
        let dirty = encounter_probability(politics, 2, -100);
        assert!(dirty >= clean, "{}", politics.name);
    }
}

#[test]
fn probability_is_capped_at_certainty() {
    for index in 0..catalog::politics_count() {
        let politics = catalog::politics(index);
        for difficulty in 0..=4_u8 {
            for score in [-500, -50, 0, 50] {
                assert!(encounter_probability(politics, difficulty, score) <= 100);
            }
        }
    }
}

#[test]
fn record_boost_maxes_out() {
    assert_eq!(
        effective_police_strength(3, -10_000),
        effective_police_strength(3, -250)
    );
}

#[test]
fn empirical_rates_match_band_arithmetic() {
    let politics = catalog::politics(4); // Corporate State: 6 police, 2 pirates, 7 traders
    let difficulty = 1_u8;
    let range = draw_range(difficulty);
    let mut rng = SmallRng::seed_from_u64(31);

    let samples = 50_000_u32;
    let mut hits = [0_u32; 3];
    let mut quiet = 0_u32;
    for _ in 0..samples {
        match roll_encounter(politics, difficulty, 0, &mut rng) {
            Some(EncounterKind::Pirate) => hits[0] += 1,
            Some(EncounterKind::Police) => hits[1] += 1,
            Some(EncounterKind::Trader) => hits[2] += 1,
            None => quiet += 1,
        }
    }

    let expect = |strength: u32| samples * strength / range;
    let within = |observed: u32, expected: u32| {
        let slack = expected / 10 + 100;
        observed + slack >= expected && observed <= expected + slack
    };
    assert!(within(hits[0], expect(2)), "pirates {}", hits[0]);
    assert!(within(hits[1], expect(6)), "police {}", hits[1]);
    assert!(within(hits[2], expect(7)), "traders {}", hits[2]);
    assert!(quiet > 0);
}

#[test]
fn zero_strength_band_never_fires() {
    let politics = catalog::politics(10); // Military State has no pirates
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..5_000 {
        assert_ne!(
            roll_encounter(politics, 4, 0, &mut rng),
            Some(EncounterKind::Pirate)
        );
    }
}
