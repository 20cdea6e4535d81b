//! Property tests over random attack sequences.

use proptest::prelude::*;

use conquista_engine::{classic_game, load_builtin_map, Dice, Faction, GameState, Mission, DEFAULT_MAP};

fn total_troops(game: &GameState) -> u32 {
    game.territories().iter().map(|t| t.troops).sum()
}

fn orders() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..=6, 0i64..=6), 1..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Troops never appear from nowhere and no territory is ever left empty.
    #[test]
    fn troops_never_grow_and_never_hit_zero(
        orders in orders(),
        rolls in prop::collection::vec(1u32..=6, 120),
        player in prop::sample::select(vec!["Azul", "Verde", "Vermelho"]),
    ) {
        let map = load_builtin_map(DEFAULT_MAP).unwrap();
        let mut game = GameState::with_mission(
            map.territories,
            Faction::new(player),
            Mission::ConquerCount(3),
            Dice::from_scripted(rolls),
        );
        let mut before = total_troops(&game);
        for (a, d) in orders {
            let snapshot = game.territories().to_vec();
            match game.attack(a, d) {
                Ok(_) => {
                    let after = total_troops(&game);
                    prop_assert!(after < before);
                    before = after;
                }
                Err(_) => {
                    prop_assert_eq!(game.territories(), &snapshot[..]);
                }
            }
            prop_assert!(game.territories().iter().all(|t| t.troops >= 1));
        }
    }

    /// Asking twice without attacking in between gives the same answer.
    #[test]
    fn mission_check_is_stable(
        orders in orders(),
        seed in any::<u64>(),
        destroy in any::<bool>(),
    ) {
        let mission = if destroy {
            Mission::DestroyFaction(Faction::new("Verde"))
        } else {
            Mission::ConquerCount(3)
        };
        let mut game = classic_game(mission, Dice::from_seed(seed)).unwrap();
        for (a, d) in orders {
            let _ = game.attack(a, d);
            let first = game.mission().is_complete(game.territories(), game.player());
            let second = game.mission().is_complete(game.territories(), game.player());
            prop_assert_eq!(first, second);
        }
    }
}
