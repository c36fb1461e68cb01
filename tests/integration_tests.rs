use std::path::PathBuf;

use battle_factory::*;

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn bundled_factory() -> Factory {
    Factory::new(FactoryConfig {
        sets_path: data_path("battle_factory_pokemon.json"),
        base_stats_path: data_path("base_stats.json"),
        cache_datasets: true,
    })
}

/// Test that the bundled datasets load and agree with each other.
#[test]
fn test_bundled_datasets_are_consistent() {
    let sets = load_combatant_sets(data_path("battle_factory_pokemon.json")).unwrap();
    let table = load_base_stats(data_path("base_stats.json")).unwrap();

    assert_eq!(sets.len(), 9);
    for set in &sets {
        assert!(table.contains(&set.name), "no base stats for {}", set.name);
        assert!(set.parsed_nature().is_ok(), "bad nature on {}", set.name);
        assert!(set.set_number >= 1);
    }
}

/// Test that set numbers restart for every species, in document order.
#[test]
fn test_set_numbers_follow_document_order() {
    let sets = load_combatant_sets(data_path("battle_factory_pokemon.json")).unwrap();
    let labels: Vec<(&str, u32)> = sets.iter().map(|s| (s.name.as_str(), s.set_number)).collect();
    assert_eq!(
        labels,
        vec![
            ("Metagross", 1),
            ("Salamence", 1),
            ("Salamence", 2),
            ("Starmie", 1),
            ("Starmie", 2),
            ("Snorlax", 1),
            ("Snorlax", 2),
            ("Snorlax", 3),
            ("Mr. Mime", 1),
        ]
    );
}

/// Test the full flow: search by one lowercase move, then compute stats.
#[test]
fn test_search_then_compute() {
    let results = search(
        "",
        &["meteor mash"],
        "",
        1,
        false,
        false,
        data_path("battle_factory_pokemon.json"),
    )
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results.name(0).unwrap(), "Metagross");
    assert_eq!(results.item(0).unwrap(), "Lum Berry");

    let table = load_base_stats(data_path("base_stats.json")).unwrap();
    let stats = compute_stats(results.get(0).unwrap(), &table, RoundContext::new(1, false)).unwrap();
    assert_eq!(
        stats,
        StatLine {
            hp: 270,
            attack: 302,
            defense: 265,
            sp_attack: 175,
            sp_defense: 185,
            speed: 145,
        }
    );
}

/// Test stat values for bundled sets with boosted and hindered attributes.
#[test]
fn test_bundled_stat_values() {
    let factory = bundled_factory();

    let starmie = factory
        .search(&QueryCriteria::new().with_name("starmie").with_item("leftovers"))
        .unwrap();
    assert_eq!(starmie.len(), 1);
    let stats = factory.stats_for(&starmie, 0, RoundContext::new(8, false)).unwrap();
    assert_eq!(stats.hp, 261);
    assert_eq!(stats.attack, 167);
    assert_eq!(stats.sp_attack, 236);
    assert_eq!(stats.speed, 292);

    let snorlax = factory
        .search(&QueryCriteria::new().with_name("SNORLAX").with_move("curse"))
        .unwrap();
    assert_eq!(snorlax.len(), 1);
    let stats = factory.stats_for(&snorlax, 0, RoundContext::new(1, false)).unwrap();
    assert_eq!(stats.hp, 430);
    assert_eq!(stats.sp_attack, 121);
    assert_eq!(stats.sp_defense, 247);
}

/// Test that one failing computation does not affect the others.
#[test]
fn test_unknown_species_is_isolated() {
    let mut sets = load_combatant_sets(data_path("battle_factory_pokemon.json")).unwrap();
    let table = load_base_stats(data_path("base_stats.json")).unwrap();
    sets[2].name = "Missingno".to_string();

    let round = RoundContext::new(5, false);
    let outcomes: Vec<_> = sets.iter().map(|set| compute_stats(set, &table, round)).collect();

    assert_eq!(
        outcomes[2],
        Err(LookupError::UnknownSpecies("Missingno".to_string()))
    );
    let ok = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(ok, sets.len() - 1);
}

/// Test that stat derivation is a pure function of its inputs.
#[test]
fn test_compute_is_deterministic() {
    let sets = load_combatant_sets(data_path("battle_factory_pokemon.json")).unwrap();
    let table = load_base_stats(data_path("base_stats.json")).unwrap();

    for round in 1..=10 {
        for fight_seven in [false, true] {
            let context = RoundContext::new(round, fight_seven);
            for set in &sets {
                let first = compute_stats(set, &table, context).unwrap();
                let second = compute_stats(set, &table, context).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}

/// Test the round schedule: effort per round and full effort from round 8.
#[test]
fn test_round_effort_schedule() {
    assert_eq!(RoundContext::new(1, false).effort(), 0);
    assert_eq!(RoundContext::new(1, true).effort(), 4);
    for fight_seven in [false, true] {
        assert_eq!(RoundContext::new(8, fight_seven).effort(), 31);
        assert_eq!(RoundContext::new(10, fight_seven).effort(), 31);
        for round in 1..8 {
            let this = RoundContext::new(round, fight_seven).effort();
            let next = RoundContext::new(round + 1, fight_seven).effort();
            assert!(next >= this, "effort dropped after round {round}");
        }
    }
}

/// Test that the round window narrows which sets a search returns.
#[test]
fn test_round_window_on_bundled_sets() {
    let path = data_path("battle_factory_pokemon.json");
    let none: [&str; 0] = [];

    let early = search("", &none, "", 1, false, false, &path).unwrap();
    assert_eq!(early.len(), 5);
    assert!(early.iter().all(|set| set.set_number == 1));

    let fight_seven = search("", &none, "", 1, true, false, &path).unwrap();
    let names: Vec<&str> = fight_seven.iter().map(|set| set.name.as_str()).collect();
    assert_eq!(names, vec!["Salamence", "Starmie", "Snorlax"]);

    let late = search("", &none, "", 8, false, false, &path).unwrap();
    assert_eq!(late.len(), 9);
}

/// Test a single attribute with stored EVs applied.
#[test]
fn test_variant_stat_from_bundled_table() {
    let attack = variant_stat(data_path("base_stats.json"), "Metagross", "atk", 252, 31, 100, "Adamant").unwrap();
    assert_eq!(attack, 405);

    let hp = variant_stat(data_path("base_stats.json"), "Mr. Mime", "hp", 0, 0, 100, "modest").unwrap();
    assert_eq!(hp, 190);

    let err = variant_stat(data_path("base_stats.json"), "Metagross", "luck", 0, 0, 100, "Adamant").unwrap_err();
    assert!(matches!(err, FactoryError::Lookup(LookupError::UnknownStat(_))));
}

/// Test the breakdown against the plain values.
#[test]
fn test_breakdown_matches_values() {
    let factory = bundled_factory();
    let results = factory.search(&QueryCriteria::new().with_name("salamence")).unwrap();
    assert_eq!(results.len(), 2);

    let round = RoundContext::new(6, true);
    for set in &results {
        let values = factory.stats(set, round).unwrap();
        let breakdown = factory.breakdown(set, round).unwrap();
        for stat in Stat::ALL {
            let derived = breakdown.get_ref(stat);
            assert_eq!(derived.stat, stat);
            assert_eq!(derived.value, values.get(stat));
        }
    }
}
