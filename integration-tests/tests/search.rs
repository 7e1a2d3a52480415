use integration_tests::People;
use kmeans_clustering::optimize::{
    Action, Config, Event, Status, Strategy, optimize, optimize_unobserved,
};
use kmeans_core::normalize::normalize_observations;
use kmeans_observers::{Logged, Patience, TargetVariance};
use rand::{SeedableRng, rngs::StdRng};

fn people() -> People {
    People::load().expect("bundled fixture parses")
}

#[test]
fn config_loads_from_toml() {
    let config: Config = toml::from_str(
        r#"
        trials_per_cluster = 25
        max_exhaustive_candidates = 100
        "#,
    )
    .unwrap();

    assert_eq!(config.trials_per_cluster(), 25);
    assert_eq!(config.exhaustive_below(), 3);
    assert_eq!(config.max_exhaustive_candidates(), Some(100));

    let empty: Config = toml::from_str("").unwrap();
    assert_eq!(empty, Config::default());
}

#[test]
fn config_rejects_invalid_toml() {
    assert!(toml::from_str::<Config>("trials_per_cluster = 0").is_err());
    assert!(toml::from_str::<Config>("max_exhaustive_candidates = 0").is_err());
    assert!(toml::from_str::<Config>("trials = 10").is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = Config::new(12, 2)
        .and_then(|c| c.with_max_exhaustive_candidates(64))
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    assert_eq!(serde_json::to_string(&Strategy::Exhaustive).unwrap(), r#""Exhaustive""#);
}

#[test]
fn toml_limit_forces_random_search() {
    let people = people();
    let normalized = normalize_observations(&people);
    let config: Config = toml::from_str(
        r#"
        trials_per_cluster = 40
        max_exhaustive_candidates = 1000
        "#,
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(8);

    let solution = optimize_unobserved(2, &normalized, &config, &mut rng).unwrap();

    assert_eq!(solution.strategy, Strategy::Randomized);
    assert_eq!(solution.trials, 80);
}

#[test]
fn patience_cuts_the_search_short() {
    let people = people();
    let normalized = normalize_observations(&people);
    let mut rng = StdRng::seed_from_u64(21);

    let solution = optimize(
        5,
        &normalized,
        &Config::default(),
        &mut rng,
        Logged::new(Patience::new(50)),
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.trials < 5000);
    assert_eq!(solution.clusters.len(), 5);
}

#[test]
fn target_variance_accepts_first_good_candidate() {
    let people = people();
    let normalized = normalize_observations(&people);
    let mut rng = StdRng::seed_from_u64(13);

    let full = optimize_unobserved(3, &normalized, &Config::default(), &mut rng).unwrap();
    let target = full.variance * 1.5;

    let solution = optimize(
        3,
        &normalized,
        &Config::default(),
        &mut rng,
        TargetVariance::new(target),
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.variance <= target);
    assert!(solution.trials <= full.trials);
}

#[test]
fn closure_observer_tracks_improvements() {
    let people = people();
    let normalized = normalize_observations(&people);
    let mut rng = StdRng::seed_from_u64(34);

    let mut history = Vec::new();
    let observer = |event: &Event<'_, f64, _>| -> Option<Action> {
        if event.is_improvement() {
            history.push(event.variance);
        }
        None
    };

    let solution = optimize(4, &normalized, &Config::default(), &mut rng, observer).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(history.last().copied(), Some(solution.variance));
    assert!(history.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn logged_search_writes_to_test_output() {
    let people = people();
    let normalized = normalize_observations(&people);
    let mut rng = StdRng::seed_from_u64(55);
    let config = Config::new(20, 3).unwrap();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    let solution = tracing::subscriber::with_default(subscriber, || {
        optimize(3, &normalized, &config, &mut rng, Logged::new(()))
    })
    .unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.trials, 60);
}
