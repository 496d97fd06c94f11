//! End-to-end engine tests covering the documented run invariants

use std::cell::RefCell;
use std::rc::Rc;

use slotsim_core_rs::{
    Engine, LaneStats, Scenario, SimulationConfig, SimulationState, TickObserver, TickResult,
    TxKind,
};

fn engine_with_seed(seed: u64) -> Engine {
    Engine::new(SimulationConfig {
        rng_seed: seed,
        ..SimulationConfig::default()
    })
    .unwrap()
}

#[test]
fn test_five_tick_run_totals_and_samples() {
    let mut engine = engine_with_seed(42);

    engine.start();
    let mut generated = 0u64;
    for _ in 0..5 {
        let result = engine.tick().unwrap();
        generated += result.batch_size as u64;
        assert_eq!(result.reserved_confirmed, result.batch_size);
    }
    engine.pause();

    let state = engine.state();
    assert_eq!(state.legacy_stats.total_tx, generated);
    assert_eq!(state.reserved_stats.total_tx, generated);

    assert_eq!(state.throughput.len(), 5);
    let slots: Vec<u64> = state.throughput.iter().map(|s| s.slot).collect();
    for pair in slots.windows(2) {
        assert!(pair[0] < pair[1], "sample slots must strictly increase");
    }
}

#[test]
fn test_lane_totals_always_equal() {
    let mut engine = engine_with_seed(7);
    engine.set_scenario(Scenario::MarketCrash);

    for _ in 0..100 {
        engine.tick().unwrap();
        let state = engine.state();
        assert_eq!(state.legacy_stats.total_tx, state.reserved_stats.total_tx);
    }
}

#[test]
fn test_reserved_lane_never_degrades() {
    let mut engine = engine_with_seed(8);

    for scenario in [Scenario::MintRush, Scenario::MarketCrash, Scenario::Normal] {
        engine.set_scenario(scenario);
        for _ in 0..50 {
            engine.tick().unwrap();
            let reserved = &engine.state().reserved_stats;
            assert_eq!(reserved.dropped_tx, 0);
            assert_eq!(reserved.mev_lost, 0.0);
        }
    }
    // Reserved history only ever holds confirmed records
    assert!(engine
        .state()
        .reserved_history
        .iter()
        .all(|tx| tx.is_confirmed()));
}

#[test]
fn test_throughput_window_evicts_oldest_after_31_ticks() {
    let mut engine = engine_with_seed(3);

    for _ in 0..31 {
        engine.tick().unwrap();
    }

    let state = engine.state();
    assert_eq!(state.throughput.len(), 30);

    // Slot 1000 was the first tick's sample; after 31 ticks it is gone and
    // the second tick's sample (slot 1001) is the oldest present
    let slots: Vec<u64> = state.throughput.iter().map(|s| s.slot).collect();
    assert!(!slots.contains(&1000));
    assert_eq!(state.throughput.front().unwrap().slot, 1001);
    assert_eq!(state.throughput.back().unwrap().slot, 1030);
}

#[test]
fn test_lane_histories_stay_bounded() {
    let mut engine = engine_with_seed(12);
    engine.set_scenario(Scenario::MintRush); // largest batches

    for _ in 0..40 {
        engine.tick().unwrap();
        let state = engine.state();
        assert!(state.legacy_history.len() <= 24);
        assert!(state.reserved_history.len() <= 24);
    }

    // Long past warm-up both buffers sit at capacity holding the newest records
    let state = engine.state();
    assert_eq!(state.legacy_history.len(), 24);
    assert_eq!(state.reserved_history.len(), 24);
    let newest_slot_prefix = format!("{}-", engine.current_slot() - 1);
    assert!(state
        .legacy_history
        .back()
        .unwrap()
        .id()
        .starts_with(&newest_slot_prefix));
}

#[test]
fn test_scenario_change_takes_effect_next_tick_only() {
    let mut engine = engine_with_seed(21);

    let before = engine.tick().unwrap();
    assert!(before.batch_size <= 6, "normal batches are small");

    // Switch while stopped; already-folded records are untouched
    let legacy_before = engine.state().legacy_stats.clone();
    engine.set_scenario(Scenario::MintRush);
    assert_eq!(engine.state().legacy_stats, legacy_before);

    let after = engine.tick().unwrap();
    assert!(
        after.batch_size >= 10,
        "mint rush must shape the very next tick"
    );
    assert!(engine
        .state()
        .legacy_history
        .back()
        .unwrap()
        .kind()
        == TxKind::Mint);
}

#[test]
fn test_reset_restores_documented_defaults() {
    let mut engine = engine_with_seed(5);
    engine.set_scenario(Scenario::MarketCrash);
    engine.start();
    for _ in 0..20 {
        engine.tick().unwrap();
    }

    engine.reset();

    assert!(!engine.is_running());
    assert_eq!(engine.scenario(), Scenario::Normal);
    assert_eq!(engine.current_slot(), 1000);

    let state = engine.state();
    assert_eq!(state.legacy_stats, LaneStats::legacy_baseline());
    assert_eq!(state.reserved_stats, LaneStats::reserved_baseline());
    assert!(state.legacy_history.is_empty());
    assert!(state.reserved_history.is_empty());
    assert!(state.throughput.is_empty());
}

#[test]
fn test_identical_seeds_produce_identical_runs() {
    let mut a = engine_with_seed(1717);
    let mut b = engine_with_seed(1717);

    for _ in 0..25 {
        assert_eq!(a.tick().unwrap(), b.tick().unwrap());
    }
    assert_eq!(
        a.state().legacy_stats.mev_lost,
        b.state().legacy_stats.mev_lost
    );
}

#[test]
fn test_mev_accrual_matches_tick_deltas() {
    let mut engine = engine_with_seed(64);
    engine.set_scenario(Scenario::MarketCrash);

    let mut accrued = 0.0f64;
    for _ in 0..30 {
        let result = engine.tick().unwrap();
        accrued += result.mev_lost_delta;
    }

    let lost = engine.state().legacy_stats.mev_lost;
    assert!((lost - accrued).abs() < 1e-9);
    assert!(lost > 0.0, "a crash run without MEV loss is implausible");
}

#[test]
fn test_observers_see_every_tick() {
    #[derive(Default)]
    struct Recorder {
        seen: Rc<RefCell<Vec<(u64, usize)>>>,
    }

    impl TickObserver for Recorder {
        fn on_tick(&mut self, state: &SimulationState, result: &TickResult) {
            // Observer reads post-fold state
            assert_eq!(state.clock.current_slot(), result.slot + 1);
            self.seen.borrow_mut().push((result.slot, result.batch_size));
        }
    }

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine_with_seed(2);
    engine
        .add_observer(Box::new(Recorder { seen: seen.clone() }))
        .unwrap();

    let expected: Vec<(u64, usize)> = (0..4)
        .map(|_| engine.tick().unwrap())
        .map(|r| (r.slot, r.batch_size))
        .collect();

    assert_eq!(*seen.borrow(), expected);
}

#[test]
fn test_snapshot_reads_do_not_disturb_the_run() {
    let mut witness = engine_with_seed(90);
    let witness_run: Vec<TickResult> = (0..10).map(|_| witness.tick().unwrap()).collect();

    let mut engine = engine_with_seed(90);
    let mut run = Vec::new();
    for _ in 0..10 {
        let _ = engine.snapshot(); // report capture between ticks
        run.push(engine.tick().unwrap());
    }

    assert_eq!(run, witness_run);
}
