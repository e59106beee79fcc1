use colo_rng::constants::{DEBUG_SEED, SEED_SPACE};
use colo_rng::{
    FilterChain, Nature, SearchConfig, SearchError, SeedMatch, SequenceParams, partition_range,
    search_seed_space,
};
use std::sync::Mutex;

fn collect(config: &SearchConfig, range: std::ops::Range<u64>) -> Vec<SeedMatch> {
    let found = Mutex::new(Vec::new());
    search_seed_space(config, range, |m| found.lock().unwrap().push(m), |_, _| {}).unwrap();
    let mut found = found.into_inner().unwrap();
    found.sort();
    found
}

fn sassy_config(workers: usize) -> SearchConfig {
    SearchConfig {
        sequence: SequenceParams {
            secondary_frames: 8,
            ..SequenceParams::default()
        },
        starter_filters: vec![FilterChain::new(), FilterChain::new()],
        secondary_filter: FilterChain::new().nature(Nature::Sassy),
        workers,
    }
}

#[test]
fn partitions_cover_range_without_gaps() {
    for workers in 1..=9 {
        let blocks = partition_range(0..SEED_SPACE, workers);
        assert_eq!(blocks.len(), workers);
        assert_eq!(blocks[0].start, 0);
        assert_eq!(blocks[workers - 1].end, SEED_SPACE);

        for pair in blocks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        let sizes: Vec<u64> = blocks.iter().map(|b| b.end - b.start).collect();
        let min = sizes.iter().min().unwrap();
        let max = sizes.iter().max().unwrap();
        assert!(max - min <= 1, "workers {}: {:?}", workers, sizes);
    }
}

#[test]
fn single_seed_run_reports_secondary_frames() {
    let seed = DEBUG_SEED as u64;
    let found = collect(&sassy_config(1), seed..seed + 1);

    assert!(found.len() >= 2);
    assert_eq!(found[0], SeedMatch { seed: DEBUG_SEED, frame: 0 });
    assert_eq!(found[1], SeedMatch { seed: DEBUG_SEED, frame: 1 });
    assert!(found.iter().all(|m| m.seed == DEBUG_SEED));
}

#[test]
fn default_scenario_rejects_debug_seed() {
    let seed = DEBUG_SEED as u64;
    assert!(collect(&SearchConfig::default(), seed..seed + 1).is_empty());
}

#[test]
fn results_do_not_depend_on_worker_count() {
    let range = 0x1000..0x1400;
    let reference = collect(&sassy_config(1), range.clone());
    assert!(!reference.is_empty());

    for workers in [2, 3, 7] {
        assert_eq!(collect(&sassy_config(workers), range.clone()), reference);
    }
}

#[test]
fn progress_reaches_total() {
    let total = Mutex::new(0u64);
    let summary = search_seed_space(
        &sassy_config(3),
        10..110,
        |_| {},
        |done, all| {
            let mut total = total.lock().unwrap();
            *total = (*total).max(done);
            assert_eq!(all, 100);
        },
    )
    .unwrap();

    assert_eq!(summary.seeds_scanned, 100);
    assert_eq!(*total.lock().unwrap(), 100);
}

#[test]
fn empty_range_is_a_no_op() {
    let summary = search_seed_space(&sassy_config(4), 5..5, |_| panic!("no seeds"), |_, _| {}).unwrap();
    assert_eq!(summary.seeds_scanned, 0);
    assert_eq!(summary.matches, 0);
}

#[test]
fn invalid_input_is_rejected() {
    assert!(matches!(
        search_seed_space(&sassy_config(0), 0..10, |_| {}, |_, _| {}),
        Err(SearchError::NoWorkers)
    ));
    assert!(matches!(
        search_seed_space(&sassy_config(2), 0..SEED_SPACE + 1, |_| {}, |_, _| {}),
        Err(SearchError::InvalidRange { .. })
    ));
}
