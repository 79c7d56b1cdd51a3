//! Property tests for the grouping search.

use proptest::prelude::*;
use u_grouping::data::{ColumnGroup, Dataset};
use u_grouping::partition::Partition;
use u_grouping::score::partition_score;
use u_grouping::tabu::{TabuConfig, TabuMemory, TabuResult, TabuRunner, Termination};

#[derive(Debug, Clone)]
struct Instance {
    data: Dataset,
    initial: Partition,
    config: TabuConfig,
}

/// Random instances whose tabu capacity always leaves free slots in at
/// least two groups, so the neighborhood never runs dry.
fn instance() -> impl Strategy<Value = Instance> {
    (6usize..=14, 2usize..=3)
        .prop_flat_map(|(n, k)| {
            (
                Just(n),
                Just(k),
                prop::collection::vec(0u8..3, n),
                prop::collection::vec(0u8..2, n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                1usize..=20,
                1usize..=40,
            )
        })
        .prop_map(|(n, k, first, second, order, cap_raw, max_steps)| {
            let encode = |codes: &[u8]| -> Vec<Option<String>> {
                codes.iter().map(|c| Some(format!("v{c}"))).collect()
            };
            let data = Dataset::new(vec![
                ColumnGroup::one_hot("first", &encode(&first)).unwrap(),
                ColumnGroup::one_hot("second", &encode(&second)).unwrap(),
            ])
            .unwrap();
            let initial = Partition::divide(&order, k).unwrap();

            let largest = n.div_ceil(k);
            let limit = n - largest - 1;
            let config = TabuConfig::default()
                .with_tabu_capacity(1 + (cap_raw - 1) % limit)
                .with_max_steps(max_steps);

            Instance {
                data,
                initial,
                config,
            }
        })
}

fn run(instance: &Instance) -> TabuResult {
    TabuRunner::new(&instance.data, instance.config.clone())
        .unwrap()
        .run(&instance.initial)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_every_visited_partition_is_a_permutation(instance in instance()) {
        let result = run(&instance);
        let n = instance.data.n_records();
        let sizes = instance.initial.sizes();

        let mut current = instance.initial.clone();
        for mv in &result.moves {
            current = current.apply(mv);
            prop_assert!(current.validate(n).is_ok());
            prop_assert_eq!(current.sizes(), sizes.clone());
        }
        prop_assert!(result.best.validate(n).is_ok());
        prop_assert_eq!(result.best.sizes(), sizes);
    }

    #[test]
    fn prop_best_score_is_non_decreasing(instance in instance()) {
        let result = run(&instance);

        let mut previous = result.initial_score;
        for &score in &result.score_history {
            prop_assert!(score >= previous, "best score dropped: {} < {}", score, previous);
            previous = score;
        }
        let rescored = partition_score(&instance.data, &result.best);
        prop_assert!((rescored - result.best_score).abs() < 1e-9);
    }

    #[test]
    fn prop_accepted_moves_avoid_tabu_slots(instance in instance()) {
        let result = run(&instance);
        let mut memory = TabuMemory::new(instance.config.tabu_capacity);

        for mv in &result.moves {
            for (group, slot) in mv.endpoints() {
                prop_assert!(!memory.contains(group, slot), "move {:?} touched a tabu slot", mv);
            }
            prop_assert!(mv.src_group != mv.dst_group);
            memory.record(mv);
            prop_assert!(memory.len() <= instance.config.tabu_capacity);
        }
    }

    #[test]
    fn prop_runs_are_deterministic(instance in instance()) {
        let a = run(&instance);
        let b = run(&instance);

        prop_assert_eq!(&a.moves, &b.moves);
        prop_assert_eq!(&a.best, &b.best);
        prop_assert_eq!(a.best_score.to_bits(), b.best_score.to_bits());
        prop_assert_eq!(a.termination, b.termination);
    }

    #[test]
    fn prop_run_terminates_within_limits(instance in instance()) {
        let result = run(&instance);
        let config = &instance.config;

        prop_assert!(result.steps <= config.max_steps);
        prop_assert_eq!(result.moves.len(), result.steps);
        prop_assert_eq!(result.score_history.len(), result.steps);
        match result.termination {
            Termination::MaxStepsReached => prop_assert_eq!(result.steps, config.max_steps),
            Termination::Stalled => {
                prop_assert_eq!(result.steps - result.best_step, config.max_no_improve)
            }
            Termination::TargetReached => prop_assert!(false, "no target configured"),
        }
    }

    #[test]
    fn prop_tabu_memory_is_bounded(
        capacity in 1usize..8,
        pushes in prop::collection::vec((0usize..4, 0usize..6), 0..40),
    ) {
        let mut memory = TabuMemory::new(capacity);
        for (i, &(group, slot)) in pushes.iter().enumerate() {
            memory.push(group, slot);
            prop_assert!(memory.len() <= capacity);
            prop_assert_eq!(memory.len(), (i + 1).min(capacity));
            prop_assert!(memory.contains(group, slot));
        }

        let expected: Vec<(usize, usize)> =
            pushes.iter().copied().skip(pushes.len().saturating_sub(capacity)).collect();
        prop_assert_eq!(memory.iter().collect::<Vec<_>>(), expected);
    }
}
