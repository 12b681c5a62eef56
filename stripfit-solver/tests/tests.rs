#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use test_case::test_case;

    use stripfit_core::Rectangle;
    use stripfit_solver::config::SolverConfig;
    use stripfit_solver::{idbs, race};

    fn rect(id: usize, w: i64, h: i64) -> Rectangle {
        Rectangle::new(id, w, h)
    }

    fn fast_config() -> SolverConfig {
        SolverConfig {
            tabu_list_length: 10,
            tabu_tenure_multiplier: 3,
            time_limit: Duration::from_secs(2),
            parallelism: 2,
            prng_seed: Some(1),
            max_spread: None,
        }
    }

    /// S6 — LB race: a perfectly tileable instance must converge to
    /// `height == H_target` well within the time budget.
    #[test_case(
        vec![(2,2),(2,2),(2,2),(2,2)], 4, 4;
        "four_2x2_in_width_4"
    )]
    #[test_case(
        vec![(1,3),(2,3),(3,1)], 3, 3;
        "rotation_required_row"
    )]
    fn idbs_reaches_known_optimum(dims: Vec<(i64, i64)>, width: i64, target: i64) {
        let rects: Vec<Rectangle> = dims
            .into_iter()
            .enumerate()
            .map(|(id, (w, h))| rect(id, w, h))
            .collect();
        let cancel = AtomicBool::new(false);
        let config = fast_config();
        let mut rng = SmallRng::seed_from_u64(0);

        let result = idbs::run(
            &rects,
            width,
            Some(target),
            Duration::from_secs(5),
            &cancel,
            &config,
            &mut rng,
        )
        .expect("a feasible height should be found");

        assert_eq!(result.height, target);
        assert!(result.reached_target);
    }

    #[test]
    fn race_harness_converges_with_multiple_workers() {
        let rects = vec![rect(0, 2, 2), rect(1, 2, 2), rect(2, 2, 2), rect(3, 2, 2)];
        let config = fast_config();
        let outcome = race::run(&rects, 4, Some(4), &config);
        let best = outcome.result.expect("race should find a feasible height");
        assert_eq!(best.height, 4);
    }

    #[test]
    fn race_harness_runs_single_worker_when_parallelism_is_one() {
        let rects = vec![rect(0, 10, 5)];
        let mut config = fast_config();
        config.parallelism = 1;
        let outcome = race::run(&rects, 10, Some(5), &config);
        let best = outcome.result.expect("a single rectangle always fits trivially");
        assert_eq!(best.height, 5);
    }
}
