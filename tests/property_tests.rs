use disk_scheduler::prelude::*;
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Workload> {
    (1u64..500).prop_flat_map(|cylinders| {
        (prop::collection::vec(0..cylinders, 0..40), 0..cylinders)
            .prop_map(move |(requests, head)| Workload::new(requests, head, cylinders))
    })
}

fn runs(workload: &Workload) -> Vec<(Algorithm, Direction, PolicyResult)> {
    Algorithm::ALL
        .into_iter()
        .flat_map(|algorithm| {
            [Direction::Lower, Direction::Higher]
                .into_iter()
                .map(move |direction| {
                    (algorithm, direction, schedule(algorithm, workload, direction))
                })
        })
        .collect()
}

fn emits_sentinels(algorithm: Algorithm) -> bool {
    matches!(algorithm, Algorithm::Scan | Algorithm::CScan)
}

proptest! {
    #[test]
    fn total_is_path_length(workload in workload()) {
        for (algorithm, direction, result) in runs(&workload) {
            prop_assert_eq!(
                path_length(workload.head(), result.sequence()),
                result.total_seek(),
                "{} {}", algorithm, direction
            );
        }
    }

    #[test]
    fn every_request_visited_once(workload in workload()) {
        let mut expected = workload.requests().to_vec();
        expected.sort_unstable();

        for (algorithm, direction, result) in runs(&workload) {
            let mut extra = result.sequence().to_vec();
            extra.sort_unstable();
            for request in &expected {
                let position = extra.binary_search(request);
                prop_assert!(position.is_ok(), "{} {} lost {}", algorithm, direction, request);
                if let Ok(position) = position {
                    extra.remove(position);
                }
            }

            if emits_sentinels(algorithm) {
                prop_assert!(extra.len() <= 2);
                prop_assert!(extra
                    .iter()
                    .all(|&c| c == 0 || c == workload.last_cylinder()));
            } else {
                prop_assert!(extra.is_empty(), "{} {} added {:?}", algorithm, direction, extra);
            }
        }
    }

    #[test]
    fn fcfs_is_order_preserving(workload in workload()) {
        let result = fcfs(&workload);
        prop_assert_eq!(result.sequence(), workload.requests());
    }

    #[test]
    fn scheduling_is_idempotent(workload in workload()) {
        prop_assert_eq!(runs(&workload), runs(&workload));
    }

    #[test]
    fn look_never_costs_more_than_scan(workload in workload()) {
        for direction in [Direction::Lower, Direction::Higher] {
            let look_total = look(&workload, direction).total_seek();
            prop_assert!(look_total <= scan(&workload, direction).total_seek());
        }
    }

    #[test]
    fn c_scan_costs_at_least_c_look(workload in workload()) {
        let c_scan_total = c_scan(&workload).total_seek();
        let c_look_total = c_look(&workload).total_seek();
        prop_assert!(c_scan_total >= c_look_total);

        // A lowest request at 0 is reached by the wrap itself, so the two can tie.
        let (lower, _) = workload.partition();
        if lower.first().is_some_and(|&lowest| lowest > 0) {
            prop_assert!(c_scan_total > c_look_total);
        }
    }

    #[test]
    fn comparator_picks_table_minimum(workload in workload()) {
        let comparison = compare(&workload);

        prop_assert_eq!(comparison.costs().len(), Algorithm::ALL.len());
        prop_assert_eq!(comparison.costs().min(), Some(comparison.seek_time()));
        prop_assert_eq!(comparison.costs().get(comparison.optimal()), Some(comparison.seek_time()));

        let direct = schedule(
            comparison.optimal(),
            &workload,
            comparison.direction().unwrap_or_default(),
        );
        prop_assert_eq!(&direct, comparison.result());
    }
}
