//! Tests for the single-writer placement service under concurrent callers

#[cfg(test)]
mod tests {
    use allrgb::AlgorithmError;
    use allrgb::algorithm::cost::CostConfig;
    use allrgb::algorithm::executor::PlacementEngine;
    use allrgb::algorithm::service::PlacementService;
    use allrgb::spatial::grid::Point;
    use image::Rgb;
    use std::collections::HashSet;
    use std::thread;

    fn engine(width: usize, height: usize) -> PlacementEngine {
        PlacementEngine::with_workers(width, height, &[Point::new(0, 0)], CostConfig::default(), 2)
            .expect("Failed to create engine")
    }

    // Tests that concurrent callers never receive the same cell
    // Verified by evaluating outside the placement thread
    #[test]
    fn test_concurrent_placements_are_distinct() {
        let service = PlacementService::spawn(engine(4, 4)).expect("Failed to spawn service");

        let workers: Vec<_> = (0..4u8)
            .map(|caller| {
                let handle = service.handle();
                thread::spawn(move || {
                    (0..4u8)
                        .map(|index| handle.place(Rgb([caller * 60, index * 60, 0])))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut placed = HashSet::new();
        for worker in workers {
            for result in worker.join().expect("Caller thread panicked") {
                let point = result.expect("Failed to place");
                assert!(placed.insert(point), "({}, {}) placed twice", point.x, point.y);
            }
        }

        assert_eq!(placed.len(), 16);
        let canvas = service.handle().snapshot().expect("Failed to snapshot");
        assert!(canvas.is_full());
    }

    // Tests that requests from one caller are served in submission order
    // Verified by comparing against a directly driven engine
    #[test]
    fn test_service_matches_direct_engine() {
        let colors: Vec<Rgb<u8>> = (0..12u8).map(|i| Rgb([i * 20, 255 - i * 20, i * 7])).collect();

        let mut direct = engine(4, 3);
        let expected: Vec<Point> = colors
            .iter()
            .map(|&color| direct.place(color).expect("Failed to place"))
            .collect();

        let service = PlacementService::spawn(engine(4, 3)).expect("Failed to spawn service");
        let handle = service.handle();
        let served: Vec<Point> = colors
            .iter()
            .map(|&color| handle.place(color).expect("Failed to place"))
            .collect();

        assert_eq!(served, expected);
        assert!(matches!(
            handle.place(Rgb([0, 0, 0])),
            Err(AlgorithmError::CanvasFull { capacity: 12 })
        ));
    }

    // Tests that cancellation fails every later request without committing
    // Verified by ignoring the token in the placement loop
    #[test]
    fn test_cancel_fails_queued_requests() {
        let service = PlacementService::spawn(engine(4, 4)).expect("Failed to spawn service");
        let handle = service.handle();
        handle.place(Rgb([1, 2, 3])).expect("Failed to place");

        service.cancel();

        assert!(matches!(handle.place(Rgb([1, 2, 3])), Err(AlgorithmError::Cancelled)));
        let engine = service.shutdown().expect("Failed to shut down");
        assert_eq!(engine.placed(), 1);
    }

    // Tests that a stopped service reports closure to remaining handles
    // Verified by keeping the loop alive after shutdown
    #[test]
    fn test_shutdown_closes_handles() {
        let service = PlacementService::spawn(engine(3, 3)).expect("Failed to spawn service");
        let handle = service.handle();
        handle.place(Rgb([9, 9, 9])).expect("Failed to place");

        let engine = service.shutdown().expect("Failed to shut down");

        assert_eq!(engine.placed(), 1);
        assert!(matches!(handle.place(Rgb([9, 9, 9])), Err(AlgorithmError::ServiceClosed)));
        assert!(matches!(handle.snapshot(), Err(AlgorithmError::ServiceClosed)));
    }
}
