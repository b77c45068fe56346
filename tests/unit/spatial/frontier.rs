//! Tests for frontier membership rules

#[cfg(test)]
mod tests {
    use allrgb::spatial::canvas::Canvas;
    use allrgb::spatial::frontier::FrontierSet;
    use allrgb::spatial::grid::{EdgePolicy, Grid, Point};
    use image::Rgb;

    fn canvas() -> Canvas {
        Canvas::new(Grid::new(4, 4, EdgePolicy::Clamped).expect("Failed to create grid"))
    }

    // Tests that extend skips occupied and out-of-bounds cells
    // Verified by inserting points unconditionally
    #[test]
    fn test_extend_filters_ineligible() {
        let mut canvas = canvas();
        canvas.take(Point::new(1, 1), Rgb([0, 0, 0])).expect("Failed to take cell");
        let mut frontier = FrontierSet::new();

        frontier.extend(
            &canvas,
            [Point::new(1, 1), Point::new(2, 1), Point::new(9, 0), Point::new(2, 1)],
        );

        assert_eq!(frontier.len(), 1);
        assert!(frontier.contains(Point::new(2, 1)));
        assert!(!frontier.contains(Point::new(1, 1)));
    }

    // Tests that take removes a point and tolerates absent points
    // Verified by leaving the point in place
    #[test]
    fn test_take_removes_point() {
        let canvas = canvas();
        let mut frontier = FrontierSet::new();
        frontier.extend(&canvas, [Point::new(0, 0), Point::new(3, 3)]);

        frontier.take(Point::new(0, 0));
        frontier.take(Point::new(2, 2));

        assert_eq!(frontier.snapshot(), vec![Point::new(3, 3)]);
    }

    // Tests that snapshots are row-major and detached from later changes
    // Verified by returning the points in insertion order
    #[test]
    fn test_snapshot_sorted_and_detached() {
        let canvas = canvas();
        let mut frontier = FrontierSet::new();
        frontier.extend(&canvas, [Point::new(3, 0), Point::new(0, 2), Point::new(1, 0)]);

        let snapshot = frontier.snapshot();
        frontier.take(Point::new(1, 0));

        assert_eq!(
            snapshot,
            vec![Point::new(1, 0), Point::new(3, 0), Point::new(0, 2)]
        );
        assert_eq!(frontier.iter().count(), 2);
        assert!(!frontier.is_empty());
    }
}
