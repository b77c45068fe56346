//! Tests for grid validation, neighbourhood enumeration and edge wrapping

#[cfg(test)]
mod tests {
    use allrgb::spatial::grid::{EdgePolicy, Grid, Point};
    use std::collections::HashSet;

    fn clamped(width: usize, height: usize) -> Grid {
        Grid::new(width, height, EdgePolicy::Clamped).expect("Failed to create grid")
    }

    // Tests corner, edge and interior neighbourhood sizes on an 8x4 grid
    // Verified by removing the border clamp
    #[test]
    fn test_neighbours_clamped_counts() {
        let grid = clamped(8, 4);

        assert_eq!(
            grid.neighbours(Point::new(0, 0), 1),
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        assert_eq!(grid.neighbours(Point::new(1, 1), 1).len(), 8);
        assert_eq!(
            grid.neighbours(Point::new(7, 3), 1),
            vec![Point::new(6, 2), Point::new(7, 2), Point::new(6, 3)]
        );
        assert_eq!(grid.neighbours(Point::new(3, 0), 1).len(), 5);
    }

    // Tests that the centre point is never reported as its own neighbour
    // Verified by removing the self-exclusion check
    #[test]
    fn test_neighbours_exclude_self() {
        let grid = clamped(5, 5);
        let centre = Point::new(2, 2);

        for radius in 1..=3 {
            assert!(!grid.neighbours(centre, radius).contains(&centre));
        }
        assert_eq!(grid.neighbours(centre, 2).len(), 24);
    }

    // Tests that neighbours come out in row-major order
    // Verified by swapping the row and column loops
    #[test]
    fn test_neighbours_row_major() {
        let grid = clamped(8, 4);
        let found = grid.neighbours(Point::new(4, 2), 1);

        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
    }

    // Tests that toroidal neighbourhoods wrap around the border
    // Verified by disabling the modulo in axis wrapping
    #[test]
    fn test_neighbours_toroidal_wrap() {
        let grid = Grid::new(8, 4, EdgePolicy::Toroidal).expect("Failed to create grid");
        let found = grid.neighbours(Point::new(0, 0), 1);

        assert_eq!(found.len(), 8);
        assert!(found.contains(&Point::new(7, 3)));
        assert!(found.contains(&Point::new(7, 0)));
        assert!(found.contains(&Point::new(0, 3)));
    }

    // Tests that wide toroidal windows never report a cell twice
    // Verified by removing the whole-axis collapse
    #[test]
    fn test_neighbours_toroidal_no_duplicates() {
        let grid = Grid::new(3, 2, EdgePolicy::Toroidal).expect("Failed to create grid");
        let found = grid.neighbours(Point::new(1, 1), 2);
        let unique: HashSet<Point> = found.iter().copied().collect();

        assert_eq!(found.len(), unique.len());
        assert_eq!(found.len(), 5);
    }

    // Tests that radii far beyond the canvas cover it once without overflowing
    // Verified by sizing the window from the unclamped radius
    #[test]
    fn test_neighbours_huge_radius() {
        let flat = clamped(4, 3);
        let torus = Grid::new(4, 3, EdgePolicy::Toroidal).expect("Failed to create grid");

        for grid in [flat, torus] {
            for radius in [4, 1 << 33, usize::MAX] {
                let found = grid.neighbours(Point::new(1, 2), radius);
                let unique: HashSet<Point> = found.iter().copied().collect();

                assert_eq!(found.len(), 11, "radius = {radius}");
                assert_eq!(unique.len(), 11);
            }
        }
    }

    // Tests dimension validation
    // Verified by removing the zero and maximum checks
    #[test]
    fn test_new_rejects_invalid_dimensions() {
        assert!(Grid::new(0, 4, EdgePolicy::Clamped).is_err());
        assert!(Grid::new(4, 0, EdgePolicy::Clamped).is_err());
        assert!(Grid::new(100_000, 4, EdgePolicy::Clamped).is_err());
        assert!(Grid::new(1, 1, EdgePolicy::Clamped).is_ok());
    }

    // Tests row-major point ordering used for tie-breaking
    // Verified by comparing x before y
    #[test]
    fn test_point_ordering_row_major() {
        assert!(Point::new(7, 0) < Point::new(0, 1));
        assert!(Point::new(1, 2) < Point::new(2, 2));
    }

    // Tests linear index round trip and containment
    // Verified by transposing the index formula
    #[test]
    fn test_index_and_contains() {
        let grid = clamped(8, 4);

        assert_eq!(grid.index(Point::new(3, 2)), 19);
        assert_eq!(grid.point_at(19), Point::new(3, 2));
        assert!(grid.contains(Point::new(7, 3)));
        assert!(!grid.contains(Point::new(8, 0)));
        assert_eq!(grid.points().count(), 32);
    }

    // Tests toroidal delta takes the shorter way around
    // Verified by returning the raw difference for toroidal grids
    #[test]
    fn test_delta_shortest_path() {
        let flat = clamped(8, 4);
        let torus = Grid::new(8, 4, EdgePolicy::Toroidal).expect("Failed to create grid");

        assert_eq!(flat.delta(Point::new(0, 0), Point::new(7, 3)), (7, 3));
        assert_eq!(torus.delta(Point::new(0, 0), Point::new(7, 3)), (-1, -1));
    }

    // Tests predicate counting over a neighbourhood
    // Verified by counting every neighbour regardless of predicate
    #[test]
    fn test_count_neighbours() {
        let grid = clamped(5, 5);
        let count = grid.count_neighbours(Point::new(2, 2), 1, |p| p.y == 1);

        assert_eq!(count, 3);
    }
}
