//! Tests for single-tile relaxation steps and the full layout loop

#[cfg(test)]
mod tests {
    use collagen::CanvasConfig;
    use collagen::CollageError;
    use collagen::geometry::{Point, Rect, Vector};
    use collagen::io::configuration::{MAX_ITERATIONS, MIN_DISPLACEMENT, PULLING_FORCE};
    use collagen::layout::collision::{Collision, overlaps};
    use collagen::layout::engine::{LayoutOptions, arrange, relax_tile};
    use collagen::layout::{InitialArrangement, Tile};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    // 20x20 tiles at the given top-left corners
    fn squares(corners: &[(f32, f32)]) -> Vec<Tile> {
        corners
            .iter()
            .map(|&(x, y)| {
                let mut tile = crate::gray_tile(10, 10, 40.0);
                tile.set_location(Point::new(x, y));
                tile
            })
            .collect()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // Tests a free tile moves one pulling force towards the singularity
    // Verified by applying the pull away from the singularity
    #[test]
    fn test_free_tile_pulled() {
        let canvas = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut tiles = squares(&[(0.0, 0.0)]);

        let moved = relax_tile(&mut tiles, 0, &canvas, Point::new(100.0, 100.0));

        assert!(close(moved, PULLING_FORCE));
        let offset = PULLING_FORCE / 2.0_f32.sqrt();
        assert!(close(tiles[0].x, offset));
        assert!(close(tiles[0].y, offset));
        assert!(close(tiles[0].velocity.magnitude(), PULLING_FORCE));
        assert!(close(tiles[0].velocity.direction(), 45.0));
    }

    // Tests damping carries half the previous velocity forward
    // Verified by dropping the damping term
    #[test]
    fn test_velocity_damped() {
        let canvas = Rect::new(0.0, 0.0, 400.0, 400.0);
        let mut tiles = squares(&[(0.0, 190.0)]);
        tiles[0].velocity = Vector::new(8.0, 0.0);

        let moved = relax_tile(&mut tiles, 0, &canvas, Point::new(300.0, 200.0));

        assert!(close(moved, PULLING_FORCE + 4.0));
        assert!(close(tiles[0].velocity.magnitude(), 14.0));
        assert!(close(tiles[0].x, 14.0));
    }

    // Tests a tile leaving the canvas from inside is put back
    // Verified by keeping out-of-bounds moves
    #[test]
    fn test_escape_reverted() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut tiles = squares(&[(0.0, 40.0)]);

        let moved = relax_tile(&mut tiles, 0, &canvas, Point::new(-100.0, 50.0));

        assert!(close(moved, 0.0));
        assert_eq!(tiles[0].location(), Point::new(0.0, 40.0));
        assert!(close(tiles[0].velocity.magnitude(), PULLING_FORCE));
    }

    // Tests a tile already outside the canvas keeps moving back in
    // Verified by reverting every out-of-bounds move
    #[test]
    fn test_outside_tile_reenters() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut tiles = squares(&[(-50.0, 40.0)]);

        let moved = relax_tile(&mut tiles, 0, &canvas, Point::new(50.0, 50.0));

        assert!(close(moved, PULLING_FORCE));
        assert!(close(tiles[0].x, -40.0));
        assert!(close(tiles[0].y, 40.0));
    }

    // Tests a blocked move slides along the free axis and bounces
    // Verified by reverting blocked moves without sliding
    #[test]
    fn test_collision_slides_horizontally() {
        let canvas = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut tiles = squares(&[(0.0, 0.0), (20.0, 25.0)]);

        let moved = relax_tile(&mut tiles, 0, &canvas, Point::new(150.0, 150.0));

        let offset = PULLING_FORCE / 2.0_f32.sqrt();
        assert!(close(moved, offset));
        assert!(close(tiles[0].x, offset));
        assert!(close(tiles[0].y, 0.0));
        assert_eq!(overlaps(&tiles, 0, &canvas), Collision::None);
        assert!(tiles[0].velocity.magnitude() < PULLING_FORCE);
    }

    // Tests a tile blocked on both axes stays put
    // Verified by accepting the first slide without a collision check
    #[test]
    fn test_collision_fully_blocked() {
        let canvas = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut tiles = squares(&[(0.0, 0.0), (21.0, 21.0), (21.0, 0.0), (0.0, 21.0)]);

        let moved = relax_tile(&mut tiles, 0, &canvas, Point::new(150.0, 150.0));

        assert!(close(moved, 0.0));
        assert_eq!(tiles[0].location(), Point::ORIGIN);
    }

    // Tests random layouts stay inside the canvas without overlap
    // Verified by skipping the collision response
    #[test]
    fn test_arrange_random_keeps_invariants() {
        let config = CanvasConfig::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut tiles: Vec<Tile> = [60.0, 70.0, 80.0, 90.0, 100.0, 110.0]
            .into_iter()
            .map(|size| crate::gray_tile(16, 9, size))
            .collect();

        let report =
            arrange(&mut tiles, &config, &mut rng, LayoutOptions::default()).expect("layout");

        assert!(report.iterations >= 1 && report.iterations <= MAX_ITERATIONS);
        assert!(!report.timed_out);
        if report.converged {
            assert!(report.total_displacement <= MIN_DISPLACEMENT);
        }
        for index in 0..tiles.len() {
            assert_eq!(overlaps(&tiles, index, &config.bounds()), Collision::None);
        }
    }

    // Tests identical seeds give identical layouts
    // Verified by seeding from entropy
    #[test]
    fn test_arrange_deterministic() {
        let run = || {
            let mut config = CanvasConfig::new(640.0, 480.0);
            config.initial_arrangement = InitialArrangement::Uniform;
            let mut rng = StdRng::seed_from_u64(99);
            let mut tiles: Vec<Tile> = (0..5)
                .map(|i| crate::gray_tile(4, 3, 10.0f32.mul_add(i as f32, 50.0)))
                .collect();
            arrange(&mut tiles, &config, &mut rng, LayoutOptions::default()).expect("layout");
            tiles.iter().map(Tile::location).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    // Tests an empty collage converges immediately
    // Verified by requiring a positive displacement to stop
    #[test]
    fn test_arrange_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut tiles: Vec<Tile> = Vec::new();
        let report = arrange(
            &mut tiles,
            &CanvasConfig::default(),
            &mut rng,
            LayoutOptions::default(),
        )
        .expect("nothing to place");
        assert_eq!(report.iterations, 1);
        assert!(report.converged);
    }

    // Tests a zero deadline stops after the first iteration
    // Verified by checking the deadline before the displacement
    #[test]
    fn test_arrange_deadline() {
        let mut config = CanvasConfig::new(800.0, 600.0);
        config.initial_arrangement = InitialArrangement::Uniform;
        let mut rng = StdRng::seed_from_u64(2);
        let mut tiles: Vec<Tile> = (0..4).map(|_| crate::gray_tile(1, 1, 80.0)).collect();

        let report = arrange(
            &mut tiles,
            &config,
            &mut rng,
            LayoutOptions {
                deadline: Some(Duration::ZERO),
            },
        )
        .expect("layout");

        assert_eq!(report.iterations, 1);
        assert!(report.timed_out);
        assert!(!report.converged);
    }

    // Tests degenerate canvases are rejected before any work
    // Verified by validating after distribution
    #[test]
    fn test_arrange_invalid_canvas() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut tiles = squares(&[(0.0, 0.0)]);
        let result = arrange(
            &mut tiles,
            &CanvasConfig::new(0.0, 100.0),
            &mut rng,
            LayoutOptions::default(),
        );
        assert!(matches!(result, Err(CollageError::InvalidParameter { .. })));
        assert!(LayoutOptions::default().deadline.is_none());
    }
}
