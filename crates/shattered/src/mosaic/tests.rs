use super::sample::{divide_line, random_color};
use super::*;
use crate::polygon_area;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn rect(w: f64, h: f64) -> [Vector2<f64>; 4] {
    [vector![0.0, 0.0], vector![w, 0.0], vector![w, h], vector![0.0, h]]
}

#[test]
fn reset_yields_single_rectangle() {
    for &(h, w) in &[(100.0, 100.0), (480.0, 640.0), (0.0, 12.0), (7.0, 0.0), (0.0, 0.0)] {
        let mut g = Generator::seeded(h, w, 5);
        g.reset();
        let pieces = g.pieces();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].points, rect(w, h));
        assert_eq!(pieces[0].area, w * h);
        assert_eq!(pieces[0].color.alpha, 1.0);
    }
}

#[test]
fn reset_twice_same_geometry_new_color() {
    let mut g = Generator::seeded(50.0, 80.0, 17);
    g.reset();
    let first = g.pieces()[0];
    g.reset();
    let second = g.pieces()[0];
    assert_eq!(g.pieces().len(), 1);
    assert_eq!(first.points, second.points);
    assert_eq!(first.area, second.area);
    // Colors are drawn independently on each reset.
    assert_ne!(first.color, second.color);
}

#[test]
fn reset_discards_previous_run() {
    let mut g = Generator::seeded(20.0, 30.0, 8);
    assert_eq!(g.run().len(), 51);
    g.reset();
    assert_eq!(g.pieces().len(), 1);
}

#[test]
fn run_yields_51_pieces_and_restarts() {
    let mut g = Generator::seeded(100.0, 100.0, 42);
    for _ in 0..5 {
        let pieces = g.run();
        assert_eq!(pieces.len(), 51);
        assert_eq!(g.pieces(), pieces.as_slice());
    }
}

#[test]
fn run_with_entropy_rng_has_expected_shape() {
    let mut g = Generator::new(300.0, 200.0);
    let pieces = g.run();
    assert_eq!(pieces.len(), 51);
    let total: f64 = pieces.iter().map(Piece::true_area).sum();
    assert!((total - 60_000.0).abs() < 1e-6, "total area {total}");
}

#[test]
fn returned_mosaic_is_a_snapshot() {
    let mut g = Generator::seeded(10.0, 10.0, 3);
    let before = g.run();
    let copy = before.clone();
    let after = g.run();
    assert_eq!(before, copy);
    assert_ne!(before, after);
}

#[test]
fn end_to_end_area_is_preserved() {
    let mut g = Generator::new(100.0, 100.0);
    let pieces = g.run();
    assert_eq!(pieces.len(), 51);
    let total: f64 = pieces.iter().map(|p| p.true_area()).sum();
    assert!((total - 10_000.0).abs() < 1e-6, "total area {total}");
}

#[test]
fn stored_area_is_inherited_not_recomputed() {
    let mut g = Generator::seeded(100.0, 100.0, 2024);
    let pieces = g.run();
    assert!(pieces.iter().all(|p| p.area == 10_000.0));
    assert!(pieces.iter().any(|p| (p.true_area() - p.area).abs() > 1.0));
}

#[test]
fn pieces_keep_winding_and_positive_area() {
    let mut g = Generator::seeded(100.0, 160.0, 77);
    for p in g.run() {
        assert!(polygon_area(&p.points) > 0.0);
        for q in p.points {
            let eps = 1e-9;
            assert!(q.x >= -eps && q.x <= 160.0 + eps, "{q:?}");
            assert!(q.y >= -eps && q.y <= 100.0 + eps, "{q:?}");
        }
    }
}

#[test]
fn zero_dimensions_collapse_without_panicking() {
    let mut g = Generator::seeded(0.0, 0.0, 9);
    let pieces = g.run();
    assert_eq!(pieces.len(), 51);
    for p in &pieces {
        assert_eq!(p.true_area(), 0.0);
        assert_eq!(p.area, 0.0);
    }

    let mut flat = Generator::seeded(0.0, 25.0, 9);
    let total: f64 = flat.run().iter().map(Piece::true_area).sum();
    assert_eq!(total, 0.0);
}

#[test]
fn negative_dimensions_give_mirrored_geometry() {
    let mut g = Generator::new(-10.0, 20.0);
    let pieces = g.run();
    assert_eq!(pieces.len(), 51);
    let total: f64 = pieces.iter().map(Piece::true_area).sum();
    assert!((total - 200.0).abs() < 1e-9);
}

#[test]
fn slice_partitions_parent_corners() {
    let mut g = Generator::seeded(60.0, 90.0, 21);
    g.reset();
    let parent = g.pieces()[0];
    for edge in 0..4 {
        let [kept, fresh] = g.slice_across(&parent, edge);
        for k in 0..4 {
            let in_kept = kept.points[k] == parent.points[k];
            let in_fresh = fresh.points[k] == parent.points[k];
            assert!(in_kept ^ in_fresh, "edge {edge}, corner {k}");
        }
        assert_eq!(kept.color, parent.color);
        assert_eq!(kept.area, parent.area);
        assert_eq!(fresh.area, parent.area);
        // shared cut edge
        let s1 = edge;
        let s2 = (edge + 2) % 4;
        assert_eq!(kept.points[(s1 + 1) % 4], fresh.points[s1]);
        assert_eq!(kept.points[s2], fresh.points[(s2 + 1) % 4]);
        let sum = kept.true_area() + fresh.true_area();
        assert!((sum - parent.true_area()).abs() < 1e-9);
    }
}

#[test]
fn slice_random_edge_partitions_nested_pieces() {
    let mut g = Generator::seeded(100.0, 100.0, 4);
    for parent in g.run() {
        let [a, b] = g.slice(&parent);
        let retained = (0..4)
            .filter(|&k| a.points[k] == parent.points[k])
            .count()
            + (0..4).filter(|&k| b.points[k] == parent.points[k]).count();
        assert_eq!(retained, 4);
        let sum = a.true_area() + b.true_area();
        assert!((sum - parent.true_area()).abs() < 1e-9);
    }
}

#[test]
fn random_color_statistics() {
    let cfg = MosaicCfg::default();
    let mut rng = StdRng::seed_from_u64(1234);
    let n = 10_000;
    let mut hue_sum = 0.0;
    for _ in 0..n {
        let c = random_color(&mut rng, &cfg);
        assert!((0.0..=1.0).contains(&c.hue));
        assert!((0.5..=1.0).contains(&c.saturation));
        assert!((0.5..=1.0).contains(&c.brightness));
        assert_eq!(c.alpha, 1.0);
        hue_sum += c.hue;
    }
    // Full spectrum: mean hue close to the middle.
    assert!((hue_sum / n as f64 - 0.5).abs() < 0.02);
}

#[test]
fn vertical_edge_keeps_x() {
    let cfg = MosaicCfg::default();
    let mut rng = StdRng::seed_from_u64(6);
    let p1 = vector![3.0, 10.0];
    let p2 = vector![3.0, 0.0];
    for _ in 0..1_000 {
        let q = divide_line(&mut rng, p1, p2, &cfg);
        assert_eq!(q.x, 3.0);
        assert!(q.y > 0.0 && q.y < 10.0);
    }
}

proptest! {
    #[test]
    fn divide_line_sloped_point_on_segment(
        x1 in -1e3f64..1e3, y1 in -1e3f64..1e3,
        dx in 1.0f64..500.0, dy in -500.0f64..500.0,
        flip in any::<bool>(), seed in any::<u64>(),
    ) {
        let a = vector![x1, y1];
        let b = vector![x1 + dx, y1 + dy];
        let (p1, p2) = if flip { (b, a) } else { (a, b) };
        let mut rng = StdRng::seed_from_u64(seed);
        let q = divide_line(&mut rng, p1, p2, &MosaicCfg::default());
        prop_assert!(q.x > a.x && q.x < b.x);
        let expected_y = (b.y - a.y) / (b.x - a.x) * (q.x - a.x) + a.y;
        prop_assert!((q.y - expected_y).abs() <= 1e-9 * (1.0 + expected_y.abs()));
    }

    #[test]
    fn divide_line_vertical_point_on_segment(
        x in -1e3f64..1e3, y1 in -1e3f64..1e3, len in 1.0f64..500.0,
        flip in any::<bool>(), seed in any::<u64>(),
    ) {
        let a = vector![x, y1];
        let b = vector![x, y1 + len];
        let (p1, p2) = if flip { (b, a) } else { (a, b) };
        let mut rng = StdRng::seed_from_u64(seed);
        let q = divide_line(&mut rng, p1, p2, &MosaicCfg::default());
        prop_assert_eq!(q.x, x);
        prop_assert!(q.y > a.y && q.y < b.y);
    }

    #[test]
    fn run_tiles_rectangle(
        h in 1.0f64..2_000.0, w in 1.0f64..2_000.0, seed in any::<u64>(),
    ) {
        let mut g = Generator::seeded(h, w, seed);
        let pieces = g.run();
        prop_assert_eq!(pieces.len(), 51);
        let total: f64 = pieces.iter().map(Piece::true_area).sum();
        prop_assert!((total - h * w).abs() <= 1e-9 * h * w);
    }
}
