use approx::assert_relative_eq;
use casteljau_bezier_viewer::{evaluate, levels, sample_up_to, Preset};
use glam::DVec2;

/// Konvexe Hülle (Andrew's Monotone Chain), gegen den Uhrzeigersinn.
fn convex_hull(points: &[DVec2]) -> Vec<DVec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let cross = |o: DVec2, a: DVec2, b: DVec2| (a - o).perp_dot(b - o);
    let mut lower: Vec<DVec2> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<DVec2> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

fn inside_hull(hull: &[DVec2], p: DVec2) -> bool {
    hull.iter()
        .zip(hull.iter().cycle().skip(1))
        .all(|(&a, &b)| (b - a).perp_dot(p - a) >= -1e-6)
}

fn parameters() -> impl Iterator<Item = f64> {
    (0..=40).map(|i| f64::from(i) / 40.0)
}

#[test]
fn test_curve_stays_in_convex_hull_of_presets() {
    let size = DVec2::new(900.0, 600.0);
    for preset in Preset::ALL {
        let points = preset.points(size);
        let hull = convex_hull(&points);
        for t in parameters() {
            let b = evaluate(&points, t);
            assert!(
                inside_hull(&hull, b),
                "{} verlässt die konvexe Hülle bei t = {}",
                preset.label(),
                t
            );
        }
    }
}

#[test]
fn test_endpoints_are_exact_for_presets() {
    let size = DVec2::new(900.0, 600.0);
    for preset in Preset::ALL {
        let points = preset.points(size);
        assert_eq!(evaluate(&points, 0.0), points[0]);
        assert_eq!(evaluate(&points, 1.0), points[points.len() - 1]);
    }
}

#[test]
fn test_last_level_matches_evaluate() {
    let points = Preset::QuinticZigzag.points(DVec2::new(900.0, 600.0));
    for t in parameters() {
        let triangle = levels(&points, t);
        assert_eq!(triangle.len(), points.len());
        assert_eq!(triangle[0], points);
        let last = triangle.last().expect("mindestens eine Stufe");
        assert_eq!(last.len(), 1);
        let b = evaluate(&points, t);
        assert_relative_eq!(last[0].x, b.x, epsilon = 1e-9);
        assert_relative_eq!(last[0].y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn test_sampler_endpoints_for_all_step_sizes() {
    let points = Preset::QuarticWave.points(DVec2::new(900.0, 600.0));
    for dt in [0.001, 0.004, 0.007, 0.013, 0.02] {
        for t_end in [0.0, 0.003, 0.25, 0.5, 0.777, 1.0] {
            let polyline = sample_up_to(&points, dt, t_end);
            let first = polyline[0];
            let last = polyline[polyline.len() - 1];
            let expected = evaluate(&points, t_end);

            assert_eq!(first, points[0]);
            assert_relative_eq!(last.x, expected.x, epsilon = 1e-6);
            assert_relative_eq!(last.y, expected.y, epsilon = 1e-6);
        }
    }
}
