//! Polylinien-Approximation einer Bézier-Kurve über [0, t_end].

use super::casteljau::evaluate;
use glam::DVec2;

/// Toleranz gegen Float-Drift beim Vergleich `k·dt <= t_end`.
pub const SAMPLE_EPSILON: f64 = 1e-9;

/// Tastet die Kurve an τ_k = min(k·dt, t_end) ab, solange k·dt <= t_end + ε.
///
/// Der erste Punkt ist immer B(0). Trifft das Raster t_end nicht genau,
/// wird zusätzlich B(t_end) angehängt, damit die Polylinie exakt dort endet.
/// Für `t_end < dt` entsteht so genau ein Segment B(0) → B(t_end), auch bei
/// `t_end = 0` (degeneriertes Segment [B(0), B(0)]).
///
/// Voraussetzungen: mindestens zwei Kontrollpunkte, `dt > 0`, `t_end ∈ [0, 1]`.
/// `dt <= 0` wird bereits durch die Slider-Grenzen ausgeschlossen.
pub fn sample_up_to(points: &[DVec2], dt: f64, t_end: f64) -> Vec<DVec2> {
    debug_assert!(points.len() >= 2, "sample_up_to: mindestens 2 Punkte nötig");
    debug_assert!(dt > 0.0, "sample_up_to: dt muss positiv sein");

    let t_end = t_end.clamp(0.0, 1.0);
    // Obergrenze für die Vorab-Allokation; bei sehr kleinen dt nicht überallozieren
    let estimated = ((t_end / dt).floor() as usize).saturating_add(2).min(1 << 16);

    let mut polyline = Vec::with_capacity(estimated);
    polyline.push(evaluate(points, 0.0));

    let mut last_tau = 0.0;
    let mut k: u64 = 1;
    loop {
        // k·dt statt fortlaufender Addition: kein akkumulierter Rundungsfehler
        let tau = k as f64 * dt;
        if tau > t_end + SAMPLE_EPSILON {
            break;
        }
        let tau = tau.min(t_end);
        polyline.push(evaluate(points, tau));
        last_tau = tau;
        k += 1;
    }

    if polyline.len() == 1 || last_tau < t_end {
        polyline.push(evaluate(points, t_end));
    }

    polyline
}
