//! de-Casteljau-Auswertung für Bézier-Kurven beliebigen Grades.
//!
//! Alle Berechnungen laufen in `f64`. Die Zwei-Punkt-Kombination wird als
//! `(1-t)·a + t·b` ausgewertet, damit B(0) = P[0] und B(1) = P[m-1] bitgenau gelten.

use glam::DVec2;

/// Affine Kombination zweier Punkte: `(1-t)·a + t·b`.
///
/// Nicht `a + t·(b-a)` (wie `DVec2::lerp`): nur diese Form liefert
/// an den Endpunkten exakt `a` bzw. `b`.
#[inline]
pub fn affine_combination(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    (1.0 - t) * a + t * b
}

/// Wertet die Bézier-Kurve mit den Kontrollpunkten `points` an `t` aus.
///
/// Reduziert in-place in einem Arbeitspuffer der Länge m: Stufe k schreibt
/// Q^k_i in Slot i und überschreibt Q^(k-1)_i (Q^k_i hängt nur von den Slots
/// i und i+1 der Vorstufe ab). `t` wird nicht geklemmt; außerhalb von [0, 1]
/// ergibt sich die de-Casteljau-Extrapolation.
///
/// # Panics
///
/// Bei leerer Punktfolge (Programmierfehler, der Aufrufer muss absichern).
pub fn evaluate(points: &[DVec2], t: f64) -> DVec2 {
    assert!(
        !points.is_empty(),
        "de Casteljau: evaluate() ohne Kontrollpunkte aufgerufen"
    );

    let mut work = points.to_vec();
    let m = work.len();
    for k in 1..m {
        for i in 0..m - k {
            work[i] = affine_combination(work[i], work[i + 1], t);
        }
    }
    work[0]
}

/// Liefert das vollständige de-Casteljau-Dreieck an `t`.
///
/// `L[0]` ist eine Kopie von `points`, `L[k]` (k = 1..n) die k-te Reduktion
/// mit m-k Punkten. `L[n]` enthält genau B(t).
///
/// # Panics
///
/// Bei leerer Punktfolge.
pub fn levels(points: &[DVec2], t: f64) -> Vec<Vec<DVec2>> {
    assert!(
        !points.is_empty(),
        "de Casteljau: levels() ohne Kontrollpunkte aufgerufen"
    );

    let mut result = Vec::with_capacity(points.len());
    result.push(points.to_vec());

    while let Some(current) = result.last() {
        if current.len() <= 1 {
            break;
        }
        let next: Vec<DVec2> = current
            .windows(2)
            .map(|pair| affine_combination(pair[0], pair[1], t))
            .collect();
        result.push(next);
    }

    result
}
