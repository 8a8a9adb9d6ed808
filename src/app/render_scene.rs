//! Builder für Render-Szenen aus dem AppState.
//!
//! Setzt einen Frame aus Kontrollpolygon, Parameter t und den
//! Anzeige-Schaltern zusammen. Zwischen zwei Frames wird nichts gehalten.

use crate::app::AppState;
use crate::core::{evaluate, levels, sample_up_to};
use crate::shared::{Disk, FrameLabels, LevelOverlay, Polyline, RenderScene, ViewerOptions};
use glam::DVec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let points = state.scene.points();

    let control_polygon = (points.len() >= 2).then(|| Polyline {
        points: points.to_vec(),
        width: options.control_polygon_width,
        color: options.control_polygon_color,
    });

    let control_points = points
        .iter()
        .map(|&center| Disk {
            center,
            diameter: options.control_point_diameter,
            color: options.control_point_color,
        })
        .collect();

    let mut scene = RenderScene {
        surface_size: state.view.surface_size.to_array(),
        background_color: options.background_color,
        control_polygon,
        control_points,
        curve: None,
        curve_point: None,
        levels: Vec::new(),
        labels: FrameLabels {
            degree: degree_label(state.degree(), points.len()),
            parameter: parameter_label(state.view.t_manual),
            curve_point: "B(t) = -".to_string(),
        },
    };

    if points.len() < 2 {
        return scene;
    }

    let t_viz = state.visualized_t();
    let t_end = if state.playback.is_playing() {
        state.playback.draw_t()
    } else {
        1.0
    };

    scene.labels.parameter = parameter_label(t_viz);
    scene.curve = Some(Polyline {
        points: sample_up_to(points, state.view.dt, t_end),
        width: options.curve_width,
        color: options.curve_color,
    });

    let b = evaluate(points, t_viz);
    scene.labels.curve_point = curve_point_label(b);

    if state.view.show_curve_point {
        scene.curve_point = Some(Disk {
            center: b,
            diameter: options.curve_point_diameter,
            color: options.curve_point_color,
        });
    }

    if state.view.show_levels {
        scene.levels = build_level_overlays(points, t_viz, options);
    }

    scene
}

/// Zwischenstufen L[1..n-1]; L[0] ist das Polygon, L[n] ist B(t).
fn build_level_overlays(points: &[DVec2], t: f64, options: &ViewerOptions) -> Vec<LevelOverlay> {
    let triangle = levels(points, t);
    let degree = triangle.len() - 1;

    triangle
        .into_iter()
        .enumerate()
        .skip(1)
        .take(degree.saturating_sub(1))
        .filter(|(_, level)| level.len() >= 2)
        .map(|(k, level)| {
            let color = level_color(options.level_color, k);
            let disks = level
                .iter()
                .map(|&center| Disk {
                    center,
                    diameter: options.level_point_diameter,
                    color,
                })
                .collect();
            LevelOverlay {
                level: k,
                polyline: Polyline {
                    points: level,
                    width: options.level_width,
                    color,
                },
                disks,
            }
        })
        .collect()
}

/// Deckkraft der Stufe k: max(0.15, 0.60 - 0.08·k).
pub fn level_alpha(level: usize) -> f32 {
    (0.60 - 0.08 * level as f32).max(0.15)
}

fn level_color(rgb: [f32; 3], level: usize) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], level_alpha(level)]
}

fn degree_label(degree: usize, count: usize) -> String {
    format!("Degree (n): {} | Points: {}", degree, count)
}

fn parameter_label(t: f64) -> String {
    format!("t = {:.3}", t)
}

fn curve_point_label(b: DVec2) -> String {
    format!("B(t) = ({:.1}, {:.1})", b.x, b.y)
}
