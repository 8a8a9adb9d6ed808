//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Der Renderer hält keinen Zustand zwischen Frames: Jeder Aufruf von
//! [`paint_scene`] liest ausschließlich die übergebene Szene.

mod shapes;

pub use crate::shared::RenderScene;
pub(crate) use shapes::{disk_shape, polyline_shape, to_color32};

/// Zeichnet die komplette Szene in `rect` (Flächenursprung = `rect.min`).
///
/// Reihenfolge: Hintergrund, Kontrollpolygon, Kontrollpunkte, Kurve,
/// B(t), Zwischenstufen.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let painter = painter.with_clip_rect(rect);
    let origin = rect.min;

    painter.rect_filled(rect, 0.0, to_color32(scene.background_color));

    if let Some(polygon) = &scene.control_polygon {
        painter.add(polyline_shape(polygon, origin));
    }

    for disk in &scene.control_points {
        painter.add(disk_shape(disk, origin));
    }

    if let Some(curve) = &scene.curve {
        painter.add(polyline_shape(curve, origin));
    }

    if let Some(point) = &scene.curve_point {
        painter.add(disk_shape(point, origin));
    }

    for overlay in &scene.levels {
        painter.add(polyline_shape(&overlay.polyline, origin));
        for disk in &overlay.disks {
            painter.add(disk_shape(disk, origin));
        }
    }
}
