//! Umrechnung der Szenen-Primitive in egui-Shapes.

use crate::shared::{Disk, Polyline};
use glam::DVec2;

/// RGBA (0..1, sRGB) → `Color32`.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Flächenkoordinaten → Bildschirmposition relativ zu `origin`.
pub(crate) fn to_screen(point: DVec2, origin: egui::Pos2) -> egui::Pos2 {
    egui::pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

/// Gestrichene Polylinie.
pub(crate) fn polyline_shape(polyline: &Polyline, origin: egui::Pos2) -> egui::Shape {
    let points = polyline
        .points
        .iter()
        .map(|&p| to_screen(p, origin))
        .collect();
    egui::Shape::line(
        points,
        egui::Stroke::new(polyline.width, to_color32(polyline.color)),
    )
}

/// Gefüllte Kreisscheibe (Radius = halber Durchmesser).
pub(crate) fn disk_shape(disk: &Disk, origin: egui::Pos2) -> egui::Shape {
    egui::Shape::circle_filled(
        to_screen(disk.center, origin),
        disk.diameter * 0.5,
        to_color32(disk.color),
    )
}
