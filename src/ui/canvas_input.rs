//! Canvas-Input: egui-Pointer-Events → AppIntent (Flächenkoordinaten).
//!
//! Ein Press zählt nur innerhalb der Zeichenfläche. Drag- und Release-Events
//! werden danach auch außerhalb weitergereicht, bis die Taste losgelassen ist.

use crate::app::{AppIntent, PointerButton};
use glam::DVec2;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Taste, deren Press auf der Fläche begann
    active_button: Option<PointerButton>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Liefert immer zuerst ein `SurfaceResized` mit der aktuellen Größe.
    pub fn collect_canvas_events(&mut self, ui: &egui::Ui, rect: egui::Rect) -> Vec<AppIntent> {
        let raw_events = ui.input(|i| i.events.clone());
        let mut events = vec![AppIntent::SurfaceResized {
            size: [f64::from(rect.width()), f64::from(rect.height())],
        }];
        events.extend(self.translate_events(&raw_events, rect));
        events
    }

    /// Übersetzt rohe egui-Events in Pointer-Intents.
    pub fn translate_events(&mut self, raw_events: &[egui::Event], rect: egui::Rect) -> Vec<AppIntent> {
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    let Some(button) = map_button(*button) else {
                        continue;
                    };
                    if !rect.contains(*pos) || self.active_button.is_some() {
                        continue;
                    }
                    self.active_button = Some(button);
                    events.push(AppIntent::PointerPressed {
                        pos: to_surface(*pos, rect),
                        button,
                    });
                }
                egui::Event::PointerButton {
                    button,
                    pressed: false,
                    ..
                } => {
                    let Some(button) = map_button(*button) else {
                        continue;
                    };
                    if self.active_button == Some(button) {
                        self.active_button = None;
                        events.push(AppIntent::PointerReleased { button });
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    if self.active_button.is_some() {
                        events.push(AppIntent::PointerDragged {
                            pos: to_surface(*pos, rect),
                        });
                    }
                }
                egui::Event::PointerGone => {
                    // Fenster verlassen: Release kommt evtl. nie an
                    if let Some(button) = self.active_button.take() {
                        events.push(AppIntent::PointerReleased { button });
                    }
                }
                _ => {}
            }
        }

        events
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Bildschirmposition → Flächenkoordinaten (Ursprung oben links).
fn to_surface(pos: egui::Pos2, rect: egui::Rect) -> DVec2 {
    let local = pos - rect.min;
    DVec2::new(f64::from(local.x), f64::from(local.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(200.0, 0.0), egui::vec2(900.0, 600.0))
    }

    fn button(pos: egui::Pos2, button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn press_drag_release_in_surface_coordinates() {
        let mut input = InputState::new();
        let raw = vec![
            button(egui::pos2(300.0, 100.0), egui::PointerButton::Primary, true),
            egui::Event::PointerMoved(egui::pos2(310.0, 120.0)),
            button(egui::pos2(310.0, 120.0), egui::PointerButton::Primary, false),
        ];

        let events = input.translate_events(&raw, canvas());

        assert_eq!(
            events,
            vec![
                AppIntent::PointerPressed {
                    pos: DVec2::new(100.0, 100.0),
                    button: PointerButton::Primary,
                },
                AppIntent::PointerDragged {
                    pos: DVec2::new(110.0, 120.0),
                },
                AppIntent::PointerReleased {
                    button: PointerButton::Primary,
                },
            ]
        );
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut input = InputState::new();
        let raw = vec![
            button(egui::pos2(50.0, 100.0), egui::PointerButton::Primary, true),
            egui::Event::PointerMoved(egui::pos2(300.0, 100.0)),
            button(egui::pos2(300.0, 100.0), egui::PointerButton::Primary, false),
        ];

        assert!(input.translate_events(&raw, canvas()).is_empty());
    }

    #[test]
    fn hover_without_press_produces_no_drag() {
        let mut input = InputState::new();
        let raw = vec![egui::Event::PointerMoved(egui::pos2(300.0, 100.0))];
        assert!(input.translate_events(&raw, canvas()).is_empty());
    }

    #[test]
    fn drag_continues_outside_canvas_until_release() {
        let mut input = InputState::new();
        input.translate_events(
            &[button(egui::pos2(300.0, 100.0), egui::PointerButton::Primary, true)],
            canvas(),
        );

        let events = input.translate_events(
            &[egui::Event::PointerMoved(egui::pos2(150.0, 700.0))],
            canvas(),
        );
        assert_eq!(
            events,
            vec![AppIntent::PointerDragged {
                pos: DVec2::new(-50.0, 700.0)
            }]
        );
    }

    #[test]
    fn pointer_gone_releases_active_button() {
        let mut input = InputState::new();
        input.translate_events(
            &[button(egui::pos2(300.0, 100.0), egui::PointerButton::Secondary, true)],
            canvas(),
        );

        let events = input.translate_events(&[egui::Event::PointerGone], canvas());
        assert_eq!(
            events,
            vec![AppIntent::PointerReleased {
                button: PointerButton::Secondary
            }]
        );
    }
}
