//! UI-Komponenten: Seitenleiste, Status-Bar, Canvas-Input.

pub mod canvas_input;
/// UI-Layer mit egui
///
/// Widgets erzeugen ausschließlich `AppIntent`s; der State wird hier nie mutiert.
pub mod side_panel;
pub mod status;

pub use canvas_input::InputState;
pub use side_panel::render_side_panel;
pub use status::render_status_bar;
