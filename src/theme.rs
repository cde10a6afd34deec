//! Minimal dark theme for the viewer

use egui::Color32;

/// Greyscale palette; the only color on screen comes from the clouds.
pub mod colors {
    use super::Color32;

    pub const BG_PRIMARY: Color32 = Color32::from_rgb(10, 10, 12); // main pane
    pub const BG_SIDEBAR: Color32 = Color32::from_rgb(24, 24, 28); // control panel
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 110);
    pub const BORDER: Color32 = Color32::from_rgb(48, 48, 52);
}

/// Convert a cloud fill color (0..=255 floats) to an egui color.
pub fn fill_color32(fcolor: [f64; 3]) -> Color32 {
    let channel = |c: f64| c.clamp(0.0, 255.0) as u8;
    Color32::from_rgb(channel(fcolor[0]), channel(fcolor[1]), channel(fcolor[2]))
}

/// Dark, flat egui visuals.
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_SIDEBAR;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = BG_SIDEBAR;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_fill = BORDER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_fill = BORDER;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_color32_clamps_channels() {
        assert_eq!(fill_color32([10.0, 180.0, 90.0]), Color32::from_rgb(10, 180, 90));
        assert_eq!(fill_color32([-5.0, 300.0, 0.0]), Color32::from_rgb(0, 255, 0));
    }
}
