use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_mode: true,
        }
    }
}

/// Apply the portfolio theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    if theme.dark_mode {
        let bg_color = Color32::from_rgb(18, 18, 20);
        let panel_bg = Color32::from_rgb(26, 26, 30);
        let widget_bg = Color32::from_rgb(40, 40, 46);
        let text_color = Color32::from_rgb(225, 225, 230);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.bg_fill = widget_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    }

    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Accent used for active markers
pub fn accent_color() -> Color32 {
    Color32::from_rgb(240, 170, 80)
}

/// Fill of a disabled control
pub fn disabled_color() -> Color32 {
    Color32::from_gray(70)
}

/// Fill of an enabled control
pub fn control_color() -> Color32 {
    Color32::from_black_alpha(150)
}
