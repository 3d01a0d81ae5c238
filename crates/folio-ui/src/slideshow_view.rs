//! Slideshow widget: egui input in, painted slides out

use std::hash::Hash;
use std::time::{Duration, Instant};
use egui::{Align2, Color32, CursorIcon, FontId, Id, Pos2, Rect, Rounding, Sense, Ui, Vec2};
use folio_core::navigator::{Control, InputEvent};
use folio_core::Slideshow;
use tracing::trace;

use crate::surface::EguiSurface;
use crate::theme;

/// Duration of the fade cross-over, in seconds
const FADE_SECONDS: f32 = 0.6;

/// Size of a prev/next control
const CONTROL_SIZE: f32 = 40.0;

/// Per-widget interaction state that persists across frames
pub struct SlideshowView {
    id: Id,
    hovered: bool,
    dragging: bool,
    touch: bool,
}

impl SlideshowView {
    pub fn new(id_source: impl Hash) -> Self {
        Self {
            id: Id::new(id_source),
            hovered: false,
            dragging: false,
            touch: false,
        }
    }

    /// Feed this frame's input to `slideshow` and paint it
    ///
    /// `now` must be on the clock the slideshow is pumped with.
    pub fn ui(&mut self, ui: &mut Ui, slideshow: &mut Slideshow<EguiSurface>, now: Duration, size: Vec2) {
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        slideshow.surface_mut().set_width(rect.width());

        let prev_rect = control_rect(rect, Control::Prev);
        let next_rect = control_rect(rect, Control::Next);

        let mut events = self.collect_pointer_events(ui, rect, &[prev_rect, next_rect], now);

        for (control, control_rect) in [(Control::Prev, prev_rect), (Control::Next, next_rect)] {
            let Some(disabled) = slideshow.surface().control_disabled(control) else {
                continue;
            };
            let response = ui.interact(control_rect, self.id.with(control), Sense::click());
            if !response.clicked() {
                continue;
            }
            if disabled {
                trace!(?control, "click on disabled control ignored");
            } else {
                events.push(InputEvent::ControlClick(control));
            }
        }

        for event in events {
            slideshow.handle(event);
        }

        self.paint(ui, rect, slideshow);
        let sliding = matches!(slideshow, Slideshow::Sliding(_));
        if let Some(icon) = self.cursor_icon(sliding, slideshow.surface().is_grabbing()) {
            ui.ctx().set_cursor_icon(icon);
        }
    }

    /// Grab cursor over a sliding slideshow, kept while a drag leaves it
    fn cursor_icon(&self, sliding: bool, grabbing: bool) -> Option<CursorIcon> {
        if !sliding || !(self.hovered || self.dragging) {
            return None;
        }
        Some(if grabbing { CursorIcon::Grabbing } else { CursorIcon::Grab })
    }

    fn collect_pointer_events(&mut self, ui: &Ui, rect: Rect, controls: &[Rect], now: Duration) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let contains = ui.rect_contains_pointer(rect);
        if contains != self.hovered {
            self.hovered = contains;
            events.push(if contains { InputEvent::MouseEnter } else { InputEvent::MouseLeave });
        }

        let (pos, pressed, released, moved, touching, left, right) = ui.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta() != Vec2::ZERO,
                i.any_touches(),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if let Some(pos) = pos {
            let on_control = controls.iter().any(|control| control.contains(pos));
            if pressed && contains && !on_control {
                self.dragging = true;
                self.touch = touching;
                events.push(if touching {
                    InputEvent::TouchStart { x: pos.x, at: now }
                } else {
                    InputEvent::PointerDown { x: pos.x, at: now }
                });
            } else if self.dragging && moved {
                events.push(if self.touch {
                    InputEvent::TouchMove { x: pos.x, at: now }
                } else {
                    InputEvent::PointerMove { x: pos.x, at: now }
                });
            }
        }

        // Release counts anywhere on screen, like a window-level listener
        if self.dragging && released {
            self.dragging = false;
            events.push(if self.touch { InputEvent::TouchEnd } else { InputEvent::PointerUp });
        }

        // Hover stands in for keyboard focus
        if self.hovered {
            if left {
                events.push(InputEvent::ArrowLeft);
            }
            if right {
                events.push(InputEvent::ArrowRight);
            }
        }

        events
    }

    fn paint(&self, ui: &Ui, rect: Rect, slideshow: &Slideshow<EguiSurface>) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(10.0), ui.visuals().extreme_bg_color);

        let surface = slideshow.surface();
        let instant = Instant::now();

        for idx in 0..surface.len() {
            let Some(card) = surface.card(idx) else { continue };
            let (slide_rect, alpha) = match slideshow {
                Slideshow::Sliding(_) => {
                    let shift = surface.offset_at(idx, instant) / 100.0 * rect.width();
                    (rect.translate(Vec2::new(shift, 0.0)), 1.0)
                }
                Slideshow::Fading(_) => {
                    let alpha = ui.ctx().animate_bool_with_time(
                        self.id.with(("fade", idx)),
                        surface.is_active(idx),
                        FADE_SECONDS,
                    );
                    (rect, alpha)
                }
            };
            if alpha <= 0.0 || !slide_rect.intersects(rect) {
                continue;
            }

            let [r, g, b] = card.color;
            painter.rect_filled(slide_rect, Rounding::same(10.0), Color32::from_rgb(r, g, b).gamma_multiply(alpha));
            painter.text(
                slide_rect.center() - Vec2::new(0.0, 14.0),
                Align2::CENTER_CENTER,
                &card.title,
                FontId::proportional(28.0),
                Color32::WHITE.gamma_multiply(alpha),
            );
            if !card.caption.is_empty() {
                painter.text(
                    slide_rect.center() + Vec2::new(0.0, 20.0),
                    Align2::CENTER_CENTER,
                    &card.caption,
                    FontId::proportional(15.0),
                    Color32::from_gray(220).gamma_multiply(alpha),
                );
            }
        }

        self.paint_dots(&painter, rect, surface);
        for control in [Control::Prev, Control::Next] {
            if let Some(disabled) = surface.control_disabled(control) {
                paint_control(&painter, control_rect(rect, control), control, disabled);
            }
        }
    }

    /// Position indicator, one dot per slide
    fn paint_dots(&self, painter: &egui::Painter, rect: Rect, surface: &EguiSurface) {
        let spacing = 14.0;
        let count = surface.len() as f32;
        let start_x = rect.center().x - (count - 1.0) * spacing / 2.0;
        let y = rect.bottom() - 16.0;

        for idx in 0..surface.len() {
            let center = Pos2::new(start_x + idx as f32 * spacing, y);
            let (radius, color) = if surface.is_active(idx) {
                (4.5, theme::accent_color())
            } else {
                (3.0, Color32::from_white_alpha(120))
            };
            painter.circle_filled(center, radius, color);
        }
    }
}

fn control_rect(rect: Rect, control: Control) -> Rect {
    let x = match control {
        Control::Prev => rect.left() + CONTROL_SIZE * 0.75,
        Control::Next => rect.right() - CONTROL_SIZE * 0.75,
    };
    Rect::from_center_size(Pos2::new(x, rect.center().y), Vec2::splat(CONTROL_SIZE))
}

fn paint_control(painter: &egui::Painter, rect: Rect, control: Control, disabled: bool) {
    let fill = if disabled { theme::disabled_color() } else { theme::control_color() };
    let text = if disabled { Color32::from_gray(120) } else { Color32::WHITE };
    painter.circle_filled(rect.center(), rect.width() / 2.0, fill);
    let glyph = match control {
        Control::Prev => "◀",
        Control::Next => "▶",
    };
    painter.text(rect.center(), Align2::CENTER_CENTER, glyph, FontId::proportional(16.0), text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grabbing_cursor_survives_leaving_the_rect() {
        let mut view = SlideshowView::new("showcase");
        view.dragging = true;
        view.hovered = false;
        assert_eq!(view.cursor_icon(true, true), Some(CursorIcon::Grabbing));
    }

    #[test]
    fn test_cursor_only_over_sliding_slideshows() {
        let mut view = SlideshowView::new("highlights");
        view.hovered = true;
        assert_eq!(view.cursor_icon(true, false), Some(CursorIcon::Grab));
        assert_eq!(view.cursor_icon(false, false), None);

        view.hovered = false;
        assert_eq!(view.cursor_icon(true, false), None);
    }
}
