//! Cross-fading slideshow with wraparound autoplay

use std::time::Duration;
use tracing::debug;

use crate::autoplay::AutoplayTimers;
use crate::config::FadeConfig;
use crate::navigator::{Control, InputEvent, SlideSurface};
use crate::schedule::{Scheduler, TimerKind, TimerQueue};

/// A slideshow that only swaps which slide is active
///
/// Unlike [`crate::SlideNavigator`] it wraps around at both ends and ignores
/// drag input.
pub struct FadeSlideshow<D: SlideSurface, S: Scheduler = TimerQueue> {
    surface: D,
    scheduler: S,
    config: FadeConfig,
    slide_count: usize,
    index: usize,
    autoplay: AutoplayTimers,
}

impl<D: SlideSurface, S: Scheduler> FadeSlideshow<D, S> {
    /// Mount on `surface`; `None` when there are no slides
    pub fn mount(mut surface: D, scheduler: S, config: FadeConfig) -> Option<Self> {
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            debug!("no slides found, fade slideshow not mounted");
            return None;
        }

        let index = match surface.marked_active().filter(|idx| *idx < slide_count) {
            Some(idx) => idx,
            None => {
                surface.set_slide_active(0, true);
                0
            }
        };

        let mut slideshow = Self {
            surface,
            scheduler,
            config,
            slide_count,
            index,
            autoplay: AutoplayTimers::default(),
        };
        slideshow.start_autoplay();

        debug!(slide_count, index, "fade slideshow mounted");
        Some(slideshow)
    }

    /// Show `target`, wrapping around either end
    pub fn show(&mut self, target: isize) {
        let count = self.slide_count as isize;
        let target = target.rem_euclid(count) as usize;
        if target == self.index {
            return;
        }

        self.surface.set_slide_active(self.index, false);
        self.index = target;
        self.surface.set_slide_active(self.index, true);
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseEnter | InputEvent::TouchStart { .. } => self.pause_autoplay(),
            InputEvent::MouseLeave | InputEvent::TouchEnd => self.resume_autoplay(),
            InputEvent::ArrowLeft => self.step_by(-1),
            InputEvent::ArrowRight => self.step_by(1),
            InputEvent::ControlClick(Control::Prev) => self.step_by(-1),
            InputEvent::ControlClick(Control::Next) => self.step_by(1),
            InputEvent::PointerDown { .. }
            | InputEvent::PointerMove { .. }
            | InputEvent::PointerUp
            | InputEvent::TouchMove { .. } => {}
        }
    }

    pub fn pump(&mut self, now: Duration) {
        self.scheduler.advance(now);
        while let Some(fired) = self.scheduler.next_due() {
            match fired.kind {
                TimerKind::Autoplay if self.autoplay.is_tick(fired.id) => {
                    self.show(self.index as isize + 1);
                }
                TimerKind::Resume if self.autoplay.take_resume(fired.id) => {
                    self.start_autoplay();
                }
                _ => {}
            }
        }
    }

    fn step_by(&mut self, delta: isize) {
        self.pause_autoplay();
        self.show(self.index as isize + delta);
        self.resume_autoplay();
    }

    fn start_autoplay(&mut self) {
        let period = self.config.autoplay_interval();
        self.autoplay.start(&mut self.scheduler, period);
    }

    fn pause_autoplay(&mut self) {
        self.autoplay.pause(&mut self.scheduler);
    }

    fn resume_autoplay(&mut self) {
        let delay = self.config.resume_delay();
        self.autoplay.resume_after(&mut self.scheduler, delay);
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running(&self.scheduler)
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::MemorySurface;

    fn mount(count: usize) -> FadeSlideshow<MemorySurface> {
        FadeSlideshow::mount(
            MemorySurface::new(count, 800.0),
            TimerQueue::new(),
            FadeConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_mount_marks_first_slide() {
        let slideshow = mount(3);
        assert_eq!(slideshow.current_index(), 0);
        assert_eq!(slideshow.surface().active_indices(), vec![0]);
        assert!(slideshow.is_autoplaying());
    }

    #[test]
    fn test_mount_without_slides_is_noop() {
        let slideshow = FadeSlideshow::mount(
            MemorySurface::new(0, 800.0),
            TimerQueue::new(),
            FadeConfig::default(),
        );
        assert!(slideshow.is_none());
    }

    #[test]
    fn test_show_wraps_around() {
        let mut slideshow = mount(3);

        slideshow.handle(InputEvent::ArrowLeft);
        assert_eq!(slideshow.current_index(), 2);

        slideshow.handle(InputEvent::ControlClick(Control::Next));
        assert_eq!(slideshow.current_index(), 0);
        assert_eq!(slideshow.surface().active_indices(), vec![0]);
    }

    #[test]
    fn test_autoplay_wraps_forward() {
        let mut slideshow = mount(2);
        let mut seen = vec![slideshow.current_index()];
        for tick in 1..=3 {
            slideshow.pump(Duration::from_millis(6000 * tick));
            seen.push(slideshow.current_index());
        }
        assert_eq!(seen, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_touch_pauses_until_quiet_period() {
        let mut slideshow = mount(3);
        slideshow.handle(InputEvent::TouchStart { x: 10.0, at: Duration::ZERO });
        slideshow.pump(Duration::from_millis(10_000));
        assert_eq!(slideshow.current_index(), 0);

        slideshow.handle(InputEvent::TouchEnd);
        slideshow.pump(Duration::from_millis(13_000));
        assert!(slideshow.is_autoplaying());
        assert_eq!(slideshow.scheduler().armed_count(TimerKind::Autoplay), 1);

        slideshow.pump(Duration::from_millis(19_000));
        assert_eq!(slideshow.current_index(), 1);
    }

    #[test]
    fn test_drag_input_is_ignored() {
        let mut slideshow = mount(3);
        slideshow.handle(InputEvent::PointerDown { x: 10.0, at: Duration::ZERO });
        slideshow.handle(InputEvent::PointerMove { x: 500.0, at: Duration::from_millis(16) });
        slideshow.handle(InputEvent::PointerUp);
        assert_eq!(slideshow.current_index(), 0);
        assert!(slideshow.is_autoplaying());
    }
}
