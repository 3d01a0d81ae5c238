//! Physics-drag slide navigator

use std::sync::{Arc, Weak};
use std::time::Duration;
use parking_lot::RwLock;
use tracing::{debug, trace};

use super::{
    Control, Direction, InputEvent, NavigatorContext, NavigatorState, SlideChange,
    SlideChangeCause, SlideSubscriber, SlideSurface, Transition,
};
use crate::autoplay::AutoplayTimers;
use crate::config::NavigatorConfig;
use crate::schedule::{Fired, Scheduler, TimerId, TimerKind, TimerQueue};

/// Pointer samples of the drag in progress
#[derive(Debug, Clone, Copy, Default)]
struct DragTrack {
    start_x: f32,
    last_x: f32,
    last_at: Duration,
}

/// A slideshow whose slides sit side by side and follow the pointer
///
/// One instance per mounted slideshow; all timer handles are private to it,
/// so several navigators on one page never interfere.
pub struct SlideNavigator<D: SlideSurface, S: Scheduler = TimerQueue> {
    surface: D,
    scheduler: S,
    config: NavigatorConfig,
    slide_count: usize,
    state: NavigatorState,
    drag: DragTrack,
    /// Pending inertia frame
    frame: Option<TimerId>,
    autoplay: AutoplayTimers,
    subscribers: RwLock<Vec<Weak<dyn SlideSubscriber>>>,
}

impl<D: SlideSurface, S: Scheduler> SlideNavigator<D, S> {
    /// Mount a navigator on `surface`
    ///
    /// Returns `None` without touching the surface when it has no slides.
    /// Otherwise positions every slide, updates the controls and starts
    /// autoplay.
    pub fn mount(surface: D, scheduler: S, config: NavigatorConfig) -> Option<Self> {
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            debug!("no slides found, navigator not mounted");
            return None;
        }

        let current_index = surface
            .marked_active()
            .filter(|idx| *idx < slide_count)
            .unwrap_or(0);

        let mut navigator = Self {
            surface,
            scheduler,
            config,
            slide_count,
            state: NavigatorState::at_rest(current_index),
            drag: DragTrack::default(),
            frame: None,
            autoplay: AutoplayTimers::default(),
            subscribers: RwLock::new(Vec::new()),
        };

        for idx in 0..slide_count {
            navigator.surface.set_slide_active(idx, idx == current_index);
        }
        navigator.surface.set_grabbing(false);
        navigator.render(false);
        navigator.update_controls();
        navigator.start_autoplay();

        debug!(slide_count, current_index, "navigator mounted");
        Some(navigator)
    }

    /// Make `target` the active slide
    ///
    /// This is the only way the active slide changes. A target outside the
    /// slide range is rejected: the index stays put and the slides settle
    /// back at rest.
    pub fn go_to_slide(&mut self, target: isize) {
        self.transition(target, SlideChangeCause::Programmatic);
    }

    /// Position every slide relative to the active one
    pub fn render(&mut self, animated: bool) {
        let transition = if animated {
            Transition::Eased {
                duration: self.config.transition_duration(),
                easing: self.config.easing,
            }
        } else {
            Transition::Immediate
        };

        let current = self.state.current_index as f32;
        for idx in 0..self.slide_count {
            let offset = (idx as f32 - current) * 100.0 + self.state.drag_offset;
            self.surface.set_slide_offset(idx, offset, transition);
        }
    }

    /// Feed one host input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, at } => self.begin_drag(x, at, true),
            InputEvent::TouchStart { x, at } => self.begin_drag(x, at, false),
            InputEvent::PointerMove { x, at } | InputEvent::TouchMove { x, at } => {
                self.drag_to(x, at)
            }
            InputEvent::PointerUp | InputEvent::TouchEnd => self.release(),
            InputEvent::MouseEnter => self.pause_autoplay(),
            // Release restarts the quiet period once the drag ends
            InputEvent::MouseLeave if self.state.is_dragging => {}
            InputEvent::MouseLeave => self.resume_autoplay(),
            InputEvent::ArrowLeft => self.step_by(-1, SlideChangeCause::Keyboard),
            InputEvent::ArrowRight => self.step_by(1, SlideChangeCause::Keyboard),
            InputEvent::ControlClick(Control::Prev) => self.step_by(-1, SlideChangeCause::Control),
            InputEvent::ControlClick(Control::Next) => self.step_by(1, SlideChangeCause::Control),
        }
    }

    /// Advance host time and run every callback that became due
    pub fn pump(&mut self, now: Duration) {
        self.scheduler.advance(now);
        while let Some(fired) = self.scheduler.next_due() {
            self.on_timer(fired);
        }
    }

    fn on_timer(&mut self, fired: Fired) {
        match fired.kind {
            TimerKind::Autoplay => {
                if self.autoplay.is_tick(fired.id) {
                    self.autoplay_tick();
                }
            }
            TimerKind::Resume => {
                if self.autoplay.take_resume(fired.id) {
                    self.start_autoplay();
                }
            }
            TimerKind::Frame => {
                if self.frame == Some(fired.id) {
                    self.frame = None;
                    self.inertia_step();
                }
            }
        }
    }

    fn transition(&mut self, target: isize, cause: SlideChangeCause) {
        // The transition's own reset supersedes any running inertia
        self.cancel_frame();

        let in_range = usize::try_from(target)
            .ok()
            .filter(|idx| *idx < self.slide_count);
        let Some(target) = in_range else {
            debug!(requested = target, current = self.state.current_index, ?cause, "transition rejected");
            self.state.reset_motion();
            self.render(true);
            return;
        };

        let previous = self.state.current_index;
        self.surface.set_slide_active(previous, false);
        self.state.current_index = target;
        self.surface.set_slide_active(target, true);
        self.state.reset_motion();
        self.render(true);
        self.update_controls();

        if previous != target {
            debug!(previous, current = target, ?cause, "slide changed");
            self.notify_subscribers(SlideChange {
                previous,
                current: target,
                slide_count: self.slide_count,
                cause,
            });
        }
    }

    fn update_controls(&mut self) {
        let last = self.slide_count - 1;
        if self.surface.has_control(Control::Prev) {
            self.surface
                .set_control_disabled(Control::Prev, self.state.current_index == 0);
        }
        if self.surface.has_control(Control::Next) {
            self.surface
                .set_control_disabled(Control::Next, self.state.current_index == last);
        }
    }

    fn step_by(&mut self, delta: isize, cause: SlideChangeCause) {
        self.pause_autoplay();
        self.transition(self.state.current_index as isize + delta, cause);
        self.resume_autoplay();
    }

    fn begin_drag(&mut self, x: f32, at: Duration, pointer: bool) {
        self.pause_autoplay();
        self.state.is_dragging = true;
        self.state.velocity = 0.0;
        self.drag = DragTrack {
            start_x: x,
            last_x: x,
            last_at: at,
        };
        if pointer {
            self.surface.set_grabbing(true);
        }
        self.cancel_frame();
    }

    fn drag_to(&mut self, x: f32, at: Duration) {
        if !self.state.is_dragging {
            return;
        }
        self.pause_autoplay();

        let width = self.surface.container_width();
        if !(width > 0.0) {
            trace!(width, "ignoring move sample on collapsed container");
            return;
        }

        let elapsed_ms = at.saturating_sub(self.drag.last_at).as_secs_f32() * 1000.0;
        if elapsed_ms > 0.0 {
            let moved = (x - self.drag.last_x) / width * 100.0;
            self.state.velocity = moved / (elapsed_ms / self.config.frame_ms);
        }
        self.drag.last_x = x;
        self.drag.last_at = at;

        let mut offset = (x - self.drag.start_x) / width * 100.0;
        let last = self.slide_count - 1;
        let past_first = self.state.current_index == 0 && offset > 0.0;
        let past_last = self.state.current_index == last && offset < 0.0;
        if past_first || past_last {
            offset *= self.config.edge_resistance;
        }
        self.state.drag_offset = offset;

        trace!(offset, velocity = self.state.velocity, "drag sample");
        self.render(false);
    }

    fn release(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        self.state.is_dragging = false;
        self.surface.set_grabbing(false);
        self.request_frame();
        self.resume_autoplay();
    }

    /// One display frame of post-release motion
    fn inertia_step(&mut self) {
        if self.state.is_dragging {
            return;
        }

        let threshold = self.config.commit_threshold;
        if self.state.velocity.abs() > self.config.velocity_floor {
            self.state.drag_offset += self.state.velocity;
            self.state.velocity *= self.config.inertia_decay;
            trace!(offset = self.state.drag_offset, velocity = self.state.velocity, "inertia step");

            if self.state.drag_offset.abs() > threshold {
                self.commit_drag();
            } else {
                self.render(false);
                self.request_frame();
            }
            return;
        }

        if self.state.drag_offset.abs() > threshold {
            self.commit_drag();
        } else {
            // Out of momentum short of the threshold: settle back
            self.state.reset_motion();
            self.render(true);
        }
    }

    /// Positive offset reveals the previous slide
    fn commit_drag(&mut self) {
        let delta = if self.state.drag_offset > 0.0 { -1 } else { 1 };
        self.transition(self.state.current_index as isize + delta, SlideChangeCause::Drag);
    }

    fn autoplay_tick(&mut self) {
        if self.state.is_dragging {
            return;
        }
        let last = self.slide_count - 1;
        if self.state.current_index == last {
            self.state.direction = Direction::Backward;
        }
        if self.state.current_index == 0 {
            self.state.direction = Direction::Forward;
        }
        let target = self.state.current_index as isize + self.state.direction.step();
        self.transition(target, SlideChangeCause::Autoplay);
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

    fn request_frame(&mut self) {
        self.cancel_frame();
        self.frame = Some(self.scheduler.request_frame());
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.frame.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Add a subscriber; it is dropped automatically once its last `Arc` goes
    pub fn add_subscriber(&self, subscriber: Arc<dyn SlideSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    fn notify_subscribers(&self, change: SlideChange) {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|weak| weak.strong_count() > 0);
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_slide_change(&change);
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running(&self.scheduler)
    }

    pub fn context(&self) -> NavigatorContext {
        NavigatorContext {
            state: self.state.clone(),
            slide_count: self.slide_count,
            autoplay_active: self.is_autoplaying(),
        }
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutable access for hosts that refresh layout, such as the width
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
    use parking_lot::Mutex;

    const WIDTH: f32 = 1000.0;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mount(count: usize) -> SlideNavigator<MemorySurface> {
        SlideNavigator::mount(
            MemorySurface::new(count, WIDTH),
            TimerQueue::new(),
            NavigatorConfig::default(),
        )
        .unwrap()
    }

    fn assert_single_active(nav: &SlideNavigator<MemorySurface>) {
        assert_eq!(nav.surface().active_indices(), vec![nav.current_index()]);
    }

    #[derive(Default)]
    struct Recorder {
        changes: Mutex<Vec<SlideChange>>,
    }

    impl SlideSubscriber for Recorder {
        fn on_slide_change(&self, change: &SlideChange) {
            self.changes.lock().push(change.clone());
        }
    }

    #[test]
    fn test_mount_without_slides_is_noop() {
        let nav = SlideNavigator::mount(
            MemorySurface::new(0, WIDTH),
            TimerQueue::new(),
            NavigatorConfig::default(),
        );
        assert!(nav.is_none());
    }

    #[test]
    fn test_mount_positions_slides() {
        let nav = mount(3);

        assert_eq!(nav.current_index(), 0);
        assert_single_active(&nav);
        assert_eq!(nav.surface().offsets, vec![0.0, 100.0, 200.0]);
        assert_eq!(nav.surface().transitions[0], Transition::Immediate);
        assert_eq!(nav.surface().prev_disabled, Some(true));
        assert_eq!(nav.surface().next_disabled, Some(false));
        assert!(nav.is_autoplaying());
    }

    #[test]
    fn test_mount_respects_marked_slide() {
        let nav = SlideNavigator::mount(
            MemorySurface::new(4, WIDTH).with_active(2),
            TimerQueue::new(),
            NavigatorConfig::default(),
        )
        .unwrap();

        assert_eq!(nav.current_index(), 2);
        assert_single_active(&nav);
        assert_eq!(nav.surface().offsets, vec![-200.0, -100.0, 0.0, 100.0]);
    }

    #[test]
    fn test_go_to_slide_updates_controls() {
        let mut nav = mount(3);
        nav.go_to_slide(2);

        assert_eq!(nav.current_index(), 2);
        assert_single_active(&nav);
        assert_eq!(nav.surface().prev_disabled, Some(false));
        assert_eq!(nav.surface().next_disabled, Some(true));
        assert!(matches!(nav.surface().transitions[0], Transition::Eased { .. }));
    }

    #[test]
    fn test_go_to_current_slide_keeps_index() {
        let mut nav = mount(4);
        nav.go_to_slide(2);
        nav.state.drag_offset = 12.0;

        nav.go_to_slide(2);

        assert_eq!(nav.current_index(), 2);
        assert!(nav.state().is_at_rest());
        assert_single_active(&nav);
    }

    #[test]
    fn test_rejected_transition_does_not_wrap() {
        let mut nav = mount(4);
        nav.state.drag_offset = 8.0;
        nav.state.velocity = 0.5;

        nav.go_to_slide(-1);

        assert_eq!(nav.current_index(), 0);
        assert!(nav.state().is_at_rest());
        assert_eq!(nav.surface().offsets[0], 0.0);

        nav.go_to_slide(4);
        assert_eq!(nav.current_index(), 0);
        assert_single_active(&nav);
    }

    #[test]
    fn test_missing_controls_are_tolerated() {
        let mut nav = SlideNavigator::mount(
            MemorySurface::new(2, WIDTH).without_controls(),
            TimerQueue::new(),
            NavigatorConfig::default(),
        )
        .unwrap();

        nav.handle(InputEvent::ControlClick(Control::Next));
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.surface().next_disabled, None);
    }

    #[test]
    fn test_keyboard_at_edges_is_rejected() {
        let mut nav = mount(2);

        nav.handle(InputEvent::ArrowLeft);
        assert_eq!(nav.current_index(), 0);

        nav.handle(InputEvent::ArrowRight);
        nav.handle(InputEvent::ArrowRight);
        assert_eq!(nav.current_index(), 1);
        assert_single_active(&nav);
    }

    #[test]
    fn test_autoplay_bounces() {
        let mut nav = mount(3);
        let mut seen = vec![nav.current_index()];

        for tick in 1..=3 {
            nav.pump(ms(4000 * tick));
            seen.push(nav.current_index());
        }

        assert_eq!(seen, vec![0, 1, 2, 1]);
        assert_eq!(nav.state().direction, Direction::Backward);
    }

    #[test]
    fn test_autoplay_single_slide_stays_put() {
        let mut nav = mount(1);
        nav.pump(ms(8000));
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.surface().prev_disabled, Some(true));
        assert_eq!(nav.surface().next_disabled, Some(true));
    }

    #[test]
    fn test_drag_moves_slides_unanimated() {
        let mut nav = mount(3);
        nav.go_to_slide(1);

        nav.handle(InputEvent::PointerDown { x: 500.0, at: ms(100) });
        assert!(!nav.is_autoplaying());
        assert!(nav.surface().grabbing);

        nav.handle(InputEvent::PointerMove { x: 400.0, at: ms(116) });

        assert!((nav.state().drag_offset + 10.0).abs() < 1e-4);
        // 10% of width over exactly one 16 ms frame
        assert!((nav.state().velocity + 10.0).abs() < 1e-3);
        assert!((nav.surface().offsets[1] + 10.0).abs() < 1e-4);
        assert_eq!(nav.surface().transitions[1], Transition::Immediate);
    }

    #[test]
    fn test_velocity_normalised_by_elapsed_time() {
        let mut nav = mount(3);
        nav.handle(InputEvent::TouchStart { x: 500.0, at: ms(0) });
        nav.handle(InputEvent::TouchMove { x: 420.0, at: ms(32) });

        // 8% over two frames
        assert!((nav.state().velocity + 4.0).abs() < 1e-3);
        assert!(!nav.surface().grabbing);
    }

    #[test]
    fn test_edge_resistance() {
        let mut nav = mount(3);
        nav.handle(InputEvent::PointerDown { x: 100.0, at: ms(0) });
        nav.handle(InputEvent::PointerMove { x: 300.0, at: ms(16) });

        assert!((nav.state().drag_offset - 6.0).abs() < 1e-4);

        nav.handle(InputEvent::PointerMove { x: 0.0, at: ms(32) });
        assert!((nav.state().drag_offset + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut nav = mount(3);
        nav.handle(InputEvent::PointerMove { x: 300.0, at: ms(16) });
        assert!(nav.state().is_at_rest());
        assert!(nav.is_autoplaying());
    }

    #[test]
    fn test_collapsed_container_ignores_moves() {
        let mut nav = mount(3);
        nav.surface_mut().width = 0.0;
        nav.handle(InputEvent::PointerDown { x: 100.0, at: ms(0) });
        nav.handle(InputEvent::PointerMove { x: 300.0, at: ms(16) });
        assert_eq!(nav.state().drag_offset, 0.0);
    }

    #[test]
    fn test_inertia_commits_past_threshold_without_velocity() {
        let mut nav = mount(4);
        nav.go_to_slide(2);
        nav.state.drag_offset = 35.0;
        nav.state.velocity = 0.0;

        nav.inertia_step();

        assert_eq!(nav.current_index(), 1);
        assert!(nav.state().is_at_rest());
        assert_single_active(&nav);
    }

    #[test]
    fn test_inertia_settles_below_floor() {
        let mut nav = mount(4);
        nav.go_to_slide(2);
        nav.state.drag_offset = 10.0;
        nav.state.velocity = 0.05;

        nav.inertia_step();

        assert_eq!(nav.current_index(), 2);
        assert!(nav.state().is_at_rest());
        assert!(matches!(nav.surface().transitions[2], Transition::Eased { .. }));
    }

    #[test]
    fn test_fling_commits_next_slide() {
        let mut nav = mount(3);

        nav.handle(InputEvent::PointerDown { x: 600.0, at: ms(0) });
        nav.handle(InputEvent::PointerMove { x: 500.0, at: ms(16) });
        nav.handle(InputEvent::PointerMove { x: 450.0, at: ms(32) });
        nav.handle(InputEvent::PointerUp);
        assert!(!nav.state().is_dragging);

        let mut now = 32;
        while nav.current_index() == 0 && now < 2000 {
            now += 16;
            nav.pump(ms(now));
        }

        assert_eq!(nav.current_index(), 1);
        assert!(nav.state().is_at_rest());
        assert_eq!(nav.scheduler().armed_count(TimerKind::Frame), 0);
    }

    #[test]
    fn test_slow_release_snaps_back() {
        let mut nav = mount(3);
        nav.go_to_slide(1);

        nav.handle(InputEvent::PointerDown { x: 500.0, at: ms(0) });
        nav.handle(InputEvent::PointerMove { x: 450.0, at: ms(400) });
        nav.handle(InputEvent::PointerMove { x: 450.0, at: ms(800) });
        nav.handle(InputEvent::PointerUp);

        nav.pump(ms(816));

        assert_eq!(nav.current_index(), 1);
        assert!(nav.state().is_at_rest());
        assert_eq!(nav.surface().offsets[1], 0.0);
    }

    #[test]
    fn test_new_drag_cancels_inertia() {
        let mut nav = mount(3);
        nav.handle(InputEvent::PointerDown { x: 600.0, at: ms(0) });
        nav.handle(InputEvent::PointerMove { x: 580.0, at: ms(16) });
        nav.handle(InputEvent::PointerUp);
        assert_eq!(nav.scheduler().armed_count(TimerKind::Frame), 1);

        nav.handle(InputEvent::PointerDown { x: 580.0, at: ms(20) });
        assert_eq!(nav.scheduler().armed_count(TimerKind::Frame), 0);

        nav.pump(ms(100));
        assert!(nav.state().is_dragging);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_release_resumes_autoplay_after_quiet_period() {
        let mut nav = mount(3);
        nav.handle(InputEvent::PointerDown { x: 500.0, at: ms(0) });
        nav.handle(InputEvent::PointerUp);
        assert!(!nav.is_autoplaying());

        nav.pump(ms(2999));
        assert!(!nav.is_autoplaying());

        nav.pump(ms(3000));
        assert!(nav.is_autoplaying());
    }

    #[test]
    fn test_repeated_mouse_leave_arms_one_autoplay_timer() {
        let mut nav = mount(3);
        nav.handle(InputEvent::MouseEnter);
        nav.handle(InputEvent::MouseLeave);
        nav.handle(InputEvent::MouseLeave);

        assert_eq!(nav.scheduler().armed_count(TimerKind::Resume), 1);

        nav.pump(ms(3000));
        assert_eq!(nav.scheduler().armed_count(TimerKind::Autoplay), 1);
        assert_eq!(nav.scheduler().armed_count(TimerKind::Resume), 0);

        nav.handle(InputEvent::MouseLeave);
        nav.pump(ms(6000));
        assert_eq!(nav.scheduler().armed_count(TimerKind::Autoplay), 1);
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let mut nav = mount(3);
        nav.handle(InputEvent::MouseEnter);
        nav.pump(ms(20_000));
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.is_autoplaying());
    }

    #[test]
    fn test_single_active_through_mixed_interaction() {
        let mut nav = mount(4);
        let events = [
            InputEvent::ArrowRight,
            InputEvent::ControlClick(Control::Next),
            InputEvent::PointerDown { x: 300.0, at: ms(10) },
            InputEvent::PointerMove { x: 700.0, at: ms(26) },
            InputEvent::PointerUp,
            InputEvent::ControlClick(Control::Prev),
            InputEvent::ArrowLeft,
            InputEvent::ArrowLeft,
        ];

        let mut now = 26;
        for event in events {
            nav.handle(event);
            for _ in 0..30 {
                now += 16;
                nav.pump(ms(now));
                assert_single_active(&nav);
            }
        }
        assert!(nav.state().is_at_rest());
    }

    #[test]
    fn test_subscribers_see_committed_changes() {
        let mut nav = mount(3);
        let recorder = Arc::new(Recorder::default());
        nav.add_subscriber(recorder.clone());

        nav.handle(InputEvent::ArrowRight);
        nav.go_to_slide(1);
        nav.go_to_slide(-1);
        // Quiet period ends at 3 s, the first tick lands 4 s later
        nav.pump(ms(3000));
        nav.pump(ms(7000));

        let changes = recorder.changes.lock();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].cause, SlideChangeCause::Keyboard);
        assert_eq!((changes[0].previous, changes[0].current), (0, 1));
        assert_eq!(changes[1].cause, SlideChangeCause::Autoplay);
    }

    #[test]
    fn test_context_snapshot() {
        let mut nav = mount(3);
        nav.go_to_slide(2);
        let context = nav.context();
        assert_eq!(context.state.current_index, 2);
        assert_eq!(context.slide_count, 3);
        assert!(context.autoplay_active);

        nav.handle(InputEvent::MouseEnter);
        assert!(!nav.context().autoplay_active);
    }

    #[test]
    fn test_leaving_mid_drag_keeps_autoplay_off() {
        let mut nav = mount(3);
        nav.handle(InputEvent::PointerDown { x: 500.0, at: ms(0) });
        nav.handle(InputEvent::PointerMove { x: 450.0, at: ms(16) });
        nav.handle(InputEvent::MouseLeave);

        nav.pump(ms(3000));
        nav.pump(ms(7100));

        assert!(nav.state().is_dragging);
        assert_eq!(nav.current_index(), 0);
        assert!((nav.state().drag_offset + 5.0).abs() < 1e-4);
        assert!(!nav.is_autoplaying());
        assert_eq!(nav.scheduler().armed_count(TimerKind::Resume), 0);

        // Letting go starts the quiet period
        nav.handle(InputEvent::PointerUp);
        assert_eq!(nav.scheduler().armed_count(TimerKind::Resume), 1);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut nav = mount(2);
        {
            let recorder: Arc<dyn SlideSubscriber> = Arc::new(Recorder::default());
            nav.add_subscriber(recorder);
        }
        nav.go_to_slide(1);
        assert!(nav.subscribers.read().is_empty());
    }
}
