//! Every slideshow mounted on one page

use std::time::Duration;
use ahash::AHashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{FadeConfig, NavigatorConfig};
use crate::fade::FadeSlideshow;
use crate::navigator::{InputEvent, SlideNavigator, SlideSurface};
use crate::schedule::{Scheduler, TimerQueue};

/// Slideshow identifier type
pub type SlideshowId = Uuid;

/// A mounted slideshow of either kind
pub enum Slideshow<D: SlideSurface, S: Scheduler = TimerQueue> {
    Sliding(SlideNavigator<D, S>),
    Fading(FadeSlideshow<D, S>),
}

impl<D: SlideSurface, S: Scheduler> Slideshow<D, S> {
    pub fn handle(&mut self, event: InputEvent) {
        match self {
            Slideshow::Sliding(navigator) => navigator.handle(event),
            Slideshow::Fading(fade) => fade.handle(event),
        }
    }

    pub fn pump(&mut self, now: Duration) {
        match self {
            Slideshow::Sliding(navigator) => navigator.pump(now),
            Slideshow::Fading(fade) => fade.pump(now),
        }
    }

    pub fn current_index(&self) -> usize {
        match self {
            Slideshow::Sliding(navigator) => navigator.current_index(),
            Slideshow::Fading(fade) => fade.current_index(),
        }
    }

    pub fn slide_count(&self) -> usize {
        match self {
            Slideshow::Sliding(navigator) => navigator.slide_count(),
            Slideshow::Fading(fade) => fade.slide_count(),
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        match self {
            Slideshow::Sliding(navigator) => navigator.is_autoplaying(),
            Slideshow::Fading(fade) => fade.is_autoplaying(),
        }
    }

    pub fn surface(&self) -> &D {
        match self {
            Slideshow::Sliding(navigator) => navigator.surface(),
            Slideshow::Fading(fade) => fade.surface(),
        }
    }

    pub fn surface_mut(&mut self) -> &mut D {
        match self {
            Slideshow::Sliding(navigator) => navigator.surface_mut(),
            Slideshow::Fading(fade) => fade.surface_mut(),
        }
    }
}

/// Page-level registry of independent slideshows
///
/// Each slideshow owns its own state and scheduler; the registry only routes
/// input and pumps time into all of them.
pub struct SlideshowRegistry<D: SlideSurface, S: Scheduler = TimerQueue> {
    slideshows: AHashMap<SlideshowId, Slideshow<D, S>>,
    /// Mount order, for stable iteration
    order: Vec<SlideshowId>,
}

impl<D: SlideSurface, S: Scheduler> SlideshowRegistry<D, S> {
    pub fn new() -> Self {
        Self {
            slideshows: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Mount a physics-drag slideshow; `None` if the surface has no slides
    pub fn mount_sliding(&mut self, surface: D, scheduler: S, config: NavigatorConfig) -> Option<SlideshowId> {
        let navigator = SlideNavigator::mount(surface, scheduler, config)?;
        Some(self.insert(Slideshow::Sliding(navigator)))
    }

    /// Mount a fade slideshow; `None` if the surface has no slides
    pub fn mount_fading(&mut self, surface: D, scheduler: S, config: FadeConfig) -> Option<SlideshowId> {
        let fade = FadeSlideshow::mount(surface, scheduler, config)?;
        Some(self.insert(Slideshow::Fading(fade)))
    }

    fn insert(&mut self, slideshow: Slideshow<D, S>) -> SlideshowId {
        let id = Uuid::new_v4();
        debug!(%id, slides = slideshow.slide_count(), "slideshow registered");
        self.slideshows.insert(id, slideshow);
        self.order.push(id);
        id
    }

    /// Route input to one slideshow; false if the id is unknown
    pub fn handle(&mut self, id: SlideshowId, event: InputEvent) -> bool {
        match self.slideshows.get_mut(&id) {
            Some(slideshow) => {
                slideshow.handle(event);
                true
            }
            None => {
                warn!(%id, "input for unknown slideshow");
                false
            }
        }
    }

    /// Pump time into every slideshow
    pub fn pump(&mut self, now: Duration) {
        for slideshow in self.slideshows.values_mut() {
            slideshow.pump(now);
        }
    }

    pub fn get(&self, id: SlideshowId) -> Option<&Slideshow<D, S>> {
        self.slideshows.get(&id)
    }

    pub fn get_mut(&mut self, id: SlideshowId) -> Option<&mut Slideshow<D, S>> {
        self.slideshows.get_mut(&id)
    }

    /// Slideshows in mount order
    pub fn iter(&self) -> impl Iterator<Item = (SlideshowId, &Slideshow<D, S>)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.slideshows.get(id).map(|slideshow| (*id, slideshow)))
    }

    pub fn ids(&self) -> &[SlideshowId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<D: SlideSurface, S: Scheduler> Default for SlideshowRegistry<D, S> {
    fn default() -> Self {
        Self::new()
    }
}
