//! Main application entry point

use std::sync::Arc;
use std::time::{Duration, Instant};
use anyhow::Result;
use eframe::egui;
use tracing::info;

use folio_core::{NavigatorContext, Slideshow, SlideshowId, SlideshowRegistry, TimerQueue};
use folio_ui::{EguiSurface, SlideshowView, Theme};

mod activity;
mod config;

use activity::ActivityLog;
use config::AppConfig;

/// Repaint cadence while anything may still move
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Main application state
struct FolioApp {
    /// Every slideshow on the page
    page: SlideshowRegistry<EguiSurface>,

    /// Widget state per slideshow, in page order
    views: Vec<(SlideshowId, SlideshowView)>,

    /// Latest change of the sliding showcase
    activity: Arc<ActivityLog>,

    /// The sliding showcase, if it mounted
    showcase: Option<SlideshowId>,

    /// Origin of the page clock
    started: Instant,
}

impl FolioApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        folio_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let mut page = SlideshowRegistry::new();
        let activity = Arc::new(ActivityLog::default());

        let showcase = page.mount_sliding(
            EguiSurface::new(config.projects, true),
            TimerQueue::new(),
            config.navigator,
        );
        if let Some(Slideshow::Sliding(navigator)) = showcase.and_then(|id| page.get(id)) {
            navigator.add_subscriber(activity.clone());
        }

        page.mount_fading(
            EguiSurface::new(config.highlights, true),
            TimerQueue::new(),
            config.fade,
        );

        let views = page
            .ids()
            .iter()
            .map(|id| (*id, SlideshowView::new(id)))
            .collect();

        info!("Mounted {} slideshows", page.len());

        Self {
            page,
            views,
            activity,
            showcase,
            started: Instant::now(),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.started.elapsed();
        self.page.pump(now);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.activity.summary());
                if let Some(Slideshow::Sliding(navigator)) = self.showcase.and_then(|id| self.page.get(id)) {
                    ui.separator();
                    ui.label(status_line(&navigator.context()));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Selected work");
            ui.add_space(8.0);

            let width = ui.available_width();
            for (idx, (id, view)) in self.views.iter_mut().enumerate() {
                let Some(slideshow) = self.page.get_mut(*id) else { continue };
                let height = if idx == 0 { width * 0.5 } else { width * 0.25 };
                view.ui(ui, slideshow, now, egui::vec2(width, height));
                ui.add_space(16.0);
            }
        });

        // Timers and tweens advance on their own, so keep frames coming
        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

/// Position and autoplay state of the showcase
fn status_line(context: &NavigatorContext) -> String {
    let playback = if context.state.is_dragging {
        "dragging"
    } else if context.autoplay_active {
        "autoplay"
    } else {
        "paused"
    };
    format!(
        "{} / {} · {}",
        context.state.current_index + 1,
        context.slide_count,
        playback
    )
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting portfolio slideshows");
    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 860.0])
            .with_min_inner_size([480.0, 400.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| {
            Box::new(FolioApp::new(cc, config))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::NavigatorState;

    #[test]
    fn test_status_line_reports_playback() {
        let mut context = NavigatorContext {
            state: NavigatorState::at_rest(1),
            slide_count: 4,
            autoplay_active: true,
        };
        assert_eq!(status_line(&context), "2 / 4 · autoplay");

        context.autoplay_active = false;
        assert_eq!(status_line(&context), "2 / 4 · paused");

        context.state.is_dragging = true;
        assert_eq!(status_line(&context), "2 / 4 · dragging");
    }
}
