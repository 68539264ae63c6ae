use indicatif::{ProgressBar, ProgressStyle};
use isingviz::render::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Maps workflow progress events onto a single stderr progress bar, one
/// step per rendered page.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name, total_pages } => {
                    pb.reset();
                    pb.set_style(Self::bar_style());
                    pb.set_length(total_pages as u64);
                    pb.set_position(0);
                    pb.set_message(name);
                }
                Progress::PageStart {
                    number,
                    total,
                    title,
                } => {
                    pb.set_message(format!("Page {}/{}: {}", number, total, title));
                }
                Progress::PageFinish { .. } => {
                    pb.inc(1);
                }
                Progress::PhaseFinish => {
                    pb.finish_with_message("✓ Done");
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<44} [{bar:30.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
