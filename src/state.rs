use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::settings::AppConfig;
use crate::infrastructure::renderer::manim::ManimRenderer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub renderer: ManimRenderer,
    /// Bounds concurrent renderer processes; `None` means unbounded.
    pub render_slots: Option<Arc<Semaphore>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let renderer = ManimRenderer::new(&config);
        let render_slots = match config.max_concurrent_renders {
            0 => None,
            n => Some(Arc::new(Semaphore::new(n))),
        };

        Self {
            config,
            renderer,
            render_slots,
        }
    }
}
