//! LED render task
//!
//! Runs the animation clock independently of the link. Effect drawing is
//! board-specific; this build logs what it would show.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};

use nimbus_core::{LampRenderer, LampState, RenderError};

use crate::channels::LAMP_STATE;

/// Animation frame interval in milliseconds
pub const FRAME_INTERVAL_MS: u64 = 20;

/// Renderer that reports state changes over defmt
#[derive(Default)]
pub struct LogRenderer {
    shown: Option<LampState>,
}

impl LampRenderer for LogRenderer {
    fn render(&mut self, state: &LampState, _now_ms: u32) -> Result<(), RenderError> {
        if self.shown == Some(*state) {
            return Ok(());
        }
        match (state.led_mode(), Self::solid_color(state)) {
            (_, Some(color)) => info!("Solid colour {}", color),
            (Some(mode), None) => info!("Mode {}", mode),
            (None, None) => warn!("Unknown mode {}, showing default", state.mode()),
        }
        self.shown = Some(*state);
        Ok(())
    }

    fn blank(&mut self) -> Result<(), RenderError> {
        info!("LEDs off");
        self.shown = None;
        Ok(())
    }
}

/// Render task - draws the latest state on every frame tick
#[embassy_executor::task]
pub async fn render_task() {
    info!("Render task started");

    let mut renderer = LogRenderer::default();
    let mut state = LAMP_STATE.wait().await;
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));
    let start = Instant::now();

    loop {
        if let Either::Second(update) = select(ticker.next(), LAMP_STATE.wait()).await {
            debug!("State update: {}", update);
            state = update;
        }

        let now_ms = start.elapsed().as_millis() as u32;
        if let Err(e) = renderer.render(&state, now_ms) {
            warn!("Render failed: {:?}", e);
        }
    }
}
