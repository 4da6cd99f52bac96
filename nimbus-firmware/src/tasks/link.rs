//! Serial link task
//!
//! Polls the frame codec on the buffered UART shared with the control
//! board. This task is the only writer of the lamp state; every applied
//! frame publishes a fresh copy for the renderer.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::uart::BufferedUart;
use embassy_time::{Duration, Instant, Timer};

use nimbus_core::LampState;
use nimbus_hal::{IoStream, SerialStream};
use nimbus_protocol::{CodecConfig, LinkEvent, SerialCodec};

use crate::channels::LAMP_STATE;

/// Serial port the codec runs on
pub type LinkUart = IoStream<BufferedUart>;

/// Idle wait when the receive buffer is empty
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Link task - receives frames from the control board
#[embassy_executor::task]
pub async fn link_task(uart: LinkUart, config: CodecConfig) {
    info!("Link task started");

    let mut codec: SerialCodec<LinkUart> = SerialCodec::with_config(uart, config);
    let mut state = LampState::default();
    let start = Instant::now();

    LAMP_STATE.signal(state);

    loop {
        let now_ms = start.elapsed().as_millis() as u32;

        match codec.poll(now_ms, &mut state) {
            Some(LinkEvent::Frame { dispatch, .. }) => {
                if dispatch.is_applied() {
                    LAMP_STATE.signal(state);
                }
            }
            Some(LinkEvent::Noise(byte)) => {
                // Control board debug output
                trace!("Noise: {=u8:#x}", byte);
            }
            Some(LinkEvent::ReadError) => {
                warn!("UART read error");
            }
            Some(LinkEvent::Overflow) | None => {}
        }

        // Drain a burst without sleeping, then wait for more bytes
        match codec.stream_mut().read_ready() {
            Ok(true) => yield_now().await,
            Ok(false) | Err(_) => Timer::after(IDLE_POLL_INTERVAL).await,
        }
    }
}
