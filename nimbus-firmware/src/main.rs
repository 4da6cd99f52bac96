//! Nimbus - LED Lamp Firmware
//!
//! LED board binary for RP2040-based lamps. Receives colour and mode frames
//! from the control board over UART0 and renders them on the LED strip.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use nimbus_hal::IoStream;
use nimbus_protocol::CodecConfig;

mod channels;
mod tasks;

/// Link baud rate, shared with the control board
const LINK_BAUDRATE: u32 = 115_200;

/// UART ring buffer size in each direction
const UART_BUF_SIZE: usize = 256;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Nimbus firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the control board link
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = LINK_BAUDRATE;

    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);

    info!("UART initialized for control board link");

    let link_config = CodecConfig {
        debug: cfg!(debug_assertions),
        ..Default::default()
    };

    // Spawn tasks
    spawner.spawn(unwrap!(tasks::link_task(IoStream::new(uart), link_config)));
    spawner.spawn(unwrap!(tasks::render_task()));

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
