//! Inter-task communication channels
//!
//! The link task owns the codec and the lamp state it writes. Other tasks
//! only ever see copies published here.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use nimbus_core::LampState;

/// Latest lamp state (updated by the link task after each applied frame)
pub static LAMP_STATE: Signal<CriticalSectionRawMutex, LampState> = Signal::new();
