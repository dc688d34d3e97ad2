//! Log timestamps with the game's tick counter attached.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Global atomic counter for tracking game ticks
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Maximum value for tick counter display (16-bit hex)
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// A timer for `tracing_subscriber::fmt` that prints the wall-clock time followed by the tick
/// counter in hexadecimal, e.g. `14:03:27.01234 0x002A`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickTimer;

impl FormatTime for TickTimer {
    fn format_time(&self, writer: &mut Writer<'_>) -> fmt::Result {
        let now = OffsetDateTime::now_utc();
        let formatted_time = now.format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        let tick_count = get_tick_count() & TICK_DISPLAY_MASK;

        if writer.has_ansi_escapes() {
            write!(writer, "\x1b[2m{formatted_time} 0x{tick_count:04X}\x1b[0m")
        } else {
            write!(writer, "{formatted_time} 0x{tick_count:04X}")
        }
    }
}

/// Increment the global tick counter by 1
///
/// This should be called once per game tick from the driver loop
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

/// Get the current tick count
pub fn get_tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
