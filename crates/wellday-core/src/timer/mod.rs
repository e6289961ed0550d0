mod countdown;
mod ticker;

pub use countdown::{format_countdown, next_reminder_clock, Countdown, CountdownKind};
pub use ticker::{CountdownTicker, SharedSession, Ticker, TICK_PERIOD};
