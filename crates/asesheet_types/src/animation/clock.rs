//! Tick-scoped elapsed-time state.

use std::time::{Duration, Instant};

/// Elapsed-time accumulator advanced once per host tick.
///
/// The host owns one `Clock`, ticks it at the start of every frame and passes
/// it by reference to each [`Animation::update`](super::Animation::update)
/// call of that frame. Animations only read it.
///
/// Sub-millisecond remainders are carried over to the next tick, so a host
/// running at 60 Hz does not lose 0.67 ms per frame.
///
/// # Examples
///
/// ```
/// use asesheet_types::animation::Clock;
/// use std::time::Duration;
///
/// let mut clock = Clock::new();
/// clock.advance(Duration::from_micros(16_700));
/// clock.advance(Duration::from_micros(16_700));
/// assert_eq!(clock.delta_ms(), 17);
/// assert_eq!(clock.total_ms(), 33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
	last_tick: Instant,
	carry: Duration,
	delta_ms: i64,
	total_ms: i64,
}

impl Clock {
	/// Creates a clock whose first tick measures from now.
	pub fn new() -> Self {
		Self::starting_at(Instant::now())
	}

	/// Creates a clock whose first tick measures from `start`.
	pub fn starting_at(start: Instant) -> Self {
		Self {
			last_tick: start,
			carry: Duration::ZERO,
			delta_ms: 0,
			total_ms: 0,
		}
	}

	/// Measures the wall-clock time since the previous tick.
	///
	/// Call exactly once per frame, before updating any animation. Returns the
	/// new delta in milliseconds.
	pub fn tick(&mut self) -> i64 {
		self.tick_at(Instant::now())
	}

	/// Like [`Clock::tick`], with an explicit current time.
	///
	/// A `now` earlier than the previous tick counts as no elapsed time.
	pub fn tick_at(&mut self, now: Instant) -> i64 {
		let elapsed = now.saturating_duration_since(self.last_tick);
		self.last_tick = self.last_tick.max(now);
		self.accumulate(elapsed)
	}

	/// Advances by a fixed amount instead of measuring wall-clock time.
	///
	/// Useful for fixed-step hosts and deterministic replays.
	pub fn advance(&mut self, elapsed: Duration) -> i64 {
		self.last_tick = self.last_tick.checked_add(elapsed).unwrap_or(self.last_tick);
		self.accumulate(elapsed)
	}

	fn accumulate(&mut self, elapsed: Duration) -> i64 {
		let elapsed = elapsed.saturating_add(self.carry);
		self.carry = Duration::from_nanos(u64::from(elapsed.subsec_nanos() % 1_000_000));
		self.delta_ms = i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX);
		self.total_ms = self.total_ms.saturating_add(self.delta_ms);
		self.delta_ms
	}

	/// Milliseconds elapsed between the last two ticks.
	pub fn delta_ms(&self) -> i64 {
		self.delta_ms
	}

	/// Milliseconds elapsed over all ticks.
	pub fn total_ms(&self) -> i64 {
		self.total_ms
	}
}

impl Default for Clock {
	fn default() -> Self {
		Self::new()
	}
}
