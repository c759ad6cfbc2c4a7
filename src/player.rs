//! Step cursor and timed playback
//!
//! The player owns one step sequence at a time and a cursor into it.
//!
//! ```text
//!  Empty ──load──▶ Playing ⇄ Paused
//!                     │        │
//!                     └──▶ Complete (cursor on last step, not playing)
//! ```
//!
//! Playback is driven by the caller's event loop: [`Player::poll`] advances
//! the cursor once the single pending deadline has passed. Scheduling always
//! replaces the previous deadline, and pausing, seeking, resetting or
//! completing drops it, so no two ticks are ever outstanding.

use crate::config::clamp_speed;
use crate::step::Step;
use std::time::{Duration, Instant};

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Empty,
    Paused,
    Playing,
    Complete,
}

impl PlayerState {
    pub fn label(self) -> &'static str {
        match self {
            PlayerState::Empty => "EMPTY",
            PlayerState::Paused => "PAUSED",
            PlayerState::Playing => "▶ PLAYING",
            PlayerState::Complete => "END",
        }
    }
}

/// Outcome of a play/pause toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Nothing is loaded; the caller should start a run
    NeedsRun,
    Playing,
    Paused,
    /// Already on the last step; nothing left to play
    Complete,
}

/// Cursor over a step sequence; array runs use [`Step`], tree operations
/// use [`crate::bst::BstStep`]
#[derive(Debug)]
pub struct Player<T = Step> {
    steps: Vec<T>,
    index: usize,
    playing: bool,
    interval: Duration,
    deadline: Option<Instant>,
}

impl<T> Player<T> {
    pub fn new(interval: Duration) -> Self {
        Player {
            steps: Vec::new(),
            index: 0,
            playing: false,
            interval: clamp_speed(interval),
            deadline: None,
        }
    }

    pub fn state(&self) -> PlayerState {
        match self.last_index() {
            None => PlayerState::Empty,
            Some(_) if self.playing => PlayerState::Playing,
            Some(last) if self.index == last => PlayerState::Complete,
            Some(_) => PlayerState::Paused,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current(&self) -> Option<&T> {
        self.steps.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due, if one is pending
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Replace the sequence wholesale and start playing from the first step
    pub fn load(&mut self, steps: impl Into<Vec<T>>, now: Instant) {
        self.steps = steps.into();
        self.index = 0;
        self.playing = false;
        self.deadline = None;

        match self.last_index() {
            None => {}
            Some(0) => {
                tracing::debug!("loaded single-step sequence");
            }
            Some(last) => {
                tracing::debug!(steps = last + 1, "loaded sequence, playing");
                self.playing = true;
                self.schedule(now);
            }
        }
    }

    /// Back to `Empty` from any state
    pub fn reset(&mut self) {
        self.steps = Vec::new();
        self.index = 0;
        self.playing = false;
        self.deadline = None;
    }

    /// Advance one step if the pending tick is due. Returns whether the
    /// cursor moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {}
            _ => return false,
        }

        self.index += 1;
        if Some(self.index) == self.last_index() {
            self.playing = false;
            self.deadline = None;
            tracing::debug!(index = self.index, "playback complete");
        } else {
            self.schedule(now);
        }
        true
    }

    pub fn toggle(&mut self, now: Instant) -> Toggle {
        match self.state() {
            PlayerState::Empty => Toggle::NeedsRun,
            PlayerState::Complete => Toggle::Complete,
            PlayerState::Playing => {
                self.pause();
                Toggle::Paused
            }
            PlayerState::Paused => {
                self.playing = true;
                self.schedule(now);
                Toggle::Playing
            }
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.deadline = None;
    }

    /// Manual step forward; refused while playing or at the end
    pub fn step_forward(&mut self) -> bool {
        if self.playing || self.is_empty() {
            return false;
        }
        if Some(self.index) == self.last_index() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Manual step back; refused while playing or at the start
    pub fn step_backward(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.pause();
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn seek_start(&mut self) -> bool {
        if self.playing || self.is_empty() {
            return false;
        }
        self.index = 0;
        true
    }

    pub fn seek_end(&mut self) -> bool {
        if self.playing {
            return false;
        }
        match self.last_index() {
            Some(last) => {
                self.index = last;
                true
            }
            None => false,
        }
    }

    /// Change the tick interval; a pending tick is rescheduled from `now`
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = clamp_speed(interval);
        if self.deadline.is_some() {
            self.schedule(now);
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bubble;

    const TICK: Duration = Duration::from_millis(100);

    fn loaded(now: Instant) -> Player {
        let mut player: Player = Player::new(TICK);
        player.load(bubble::steps(&[3, 2, 1]), now);
        player
    }

    #[test]
    fn test_empty_toggle_requests_run() {
        let mut player: Player = Player::new(TICK);
        assert_eq!(player.state(), PlayerState::Empty);
        assert_eq!(player.toggle(Instant::now()), Toggle::NeedsRun);
        assert!(player.current().is_none());
    }

    #[test]
    fn test_load_starts_playing() {
        let now = Instant::now();
        let player = loaded(now);
        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.index(), 0);
        assert_eq!(player.deadline(), Some(now + TICK));
    }

    #[test]
    fn test_poll_waits_for_deadline() {
        let now = Instant::now();
        let mut player = loaded(now);
        assert!(!player.poll(now + Duration::from_millis(50)));
        assert!(player.poll(now + TICK));
        assert_eq!(player.index(), 1);
        assert_eq!(player.deadline(), Some(now + TICK + TICK));
    }

    #[test]
    fn test_runs_to_complete() {
        let mut now = Instant::now();
        let mut player = loaded(now);
        let last = player.len() - 1;
        for _ in 0..last {
            now += TICK;
            assert!(player.poll(now));
        }
        assert_eq!(player.index(), last);
        assert_eq!(player.state(), PlayerState::Complete);
        assert_eq!(player.deadline(), None);

        now += TICK;
        assert!(!player.poll(now));
        assert_eq!(player.toggle(now), Toggle::Complete);
    }

    #[test]
    fn test_manual_steps_refused_while_playing() {
        let now = Instant::now();
        let mut player = loaded(now);
        assert!(!player.step_forward());
        assert!(!player.seek_end());
        assert!(!player.seek_start());
        assert_eq!(player.index(), 0);
    }

    #[test]
    fn test_step_backward_refused_while_playing() {
        let now = Instant::now();
        let mut player = loaded(now);
        player.poll(now + TICK);
        assert!(!player.step_backward());
        assert_eq!(player.index(), 1);
        assert_eq!(player.state(), PlayerState::Playing);

        assert_eq!(player.toggle(now + TICK), Toggle::Paused);
        assert!(player.step_backward());
        assert_eq!(player.index(), 0);
        assert_eq!(player.state(), PlayerState::Paused);
        assert_eq!(player.deadline(), None);
    }

    #[test]
    fn test_toggle_and_seek() {
        let now = Instant::now();
        let mut player = loaded(now);
        assert_eq!(player.toggle(now), Toggle::Paused);
        assert!(player.seek_end());
        assert_eq!(player.state(), PlayerState::Complete);
        assert!(!player.step_forward());
        assert!(player.seek_start());
        assert!(player.step_forward());
        assert_eq!(player.index(), 1);
        assert_eq!(player.toggle(now), Toggle::Playing);
        assert_eq!(player.deadline(), Some(now + TICK));
    }

    #[test]
    fn test_reset_clears_everything() {
        let now = Instant::now();
        let mut player = loaded(now);
        player.reset();
        assert_eq!(player.state(), PlayerState::Empty);
        assert_eq!(player.deadline(), None);
        assert!(!player.poll(now + TICK));
    }

    #[test]
    fn test_single_step_sequence_is_complete() {
        let mut player: Player = Player::new(TICK);
        player.load(crate::algorithms::merge::steps(&[9]), Instant::now());
        assert_eq!(player.state(), PlayerState::Complete);
    }

    #[test]
    fn test_interval_is_clamped() {
        let now = Instant::now();
        let mut player = loaded(now);
        player.set_interval(Duration::from_millis(1), now);
        assert_eq!(player.interval(), Duration::from_millis(10));
        assert_eq!(player.deadline(), Some(now + Duration::from_millis(10)));
    }
}
