//! Session state machine.
//!
//! The five-state lifecycle replaces the boolean flags of a classic polled
//! game loop (`game_over`, `waiting_for_restart`, `in_main_screen`, `paused`)
//! with one tagged enum, so unintended flag combinations are unrepresentable.
//! The session data rides inside the state variants: it is created on the
//! transition into [`GameState::Playing`] and dropped on the return to
//! [`GameState::Idle`].
//!
//! The machine never draws and never reads a clock; it consumes events with
//! an explicit `now_ms` and emits an [`Output`] telling the caller what to
//! render and whether to persist a new high score.

use rand_core::RngCore;

use crate::clock::SessionClock;
use crate::config::REDRAW_INTERVAL_MS;
use crate::reels::ReelRows;
use crate::render::{Screen, build_frame};

/// Data owned by one play session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameSession {
    pub score: u32,
    pub clock: SessionClock,
}

/// The session lifecycle. Exactly one variant holds at any time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    /// Title screen, no session.
    Idle,
    /// Countdown running, spins accepted.
    Playing(GameSession),
    /// Countdown frozen, only the pause toggle does anything.
    Paused(GameSession),
    /// Expiry handled this tick (score finalized, high score persisted);
    /// settles into `AwaitingRestart` on the next event.
    Over(GameSession),
    /// Game-over screen showing, waiting for the spin/start signal.
    AwaitingRestart(GameSession),
}

/// Inputs to the state machine, one per poll cycle at most.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    /// Spin/start signal (button A or joystick).
    Spin,
    /// Pause toggle (button B).
    PauseToggle,
    /// Periodic scheduler tick with no button activity.
    Tick,
}

/// Result of one transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Output {
    /// Screen to draw, if the visible state changed.
    pub screen: Option<Screen>,
    /// New high score to persist, set only at the game-over transition.
    pub save_high_score: Option<u32>,
}

impl Output {
    const fn none() -> Self {
        Self {
            screen: None,
            save_high_score: None,
        }
    }

    const fn draw(screen: Screen) -> Self {
        Self {
            screen: Some(screen),
            save_high_score: None,
        }
    }
}

/// The slot machine game: state, reels, toggle phase, and high score.
pub struct SlotMachine<R: RngCore> {
    state: GameState,
    /// Current reel rows; random rows exist from boot, before any session.
    rows: ReelRows,
    /// Two-frame handle alternation, flipped only by an actual spin.
    toggle_phase: bool,
    high_score: u32,
    last_redraw_ms: u64,
    rng: R,
}

impl<R: RngCore> SlotMachine<R> {
    /// Create the machine in `Idle` with the high score loaded at boot.
    pub fn new(mut rng: R, high_score: u32) -> Self {
        let rows = ReelRows::spin(&mut rng);
        Self {
            state: GameState::Idle,
            rows,
            toggle_phase: false,
            high_score,
            last_redraw_ms: 0,
            rng,
        }
    }

    /// Screen to draw right after boot.
    pub const fn boot_screen(&self) -> Screen {
        Screen::Main {
            high_score: self.high_score,
        }
    }

    pub const fn state(&self) -> &GameState { &self.state }

    pub const fn high_score(&self) -> u32 { self.high_score }

    /// Drive one transition. Total over every (state, event) pair.
    pub fn handle(&mut self, event: Event, now_ms: u64) -> Output {
        match event {
            Event::Spin => self.on_spin(now_ms),
            Event::PauseToggle => self.on_pause_toggle(now_ms),
            Event::Tick => self.on_tick(now_ms),
        }
    }

    fn on_spin(&mut self, now_ms: u64) -> Output {
        match self.state {
            GameState::Idle => self.start_session(now_ms),
            GameState::Playing(mut session) => {
                // Time-expiry takes priority over a simultaneous spin request.
                if session.clock.is_expired(now_ms) {
                    return self.finish_session(session);
                }
                self.toggle_phase = !self.toggle_phase;
                self.rows = ReelRows::spin(&mut self.rng);
                session.score += self.rows.score_delta();
                self.last_redraw_ms = now_ms;
                self.state = GameState::Playing(session);
                Output::draw(self.slot_screen(&session, now_ms))
            }
            // Spins are inert while paused.
            GameState::Paused(_) => Output::none(),
            // Leave the game-over screen for the title screen; the session
            // is dropped here and rebuilt on the next start.
            GameState::Over(_) | GameState::AwaitingRestart(_) => {
                self.state = GameState::Idle;
                Output::draw(self.boot_screen())
            }
        }
    }

    fn on_pause_toggle(&mut self, now_ms: u64) -> Output {
        match self.state {
            GameState::Playing(mut session) => {
                session.clock.pause(now_ms);
                self.state = GameState::Paused(session);
                Output::draw(Screen::Paused)
            }
            GameState::Paused(mut session) => {
                session.clock.resume(now_ms);
                self.last_redraw_ms = now_ms;
                self.state = GameState::Playing(session);
                Output::draw(self.slot_screen(&session, now_ms))
            }
            // The pause button is inert outside a session; it only redraws
            // the current screen.
            GameState::Idle => Output::draw(self.boot_screen()),
            GameState::Over(session) | GameState::AwaitingRestart(session) => {
                Output::draw(Screen::GameOver { score: session.score })
            }
        }
    }

    fn on_tick(&mut self, now_ms: u64) -> Output {
        match self.state {
            GameState::Playing(session) => {
                // Expiry is checked on the periodic tick, independent of any
                // button event.
                if session.clock.is_expired(now_ms) {
                    return self.finish_session(session);
                }
                // Keep the visible countdown live at >= 1 Hz. The toggle
                // phase is untouched: the handle only moves on a real spin.
                if now_ms.saturating_sub(self.last_redraw_ms) >= REDRAW_INTERVAL_MS {
                    self.last_redraw_ms = now_ms;
                    Output::draw(self.slot_screen(&session, now_ms))
                } else {
                    Output::none()
                }
            }
            GameState::Over(session) => {
                self.state = GameState::AwaitingRestart(session);
                Output::none()
            }
            GameState::Idle | GameState::Paused(_) | GameState::AwaitingRestart(_) => Output::none(),
        }
    }

    fn start_session(&mut self, now_ms: u64) -> Output {
        let session = GameSession {
            score: 0,
            clock: SessionClock::start(now_ms),
        };
        self.toggle_phase = false;
        // The initial reel state is itself a spin, but it is not scored.
        self.rows = ReelRows::spin(&mut self.rng);
        self.last_redraw_ms = now_ms;
        self.state = GameState::Playing(session);
        Output::draw(self.slot_screen(&session, now_ms))
    }

    /// Game-over handling: compare and persist the high score, emit the
    /// game-over frame, and enter `Over`.
    fn finish_session(&mut self, session: GameSession) -> Output {
        let save_high_score = if session.score > self.high_score {
            self.high_score = session.score;
            Some(session.score)
        } else {
            None
        };
        self.state = GameState::Over(session);
        Output {
            screen: Some(Screen::GameOver { score: session.score }),
            save_high_score,
        }
    }

    fn slot_screen(&self, session: &GameSession, now_ms: u64) -> Screen {
        Screen::Slot(build_frame(
            &self.rows,
            session.score,
            Some(session.clock.remaining_secs(now_ms)),
            self.toggle_phase,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand_core::RngCore;

    use super::*;
    use crate::config::GAME_DURATION_SECS;
    use crate::render::FrameDescription;

    const SEC: u64 = 1000;

    /// RNG returning a constant, for forcing reel outcomes.
    /// With `FixedRng(3)` every drawn symbol is `1 + 3 % 9 = 4`.
    struct FixedRng(u32);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 { self.0 }

        fn next_u64(&mut self) -> u64 { u64::from(self.0) }

        fn fill_bytes(&mut self, dst: &mut [u8]) { dst.fill(self.0 as u8); }
    }

    fn machine() -> SlotMachine<SmallRng> { SlotMachine::new(SmallRng::seed_from_u64(99), 0) }

    fn expect_slot(output: &Output) -> FrameDescription {
        match output.screen {
            Some(Screen::Slot(frame)) => frame,
            other => panic!("expected slot frame, got {other:?}"),
        }
    }

    #[test]
    fn test_boot_shows_title_with_high_score() {
        let m = SlotMachine::new(SmallRng::seed_from_u64(1), 17);
        assert_eq!(m.boot_screen(), Screen::Main { high_score: 17 });
        assert!(matches!(m.state(), GameState::Idle));
    }

    #[test]
    fn test_start_session_resets_and_shows_full_duration() {
        let mut m = machine();
        let out = m.handle(Event::Spin, 5 * SEC);
        let frame = expect_slot(&out);
        assert_eq!(frame.score, 0);
        assert_eq!(frame.remaining_secs, Some(GAME_DURATION_SECS));
        assert!(!frame.toggle_phase);
        assert!(matches!(m.state(), GameState::Playing(_)));
    }

    #[test]
    fn test_initial_spin_is_not_scored() {
        // FixedRng forces [4,4,4] on every row: winner flag set, score still 0.
        let mut m = SlotMachine::new(FixedRng(3), 0);
        let frame = expect_slot(&m.handle(Event::Spin, 0));
        assert!(frame.winner);
        assert_eq!(frame.score, 0);
    }

    #[test]
    fn test_winning_spin_scores_the_shared_symbol() {
        let mut m = SlotMachine::new(FixedRng(3), 0);
        m.handle(Event::Spin, 0);
        let frame = expect_slot(&m.handle(Event::Spin, 1 * SEC));
        assert_eq!(frame.mid, [4, 4, 4]);
        assert!(frame.winner);
        assert_eq!(frame.score, 4);
    }

    #[test]
    fn test_toggle_phase_alternates_only_on_spins() {
        let mut m = machine();
        m.handle(Event::Spin, 0);
        assert!(expect_slot(&m.handle(Event::Spin, 1 * SEC)).toggle_phase);
        // Periodic redraw leaves the handle where it is.
        let refreshed = expect_slot(&m.handle(Event::Tick, 3 * SEC));
        assert!(refreshed.toggle_phase);
        assert!(!expect_slot(&m.handle(Event::Spin, 4 * SEC)).toggle_phase);
    }

    #[test]
    fn test_countdown_redraws_at_one_hertz_without_input() {
        let mut m = machine();
        m.handle(Event::Spin, 0);
        // Sub-second ticks stay quiet.
        assert_eq!(m.handle(Event::Tick, 400), Output::none());
        assert_eq!(m.handle(Event::Tick, 990), Output::none());
        // One second in, the frame is re-emitted with the countdown advanced.
        let frame = expect_slot(&m.handle(Event::Tick, 1 * SEC));
        assert_eq!(frame.remaining_secs, Some(GAME_DURATION_SECS - 1));
        // And stays quiet again until the next whole second.
        assert_eq!(m.handle(Event::Tick, 1 * SEC + 500), Output::none());
    }

    #[test]
    fn test_expiry_on_tick_persists_new_high_score() {
        // Start, win once (score 4), then let the clock run out.
        let mut m = SlotMachine::new(FixedRng(3), 0);
        m.handle(Event::Spin, 0);
        m.handle(Event::Spin, 1 * SEC);
        let out = m.handle(Event::Tick, 125 * SEC);
        assert_eq!(out.screen, Some(Screen::GameOver { score: 4 }));
        assert_eq!(out.save_high_score, Some(4));
        assert_eq!(m.high_score(), 4);
        assert!(matches!(m.state(), GameState::Over(_)));
        // The next tick settles into AwaitingRestart.
        assert_eq!(m.handle(Event::Tick, 125 * SEC + 10), Output::none());
        assert!(matches!(m.state(), GameState::AwaitingRestart(_)));
    }

    #[test]
    fn test_lower_final_score_is_not_persisted() {
        let mut m = SlotMachine::new(FixedRng(3), 50);
        m.handle(Event::Spin, 0);
        m.handle(Event::Spin, 1 * SEC); // score 4 < high score 50
        let out = m.handle(Event::Tick, 125 * SEC);
        assert_eq!(out.save_high_score, None);
        assert_eq!(m.high_score(), 50);
    }

    #[test]
    fn test_spin_at_expiry_is_suppressed() {
        let mut m = SlotMachine::new(FixedRng(3), 0);
        m.handle(Event::Spin, 0);
        // The spin request lands after the deadline: no reels, no score,
        // the session ends instead.
        let out = m.handle(Event::Spin, 121 * SEC);
        assert_eq!(out.screen, Some(Screen::GameOver { score: 0 }));
        assert_eq!(out.save_high_score, None);
        assert!(matches!(m.state(), GameState::Over(_)));
    }

    #[test]
    fn test_pause_resume_preserves_remaining_time() {
        let mut m = machine();
        m.handle(Event::Spin, 0);
        let paused = m.handle(Event::PauseToggle, 10 * SEC);
        assert_eq!(paused.screen, Some(Screen::Paused));
        assert!(matches!(m.state(), GameState::Paused(_)));

        // 30 seconds later: remaining is 110, not 80.
        let resumed = m.handle(Event::PauseToggle, 40 * SEC);
        let frame = expect_slot(&resumed);
        assert_eq!(frame.remaining_secs, Some(110));
        assert!(matches!(m.state(), GameState::Playing(_)));
    }

    #[test]
    fn test_spin_and_tick_are_inert_while_paused() {
        let mut m = machine();
        m.handle(Event::Spin, 0);
        m.handle(Event::PauseToggle, 5 * SEC);
        assert_eq!(m.handle(Event::Spin, 6 * SEC), Output::none());
        assert_eq!(m.handle(Event::Tick, 60 * SEC), Output::none());
        assert!(matches!(m.state(), GameState::Paused(_)));
    }

    #[test]
    fn test_pause_in_idle_just_redraws_title() {
        let mut m = SlotMachine::new(SmallRng::seed_from_u64(2), 9);
        let out = m.handle(Event::PauseToggle, 0);
        assert_eq!(out.screen, Some(Screen::Main { high_score: 9 }));
        assert!(matches!(m.state(), GameState::Idle));
    }

    #[test]
    fn test_pause_in_awaiting_restart_just_redraws() {
        let mut m = SlotMachine::new(FixedRng(3), 0);
        m.handle(Event::Spin, 0);
        m.handle(Event::Spin, 1 * SEC);
        m.handle(Event::Tick, 125 * SEC);
        m.handle(Event::Tick, 125 * SEC + 10);
        assert!(matches!(m.state(), GameState::AwaitingRestart(_)));

        let out = m.handle(Event::PauseToggle, 126 * SEC);
        assert_eq!(out.screen, Some(Screen::GameOver { score: 4 }));
        assert_eq!(out.save_high_score, None);
        assert!(matches!(m.state(), GameState::AwaitingRestart(_)));
    }

    #[test]
    fn test_restart_returns_to_title_then_fresh_session() {
        let mut m = SlotMachine::new(FixedRng(3), 0);
        m.handle(Event::Spin, 0);
        m.handle(Event::Spin, 1 * SEC);
        m.handle(Event::Tick, 125 * SEC);
        m.handle(Event::Tick, 125 * SEC + 10);

        // Spin leaves the game-over screen for the title.
        let out = m.handle(Event::Spin, 130 * SEC);
        assert_eq!(out.screen, Some(Screen::Main { high_score: 4 }));
        assert!(matches!(m.state(), GameState::Idle));

        // And the next spin starts a clean session.
        let frame = expect_slot(&m.handle(Event::Spin, 131 * SEC));
        assert_eq!(frame.score, 0);
        assert_eq!(frame.remaining_secs, Some(GAME_DURATION_SECS));
    }

    #[test]
    fn test_every_state_handles_every_event() {
        // Walk the machine into each reachable state and feed it the full
        // event set; every pair must produce a defined transition.
        let events = [Event::Spin, Event::PauseToggle, Event::Tick];

        for setup in 0..5 {
            for event in events {
                let mut m = SlotMachine::new(FixedRng(3), 0);
                let mut t = 0;
                match setup {
                    0 => {} // Idle
                    1 => {
                        m.handle(Event::Spin, t); // Playing
                    }
                    2 => {
                        m.handle(Event::Spin, t);
                        m.handle(Event::PauseToggle, t + SEC); // Paused
                    }
                    3 => {
                        m.handle(Event::Spin, t);
                        t = 125 * SEC;
                        m.handle(Event::Tick, t); // Over
                    }
                    _ => {
                        m.handle(Event::Spin, t);
                        t = 125 * SEC;
                        m.handle(Event::Tick, t);
                        m.handle(Event::Tick, t + 10); // AwaitingRestart
                    }
                }
                let _ = m.handle(event, t + 2 * SEC);
            }
        }
    }
}
