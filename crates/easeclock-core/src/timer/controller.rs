//! Timer controller
//!
//! Play/pause/stop transitions are delegated to the internal state, which
//! keeps the reference instant consistent. Position queries read that state
//! at the clock's current instant.

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::TimerConfig;
use crate::easing::Easing;
use crate::{Error, Result};

use super::state::{Loops, TimerState};
use super::steps::{StepPosition, Steps};
use super::{Frozen, Position, TimerStatus};

/// Virtual-time animation clock
///
/// Stopped until [`play`](Timer::play) is called. Paused when the speed is
/// 0, reversed when it is negative.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = SystemClock> {
    state: TimerState,
    clock: C,
}

impl Timer<SystemClock> {
    /// Create a timer on wall-clock time
    pub fn new(config: TimerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

impl<C: Clock> Timer<C> {
    /// Create a timer reading time from `clock`
    pub fn with_clock(config: TimerConfig, clock: C) -> Self {
        let mut timer = Self {
            state: TimerState::default(),
            clock,
        };

        timer.set_duration(config.duration);
        timer.set_delay(config.delay);
        timer.set_easing(config.easing.resolve());
        timer.set_speed(config.speed);
        timer.set_loops(config.loops);
        timer.set_steps(config.steps.into());
        timer.set_constrain(config.constrain);
        timer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // --------- //
    // Transport //
    // --------- //

    /// Start a stopped timer, or resume a paused one at its previous speed
    pub fn play(&mut self) {
        let now = self.clock.now();

        if self.state.user_time.is_none() {
            self.state.set_user_time(Some(now));
            debug!(start_time = now, begin = self.state.begin, "Timer started");
        } else if self.state.speed == 0 {
            let speed = self.state.prev_speed;
            self.state.set_speed(speed, now);
            debug!(speed, begin = self.state.begin, "Timer resumed");
        }
    }

    pub fn pause(&mut self) {
        self.set_speed(0);
    }

    pub fn stop(&mut self) {
        if self.state.user_time.is_some() {
            debug!("Timer stopped");
        }
        self.state.set_user_time(None);
    }

    // ---------- //
    // Parameters //
    // ---------- //

    pub fn duration(&self) -> u64 {
        self.state.duration
    }

    /// Replace the duration
    ///
    /// The reference instant is left untouched, so a running timer jumps to
    /// the fraction of the new duration that has already elapsed.
    pub fn set_duration(&mut self, duration: u64) {
        self.state.duration = duration;
    }

    pub fn delay(&self) -> i64 {
        self.state.delay
    }

    pub fn set_delay(&mut self, delay: i64) {
        self.state.set_delay(delay);
        trace!(delay, begin = self.state.begin, "Delay changed");
    }

    pub fn speed(&self) -> i32 {
        self.state.speed
    }

    /// Change the playback rate; 0 pauses, negative values play backwards
    pub fn set_speed(&mut self, speed: i32) {
        let now = self.clock.now();
        self.state.set_speed(speed, now);
        debug!(speed, begin = self.state.begin, "Timer speed changed");
    }

    pub fn easing(&self) -> &Easing {
        &self.state.easing
    }

    pub fn set_easing(&mut self, easing: impl Into<Easing>) {
        self.state.easing = easing.into();
    }

    pub fn constrain(&self) -> bool {
        self.state.constrain
    }

    pub fn set_constrain(&mut self, constrain: bool) {
        self.state.constrain = constrain;
    }

    pub fn loops(&self) -> Loops {
        self.state.loops
    }

    pub fn set_loops(&mut self, loops: impl Into<Loops>) {
        self.state.loops = loops.into();
    }

    pub fn steps(&self) -> Steps {
        self.state.steps
    }

    pub fn set_steps(&mut self, steps: Steps) {
        self.state.steps = steps;
    }

    pub fn set_steps_count(&mut self, count: u32) {
        self.state.steps.count = count;
    }

    pub fn set_steps_position(&mut self, position: StepPosition) {
        self.state.steps.position = position;
    }

    /// Instant the current run started, `None` when stopped
    pub fn start_time(&self) -> Option<f64> {
        self.state.user_time
    }

    // -------- //
    // Queries  //
    // -------- //

    /// Progress at the clock's current instant
    ///
    /// A constrained timer that has run past the end of its last loop stops
    /// itself; the call that detects this reports the end of the animation.
    pub fn position(&mut self) -> Result<Position> {
        let now = self.clock.now();
        self.position_at(now)
    }

    fn position_at(&mut self, real_now: f64) -> Result<Position> {
        if self.state.start_time.is_none() {
            return Ok(Position::ZERO);
        }
        if self.state.duration == 0 {
            return Err(Error::DegenerateInterval);
        }

        let speed = self.state.speed;
        let duration = self.state.duration as f64;

        let now = if speed == 0 {
            self.state.pause_time.unwrap_or(real_now)
        } else if speed < 0 {
            // mirror around the reversal point so elapsed time runs backwards
            self.state.back_time.unwrap_or(real_now) * 2.0 - real_now
        } else {
            real_now
        };

        let mut pos = ((now - self.state.begin) / duration).ceil();
        if pos < 1.0 {
            pos = 1.0;
        }
        if let Some(limit) = self.state.loops.limit() {
            pos = pos.min(limit as f64);
        }

        let offset = (pos - 1.0) * duration;
        let begin = self.state.begin + offset;
        let end = self.state.end() + offset;
        let loop_index = pos as u32;

        if self.state.constrain {
            if now <= begin {
                return Ok(Position {
                    loop_index,
                    ..Position::ZERO
                });
            }
            // the stopping call reports the end boundary, later calls see a
            // stopped timer
            if now > end {
                debug!(loop_index, "Timer ran past its end");
                self.stop();
                return Ok(Position {
                    time: 1.0,
                    value: self.eased(1.0),
                    loop_index,
                });
            }
        }

        let easing = &self.state.easing;
        let time = easing.time(begin, end, now)?;
        let value = if self.state.steps.is_continuous() {
            easing.value(begin, end, now)?
        } else {
            self.state.steps.quantize(time, easing)
        };

        trace!(time, value, loop_index, "Timer position");
        Ok(Position {
            time,
            value,
            loop_index,
        })
    }

    /// Stop a constrained timer whose animation is over
    ///
    /// Forward timers finish once their time fraction reaches 1, reversed
    /// ones once it falls back to 0. Paused timers are never evaluated.
    /// Returns whether the timer stopped during this call.
    pub fn check_and_maybe_stop(&mut self) -> Result<bool> {
        let speed = self.state.speed;
        if !self.state.constrain || self.state.start_time.is_none() || speed == 0 {
            return Ok(false);
        }

        let position = self.position()?;
        if self.state.start_time.is_none() {
            return Ok(true);
        }

        let finished = (speed > 0 && position.time >= 1.0) || (speed < 0 && position.time <= 0.0);
        if finished {
            debug!(speed, "Timer finished");
            self.stop();
        }
        Ok(finished)
    }

    /// Playback flags, after stopping a finished constrained timer
    pub fn status(&mut self) -> Result<TimerStatus> {
        self.check_and_maybe_stop()?;

        let started = self.state.start_time.is_some();
        Ok(TimerStatus {
            playing: started,
            paused: started && self.state.speed == 0,
        })
    }

    pub fn is_playing(&mut self) -> Result<bool> {
        self.status().map(|status| status.playing)
    }

    pub fn is_paused(&mut self) -> Result<bool> {
        self.status().map(|status| status.paused)
    }

    /// Evaluate the animation at an arbitrary instant
    ///
    /// `begin` defaults to the current run's start time and `now` to the
    /// clock. Speed, pauses and loops are ignored and nothing is mutated.
    /// Fails with [`Error::NotStarted`] unless both instants are given or
    /// the timer has been played.
    pub fn freeze(&self, begin: Option<f64>, now: Option<f64>) -> Result<Frozen> {
        if (begin.is_none() || now.is_none()) && self.state.user_time.is_none() {
            return Err(Error::NotStarted);
        }
        let origin = begin.or(self.state.user_time).ok_or(Error::NotStarted)?;

        let begin = origin + self.state.delay as f64;
        let end = begin + self.state.duration as f64;
        let now = now.unwrap_or_else(|| self.clock.now());

        let easing = &self.state.easing;
        let time = easing.time(begin, end, now)?;
        let value = if self.state.steps.is_continuous() {
            easing.value(begin, end, now)?
        } else {
            self.state.steps.quantize(time, easing)
        };

        if self.state.constrain {
            if time < 0.0 {
                return Ok(Frozen {
                    time: 0.0,
                    value: 0.0,
                });
            }
            if time > 1.0 {
                return Ok(Frozen {
                    time: 1.0,
                    value: 1.0,
                });
            }
        }

        Ok(Frozen { time, value })
    }

    /// Eased (and stepped) output at time fraction `time`
    fn eased(&self, time: f64) -> f64 {
        if self.state.steps.is_continuous() {
            self.state.easing.apply(time)
        } else {
            self.state.steps.quantize(time, &self.state.easing)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::clock::ManualClock;

    const START: f64 = 1_000_000.0;

    fn timer_with(config: TimerConfig) -> (Timer<ManualClock>, ManualClock) {
        let clock = ManualClock::new(START);
        (Timer::with_clock(config, clock.clone()), clock)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_stopped_timer_reports_zero() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        clock.advance(500.0);
        assert_eq!(timer.position().unwrap(), Position::ZERO);
        assert_eq!(timer.status().unwrap(), TimerStatus::default());
        assert_eq!(timer.start_time(), None);
    }

    #[test]
    fn test_forward_progress() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        assert_eq!(timer.start_time(), Some(START));

        clock.advance(250.0);
        let position = timer.position().unwrap();
        assert!(close(position.time, 0.25));
        assert!(close(position.value, 0.25));
        assert_eq!(position.loop_index, 1);
    }

    #[test]
    fn test_easing_applied_to_value() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 1000,
            easing: "easeInQuad".into(),
            ..Default::default()
        });
        timer.play();
        clock.advance(500.0);
        let position = timer.position().unwrap();
        assert!(close(position.time, 0.5));
        assert!(close(position.value, 0.25));
    }

    #[test]
    fn test_delay_holds_at_zero() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 1000,
            delay: 200,
            ..Default::default()
        });
        timer.play();
        clock.advance(150.0);
        assert_eq!(timer.position().unwrap().time, 0.0);

        clock.advance(150.0);
        assert!(close(timer.position().unwrap().time, 0.1));
    }

    #[test]
    fn test_negative_delay_skips_ahead() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 1000,
            delay: -400,
            ..Default::default()
        });
        timer.play();
        clock.advance(100.0);
        assert!(close(timer.position().unwrap().time, 0.5));
    }

    #[test]
    fn test_pause_is_idempotent() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(300.0);
        timer.pause();
        let first = timer.position().unwrap();

        clock.advance(200.0);
        timer.pause();
        assert_eq!(timer.speed(), 0);
        assert_eq!(timer.position().unwrap(), first);
        assert!(timer.is_paused().unwrap());
    }

    #[test]
    fn test_resume_continues_where_paused() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(300.0);
        let before = timer.position().unwrap().time;

        timer.pause();
        clock.advance(5_000.0);
        assert!(close(timer.position().unwrap().time, before));

        timer.play();
        assert!(close(timer.position().unwrap().time, before));
        assert_eq!(timer.speed(), 1);

        clock.advance(100.0);
        assert!(close(timer.position().unwrap().time, 0.4));
    }

    #[test]
    fn test_double_pause_resumes_previous_speed() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        timer.set_speed(2);
        clock.advance(100.0);
        timer.pause();
        timer.pause();
        timer.play();
        assert_eq!(timer.speed(), 2);
    }

    #[test]
    fn test_play_while_playing_is_noop() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(400.0);
        timer.play();
        assert_eq!(timer.start_time(), Some(START));
        assert!(close(timer.position().unwrap().time, 0.4));
    }

    #[test]
    fn test_reverse_runs_backwards() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(600.0);
        timer.set_speed(-1);
        assert!(close(timer.position().unwrap().time, 0.6));

        clock.advance(200.0);
        assert!(close(timer.position().unwrap().time, 0.4));

        // going forward again picks up from the reversed position
        timer.set_speed(1);
        assert!(close(timer.position().unwrap().time, 0.4));
        clock.advance(100.0);
        assert!(close(timer.position().unwrap().time, 0.5));
    }

    #[test]
    fn test_speed_change_keeps_fraction() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(200.0);
        timer.set_speed(2);
        assert!(close(timer.position().unwrap().time, 0.2));

        clock.advance(100.0);
        assert!(close(timer.position().unwrap().time, 0.4));
    }

    #[test]
    fn test_reverse_at_double_speed() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(800.0);
        timer.set_speed(-2);
        assert!(close(timer.position().unwrap().time, 0.8));

        clock.advance(100.0);
        assert!(close(timer.position().unwrap().time, 0.6));
    }

    #[test]
    fn test_constrained_timer_stops_at_end() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 100,
            loops: Loops::Count(1),
            ..Default::default()
        });
        timer.play();
        clock.advance(150.0);

        let position = timer.position().unwrap();
        assert_eq!(position.time, 1.0);
        assert_eq!(position.value, 1.0);
        assert!(!timer.is_playing().unwrap());
        assert_eq!(timer.position().unwrap(), Position::ZERO);
    }

    #[test]
    fn test_status_stops_finished_timer() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 100,
            loops: Loops::Count(1),
            ..Default::default()
        });
        timer.play();
        clock.advance(50.0);
        assert!(timer.is_playing().unwrap());

        clock.advance(60.0);
        assert_eq!(timer.status().unwrap(), TimerStatus::default());
        assert_eq!(timer.start_time(), None);
    }

    #[test]
    fn test_status_stops_exactly_at_end() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 100,
            loops: Loops::Count(1),
            ..Default::default()
        });
        timer.play();
        clock.advance(100.0);
        assert!(timer.check_and_maybe_stop().unwrap());
        assert!(!timer.is_playing().unwrap());
    }

    #[test]
    fn test_reverse_constrained_stops_at_start() {
        let (mut timer, clock) = timer_with(TimerConfig::from(100));
        timer.play();
        clock.advance(50.0);
        timer.set_speed(-1);

        clock.advance(60.0);
        let position = timer.position().unwrap();
        assert_eq!(position.time, 0.0);
        assert_eq!(position.value, 0.0);
        assert!(!timer.is_playing().unwrap());
    }

    #[test]
    fn test_unconstrained_keeps_running() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 100,
            loops: Loops::Count(1),
            constrain: false,
            ..Default::default()
        });
        timer.play();
        clock.advance(150.0);
        assert!(close(timer.position().unwrap().time, 1.5));
        assert!(timer.is_playing().unwrap());
    }

    #[test]
    fn test_loops_advance_index() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 100,
            loops: Loops::Count(3),
            ..Default::default()
        });
        timer.play();
        clock.advance(250.0);
        let position = timer.position().unwrap();
        assert_eq!(position.loop_index, 3);
        assert!(close(position.time, 0.5));

        clock.advance(100.0);
        assert_eq!(timer.position().unwrap().loop_index, 3);
        assert!(!timer.is_playing().unwrap());
    }

    #[test]
    fn test_infinite_loops_never_stop() {
        let (mut timer, clock) = timer_with(TimerConfig::from(100));
        timer.play();
        clock.advance(1_050.0);
        let position = timer.position().unwrap();
        assert_eq!(position.loop_index, 11);
        assert!(close(position.time, 0.5));
        assert!(timer.is_playing().unwrap());
    }

    #[test]
    fn test_steps_quantize_position() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 1000,
            steps: 5.into(),
            ..Default::default()
        });
        timer.play();
        clock.advance(420.0);
        let position = timer.position().unwrap();
        assert!(close(position.time, 0.42));
        assert_eq!(position.value, 0.4);
    }

    #[test]
    fn test_steps_start_position() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.set_steps_count(4);
        timer.set_steps_position(StepPosition::Start);
        timer.play();
        clock.advance(100.0);
        assert_eq!(timer.position().unwrap().value, 0.25);
    }

    #[test]
    fn test_zero_duration_fails() {
        let (mut timer, clock) = timer_with(TimerConfig::default());
        timer.play();
        clock.advance(10.0);
        assert!(matches!(timer.position(), Err(Error::DegenerateInterval)));
        assert!(matches!(timer.freeze(None, None), Err(Error::DegenerateInterval)));
    }

    #[test]
    fn test_status_of_paused_zero_duration_timer() {
        let (mut timer, _clock) = timer_with(TimerConfig {
            duration: 0,
            speed: 0,
            ..Default::default()
        });
        timer.play();
        assert_eq!(
            timer.status().unwrap(),
            TimerStatus {
                playing: true,
                paused: true
            }
        );

        timer.play();
        assert!(matches!(timer.status(), Err(Error::DegenerateInterval)));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(100.0);
        timer.stop();
        timer.stop();
        assert_eq!(timer.start_time(), None);
        assert_eq!(timer.position().unwrap(), Position::ZERO);

        // a new run starts from scratch
        clock.advance(100.0);
        timer.play();
        assert_eq!(timer.start_time(), Some(START + 200.0));
        clock.advance(100.0);
        assert!(close(timer.position().unwrap().time, 0.1));
    }

    #[test]
    fn test_duration_change_does_not_compensate() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(500.0);
        timer.set_duration(2000);
        assert!(close(timer.position().unwrap().time, 0.25));
    }

    #[test]
    fn test_delay_change_while_running() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(500.0);
        timer.set_delay(100);
        assert!(close(timer.position().unwrap().time, 0.4));
    }

    #[test]
    fn test_freeze_requires_start() {
        let (timer, _clock) = timer_with(TimerConfig::from(1000));
        assert!(matches!(timer.freeze(None, None), Err(Error::NotStarted)));
        assert!(matches!(timer.freeze(None, Some(START)), Err(Error::NotStarted)));
        assert!(timer.freeze(Some(START), Some(START + 10.0)).is_ok());
    }

    #[test]
    fn test_freeze_with_begin_only_requires_start() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        assert!(matches!(timer.freeze(Some(START), None), Err(Error::NotStarted)));
        assert!(matches!(timer.freeze(Some(0.0), None), Err(Error::NotStarted)));

        timer.play();
        clock.advance(250.0);
        assert!(close(timer.freeze(Some(START), None).unwrap().time, 0.25));
    }

    #[test]
    fn test_freeze_explicit_instants() {
        let (timer, _clock) = timer_with(TimerConfig {
            duration: 1000,
            delay: 100,
            easing: "easeInQuad".into(),
            ..Default::default()
        });
        let frozen = timer.freeze(Some(0.0), Some(600.0)).unwrap();
        assert!(close(frozen.time, 0.5));
        assert!(close(frozen.value, 0.25));

        assert_eq!(
            timer.freeze(Some(0.0), Some(50.0)).unwrap(),
            Frozen { time: 0.0, value: 0.0 }
        );
        assert_eq!(
            timer.freeze(Some(0.0), Some(5_000.0)).unwrap(),
            Frozen { time: 1.0, value: 1.0 }
        );
    }

    #[test]
    fn test_freeze_uses_start_time_and_clock() {
        let (mut timer, clock) = timer_with(TimerConfig::from(1000));
        timer.play();
        clock.advance(300.0);
        assert!(close(timer.freeze(None, None).unwrap().time, 0.3));
        assert!(close(timer.freeze(None, Some(START + 700.0)).unwrap().time, 0.7));
    }

    #[test]
    fn test_freeze_is_stateless() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 100,
            loops: Loops::Count(1),
            ..Default::default()
        });
        timer.play();
        clock.advance(40.0);
        let live = timer.position().unwrap();

        let first = timer.freeze(Some(0.0), Some(1_000.0)).unwrap();
        let second = timer.freeze(Some(0.0), Some(1_000.0)).unwrap();
        assert_eq!(first, second);
        assert_eq!(timer.position().unwrap(), live);
        assert!(timer.is_playing().unwrap());
    }

    #[test]
    fn test_freeze_unconstrained_and_stepped() {
        let (mut timer, _clock) = timer_with(TimerConfig {
            duration: 1000,
            constrain: false,
            ..Default::default()
        });
        assert!(close(timer.freeze(Some(0.0), Some(1_500.0)).unwrap().time, 1.5));

        timer.set_steps(Steps::new(5, StepPosition::End));
        assert_eq!(timer.freeze(Some(0.0), Some(420.0)).unwrap().value, 0.4);
    }

    #[test]
    fn test_paused_at_construction() {
        let (mut timer, clock) = timer_with(TimerConfig {
            duration: 1000,
            speed: 0,
            ..Default::default()
        });
        timer.play();
        clock.advance(300.0);
        assert!(timer.is_paused().unwrap());
        assert_eq!(timer.position().unwrap().time, 0.0);

        timer.play();
        assert_eq!(timer.speed(), 1);
        clock.advance(300.0);
        assert!(close(timer.position().unwrap().time, 0.3));
    }

    proptest! {
        #[test]
        fn prop_pause_resume_is_continuous(
            ran in 1u32..999,
            paused_for in 0u32..100_000,
            speed in 1i32..4,
        ) {
            let (mut timer, clock) = timer_with(TimerConfig {
                duration: 1000,
                speed,
                ..Default::default()
            });
            timer.play();
            clock.advance(ran as f64 / speed as f64);
            let before = timer.position().unwrap().time;

            timer.pause();
            clock.advance(paused_for as f64);
            timer.play();
            let after = timer.position().unwrap().time;

            prop_assert!((before - after).abs() < 1e-6);
        }

        #[test]
        fn prop_reverse_symmetry(ran in 100u32..900, back in 0u32..100) {
            let (mut timer, clock) = timer_with(TimerConfig::from(1000));
            timer.play();
            clock.advance(ran as f64);
            let p = timer.position().unwrap().time;

            timer.set_speed(-1);
            clock.advance(back as f64);
            let time = timer.position().unwrap().time;

            prop_assert!((time - (p - back as f64 / 1000.0)).abs() < 1e-6);
        }

        #[test]
        fn prop_freeze_repeatable(begin in 0u32..10_000, offset in 0u32..2_000) {
            let (timer, _clock) = timer_with(TimerConfig::from(1000));
            let now = (begin + offset) as f64;
            let first = timer.freeze(Some(begin as f64), Some(now)).unwrap();
            let second = timer.freeze(Some(begin as f64), Some(now)).unwrap();
            prop_assert_eq!(first, second);
            prop_assert!((0.0..=1.0).contains(&first.time));
        }
    }
}
