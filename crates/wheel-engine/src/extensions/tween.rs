// extensions/tween.rs
//
// Tween system: animated scalar transitions with completion events.
// The owner decides what each tween drives by matching on the TweenId
// passed to the apply callback.
//
// Usage:
//   let mut tweens = TweenState::new();
//   let id = tweens.add(Tween::rotation(0.0, 1500.0, 1.0, Easing::CubicInOut).with_on_complete(SETTLED));
//   tweens.tick(dt, |tid, value| if tid == id { wheel_rotation = value });
//   for event in tweens.drain_completed() { ... }

use std::collections::HashMap;
use super::easing::{Easing, ease};

/// A single tween animation.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Start value.
    pub from: f32,
    /// End value.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time.
    pub elapsed: f32,
    /// Easing function.
    pub easing: Easing,
    /// Whether currently playing (can be paused).
    pub playing: bool,
    /// Optional event ID queued when the tween completes.
    pub on_complete: Option<u32>,
}

impl Tween {
    /// Create a rotation tween (degrees).
    pub fn rotation(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
            playing: true,
            on_complete: None,
        }
    }

    // -- Builder methods --

    pub fn with_on_complete(mut self, event_id: u32) -> Self {
        self.on_complete = Some(event_id);
        self
    }

    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        ease(self.from, self.to, self.progress(), self.easing)
    }

    /// Whether the tween has reached its target.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, Tween>,
    next_id: u32,
    /// Completed tween events to be polled.
    completed_events: Vec<u32>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween. Returns a handle for later control.
    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, tween);
        id
    }

    /// Remove a tween by handle. Its completion event is never queued.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Pause a tween.
    pub fn pause(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(&id) {
            tween.playing = false;
        }
    }

    /// Resume a paused tween.
    pub fn resume(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(&id) {
            tween.playing = true;
        }
    }

    /// Get a tween by handle.
    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id)
    }

    /// Advance all playing tweens and hand each new value to `apply`.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, mut apply: impl FnMut(TweenId, f32)) -> usize {
        let mut completed = Vec::new();

        for (&id, tween) in self.tweens.iter_mut() {
            if !tween.playing {
                continue;
            }

            tween.elapsed += dt;
            apply(id, tween.value());

            if tween.is_complete() {
                if let Some(event_id) = tween.on_complete {
                    self.completed_events.push(event_id);
                }
                completed.push(id);
            }
        }

        let count = completed.len();
        for id in completed {
            self.tweens.remove(&id);
        }

        count
    }

    /// Drain completed tween events.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed_events.drain(..)
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Clear all tweens.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.completed_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLED: u32 = 7;

    #[test]
    fn tween_rotation_reaches_target() {
        let mut tweens = TweenState::new();
        let id = tweens.add(Tween::rotation(0.0, 1500.0, 1.0, Easing::Linear));
        let mut rotation = 0.0;

        tweens.tick(0.5, |tid, v| if tid == id { rotation = v });
        assert!((rotation - 750.0).abs() < 0.01);

        tweens.tick(0.5, |tid, v| if tid == id { rotation = v });
        assert!((rotation - 1500.0).abs() < 0.01);

        assert!(tweens.is_empty());
    }

    #[test]
    fn completion_event_fires_once_at_settle() {
        let mut tweens = TweenState::new();
        tweens.add(Tween::rotation(0.0, 360.0, 1.0, Easing::CubicInOut).with_on_complete(SETTLED));

        for _ in 0..59 {
            tweens.tick(1.0 / 60.0, |_, _| {});
        }
        assert_eq!(tweens.drain_completed().count(), 0);

        // Overshooting the duration still lands exactly on the target
        let mut last = 0.0;
        let done = tweens.tick(0.1, |_, v| last = v);
        assert_eq!(done, 1);
        assert_eq!(last, 360.0);
        assert_eq!(tweens.drain_completed().collect::<Vec<_>>(), vec![SETTLED]);
        assert_eq!(tweens.drain_completed().count(), 0);
    }

    #[test]
    fn paused_tween_does_not_advance() {
        let mut tweens = TweenState::new();
        let id = tweens.add(Tween::rotation(0.0, 10.0, 1.0, Easing::Linear).paused());

        tweens.tick(2.0, |_, _| panic!("paused tween applied"));
        assert_eq!(tweens.get(id).unwrap().elapsed, 0.0);

        tweens.resume(id);
        tweens.tick(2.0, |_, _| {});
        assert!(tweens.is_empty());
    }

    #[test]
    fn removed_tween_never_completes() {
        let mut tweens = TweenState::new();
        let id = tweens.add(Tween::rotation(0.0, 10.0, 1.0, Easing::Linear).with_on_complete(SETTLED));
        assert!(tweens.remove(id));
        tweens.tick(2.0, |_, _| {});
        assert_eq!(tweens.drain_completed().count(), 0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::rotation(5.0, 10.0, 0.0, Easing::Linear);
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_complete());
    }
}
