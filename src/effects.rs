//! Transient visual effects keyed by what they animate
//!
//! Effects never touch task data. The table lives beside the store and is
//! owned by the application layer; entries are removed when the effect
//! finishes or when the animated task goes away.

use crate::config::UiConfig;
use crate::todo::TaskId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// One step of an effect: animate a property to `value` over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub value: f32,
    pub duration: Duration,
}

/// A cosmetic animation
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Brief scale-down/scale-up of the input form when an edit starts
    Emphasis { from_scale: f32, keyframes: Vec<Keyframe> },
    /// Horizontal shake acknowledging a delete request
    Shake { keyframes: Vec<Keyframe> },
}

impl Effect {
    pub fn emphasis(ui: &UiConfig) -> Self {
        Effect::Emphasis {
            from_scale: ui.emphasis_scale,
            keyframes: vec![Keyframe {
                value: 1.0,
                duration: Duration::from_millis(ui.emphasis_ms),
            }],
        }
    }

    pub fn shake(ui: &UiConfig) -> Self {
        let step = Duration::from_millis(ui.shake_step_ms);
        let offset = ui.shake_offset;
        Effect::Shake {
            keyframes: [offset, -offset, 0.0]
                .into_iter()
                .map(|value| Keyframe {
                    value,
                    duration: step,
                })
                .collect(),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        match self {
            Effect::Emphasis { keyframes, .. } | Effect::Shake { keyframes } => keyframes,
        }
    }

    /// Time until the effect has played out
    pub fn total_duration(&self) -> Duration {
        self.keyframes().iter().map(|k| k.duration).sum()
    }
}

/// What an effect is attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EffectTarget {
    /// The input form
    Form,
    /// A row in the list
    Task(TaskId),
}

#[derive(Debug)]
struct Running {
    effect: Effect,
    ends_at: Instant,
}

/// Running effects, at most one per target
#[derive(Debug, Default)]
pub struct EffectTable {
    running: HashMap<EffectTarget, Running>,
}

impl EffectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `effect` on `target`, restarting any effect already there
    pub fn start(&mut self, target: EffectTarget, effect: Effect) -> Duration {
        let duration = effect.total_duration();
        let ends_at = Instant::now() + duration;
        self.running.insert(target, Running { effect, ends_at });
        duration
    }

    pub fn get(&self, target: &EffectTarget) -> Option<&Effect> {
        self.running.get(target).map(|r| &r.effect)
    }

    pub fn finish(&mut self, target: &EffectTarget) -> Option<Effect> {
        self.running.remove(target).map(|r| r.effect)
    }

    /// Drop every effect that has played out by `now`
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.running.len();
        self.running.retain(|_, r| r.ends_at > now);
        before - self.running.len()
    }

    pub fn is_running(&self, target: &EffectTarget) -> bool {
        self.running.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}
