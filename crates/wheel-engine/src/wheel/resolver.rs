//! Spin resolver: owns the candidates and the cumulative rotation, and turns
//! a spin request into a rotation target and, once the animation settles,
//! a winner.
//!
//! ```text
//! Idle ──begin_spin──▶ Spinning ──settle──▶ Resolved
//!                         ▲                     │
//!                         └─────begin_spin──────┘
//! ```
//!
//! The resolver never animates anything itself. `begin_spin` hands back a
//! [`SpinStart`] the caller turns into a tween; the caller invokes `settle`
//! when that tween's completion event arrives. A tween that never completes
//! leaves the resolver Spinning.

use crate::error::SpinError;
use crate::extensions::{Easing, Tween};
use crate::systems::rng::Rng;
use super::candidate::{CandidateItem, CandidateSet};
use super::geometry::{wheel_sectors, ArcHitTest, HitTest, Pointer, SectorArc, POINTER_ANGLE_DEG};
use super::sizing::Layout;

/// Tunables for a spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    /// Smallest rotation added per spin, in whole degrees (3 turns).
    pub min_delta_deg: u32,
    /// Largest rotation added per spin, in whole degrees (5 turns).
    pub max_delta_deg: u32,
    /// Animation length in seconds.
    pub duration_secs: f32,
    pub easing: Easing,
    pub pointer_angle_deg: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_delta_deg: 1080,
            max_delta_deg: 1800,
            duration_secs: 1.0,
            easing: Easing::CubicInOut,
            pointer_angle_deg: POINTER_ANGLE_DEG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// Nothing spun yet.
    Idle,
    /// Rotation animation in flight.
    Spinning,
    /// Winner computed, wheel at rest.
    Resolved,
}

/// A started spin: rotate from `from` to `target` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinStart {
    pub from: u64,
    pub delta: u32,
    pub target: u64,
}

impl SpinStart {
    /// The rotation tween for this spin. Starts from the resting angle so the
    /// animated value stays small however many turns have accumulated.
    pub fn tween(&self, config: &SpinConfig) -> Tween {
        let base = (self.from % 360) as f32;
        Tween::rotation(base, base + self.delta as f32, config.duration_secs, config.easing)
    }
}

pub struct SpinResolver<H: HitTest = ArcHitTest> {
    config: SpinConfig,
    hit_test: H,
    candidates: Option<CandidateSet>,
    /// Cumulative rotation in degrees; only ever grows.
    rotation: u64,
    phase: SpinPhase,
    winner: Option<usize>,
    spins: u32,
}

impl SpinResolver {
    pub fn new(config: SpinConfig) -> Self {
        Self::with_hit_test(config, ArcHitTest)
    }
}

impl Default for SpinResolver {
    fn default() -> Self {
        Self::new(SpinConfig::default())
    }
}

impl<H: HitTest> SpinResolver<H> {
    pub fn with_hit_test(config: SpinConfig, hit_test: H) -> Self {
        Self {
            config,
            hit_test,
            candidates: None,
            rotation: 0,
            phase: SpinPhase::Idle,
            winner: None,
            spins: 0,
        }
    }

    /// Install the acquired candidates. The set is fixed for the session;
    /// a second set is ignored.
    pub fn load(&mut self, candidates: CandidateSet) {
        if self.candidates.is_some() {
            log::warn!("resolver: candidates already loaded, ignoring new set");
            return;
        }
        log::info!("resolver: {} candidates loaded", candidates.len());
        self.candidates = Some(candidates);
    }

    pub fn is_ready(&self) -> bool {
        self.candidates.is_some()
    }

    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.candidates.as_ref()
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Cumulative rotation in degrees.
    pub fn rotation(&self) -> u64 {
        self.rotation
    }

    /// Where the wheel comes to rest, in [0, 360).
    pub fn rest_angle_deg(&self) -> f32 {
        (self.rotation % 360) as f32
    }

    /// Completed spins.
    pub fn spins(&self) -> u32 {
        self.spins
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    pub fn winner(&self) -> Option<&CandidateItem> {
        let index = self.winner?;
        self.candidates.as_ref()?.get(index)
    }

    /// Start a spin with a random delta from the configured range.
    pub fn begin_spin(&mut self, rng: &mut Rng) -> Result<SpinStart, SpinError> {
        self.check_can_spin()?;
        let delta = rng.range_inclusive(self.config.min_delta_deg, self.config.max_delta_deg);
        self.begin_spin_with(delta)
    }

    /// Start a spin with a chosen delta. The delta must lie in the configured range.
    pub fn begin_spin_with(&mut self, delta: u32) -> Result<SpinStart, SpinError> {
        self.check_can_spin()?;
        let (min, max) = (self.config.min_delta_deg, self.config.max_delta_deg);
        if delta < min || delta > max {
            return Err(SpinError::DeltaOutOfRange { delta, min, max });
        }

        let from = self.rotation;
        self.rotation += delta as u64;
        self.phase = SpinPhase::Spinning;

        let start = SpinStart { from, delta, target: self.rotation };
        log::info!("resolver: spin {} by {}° to {}°", self.spins + 1, delta, start.target);
        Ok(start)
    }

    fn check_can_spin(&self) -> Result<(), SpinError> {
        if self.candidates.is_none() {
            return Err(SpinError::NotReady);
        }
        if self.phase == SpinPhase::Spinning {
            return Err(SpinError::InFlight);
        }
        Ok(())
    }

    /// Sector shapes as rendered at `rotation_deg` on a wheel of `wheel_px`.
    pub fn sectors(&self, wheel_px: u32, rotation_deg: f32) -> Vec<SectorArc> {
        match &self.candidates {
            Some(set) => wheel_sectors(&set.weights(), wheel_px, rotation_deg),
            None => Vec::new(),
        }
    }

    /// Finish the in-flight spin: hit-test the resting wheel against the
    /// pointer using `layout`'s size and tolerance. If nothing is hit the
    /// previous winner stays.
    pub fn settle(&mut self, layout: &Layout) -> Result<Option<&CandidateItem>, SpinError> {
        if self.phase != SpinPhase::Spinning {
            return Err(SpinError::NotSpinning);
        }

        let sectors = self.sectors(layout.wheel_px, self.rest_angle_deg());
        let pointer = Pointer::for_wheel(layout.wheel_px, self.config.pointer_angle_deg);
        match self.hit_test.hit_test(&sectors, &pointer, layout.threshold_px as f32) {
            Some(index) => self.winner = Some(index),
            None => log::warn!("resolver: no sector under the pointer at {}°", self.rest_angle_deg()),
        }

        self.phase = SpinPhase::Resolved;
        self.spins += 1;
        if let Some(item) = self.winner() {
            log::info!("resolver: winner {:?}", item.name);
        }
        Ok(self.winner())
    }
}
