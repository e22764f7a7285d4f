//! Game state and core simulation types
//!
//! Everything one Plinko session owns lives in [`GameState`]; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::bucket::BucketStrip;
use super::random::RandomSource;
use super::score::Scoreboard;
use crate::config::PlinkoConfig;
use crate::error::ConfigError;

/// Lifecycle phase of a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// Under gravity, colliding with pins and walls
    Falling,
    /// Resting in a bucket; `age` counts ticks since settling
    Settled { age: u32 },
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Display color (0xRRGGBB)
    pub color: u32,
    pub phase: BallPhase,
}

impl Ball {
    /// A falling ball at rest at `pos`
    pub fn new(id: u32, pos: Vec2, color: u32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            color,
            phase: BallPhase::Falling,
        }
    }

    /// Spawn a ball at the top of the board with random offset, drift and color
    pub fn spawn(id: u32, config: &PlinkoConfig, rng: &mut impl RandomSource) -> Self {
        let x = config.canvas_width / 2.0 + rng.uniform(-config.spawn_x_jitter, config.spawn_x_jitter);
        let vx = rng.uniform(-config.spawn_vx_jitter, config.spawn_vx_jitter);
        let color = config.palette[rng.index(config.palette.len())];

        Self {
            id,
            pos: Vec2::new(x, config.spawn_y),
            vel: Vec2::new(vx, 0.0),
            color,
            phase: BallPhase::Falling,
        }
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.phase == BallPhase::Falling
    }

    /// Ticks since settling, if settled
    pub fn settled_age(&self) -> Option<u32> {
        match self.phase {
            BallPhase::Settled { age } => Some(age),
            BallPhase::Falling => None,
        }
    }

    /// Stop the ball where it is
    pub fn settle(&mut self) {
        self.vel = Vec2::ZERO;
        self.phase = BallPhase::Settled { age: 0 };
    }
}

/// A ball landing in a bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettleEvent {
    pub ball_id: u32,
    pub bucket: usize,
    pub multiplier: f32,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: PlinkoConfig,
    pub board: Board,
    pub buckets: BucketStrip,
    /// Active balls (sorted by id)
    pub balls: Vec<Ball>,
    /// Dropped since the last tick; joins `balls` at the start of the next tick
    pub pending: Vec<Ball>,
    pub score: Scoreboard,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next ball ID (never reused)
    next_id: u32,
}

impl GameState {
    /// Validate the config and lay out the board
    pub fn new(config: PlinkoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::from_config(&config);
        Ok(Self::with_board(config, board))
    }

    /// State over a custom board (config is assumed valid)
    pub fn with_board(config: PlinkoConfig, board: Board) -> Self {
        let buckets = BucketStrip::new(config.multipliers.clone(), config.canvas_width);
        Self {
            config,
            board,
            buckets,
            balls: Vec::new(),
            pending: Vec::new(),
            score: Scoreboard::new(),
            time_ticks: 0,
            next_id: 0,
        }
    }

    /// Allocate a new ball ID
    pub fn next_ball_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue a new ball at the top of the board, returning its id
    pub fn request_drop(&mut self, rng: &mut impl RandomSource) -> u32 {
        let id = self.next_ball_id();
        let ball = Ball::spawn(id, &self.config, rng);
        log::debug!("Ball {} dropped at x={:.1}", id, ball.pos.x);
        self.pending.push(ball);
        id
    }

    /// Move queued drops into the active set
    pub fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            self.balls.append(&mut self.pending);
            self.normalize_order();
        }
    }

    pub fn falling_count(&self) -> usize {
        self.balls.iter().filter(|b| b.is_falling()).count()
    }

    pub fn settled_count(&self) -> usize {
        self.balls.len() - self.falling_count()
    }

    /// No active or queued balls
    pub fn is_idle(&self) -> bool {
        self.balls.is_empty() && self.pending.is_empty()
    }

    /// Ensure balls are sorted by ID for stable iteration
    pub fn normalize_order(&mut self) {
        self.balls.sort_by_key(|b| b.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{ScriptedSource, SimRng};

    #[test]
    fn test_spawn_centered_with_midpoint_source() {
        let config = PlinkoConfig::default();
        let mut rng = ScriptedSource::constant(0.5);
        let ball = Ball::spawn(0, &config, &mut rng);
        assert_eq!(ball.pos, Vec2::new(300.0, 20.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(ball.is_falling());
        assert!(config.palette.contains(&ball.color));
    }

    #[test]
    fn test_spawn_ranges() {
        let config = PlinkoConfig::default();
        let mut rng = SimRng::from_seed(5);
        for id in 0..200 {
            let ball = Ball::spawn(id, &config, &mut rng);
            assert!(ball.pos.x >= 290.0 && ball.pos.x <= 310.0);
            assert_eq!(ball.pos.y, 20.0);
            assert!(ball.vel.x >= -1.0 && ball.vel.x <= 1.0);
            assert_eq!(ball.vel.y, 0.0);
            assert!(config.palette.contains(&ball.color));
        }
    }

    #[test]
    fn test_ids_monotonic_and_pending_until_flush() {
        let mut state = GameState::new(PlinkoConfig::default()).unwrap();
        let mut rng = SimRng::from_seed(9);
        let a = state.request_drop(&mut rng);
        let b = state.request_drop(&mut rng);
        assert_eq!((a, b), (0, 1));
        assert!(state.balls.is_empty());
        assert_eq!(state.pending.len(), 2);
        assert!(!state.is_idle());

        state.flush_pending();
        assert_eq!(state.balls.len(), 2);
        assert!(state.pending.is_empty());

        // IDs keep counting after balls go away
        state.balls.clear();
        assert_eq!(state.request_drop(&mut rng), 2);
    }

    #[test]
    fn test_settle_freezes_velocity() {
        let mut ball = Ball::new(1, Vec2::new(10.0, 10.0), 0xFFFFFF);
        ball.vel = Vec2::new(3.0, 4.0);
        ball.settle();
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.settled_age(), Some(0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlinkoConfig {
            canvas_width: -1.0,
            ..Default::default()
        };
        assert!(GameState::new(config).is_err());
    }
}
