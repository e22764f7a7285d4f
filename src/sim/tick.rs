//! Fixed tick simulation step
//!
//! Core loop that advances every ball by one tick.

use super::board::Board;
use super::bucket::BucketStrip;
use super::collision::{Rebound, ball_pin_collision, clamp_to_walls, resolve_pin_hit};
use super::random::RandomSource;
use super::state::{Ball, BallPhase, GameState, SettleEvent};
use crate::config::PlinkoConfig;

/// Advance the session by one tick
///
/// Queued drops join first, then every ball steps and each settle event is
/// paid into the scoreboard. Returns the settle events of this tick.
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource) -> Vec<SettleEvent> {
    state.flush_pending();
    state.time_ticks += 1;

    let events = step(&mut state.balls, &state.board, &state.config, &state.buckets, rng);

    for event in &events {
        let total = state.score.apply(event.multiplier);
        log::debug!(
            "Ball {} settled in bucket {} ({}x), score {:.1}",
            event.ball_id,
            event.bucket,
            event.multiplier,
            total
        );
    }

    events
}

/// Advance all balls by one tick against a fixed board
///
/// Balls never interact with each other. A ball touching several pins in one
/// tick resolves them in pin order, so the last pin hit sets its velocity.
pub fn step(
    balls: &mut Vec<Ball>,
    board: &Board,
    config: &PlinkoConfig,
    buckets: &BucketStrip,
    rng: &mut impl RandomSource,
) -> Vec<SettleEvent> {
    let rebound = Rebound {
        contact_distance: config.ball_radius + board.pin_radius(),
        speed: config.rebound_speed,
        bounce: config.bounce,
        jitter: config.rebound_jitter,
    };
    let settle_y = config.bucket_strip_top() - config.ball_radius;

    let mut events = Vec::new();

    for ball in balls.iter_mut() {
        if let BallPhase::Settled { age } = &mut ball.phase {
            *age += 1;
            continue;
        }

        // Integrate
        ball.vel.y += config.gravity;
        ball.pos += ball.vel;

        // Pins
        for pin in board.pins() {
            let hit = ball_pin_collision(ball.pos, pin.pos, rebound.contact_distance);
            if hit.hit {
                let (pos, vel) = resolve_pin_hit(pin.pos, hit.angle, &rebound, rng);
                ball.pos = pos;
                ball.vel = vel;
            }
        }

        // Side walls
        clamp_to_walls(
            &mut ball.pos,
            &mut ball.vel,
            config.ball_radius,
            config.canvas_width,
            config.bounce,
        );

        // Bucket strip
        if ball.pos.y >= settle_y {
            ball.settle();
            let bucket = buckets.slot_index(ball.pos.x);
            events.push(SettleEvent {
                ball_id: ball.id,
                bucket,
                multiplier: buckets.multipliers()[bucket],
            });
        }
    }

    let dwell = config.dwell_ticks;
    balls.retain(|ball| {
        let expired = matches!(ball.phase, BallPhase::Settled { age } if age > dwell);
        if expired {
            log::debug!("Ball {} removed after dwell", ball.id);
        }
        !expired
    });

    events
}
