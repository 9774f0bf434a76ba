//! Fixed timestep simulation tick
//!
//! Advances the breakout simulation deterministically. The host calls this
//! once per animation frame while the game is in `Playing`; calling it from
//! a timer or a test harness produces the same results.

use glam::Vec2;

use super::collision::reflect_velocity;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Target paddle center (from pointer/touch position)
    pub target_x: Option<f32>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Only `Playing` simulates; menu and terminal phases are inert
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if let Some(x) = input.target_x {
        state.paddle.set_center(x);
    }

    // Integrate
    state.ball.pos += state.ball.vel * dt;

    // Wall reflections: sign flips at the left/right/top bounds
    let radius = state.ball.radius;
    if state.ball.pos.x - radius <= 0.0 {
        state.ball.pos.x = radius;
        state.ball.vel.x = state.ball.vel.x.abs();
    } else if state.ball.pos.x + radius >= FIELD_WIDTH {
        state.ball.pos.x = FIELD_WIDTH - radius;
        state.ball.vel.x = -state.ball.vel.x.abs();
    }
    if state.ball.pos.y - radius <= 0.0 {
        state.ball.pos.y = radius;
        state.ball.vel.y = state.ball.vel.y.abs();
    }

    // Brick collision: at most one brick is consumed per tick (first alive
    // cell in row-major order whose box contains the ball center), so a
    // border-straddling ball can't double-reflect
    let mut hit: Option<(usize, usize)> = None;
    'grid: for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            if state.brick(row, col).alive
                && GameState::brick_rect(row, col).contains(state.ball.pos)
            {
                hit = Some((row, col));
                break 'grid;
            }
        }
    }
    if let Some((row, col)) = hit {
        state.brick_mut(row, col).alive = false;
        state.ball.vel = reflect_velocity(state.ball.vel, Vec2::Y);
        state.score += SCORE_PER_BRICK;
        state.push_event(GameEvent::BrickDestroyed { row, col });

        if state.bricks_remaining() == 0 {
            state.phase = GamePhase::Won;
            log::info!("board cleared at score {}", state.score);
            state.push_event(GameEvent::Won { score: state.score });
            state.push_event(GameEvent::CouponEarned {
                code: ARCADE_REWARD_CODE,
            });
            return;
        }
    }

    // Paddle collision, otherwise miss once the ball leaves the field
    let paddle_rect = state.paddle.rect();
    let paddle_top = paddle_rect.min.y;
    let descending = state.ball.vel.y > 0.0;
    let in_band = state.ball.pos.y + radius >= paddle_top;
    let over_paddle =
        state.ball.pos.x >= paddle_rect.min.x && state.ball.pos.x <= paddle_rect.max.x;

    if descending && in_band && over_paddle {
        // Deflection is linear in the impact offset from the paddle center
        let offset = ((state.ball.pos.x - state.paddle.x) / (PADDLE_WIDTH / 2.0)).clamp(-1.0, 1.0);
        state.ball.vel.x = offset * PADDLE_DEFLECT_SPEED;
        state.ball.vel.y = -state.ball.vel.y.abs();

        // Each bounce speeds the ball up - escalating difficulty, capped
        let speed = (state.ball.vel.length() * PADDLE_BOOST).min(BALL_MAX_SPEED);
        state.ball.vel = state.ball.vel.normalize() * speed;

        // Park the ball on top of the paddle so the band test can't retrigger
        state.ball.pos.y = paddle_top - radius;
        state.push_event(GameEvent::PaddleBounce);
    } else if state.ball.pos.y - radius > FIELD_HEIGHT {
        state.lives -= 1;
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("game over at score {}", state.score);
            state.push_event(GameEvent::GameOver { score: state.score });
        } else {
            state.push_event(GameEvent::LifeLost {
                remaining: state.lives,
            });
            state.serve_reset();
        }
    }
}
