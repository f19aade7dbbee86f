//! Fighter physics integration.
//!
//! Gravity, friction, arena clamping, ground resolution, and the per-tick
//! decay of action windows and cooldowns. Runs once per fighter per tick,
//! after that fighter's controller.

use soulbound_core::constants::*;
use soulbound_core::entities::Fighter;
use soulbound_core::enums::ActionState;

pub fn run(fighter: &mut Fighter) {
    fighter.vel.y += GRAVITY;

    // Dashes decay shallower so the impulse carries.
    let friction = if fighter.action.is_dashing() {
        DASH_FRICTION
    } else {
        FRICTION
    };
    fighter.vel.x *= friction;

    fighter.pos.x += fighter.vel.x;
    fighter.pos.y += fighter.vel.y;

    fighter.pos.x = fighter.pos.x.clamp(0.0, ARENA_WIDTH - fighter.size.w);

    if fighter.pos.y + fighter.size.h >= GROUND_Y {
        fighter.pos.y = GROUND_Y - fighter.size.h;
        fighter.vel.y = 0.0;
        fighter.grounded = true;
    } else {
        fighter.grounded = false;
    }

    match fighter.action {
        ActionState::Dashing => {
            if fighter.vel.x.abs() < DASH_END_SPEED {
                fighter.action = ActionState::Idle;
            }
        }
        ActionState::Attacking { window } => {
            fighter.action = if window <= 1 {
                ActionState::Idle
            } else {
                ActionState::Attacking { window: window - 1 }
            };
        }
        ActionState::Idle => {}
    }

    fighter.attack_cooldown = fighter.attack_cooldown.saturating_sub(1);
    fighter.dash_cooldown = fighter.dash_cooldown.saturating_sub(1);
}
