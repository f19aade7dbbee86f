//! Simulation constants and tuning parameters.
//!
//! Velocities are pixels per tick, accelerations pixels per tick².

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 450.0;

/// Y coordinate of the ground line (fighters stand with their bottom edge here).
pub const GROUND_Y: f32 = 350.0;

// --- Physics ---

/// Gravity added to vy every tick, grounded or not.
pub const GRAVITY: f32 = 0.6;

/// Horizontal velocity decay per tick.
pub const FRICTION: f32 = 0.85;

/// Horizontal velocity decay per tick while dashing (shallower, so dashes carry).
pub const DASH_FRICTION: f32 = 0.92;

/// A dash ends once horizontal speed decays below this.
pub const DASH_END_SPEED: f32 = 5.0;

/// Upward velocity applied on jump (negative = up).
pub const JUMP_FORCE: f32 = -13.0;

// --- Fighters ---

/// Fighter bounding box width.
pub const FIGHTER_WIDTH: f32 = 40.0;

/// Fighter bounding box height.
pub const FIGHTER_HEIGHT: f32 = 60.0;

/// Player starting/maximum health.
pub const PLAYER_MAX_HP: f32 = 150.0;

/// Training drone health (low, the player is expected to win).
pub const DRONE_MAX_HP: f32 = 60.0;

/// Boss health (fixed; profile stats do not scale it).
pub const BOSS_MAX_HP: f32 = 200.0;

/// Player spawn x.
pub const PLAYER_SPAWN_X: f32 = 100.0;

/// Enemy spawn x.
pub const ENEMY_SPAWN_X: f32 = 600.0;

/// Default drone body color.
pub const DRONE_COLOR: &str = "#4b5563";

/// Default player body color.
pub const PLAYER_COLOR: &str = "#fbbf24";

// --- Player controller ---

/// Horizontal input acceleration per tick while a direction is held.
pub const PLAYER_ACCEL: f32 = 1.0;

/// Maximum ground speed from input.
pub const PLAYER_MAX_SPEED: f32 = 5.0;

/// Melee attack cooldown (ticks). Shared with the ranged attack.
pub const PLAYER_MELEE_COOLDOWN: u32 = 20;

/// Ranged attack cooldown (ticks). Shared with the melee attack.
pub const PLAYER_RANGED_COOLDOWN: u32 = 35;

/// Cooldown threshold below which a swing is no longer active.
pub const PLAYER_ATTACK_CLEAR: u32 = 10;

// --- Melee combat ---

/// Player melee reach buffer beyond the leading edge.
pub const PLAYER_MELEE_RANGE: f32 = 70.0;

/// Enemy melee reach buffer beyond the leading edge.
pub const ENEMY_MELEE_RANGE: f32 = 45.0;

/// Player melee damage.
pub const PLAYER_MELEE_DAMAGE: f32 = 12.0;

/// Base enemy melee damage, scaled by the boss damage multiplier.
pub const BOSS_MELEE_DAMAGE: f32 = 6.0;

/// Drone melee damage (no profile scaling).
pub const DRONE_MELEE_DAMAGE: f32 = 4.0;

/// Horizontal knockback applied to the enemy by a player melee hit.
pub const PLAYER_MELEE_KNOCKBACK: f32 = 12.0;

/// Vertical pop applied to the enemy by a player melee hit.
pub const PLAYER_MELEE_POP: f32 = -4.0;

/// Horizontal knockback applied to the player by an enemy melee hit.
pub const ENEMY_MELEE_KNOCKBACK: f32 = 15.0;

/// Vertical pop applied to the player by an enemy melee hit.
pub const ENEMY_MELEE_POP: f32 = -5.0;

/// An active enemy shot within this range of the enemy suppresses its melee hit.
pub const PHANTOM_MELEE_GUARD_RANGE: f32 = 50.0;

// --- Projectiles ---

/// Projectile bounding box (square).
pub const PROJECTILE_SIZE: f32 = 15.0;

/// Player projectile speed.
pub const PLAYER_PROJECTILE_SPEED: f32 = 12.0;

/// Drone projectile speed.
pub const DRONE_PROJECTILE_SPEED: f32 = 7.0;

/// Boss projectile speed.
pub const BOSS_PROJECTILE_SPEED: f32 = 14.0;

/// Player projectile damage.
pub const PLAYER_PROJECTILE_DAMAGE: f32 = 8.0;

/// Base boss projectile damage, scaled by the boss damage multiplier.
pub const BOSS_PROJECTILE_DAMAGE: f32 = 4.0;

/// Drone projectile damage.
pub const DRONE_PROJECTILE_DAMAGE: f32 = 3.0;

/// Horizontal knockback applied by a player projectile hit.
pub const PROJECTILE_KNOCKBACK: f32 = 2.0;

// --- Drone policy ---

/// Drone retreats inside this distance.
pub const DRONE_NEAR_DISTANCE: f32 = 150.0;

/// Drone advances outside this distance.
pub const DRONE_FAR_DISTANCE: f32 = 250.0;

/// Drone horizontal nudge per tick when outside its band.
pub const DRONE_ACCEL: f32 = 0.4;

/// Per-tick probability of a drone shot when off cooldown.
pub const DRONE_FIRE_CHANCE: f64 = 0.02;

/// Drone attack cooldown after a shot (ticks).
pub const DRONE_FIRE_COOLDOWN: u32 = 70;

// --- Tactical (boss) policy ---

/// Enemy swing cooldown threshold below which the swing is no longer active.
pub const ENEMY_ATTACK_CLEAR: u32 = 15;

/// Consecutive low-motion ticks before an action is forced.
pub const STALEMATE_THRESHOLD: u32 = 60;

/// |vx| below this counts as stationary for stalemate detection.
pub const STALEMATE_SPEED: f32 = 1.0;

/// Dash impulse for defensive and stalemate dashes.
pub const DASH_SPEED: f32 = 15.0;

/// Dash impulse for the long-range closing dash.
pub const CLOSING_DASH_SPEED: f32 = 18.0;

/// Ticks between dashes.
pub const DASH_COOLDOWN: u32 = 60;

/// Player melee pressure is reacted to inside this distance.
pub const PRESSURE_RANGE: f32 = 100.0;

/// Incoming projectiles are noticed inside this distance.
pub const PROJECTILE_AWARENESS_RANGE: f32 = 180.0;

/// Random jitter added to the reaction interval (ticks, exclusive upper bound).
pub const REACTION_JITTER: f64 = 5.0;

/// Boss melee range.
pub const BOSS_MELEE_REACH: f32 = 90.0;

/// Boss melee cooldown for rush-down aggression (ticks).
pub const BOSS_MELEE_COOLDOWN_RUSH: u32 = 25;

/// Boss melee cooldown otherwise (ticks).
pub const BOSS_MELEE_COOLDOWN: u32 = 45;

/// Boss ranged cooldown for rush-down aggression (ticks).
pub const BOSS_RANGED_COOLDOWN_RUSH: u32 = 40;

/// Boss ranged cooldown otherwise (ticks).
pub const BOSS_RANGED_COOLDOWN: u32 = 70;

/// Minimum projectile rate below which the boss never shoots.
pub const PROJECTILE_RATE_FLOOR: f32 = 0.1;

/// Shot probability per eligible tick = projectile_rate * this factor.
pub const PROJECTILE_RATE_SCALE: f64 = 0.15;

/// Target-distance bands by preferred distance.
pub const TARGET_DISTANCE_CLOSE: f32 = 60.0;
pub const TARGET_DISTANCE_MID: f32 = 200.0;
pub const TARGET_DISTANCE_FAR: f32 = 450.0;

/// Amplitude of the sinusoidal target-distance oscillation.
pub const OSCILLATION_AMPLITUDE: f32 = 50.0;

/// Period divisor of the oscillation (ticks / this).
pub const OSCILLATION_PERIOD: f32 = 20.0;

/// Target-band bias for rush-down (inward) / defensive (outward) aggression.
pub const CHASE_BIAS: f32 = 80.0;

/// Inner-band hysteresis: retreat only below target - this - bias.
pub const BAND_HYSTERESIS: f32 = 50.0;

/// Boss horizontal drive per tick, scaled by the speed multiplier.
pub const BOSS_DRIVE_ACCEL: f32 = 0.9;

/// Drive multiplier while dashing.
pub const DASH_DRIVE_FACTOR: f32 = 3.0;

/// Distance beyond which a dash-heavy boss may open with a closing dash.
pub const CLOSING_DASH_RANGE: f32 = 300.0;

/// Half-width of the "in position" window for ranged attacks.
pub const IN_POSITION_WINDOW: f32 = 100.0;

/// Per-eligible-tick hop probability for aerial movement style.
pub const AERIAL_HOP_CHANCE: f64 = 0.08;

/// The player is "significantly above" when this far above the enemy.
pub const PUNISH_HEIGHT: f32 = 80.0;

/// Anti-air punish triggers inside this horizontal distance.
pub const PUNISH_RANGE: f32 = 150.0;

/// Jump force multiplier for the defensive hop.
pub const DEFENSIVE_HOP_FACTOR: f32 = 1.2;

/// Jump force multiplier for the anti-air punish hop.
pub const PUNISH_HOP_FACTOR: f32 = 1.3;

// --- Telemetry / phases ---

/// Minimum recorded frames before training can complete.
pub const TRAINING_MIN_FRAMES: u32 = 600;

// --- Particles ---

/// Base particle lifetime (ticks); spawn adds up to PARTICLE_LIFE_JITTER more.
pub const PARTICLE_LIFE_BASE: f32 = 20.0;

/// Random extra lifetime on spawn.
pub const PARTICLE_LIFE_JITTER: f32 = 15.0;

/// Dash trail particle lifetime.
pub const DASH_PARTICLE_LIFE: f32 = 15.0;

/// Dash trail particle size.
pub const DASH_PARTICLE_SIZE: f32 = 3.0;

/// Dash trail particle count.
pub const DASH_PARTICLE_COUNT: usize = 8;
