//! Animation session: owned entity state and the control surface
//!
//! One explicit context object instead of scattered globals: the session
//! owns the player, the enemies, and the playing flag; renderers only ever
//! see borrowed snapshots.

use crate::config::Config;
use crate::entity::{Entity, WorldBounds};
use crate::foundation::math::Vec2;
use crate::motion;
use crate::render::Frame;
use crate::spawn;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An inclusive-exclusive speed magnitude range in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    /// Minimum magnitude (inclusive)
    pub min: f32,

    /// Maximum magnitude (exclusive)
    pub max: f32,
}

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player width
    pub width: f32,

    /// Player height
    pub height: f32,

    /// Display color
    pub color: String,

    /// Half-extent of the safety zone kept clear of enemy spawns,
    /// measured from the world center per axis
    pub safety_zone: (f32, f32),

    /// Spawn speed range
    pub speed: SpeedRange,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 16.0,
            color: "#EFC9FF".to_string(),
            safety_zone: (32.0, 32.0),
            speed: SpeedRange {
                min: 50.0,
                max: 100.0,
            },
        }
    }
}

/// Enemy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    /// Display color
    pub color: String,

    /// Spawn speed range
    pub speed: SpeedRange,

    /// Minimum size roll (before scaling)
    pub size_min: f32,

    /// Maximum size roll (before scaling, exclusive)
    pub size_max: f32,

    /// Scale factor applied to each size roll
    pub size_factor: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            color: "#EFC9FF".to_string(),
            speed: SpeedRange {
                min: 25.0,
                max: 75.0,
            },
            size_min: 2.0,
            size_max: 8.0,
            size_factor: 4.0,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// World bounds
    pub world: WorldBounds,

    /// Number of enemies spawned per session
    pub enemy_count: usize,

    /// Player tuning
    pub player: PlayerConfig,

    /// Enemy tuning
    pub enemy: EnemyConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),
            enemy_count: 10,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
        }
    }
}

impl Config for SessionConfig {}

impl SessionConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Parse errors still surface.
    pub fn load_or_default(path: &str) -> Result<Self, crate::config::ConfigError> {
        if std::path::Path::new(path).exists() {
            log::info!("Loading session config from {path}");
            Self::load_from_file(path)
        } else {
            log::info!("No config at {path}, using defaults");
            Ok(Self::default())
        }
    }
}

/// A running animation session.
pub struct Session<R: Rng> {
    config: SessionConfig,
    player: Entity,
    enemies: Vec<Entity>,
    playing: bool,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Create a session with a freshly spawned player and enemy set.
    ///
    /// The session starts in the playing state.
    pub fn new(config: SessionConfig, mut rng: R) -> Self {
        let player = spawn_player(&config, &mut rng);
        let enemies = (0..config.enemy_count)
            .map(|_| spawn_enemy(&config, &mut rng))
            .collect();

        Self {
            config,
            player,
            enemies,
            playing: true,
            rng,
        }
    }

    /// Resume ticking.
    pub fn start(&mut self) {
        self.playing = true;
    }

    /// Pause ticking.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Whether ticks currently move entities.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Re-spawn the player and every enemy in place.
    ///
    /// The playing flag is left untouched: resetting while paused stays
    /// paused.
    pub fn reset(&mut self) {
        self.player = spawn_player(&self.config, &mut self.rng);

        for enemy in &mut self.enemies {
            *enemy = spawn_enemy(&self.config, &mut self.rng);
        }
    }

    /// Advance the player and every enemy by `dt` seconds.
    ///
    /// Does nothing while paused.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        motion::advance(&mut self.player, dt, &self.config.world);

        for enemy in &mut self.enemies {
            motion::advance(enemy, dt, &self.config.world);
        }
    }

    /// Read-only snapshot of the current frame for a renderer.
    pub fn snapshot(&self) -> Frame<'_> {
        Frame {
            player: &self.player,
            enemies: &self.enemies,
            bounds: &self.config.world,
        }
    }

    /// The player entity.
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// The enemy entities.
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

fn spawn_player<R: Rng>(config: &SessionConfig, rng: &mut R) -> Entity {
    let size = Vec2::new(config.player.width, config.player.height);

    Entity::new(
        spawn::centered_position(size, &config.world),
        size,
        spawn::random_speed(rng, config.player.speed.min, config.player.speed.max),
        config.player.color.clone(),
    )
}

fn spawn_enemy<R: Rng>(config: &SessionConfig, rng: &mut R) -> Entity {
    let size = spawn::random_enemy_size(
        rng,
        config.enemy.size_min,
        config.enemy.size_max,
        config.enemy.size_factor,
    );
    let zone = Vec2::new(config.player.safety_zone.0, config.player.safety_zone.1);

    Entity::new(
        spawn::random_safety_position(rng, size, zone, &config.world),
        size,
        spawn::random_speed(rng, config.enemy.speed.min, config.enemy.speed.max),
        config.enemy.color.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn session() -> Session<SmallRng> {
        Session::new(SessionConfig::default(), SmallRng::seed_from_u64(1))
    }

    #[test]
    fn test_new_session_spawns_centered_player() {
        let session = session();

        assert_eq!(session.player().position, Vec2::new(192.0, 192.0));
        assert_eq!(session.enemies().len(), 10);
        assert!(session.is_playing());
    }

    #[test]
    fn test_tick_moves_all_entities() {
        let mut session = session();
        let before: Vec<Vec2> = session.enemies().iter().map(|e| e.position).collect();
        let player_before = session.player().position;

        session.tick(0.1);

        assert_ne!(session.player().position, player_before);
        for (enemy, old) in session.enemies().iter().zip(before) {
            assert_ne!(enemy.position, old);
        }
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut session = session();
        session.stop();
        let player_before = session.player().position;

        session.tick(0.1);

        assert_eq!(session.player().position, player_before);
    }

    #[test]
    fn test_reset_keeps_paused_state() {
        let mut session = session();
        session.stop();

        session.reset();

        assert!(!session.is_playing());
    }

    #[test]
    fn test_reset_keeps_playing_state() {
        let mut session = session();
        session.start();

        session.reset();

        assert!(session.is_playing());
    }

    #[test]
    fn test_reset_recenters_player() {
        let mut session = session();
        session.tick(1.0);
        assert_ne!(session.player().position, Vec2::new(192.0, 192.0));

        session.reset();

        assert_eq!(session.player().position, Vec2::new(192.0, 192.0));
    }

    #[test]
    fn test_default_tuning_constants() {
        let config = SessionConfig::default();

        assert_eq!(config.world.width, 400.0);
        assert_eq!(config.world.border, 4.0);
        assert_eq!(config.enemy_count, 10);
        assert_eq!(config.player.width, 16.0);
        assert_eq!(config.player.color, "#EFC9FF");
        assert_eq!(config.player.safety_zone, (32.0, 32.0));
        assert_eq!(config.player.speed.min, 50.0);
        assert_eq!(config.player.speed.max, 100.0);
        assert_eq!(config.enemy.speed.min, 25.0);
        assert_eq!(config.enemy.speed.max, 75.0);
        assert_eq!(config.enemy.size_min, 2.0);
        assert_eq!(config.enemy.size_max, 8.0);
        assert_eq!(config.enemy.size_factor, 4.0);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = SessionConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SessionConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }
}
