//! Level generation
//!
//! Single pass: up to `max_rooms` candidate rooms are sampled, candidates
//! overlapping an accepted room are skipped (the attempt is still spent),
//! accepted rooms are carved rectangular or organic on a coin flip, and
//! every room after the first is joined to its predecessor by a corridor.

use std::collections::HashSet;

use super::config::{ConfigError, LevelConfig};
use super::corridor::carve_corridor;
use super::level::Level;
use super::organic;
use super::room::Room;
use crate::LevelRng;

/// Generate the floor layout for one level
pub fn generate(config: &LevelConfig, rng: &mut LevelRng) -> Result<Level, ConfigError> {
    config.validate()?;

    let mut floor = HashSet::new();
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..config.max_rooms {
        let candidate = random_room(config, rng);
        if rooms.iter().any(|room| room.overlaps(&candidate)) {
            continue;
        }

        if rng.coin_flip() {
            floor.extend(candidate.cells());
        } else {
            organic::carve(&candidate, rng, &mut floor);
        }

        rooms.push(candidate);
        if rooms.len() > 1 {
            let previous = rooms[rooms.len() - 2];
            carve_corridor(&mut floor, previous.center(), candidate.center(), rng);
        }
    }

    Ok(Level::new(
        config.level_width,
        config.level_height,
        rng.seed(),
        rooms,
        floor,
    ))
}

/// Generate with a fresh entropy seed (the default for live runs)
pub fn generate_random(config: &LevelConfig) -> Result<Level, ConfigError> {
    generate(config, &mut LevelRng::from_entropy())
}

/// Generate reproducibly from a fixed seed
pub fn generate_seeded(config: &LevelConfig, seed: u64) -> Result<Level, ConfigError> {
    generate(config, &mut LevelRng::new(seed))
}

/// Sample a candidate room that fits within the level bounds
fn random_room(config: &LevelConfig, rng: &mut LevelRng) -> Room {
    let width = rng.range_i32(config.room_min, config.room_max);
    let height = rng.range_i32(config.room_min, config.room_max);
    let x = rng.range_i32(0, config.level_width - width);
    let y = rng.range_i32(0, config.level_height - height);
    Room::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Point;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LevelConfig {
            max_rooms: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_seeded(&config, 1),
            Err(ConfigError::NoRooms)
        ));
    }

    #[test]
    fn test_random_room_fits_level() {
        let config = LevelConfig::default();
        let mut rng = LevelRng::new(5);
        for _ in 0..200 {
            let room = random_room(&config, &mut rng);
            assert!(room.x >= 0 && room.right() <= config.level_width);
            assert!(room.y >= 0 && room.bottom() <= config.level_height);
            assert!((config.room_min..=config.room_max).contains(&room.width));
            assert!((config.room_min..=config.room_max).contains(&room.height));
        }
    }

    #[test]
    fn test_single_room_has_no_corridor() {
        let config = LevelConfig {
            max_rooms: 1,
            ..Default::default()
        };
        for seed in 0..20 {
            let level = generate_seeded(&config, seed).unwrap();
            assert_eq!(level.rooms().len(), 1);

            // Every floor cell belongs to that room; no corridor escapes it
            let room = level.rooms()[0];
            assert!(level.floor().iter().all(|&p| room.contains(p)));
        }
    }

    #[test]
    fn test_rooms_accepted_in_order_are_disjoint() {
        for seed in 0..20 {
            let level = generate_seeded(&LevelConfig::default(), seed).unwrap();
            let rooms = level.rooms();
            for i in 0..rooms.len() {
                for j in (i + 1)..rooms.len() {
                    assert!(
                        !rooms[i].overlaps(&rooms[j]),
                        "rooms {} and {} overlap with seed {}",
                        i,
                        j,
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn test_floor_contains_every_room_center() {
        // Corridors run between centers, so with two or more rooms each
        // center cell must have been carved by a corridor endpoint; with
        // one room the rectangular or organic interior is on its own.
        for seed in 0..20 {
            let level = generate_seeded(&LevelConfig::default(), seed).unwrap();
            if level.rooms().len() < 2 {
                continue;
            }
            for room in level.rooms() {
                assert!(level.is_floor(room.center()), "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let config = LevelConfig::default();
        let a = generate_seeded(&config, 1234).unwrap();
        let b = generate_seeded(&config, 1234).unwrap();

        assert_eq!(a.rooms(), b.rooms());
        assert_eq!(a.sorted_floor(), b.sorted_floor());
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_floor_stays_in_bounds() {
        let config = LevelConfig {
            level_width: 40,
            level_height: 30,
            room_min: 4,
            room_max: 9,
            max_rooms: 12,
        };
        for seed in 0..20 {
            let level = generate_seeded(&config, seed).unwrap();
            for &Point { x, y } in level.floor() {
                assert!(x >= 0 && x < config.level_width);
                assert!(y >= 0 && y < config.level_height);
            }
        }
    }
}
