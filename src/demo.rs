//! Demo Map Generator
//!
//! A small room-and-cavern map builder that exercises the whole kernel:
//! rooms placed with `vec_in_rect`/`triangle_int` and spaced with
//! `Rect::distance_to`, caverns rasterized from normal-distributed centres,
//! Bresenham corridors between room centres, and doors found by tracing
//! room outlines. Every stage draws from its own labelled RNG stream.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::array2d::Array2D;
use crate::core::hash::{CellHash, GridHasher};
use crate::core::rect::Rect;
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::raster::{Circle, Line};

/// Largest accepted map side.
pub const MAX_MAP_SIDE: i32 = 4096;

/// One map cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    /// Solid rock
    Wall,
    /// Room or cavern floor
    Floor,
    /// Carved corridor
    Corridor,
    /// Corridor cell on a room's outline
    Door,
    /// Loose rubble along cavern edges
    Rubble,
}

impl Tile {
    /// ASCII glyph used by `render`.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Corridor => ',',
            Tile::Door => '+',
            Tile::Rubble => ':',
        }
    }

    /// Whether a walker could stand here.
    pub const fn is_open(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl CellHash for Tile {
    fn hash_into(&self, hasher: &mut GridHasher) {
        hasher.update_u8(*self as u8);
    }
}

/// Demo generator configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Map width in cells.
    pub width: i32,
    /// Map height in cells.
    pub height: i32,
    /// World seed. Each stage derives its own stream from it.
    pub seed: u64,
    /// Rooms to try to place.
    pub rooms: usize,
    /// Smallest room side.
    pub room_min: i32,
    /// Largest room side.
    pub room_max: i32,
    /// Expected number of caverns (fractional part is a chance of one more).
    pub caverns: f64,
    /// Typical cavern radius.
    pub cavern_radius: i32,
    /// `1 / corridor_taper` chance per cell of widening a corridor.
    pub corridor_taper: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            seed: 12345,
            rooms: 8,
            room_min: 3,
            room_max: 8,
            caverns: 2.5,
            cavern_radius: 4,
            corridor_taper: 4,
        }
    }
}

/// Invalid demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Map too small to hold the largest room plus a border.
    #[error("map {width}x{height} too small for rooms up to {room_max} cells")]
    MapTooSmall {
        /// Configured width
        width: i32,
        /// Configured height
        height: i32,
        /// Configured largest room side
        room_max: i32,
    },

    /// Map side above `MAX_MAP_SIDE`.
    #[error("map {width}x{height} exceeds the {} cell limit", MAX_MAP_SIDE)]
    MapTooLarge {
        /// Configured width
        width: i32,
        /// Configured height
        height: i32,
    },

    /// Room size bounds are inverted or non-positive.
    #[error("invalid room size range {min}..={max}")]
    InvalidRoomSize {
        /// Configured smallest room side
        min: i32,
        /// Configured largest room side
        max: i32,
    },

    /// Negative or non-finite cavern parameters.
    #[error("cavern count and radius must not be negative")]
    InvalidCaverns,

    /// Cavern radius larger than the map.
    #[error("cavern radius {radius} exceeds the map side {limit}")]
    CavernTooLarge {
        /// Configured cavern radius
        radius: i32,
        /// Longest map side
        limit: i32,
    },
}

impl DemoConfig {
    /// Check the config can produce a map.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min < 1 || self.room_max < self.room_min {
            return Err(ConfigError::InvalidRoomSize {
                min: self.room_min,
                max: self.room_max,
            });
        }
        if self.width > MAX_MAP_SIDE || self.height > MAX_MAP_SIDE {
            return Err(ConfigError::MapTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        // Largest room plus a wall on each side.
        let fits = self
            .room_max
            .checked_add(2)
            .is_some_and(|needed| self.width >= needed && self.height >= needed);
        if !fits {
            return Err(ConfigError::MapTooSmall {
                width: self.width,
                height: self.height,
                room_max: self.room_max,
            });
        }

        if !self.caverns.is_finite() || self.caverns < 0.0 || self.cavern_radius < 0 {
            return Err(ConfigError::InvalidCaverns);
        }
        let limit = self.width.max(self.height);
        if self.cavern_radius > limit {
            return Err(ConfigError::CavernTooLarge {
                radius: self.cavern_radius,
                limit,
            });
        }
        Ok(())
    }
}

/// Build a map from `config`. The outer ring of cells is always wall.
pub fn generate_map(config: &DemoConfig) -> Result<Array2D<Tile>, ConfigError> {
    config.validate()?;

    let mut map = Array2D::new(config.width, config.height, Tile::Wall);
    let interior = map.bounds().inflate(-1);

    let mut rooms = place_rooms(config, interior);
    for room in &rooms {
        for pos in *room {
            map[pos] = Tile::Floor;
        }
    }

    carve_caverns(config, interior, &mut map);
    connect_rooms(config, interior, &mut rooms, &mut map);
    place_doors(&rooms, &mut map);

    let open = map.iter().filter(|t| t.is_open()).count();
    info!(
        "Generated {}x{} map: {} rooms, {} open cells",
        config.width,
        config.height,
        rooms.len(),
        open
    );

    Ok(map)
}

fn place_rooms(config: &DemoConfig, interior: Rect) -> Vec<Rect> {
    let mut rng = DeterministicRng::from_label(config.seed, "rooms");
    let mut rooms: Vec<Rect> = Vec::with_capacity(config.rooms);

    let mid = (config.room_min + config.room_max) / 2;
    let spread = (config.room_max - config.room_min) / 2;

    for _ in 0..config.rooms.saturating_mul(4) {
        if rooms.len() >= config.rooms {
            break;
        }

        let width = rng.inclusive_in(config.room_min, config.room_max);
        let height = rng.triangle_int(mid, spread);

        let slots = Rect::new(
            interior.left(),
            interior.top(),
            interior.width() - width + 1,
            interior.height() - height + 1,
        );
        let room = Rect::pos_and_size(rng.vec_in_rect(slots), Vec2::new(width, height));

        // Keep at least one wall between rooms.
        if rooms.iter().any(|other| other.distance_to(&room) < 1) {
            continue;
        }

        debug!("Placed room {}", room);
        rooms.push(room);
    }

    rooms
}

fn carve_caverns(config: &DemoConfig, interior: Rect, map: &mut Array2D<Tile>) {
    let mut rng = DeterministicRng::from_label(config.seed, "caverns");
    let count = rng.count_from_float(config.caverns);
    let spread_x = interior.width() as f64 / 4.0;
    let spread_y = interior.height() as f64 / 4.0;

    for _ in 0..count {
        let jitter = Vec2::floor(rng.normal() * spread_x, rng.normal() * spread_y);
        let center = interior.clamp(interior.center() + jitter);
        let radius = rng.triangle_int(config.cavern_radius, 2).max(0);
        let circle = Circle::new(center, radius);

        debug!("Carving cavern at {} radius {}", center, radius);

        for pos in circle.iter().filter(|p| interior.contains(*p)) {
            map[pos] = Tile::Floor;
        }
        for pos in circle.edge().filter(|p| interior.contains(*p)) {
            if rng.percent(30) {
                map[pos] = Tile::Rubble;
            }
        }
    }
}

fn connect_rooms(
    config: &DemoConfig,
    interior: Rect,
    rooms: &mut [Rect],
    map: &mut Array2D<Tile>,
) {
    let mut rng = DeterministicRng::from_label(config.seed, "corridors");
    rng.shuffle(rooms);

    for pair in rooms.windows(2) {
        let line = Line::new(pair[0].center(), pair[1].center());
        let side = (line.end() - line.start()).nearest_direction().rotate_right90();

        debug!(
            "Corridor {} -> {} ({} steps)",
            line.start(),
            line.end(),
            line.steps()
        );

        for pos in line.walk() {
            carve_corridor(map, pos);
            if rng.taper(0, config.corridor_taper) > 0 {
                let widened = pos + side;
                if interior.contains(widened) {
                    carve_corridor(map, widened);
                }
            }
        }
    }
}

fn carve_corridor(map: &mut Array2D<Tile>, pos: Vec2) {
    if let Ok(tile) = map.get_mut(pos.x, pos.y) {
        if *tile == Tile::Wall {
            *tile = Tile::Corridor;
        }
    }
}

fn place_doors(rooms: &[Rect], map: &mut Array2D<Tile>) {
    for room in rooms {
        for pos in room.inflate(1).trace() {
            if let Ok(tile) = map.get_mut(pos.x, pos.y) {
                if *tile == Tile::Corridor {
                    *tile = Tile::Door;
                }
            }
        }
    }
}

/// Render the map as lines of ASCII glyphs.
pub fn render(map: &Array2D<Tile>) -> String {
    let mut out = String::with_capacity(((map.width() + 1) * map.height()) as usize);
    for pos in map.positions() {
        out.push(map[pos].glyph());
        if pos.x == map.width() - 1 {
            out.push('\n');
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
