// Built-in levels, in play order
//
// Every level is 20 x 12 units with the origin at the bottom-left corner.
// Floor tops sit at y = 1.0 and platforms climb in steps of 1.4, which is
// within a standing jump.

use glam::Vec2;

use super::layout::{LevelLayout, LiquidKind, LiquidPool, Rect};

const LEVEL_SIZE: Vec2 = Vec2::new(20.0, 12.0);

/// Door sensor footprint
const DOOR_WIDTH: f32 = 0.8;
const DOOR_HEIGHT: f32 = 1.2;

// Level 1: a gentle staircase with one pool of each element

const ENTRANCE_GROUND: &[Rect] = &[
    Rect::new(10.0, 0.5, 20.0, 1.0),  // floor
    Rect::new(0.5, 6.0, 1.0, 12.0),   // left wall
    Rect::new(19.5, 6.0, 1.0, 12.0),  // right wall
    Rect::new(10.0, 11.5, 20.0, 1.0), // ceiling
    Rect::new(7.0, 2.2, 4.0, 0.4),
    Rect::new(12.0, 3.6, 4.0, 0.4),
    Rect::new(16.75, 5.0, 5.5, 0.4),
];

const ENTRANCE_DOORS: &[Rect] = &[
    Rect::new(16.0, 5.8, DOOR_WIDTH, DOOR_HEIGHT),
    Rect::new(18.0, 5.8, DOOR_WIDTH, DOOR_HEIGHT),
];

const ENTRANCE_LIQUIDS: &[LiquidPool] = &[
    LiquidPool {
        kind: LiquidKind::Water,
        area: Rect::new(4.5, 1.1, 1.0, 0.2),
    },
    LiquidPool {
        kind: LiquidKind::Lava,
        area: Rect::new(12.0, 1.1, 2.0, 0.2),
    },
];

const ENTRANCE_DIAMONDS: &[Vec2] = &[
    Vec2::new(4.5, 2.0),
    Vec2::new(7.0, 3.0),
    Vec2::new(12.0, 4.4),
];

// Level 2: two climbs meeting on a central bridge over a poison moat

const TOWERS_GROUND: &[Rect] = &[
    Rect::new(10.0, 0.5, 20.0, 1.0),
    Rect::new(0.5, 6.0, 1.0, 12.0),
    Rect::new(19.5, 6.0, 1.0, 12.0),
    Rect::new(10.0, 11.5, 20.0, 1.0),
    Rect::new(3.0, 2.2, 3.0, 0.4),
    Rect::new(6.0, 3.6, 3.0, 0.4),
    Rect::new(10.0, 5.0, 4.0, 0.4), // bridge
    Rect::new(14.0, 3.6, 3.0, 0.4),
    Rect::new(17.0, 2.2, 3.0, 0.4),
];

const TOWERS_DOORS: &[Rect] = &[
    Rect::new(9.0, 5.8, DOOR_WIDTH, DOOR_HEIGHT),
    Rect::new(11.0, 5.8, DOOR_WIDTH, DOOR_HEIGHT),
];

const TOWERS_LIQUIDS: &[LiquidPool] = &[LiquidPool {
    kind: LiquidKind::Poison,
    area: Rect::new(10.0, 1.1, 8.0, 0.2),
}];

const TOWERS_DIAMONDS: &[Vec2] = &[
    Vec2::new(3.0, 3.0),
    Vec2::new(6.0, 4.4),
    Vec2::new(14.0, 4.4),
    Vec2::new(17.0, 3.0),
];

// Level 3: a zig-zag climb with pools guarding the platforms

const ASCENT_GROUND: &[Rect] = &[
    Rect::new(10.0, 0.5, 20.0, 1.0),
    Rect::new(0.5, 6.0, 1.0, 12.0),
    Rect::new(19.5, 6.0, 1.0, 12.0),
    Rect::new(10.0, 11.5, 20.0, 1.0),
    Rect::new(5.0, 2.2, 4.0, 0.4),
    Rect::new(10.0, 3.6, 4.0, 0.4),
    Rect::new(5.0, 5.0, 4.0, 0.4),
    Rect::new(10.0, 6.4, 4.0, 0.4),
    Rect::new(15.5, 7.8, 7.0, 0.4),
];

const ASCENT_DOORS: &[Rect] = &[
    Rect::new(15.0, 8.6, DOOR_WIDTH, DOOR_HEIGHT),
    Rect::new(17.5, 8.6, DOOR_WIDTH, DOOR_HEIGHT),
];

const ASCENT_LIQUIDS: &[LiquidPool] = &[
    LiquidPool {
        kind: LiquidKind::Lava,
        area: Rect::new(14.0, 1.1, 6.0, 0.2),
    },
    LiquidPool {
        kind: LiquidKind::Poison,
        area: Rect::new(10.0, 3.9, 1.0, 0.2),
    },
    LiquidPool {
        kind: LiquidKind::Water,
        area: Rect::new(5.0, 5.3, 1.0, 0.2),
    },
];

const ASCENT_DIAMONDS: &[Vec2] = &[
    Vec2::new(5.0, 3.0),
    Vec2::new(5.0, 6.2),
    Vec2::new(10.0, 7.2),
    Vec2::new(18.5, 1.6),
];

/// All built-in levels, in play order
pub static LEVELS: [LevelLayout; 3] = [
    LevelLayout {
        name: "The Entrance",
        size: LEVEL_SIZE,
        ground: ENTRANCE_GROUND,
        doors: ENTRANCE_DOORS,
        liquids: ENTRANCE_LIQUIDS,
        diamonds: ENTRANCE_DIAMONDS,
        spawns: [Vec2::new(1.5, 1.5), Vec2::new(2.5, 1.5)],
    },
    LevelLayout {
        name: "Twin Towers",
        size: LEVEL_SIZE,
        ground: TOWERS_GROUND,
        doors: TOWERS_DOORS,
        liquids: TOWERS_LIQUIDS,
        diamonds: TOWERS_DIAMONDS,
        spawns: [Vec2::new(1.5, 1.5), Vec2::new(18.5, 1.5)],
    },
    LevelLayout {
        name: "Final Ascent",
        size: LEVEL_SIZE,
        ground: ASCENT_GROUND,
        doors: ASCENT_DOORS,
        liquids: ASCENT_LIQUIDS,
        diamonds: ASCENT_DIAMONDS,
        spawns: [Vec2::new(1.5, 1.5), Vec2::new(2.5, 1.5)],
    },
];
