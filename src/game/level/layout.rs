// Static level layout records

use glam::{Vec2, Vec4};

/// Axis-aligned rectangle given by centre and full size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(center_x, center_y),
            size: Vec2::new(width, height),
        }
    }
}

/// What a liquid pool looks like. Every kind restarts the level on contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidKind {
    Lava,
    Water,
    Poison,
}

impl LiquidKind {
    pub fn color(&self) -> Vec4 {
        match self {
            Self::Lava => Vec4::new(0.9, 0.25, 0.05, 1.0),
            Self::Water => Vec4::new(0.1, 0.4, 0.9, 1.0),
            Self::Poison => Vec4::new(0.3, 0.75, 0.2, 1.0),
        }
    }
}

/// A liquid pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidPool {
    pub kind: LiquidKind,
    pub area: Rect,
}

/// Everything needed to build one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelLayout {
    pub name: &'static str,
    /// World-space extent; the level spans (0, 0) to `size`
    pub size: Vec2,
    /// Floors, walls, ceilings and platforms (the "ground" category)
    pub ground: &'static [Rect],
    pub doors: &'static [Rect],
    pub liquids: &'static [LiquidPool],
    pub diamonds: &'static [Vec2],
    /// Spawn point per player, in player order
    pub spawns: [Vec2; 2],
}

impl LevelLayout {
    /// Bounds as a rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.size.x / 2.0,
            self.size.y / 2.0,
            self.size.x,
            self.size.y,
        )
    }
}
