// Game session: one loaded level plus the coordinator that outlives it

use glam::{Vec2, Vec4};
use log::{debug, error, info};
use std::collections::HashMap;

use crate::engine::game_loop::FrameTiming;
use crate::engine::input::{Action, InputManager};
use crate::engine::physics::{
    presets, ColliderHandle, CollisionEvent, CollisionGroups, PhysicsWorld, RigidBodyHandle,
};
use crate::engine::renderer::Quad;

use super::characters::{Character, CharacterConfig, MovementInput};
use super::level::{
    Diamond, Door, LevelCoordinator, LevelError, LevelLayout, Liquid, LiquidPool, Rect,
    SceneManager, SceneRequest,
};
use super::timer::LevelTimer;

const GROUND_COLOR: Vec4 = Vec4::new(0.35, 0.32, 0.25, 1.0);
const DOOR_COLOR: Vec4 = Vec4::new(0.55, 0.45, 0.2, 1.0);
const DOOR_OCCUPIED_COLOR: Vec4 = Vec4::new(0.95, 0.85, 0.35, 1.0);
const DIAMOND_COLOR: Vec4 = Vec4::new(0.75, 0.95, 1.0, 1.0);
const DIAMOND_SIZE: f32 = 0.35;

/// What a collider belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Character(usize),
    Ground,
    Door(usize),
    Liquid(usize),
    Diamond(usize),
}

#[derive(Debug)]
struct DoorEntity {
    door: Door,
    area: Rect,
    collider: ColliderHandle,
}

#[derive(Debug)]
struct LiquidEntity {
    liquid: Liquid,
    pool: LiquidPool,
    collider: ColliderHandle,
}

#[derive(Debug)]
struct DiamondEntity {
    diamond: Diamond,
    position: Vec2,
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

/// Everything that is destroyed and rebuilt when a level loads
struct LevelWorld {
    layout: &'static LevelLayout,
    physics: PhysicsWorld,
    characters: Vec<Character>,
    doors: Vec<DoorEntity>,
    liquids: Vec<LiquidEntity>,
    diamonds: Vec<DiamondEntity>,
    colliders: HashMap<ColliderHandle, EntityKind>,
    diamonds_collected: usize,
    timer: LevelTimer,
}

impl LevelWorld {
    fn build(layout: &'static LevelLayout, heroes: &[CharacterConfig]) -> Self {
        let mut physics = PhysicsWorld::new();
        let mut colliders = HashMap::new();

        for block in layout.ground {
            let body = physics.add_rigid_body(presets::fixed_body(block.center.x, block.center.y));
            let collider =
                physics.add_collider(presets::ground_collider(block.size.x, block.size.y), body);
            colliders.insert(collider, EntityKind::Ground);
        }

        let mut add_trigger = |physics: &mut PhysicsWorld, group, area: &Rect, kind| {
            let body = physics.add_rigid_body(presets::fixed_body(area.center.x, area.center.y));
            let collider = physics.add_collider(
                presets::trigger_collider(group, area.size.x, area.size.y),
                body,
            );
            colliders.insert(collider, kind);
            (body, collider)
        };

        let doors = layout
            .doors
            .iter()
            .enumerate()
            .map(|(i, area)| {
                let (_, collider) =
                    add_trigger(&mut physics, CollisionGroups::Door, area, EntityKind::Door(i));
                DoorEntity {
                    door: Door::new(),
                    area: *area,
                    collider,
                }
            })
            .collect();

        let liquids = layout
            .liquids
            .iter()
            .enumerate()
            .map(|(i, pool)| {
                let (_, collider) = add_trigger(
                    &mut physics,
                    CollisionGroups::Liquid,
                    &pool.area,
                    EntityKind::Liquid(i),
                );
                LiquidEntity {
                    liquid: Liquid,
                    pool: *pool,
                    collider,
                }
            })
            .collect();

        let diamonds = layout
            .diamonds
            .iter()
            .enumerate()
            .map(|(i, position)| {
                let area = Rect::new(position.x, position.y, DIAMOND_SIZE, DIAMOND_SIZE);
                let (body, collider) = add_trigger(
                    &mut physics,
                    CollisionGroups::Diamond,
                    &area,
                    EntityKind::Diamond(i),
                );
                DiamondEntity {
                    diamond: Diamond::new(),
                    position: *position,
                    body,
                    collider,
                }
            })
            .collect();

        let characters: Vec<Character> = heroes
            .iter()
            .zip(layout.spawns)
            .enumerate()
            .map(|(player_index, (config, spawn))| {
                Character::spawn(player_index, *config, &mut physics, spawn)
            })
            .collect();
        for (i, character) in characters.iter().enumerate() {
            colliders.insert(character.collider_handle, EntityKind::Character(i));
        }

        debug!("Built {} with {} bodies", layout.name, physics.body_count());

        Self {
            layout,
            physics,
            characters,
            doors,
            liquids,
            diamonds,
            colliders,
            diamonds_collected: 0,
            timer: LevelTimer::new(),
        }
    }
}

/// A running game: the active level, its scene manager and coordinator
pub struct Session {
    scenes: SceneManager,
    heroes: Vec<CharacterConfig>,
    coordinator: LevelCoordinator,
    world: LevelWorld,
}

impl Session {
    /// Start a session on the scene manager's active level
    pub fn new(scenes: SceneManager, heroes: &[CharacterConfig]) -> Self {
        let world = LevelWorld::build(scenes.active_layout(), heroes);
        info!(
            "Session started on level {} ({})",
            scenes.active_index(),
            world.layout.name
        );

        Self {
            scenes,
            heroes: heroes.to_vec(),
            coordinator: LevelCoordinator::new(),
            world,
        }
    }

    /// Advance one rendered frame. Returns true if a level was (re)loaded.
    pub fn update(&mut self, input: &InputManager, timing: FrameTiming) -> bool {
        if input.global().just_pressed(Action::Restart) {
            info!("Restart requested");
            self.coordinator.restart_level();
        }
        if self.apply_pending_requests() {
            return true;
        }

        for character in &mut self.world.characters {
            let movement = input
                .player(character.player_index)
                .map(MovementInput::from_player)
                .unwrap_or_default();
            character.update(&mut self.world.physics, movement);
        }

        for _ in 0..timing.steps {
            self.world.physics.step();
            for event in self.world.physics.drain_collision_events() {
                self.dispatch(event);
            }
            if self.apply_pending_requests() {
                return true;
            }
        }

        self.world.timer.tick(timing.delta);
        false
    }

    /// Route a collision event to the character and the entity it touched
    pub(crate) fn dispatch(&mut self, event: CollisionEvent) {
        let (a, b) = event.colliders();
        let (Some(kind_a), Some(kind_b)) = (
            self.world.colliders.get(&a).copied(),
            self.world.colliders.get(&b).copied(),
        ) else {
            return;
        };

        let (character, other) = match (kind_a, kind_b) {
            (EntityKind::Character(i), other) => (i, other),
            (other, EntityKind::Character(i)) => (i, other),
            _ => return,
        };

        match event {
            CollisionEvent::Started { .. } => self.on_enter(character, other),
            CollisionEvent::Stopped { .. } => self.on_exit(character, other),
        }
    }

    fn on_enter(&mut self, character: usize, other: EntityKind) {
        let world = &mut self.world;
        let name = world
            .characters
            .get(character)
            .map(|c| c.name())
            .unwrap_or("?");

        match other {
            EntityKind::Ground => {
                if let Some(character) = world.characters.get_mut(character) {
                    character.movement.on_collision_enter(true);
                }
            }
            EntityKind::Door(i) => {
                if let Some(entity) = world.doors.get_mut(i) {
                    entity.door.on_enter(&mut self.coordinator);
                    debug!(
                        "{} reached door {} ({} occupied)",
                        name,
                        i,
                        self.coordinator.doors_occupied()
                    );
                }
            }
            EntityKind::Liquid(i) => {
                if let Some(entity) = world.liquids.get(i) {
                    info!("{} fell into {:?}", name, entity.pool.kind);
                    entity.liquid.on_enter(&mut self.coordinator);
                }
            }
            EntityKind::Diamond(i) => {
                let Some(entity) = world.diamonds.get_mut(i) else {
                    return;
                };
                if entity.diamond.collect() {
                    world.diamonds_collected += 1;
                    world.colliders.remove(&entity.collider);
                    world.physics.remove_rigid_body(entity.body);
                    debug!(
                        "{} collected a diamond ({}/{})",
                        name,
                        world.diamonds_collected,
                        world.diamonds.len()
                    );
                }
            }
            EntityKind::Character(_) => {}
        }
    }

    fn on_exit(&mut self, character: usize, other: EntityKind) {
        if let EntityKind::Door(i) = other {
            if let Some(entity) = self.world.doors.get_mut(i) {
                debug!("Character {} left door {}", character, i);
                entity.door.on_exit(&mut self.coordinator);
            }
        }
    }

    /// Perform the first queued scene request, discarding the rest.
    /// Returns true if a level was loaded.
    pub fn apply_pending_requests(&mut self) -> bool {
        if !self.coordinator.has_pending_requests() {
            return false;
        }

        let mut requests = self.coordinator.drain_requests().into_iter();
        let Some(request) = requests.next() else {
            return false;
        };
        let discarded = requests.count();
        if discarded > 0 {
            debug!("Discarding {} extra scene requests this frame", discarded);
        }

        match self.resolve(&request) {
            Ok(layout) => {
                self.world = LevelWorld::build(layout, &self.heroes);
                self.coordinator.reset();
                true
            }
            Err(err) => {
                error!("Scene request {:?} failed: {}", request, err);
                if let LevelError::UnknownLevel(_) = err {
                    let names: Vec<_> = self.scenes.level_names().collect();
                    info!("Available levels: {}", names.join(", "));
                }
                false
            }
        }
    }

    fn resolve(&mut self, request: &SceneRequest) -> Result<&'static LevelLayout, LevelError> {
        match request {
            SceneRequest::Restart => self.scenes.load_index(self.scenes.active_index()),
            SceneRequest::Next => {
                let next = self.scenes.active_index() + 1;
                if next < self.scenes.level_count() {
                    self.scenes.load_index(next)
                } else {
                    info!("All levels complete, starting over");
                    self.scenes.load_index(0)
                }
            }
            SceneRequest::Named(name) => self.scenes.load_by_name(name),
        }
    }

    /// Coloured quads for every visible entity, back to front
    pub fn draw_list(&self) -> Vec<Quad> {
        let world = &self.world;
        let mut quads = Vec::new();

        for door in &world.doors {
            let color = if door.door.is_occupied() {
                DOOR_OCCUPIED_COLOR
            } else {
                DOOR_COLOR
            };
            quads.push(Quad::from_rect(door.area.center, door.area.size, color));
        }

        for block in world.layout.ground {
            quads.push(Quad::from_rect(block.center, block.size, GROUND_COLOR));
        }

        for liquid in &world.liquids {
            let area = liquid.pool.area;
            quads.push(Quad::from_rect(area.center, area.size, liquid.pool.kind.color()));
        }

        for diamond in world.diamonds.iter().filter(|d| !d.diamond.is_collected()) {
            quads.push(Quad::from_rect(
                diamond.position,
                Vec2::splat(DIAMOND_SIZE),
                DIAMOND_COLOR,
            ));
        }

        for character in &world.characters {
            let config = character.movement.config();
            let (Some(body), Some(head)) = (
                character.position(&world.physics),
                character.head_world_position(&world.physics),
            ) else {
                continue;
            };
            let head_color = (config.color * 1.2).min(Vec4::ONE);
            quads.push(Quad::from_rect(body, config.body_size, config.color));
            quads.push(Quad::from_rect(head, config.head_size, head_color));
        }

        quads
    }

    /// Window title: level, timer and diamonds
    pub fn title(&self) -> String {
        format!(
            "Twin Temple | {} | {} | Diamonds {}/{}",
            self.world.layout.name,
            self.world.timer.display(),
            self.world.diamonds_collected,
            self.world.diamonds.len()
        )
    }

    pub fn layout(&self) -> &'static LevelLayout {
        self.world.layout
    }

    pub fn coordinator_mut(&mut self) -> &mut LevelCoordinator {
        &mut self.coordinator
    }
}
