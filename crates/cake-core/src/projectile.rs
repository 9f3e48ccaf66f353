//! Arena of in-flight projectiles.
//!
//! Records are addressed by a generation-checked [`ProjectileId`], so a
//! stale id held by the front-end never aliases a newer throw that reused
//! the slot. The arena is advanced with [`ProjectileArena::tick`], which
//! reports trail samples, impacts and removals as [`FlightEvent`]s.

use crate::constants::*;
use crate::flight::{FlightPlan, LAUNCH_EASE};
use crate::ease::Ease;
use crate::tween::{Pose, Tween};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectileId {
    index: u32,
    generation: u32,
}

impl ProjectileId {
    /// Arena slot; reused after the record is removed.
    pub fn slot(&self) -> usize {
        self.index as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Flying,
    /// Landed; squashing, then fading out.
    Landed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightEvent {
    Sample { id: ProjectileId, pos: Vec2 },
    Impact { id: ProjectileId, pos: Vec2 },
    Removed { id: ProjectileId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch {
    Accepted(ProjectileId),
    AtCapacity,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub plan: FlightPlan,
    pub age: f32,
    pub phase: Phase,
}

impl Projectile {
    fn new(plan: FlightPlan) -> Self {
        Self {
            plan,
            age: 0.0,
            phase: Phase::Flying,
        }
    }

    fn since_landing(&self) -> f32 {
        (self.age - self.plan.duration).max(0.0)
    }

    /// Whole lifetime: flight, linger, fade.
    pub fn lifetime(&self) -> f32 {
        self.plan.duration + FADE_DELAY_SEC + FADE_SEC
    }

    pub fn pose(&self) -> Pose {
        let pos = match self.phase {
            Phase::Flying => self.plan.position(self.age),
            Phase::Landed => self.plan.end,
        };
        let (rotation_x, rotation_y) = self.plan.tumble(self.age);
        let mut pose = Pose::centered(pos.x, pos.y);
        pose.rotation_x = rotation_x;
        pose.rotation_y = rotation_y;
        match self.phase {
            Phase::Flying => {
                pose.scale = Tween::new(LAUNCH_SCALE_FROM, 1.0, LAUNCH_POP_SEC)
                    .ease(LAUNCH_EASE)
                    .value(self.age);
                pose.opacity = Tween::new(LAUNCH_OPACITY_FROM, 1.0, LAUNCH_POP_SEC)
                    .ease(LAUNCH_EASE)
                    .value(self.age)
                    .min(1.0);
            }
            Phase::Landed => {
                let t = self.since_landing();
                pose.scale = Tween::new(1.0, SQUASH_SCALE, SQUASH_SEC)
                    .ease(Ease::OutQuad)
                    .yoyo(1)
                    .value(t);
                pose.rotation = Tween::new(0.0, SQUASH_ROTATION_DEG, SQUASH_SEC)
                    .ease(Ease::OutQuad)
                    .yoyo(1)
                    .value(t);
                pose.opacity = Tween::new(1.0, 0.0, FADE_SEC)
                    .delay(FADE_DELAY_SEC)
                    .ease(Ease::OutQuad)
                    .value(t);
            }
        }
        pose
    }
}

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    entry: Option<Projectile>,
}

#[derive(Clone, Debug)]
pub struct ProjectileArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    capacity: usize,
}

impl Default for ProjectileArena {
    fn default() -> Self {
        Self::new(MAX_IN_FLIGHT)
    }
}

impl ProjectileArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records still on screen, including landed ones that are fading.
    pub fn in_flight(&self) -> usize {
        self.live
    }

    pub fn has_room(&self) -> bool {
        self.live < self.capacity
    }

    pub fn launch(&mut self, plan: FlightPlan) -> Launch {
        if !self.has_room() {
            return Launch::AtCapacity;
        }
        let index = match self.free.pop() {
            Some(i) => i,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.entry = Some(Projectile::new(plan));
        self.live += 1;
        Launch::Accepted(ProjectileId {
            index,
            generation: slot.generation,
        })
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.entry.as_ref())
    }

    pub fn contains(&self, id: ProjectileId) -> bool {
        self.get(id).is_some()
    }

    pub fn pose(&self, id: ProjectileId) -> Option<Pose> {
        self.get(id).map(Projectile::pose)
    }

    /// Advance every record by `dt`.
    ///
    /// Flying records emit one `Sample` per tick; the tick that reaches the
    /// end of the path emits a final `Sample` at the end point followed by
    /// exactly one `Impact`. Records past their fade emit `Removed` and free
    /// their slot.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<FlightEvent>) {
        let dt = dt.as_secs_f32();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(p) = slot.entry.as_mut() else {
                continue;
            };
            let id = ProjectileId {
                index: index as u32,
                generation: slot.generation,
            };
            p.age += dt;
            if p.phase == Phase::Flying {
                if p.age < p.plan.duration {
                    out_events.push(FlightEvent::Sample {
                        id,
                        pos: p.plan.position(p.age),
                    });
                } else {
                    let pos = p.plan.end;
                    out_events.push(FlightEvent::Sample { id, pos });
                    out_events.push(FlightEvent::Impact { id, pos });
                    p.phase = Phase::Landed;
                }
            }
            if p.phase == Phase::Landed && p.age >= p.lifetime() {
                slot.entry = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                self.live -= 1;
                out_events.push(FlightEvent::Removed { id });
            }
        }
    }
}
