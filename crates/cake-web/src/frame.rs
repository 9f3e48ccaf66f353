use crate::anim::{self, Animator};
use crate::audio::{self, SharedMusic, SharedSfx};
use crate::dom::{self, Page};
use crate::impact::{self, ImpactTargets};
use crate::render::{self, Surface};
use cake_core::{FlightEvent, ProjectileArena, ProjectileId, ResetSequence, SceneParams, TrailStore};
use fnv::FnvHashMap;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub page: Page,
    pub trail_surface: Surface,
    pub splat_surface: Surface,
    pub params: SceneParams,
    pub rng: StdRng,

    pub trail: TrailStore,
    pub arena: ProjectileArena,
    pub cakes: FnvHashMap<ProjectileId, web::HtmlElement>,
    pub animator: Animator,
    pub reset: ResetSequence,

    pub music: SharedMusic,
    pub sfx: SharedSfx,

    pub last_instant: Instant,
    events: Vec<FlightEvent>,
}

impl FrameContext {
    pub fn new(
        page: Page,
        trail_surface: Surface,
        splat_surface: Surface,
        params: SceneParams,
        rng: StdRng,
        music: SharedMusic,
        sfx: SharedSfx,
    ) -> Self {
        Self {
            trail: TrailStore::from_params(&params),
            arena: ProjectileArena::new(params.max_in_flight),
            cakes: FnvHashMap::default(),
            animator: Animator::default(),
            reset: ResetSequence::default(),
            page,
            trail_surface,
            splat_surface,
            params,
            rng,
            music,
            sfx,
            last_instant: Instant::now(),
            events: Vec::with_capacity(32),
        }
    }

    /// Resize both surfaces to the viewport. Drawn content is discarded.
    pub fn resize_surfaces(&self) {
        self.trail_surface.resize();
        self.splat_surface.resize();
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let now_secs = dom::now_secs();

        let mut events = std::mem::take(&mut self.events);
        self.arena.tick(dt, &mut events);
        for ev in events.drain(..) {
            match ev {
                FlightEvent::Sample { pos, .. } => self.trail.push(pos.x, pos.y),
                FlightEvent::Impact { pos, .. } => impact::on_impact(
                    ImpactTargets {
                        page: &self.page,
                        splats: &self.splat_surface,
                        animator: &mut self.animator,
                        rng: &mut self.rng,
                        params: &self.params,
                        sfx: &self.sfx,
                        now: now_secs,
                    },
                    pos,
                ),
                FlightEvent::Removed { id } => {
                    if let Some(cake) = self.cakes.remove(&id) {
                        cake.remove();
                    }
                }
            }
        }
        self.events = events;
        for (id, cake) in &self.cakes {
            if let Some(pose) = self.arena.pose(*id) {
                anim::write_pose(cake, &pose);
            }
        }

        if let Some(step) = self.reset.tick(dt) {
            if step.clear_now {
                self.trail.clear();
                self.trail_surface.clear();
                self.splat_surface.clear();
                log::info!("[reset] surfaces cleared");
            }
            self.trail_surface.set_opacity(step.opacity);
            self.splat_surface.set_opacity(step.opacity);
        }

        self.trail_surface.clear();
        render::draw_trail(&self.trail_surface, &self.trail);
        self.trail.decay();

        self.animator.tick(now_secs);
        audio::reap_sfx(&self.sfx, now_secs);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Ok(mut ctx) = frame_ctx_tick.try_borrow_mut() {
            ctx.frame();
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
