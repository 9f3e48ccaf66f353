//! Element animation scheduler driven by the render loop.
//!
//! Each job owns one element and one [`Timeline`]. Jobs are independent
//! one-shot tasks: when a timeline completes the job runs its [`Done`]
//! action and is dropped, so nothing outlives its own animation.

use cake_core::{Pose, Timeline};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Done {
    Keep,
    Remove,
}

struct Job {
    el: web::HtmlElement,
    timeline: Timeline,
    started: f64,
    last: Pose,
    done: Done,
}

impl Job {
    fn apply(&mut self, now: f64) -> bool {
        let elapsed = (now - self.started) as f32;
        let pose = self.timeline.sample(elapsed);
        write_pose(&self.el, &pose);
        self.last = pose;
        self.timeline.is_done(elapsed)
    }
}

fn same_element(a: &web::HtmlElement, b: &web::Node) -> bool {
    a.is_same_node(Some(b))
}

pub fn write_pose(el: &web::HtmlElement, pose: &Pose) {
    let style = el.style();
    _ = style.set_property("transform", &pose.css_transform());
    _ = style.set_property("opacity", &pose.css_opacity());
}

#[derive(Default)]
pub struct Animator {
    jobs: Vec<Job>,
}

impl Animator {
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Schedule `timeline` on `el`, rendering its first frame immediately.
    pub fn add(&mut self, el: web::HtmlElement, timeline: Timeline, now: f64, done: Done) {
        let mut job = Job {
            last: timeline.base,
            el,
            timeline,
            started: now,
            done,
        };
        job.apply(now);
        self.jobs.push(job);
    }

    /// Replace any job already animating `el`. `build` receives the pose the
    /// element was last drawn with, so the new timeline can start from it.
    pub fn replace(
        &mut self,
        el: web::HtmlElement,
        build: impl FnOnce(Pose) -> Timeline,
        now: f64,
        done: Done,
    ) {
        let mut current = Pose::default();
        self.jobs.retain(|j| {
            if same_element(&j.el, &el) {
                current = j.last;
                false
            } else {
                true
            }
        });
        self.add(el, build(current), now, done);
    }

    /// Drop any job animating `el` without running its [`Done`] action.
    pub fn cancel(&mut self, el: &web::Node) {
        self.jobs.retain(|j| !same_element(&j.el, el));
    }

    pub fn tick(&mut self, now: f64) {
        let mut finished = Vec::new();
        let mut i = 0;
        while i < self.jobs.len() {
            if self.jobs[i].apply(now) {
                finished.push(self.jobs.swap_remove(i));
            } else {
                i += 1;
            }
        }
        for job in finished {
            match job.done {
                Done::Keep => {}
                Done::Remove => job.el.remove(),
            }
        }
    }
}
