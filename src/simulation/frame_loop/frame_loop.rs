//! Frame loop - one `tick` per display refresh, scheduled by the host
//!
//! The loop never reschedules itself. Each live tick steps the scene,
//! renders it, and asks the `FrameScheduler` for exactly one more frame.
//! Cancelling through any `LoopHandle` clone makes later ticks no-ops.

use std::cell::Cell;
use std::rc::Rc;

use super::SceneCore;

/// Something that can request the next display frame
/// (`requestAnimationFrame` in the browser, a counter in tests)
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Records requests so tests and headless hosts can pump frames by hand
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualScheduler {
    pending: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> u32 { self.pending }

    /// Consume one pending request; false when none was queued
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = self.pending.saturating_add(1);
    }
}

/// For hosts that re-arm the frame callback themselves based on `tick`'s
/// return value
#[derive(Clone, Copy, Debug, Default)]
pub struct HostDriven;

impl FrameScheduler for HostDriven {
    fn request_frame(&mut self) {}
}

/// Cancel handle shared between the loop and whoever wants to stop it
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Host-scheduled frame loop.
///
/// At most one frame request is outstanding at a time: `pending` is set when
/// a frame is requested and cleared when `tick` consumes it. A loop starts
/// out idle until `start` arms it.
#[derive(Debug, Default)]
pub struct FrameLoop {
    handle: LoopHandle,
    armed: bool,
    pending: bool,
    ticks: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Armed by `start` and not cancelled since
    pub fn is_running(&self) -> bool {
        self.armed && !self.handle.is_cancelled()
    }

    /// A frame was requested and no tick has consumed it yet
    pub fn has_pending_frame(&self) -> bool { self.pending }

    /// Ticks that actually ran
    pub fn ticks(&self) -> u64 { self.ticks }

    /// Arm the loop and make sure one frame is queued.
    ///
    /// Starting a running loop changes nothing. A restart swaps in a fresh
    /// handle (handles from the previous run stay cancelled) and reuses a
    /// frame that is still queued instead of requesting another.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) -> LoopHandle {
        if !self.is_running() {
            self.handle = LoopHandle::default();
            self.armed = true;
        }
        if !self.pending {
            scheduler.request_frame();
            self.pending = true;
        }
        self.handle()
    }

    /// Disarm. A frame already queued still arrives and its tick is a no-op.
    pub fn stop(&mut self) {
        self.handle.cancel();
        self.armed = false;
    }

    /// Run one frame. Returns false (and schedules nothing) when the loop
    /// is not running.
    pub fn tick(&mut self, scene: &mut SceneCore, scheduler: &mut dyn FrameScheduler) -> bool {
        self.pending = false;
        if !self.is_running() {
            return false;
        }
        scene.step();
        scene.render();
        self.ticks += 1;
        scheduler.request_frame();
        self.pending = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> SceneCore {
        let mut scene = SceneCore::new(800.0, 600.0);
        scene.set_canvas_size(64, 64);
        scene
    }

    #[test]
    fn live_tick_steps_and_schedules_once() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();

        frame_loop.start(&mut scheduler);
        assert!(scheduler.take());

        assert!(frame_loop.tick(&mut scene, &mut scheduler));
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scene.frame(), 1);
        assert_eq!(frame_loop.ticks(), 1);
    }

    #[test]
    fn cancelled_loop_does_nothing() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();
        let handle = frame_loop.start(&mut scheduler);
        scheduler.take();

        handle.cancel();
        assert!(!frame_loop.is_running());
        assert!(!frame_loop.tick(&mut scene, &mut scheduler));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scene.frame(), 0);
    }

    #[test]
    fn restart_after_stop_gets_fresh_handle() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();
        let old = frame_loop.start(&mut scheduler);
        frame_loop.stop();

        let new = frame_loop.start(&mut scheduler);
        assert!(old.is_cancelled());
        assert!(!new.is_cancelled());
        assert!(scheduler.take());
        assert!(frame_loop.tick(&mut scene, &mut scheduler));
    }

    #[test]
    fn never_started_loop_is_idle() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();

        assert!(!frame_loop.is_running());
        assert!(!frame_loop.tick(&mut scene, &mut scheduler));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scene.frame(), 0);
    }

    #[test]
    fn double_start_queues_one_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();

        let first = frame_loop.start(&mut scheduler);
        let second = frame_loop.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);
        assert!(!first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(frame_loop.is_running());
    }

    /// Fire every queued frame once per display refresh, like the browser does
    fn refresh(frame_loop: &mut FrameLoop, scene: &mut SceneCore, scheduler: &mut ManualScheduler) {
        let due = scheduler.pending();
        for _ in 0..due {
            scheduler.take();
            frame_loop.tick(scene, scheduler);
        }
    }

    #[test]
    fn stop_then_start_keeps_a_single_chain() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();
        frame_loop.start(&mut scheduler);
        refresh(&mut frame_loop, &mut scene, &mut scheduler);
        assert_eq!(scene.frame(), 1);

        // Restart while the next frame is still queued
        frame_loop.stop();
        frame_loop.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);

        for _ in 0..10 {
            refresh(&mut frame_loop, &mut scene, &mut scheduler);
        }
        assert_eq!(scene.frame(), 11);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn start_after_stale_frame_drained_requests_again() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();
        frame_loop.start(&mut scheduler);
        frame_loop.stop();

        // The queued frame still fires but does nothing
        assert!(scheduler.take());
        assert!(!frame_loop.tick(&mut scene, &mut scheduler));
        assert!(!frame_loop.has_pending_frame());

        frame_loop.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);
        for _ in 0..5 {
            refresh(&mut frame_loop, &mut scene, &mut scheduler);
        }
        assert_eq!(scene.frame(), 5);
    }

    #[test]
    fn pumping_manual_scheduler_runs_frames() {
        let mut scene = scene();
        let mut scheduler = ManualScheduler::new();
        let mut frame_loop = FrameLoop::new();
        frame_loop.start(&mut scheduler);

        let mut ran = 0;
        while scheduler.take() && ran < 10 {
            frame_loop.tick(&mut scene, &mut scheduler);
            ran += 1;
        }
        assert_eq!(ran, 10);
        assert_eq!(scene.frame(), 10);
    }
}
