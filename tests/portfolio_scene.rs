//! End-to-end scenarios for the composed portfolio scene, driven through
//! the recording engine.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{EulerRot, Quat, Vec2, Vec3};
use starfolio::input::{CursorStyle, PointerEvent};
use starfolio::interaction::{
    CursorContext, CursorHost, Interaction, LinkOpener,
};
use starfolio::options::{FloatingPlatformOptions, SceneOptions};
use starfolio::scene::{
    compose, HeadlessEngine, NodeId, Scene, SceneHandles,
};
use starfolio::util::FrameTiming;
use starfolio::SceneError;

const STEP: f32 = 1.0 / 60.0;
const ROCK: &str = "/models/rock_1.glb";

#[derive(Clone, Default)]
struct CursorLog(Rc<RefCell<Vec<CursorStyle>>>);

impl CursorHost for CursorLog {
    fn set_cursor(&mut self, style: CursorStyle) {
        self.0.borrow_mut().push(style);
    }
}

#[derive(Default)]
struct Opened(RefCell<Vec<String>>);

impl LinkOpener for Opened {
    fn open(&self, url: &str, _target: &str) -> Result<(), SceneError> {
        self.0.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

struct Harness {
    scene: Scene<HeadlessEngine>,
    handles: SceneHandles,
    timing: FrameTiming,
    cursor: CursorLog,
    opened: Rc<Opened>,
    interaction: Interaction,
}

impl Harness {
    fn new(options: &SceneOptions) -> Self {
        let cursor = CursorLog::default();
        let opened = Rc::new(Opened::default());
        let opener: Rc<dyn LinkOpener> = Rc::<Opened>::clone(&opened);
        let interaction =
            Interaction::new(CursorContext::new(cursor.clone()), opener);
        let mut scene = Scene::new(HeadlessEngine::new());
        scene.resize(1280.0, 720.0);
        let handles = compose(&mut scene, options, &interaction).unwrap();
        Self {
            scene,
            handles,
            timing: FrameTiming::new(60),
            cursor,
            opened,
            interaction,
        }
    }

    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            let clock = self.timing.step(STEP);
            self.scene.frame(clock);
        }
    }

    fn send(&mut self, event: PointerEvent) {
        let rock = self.handles.interactive.unwrap();
        assert!(self.scene.dispatch(rock, event));
    }

    fn node(&self, label: &str) -> NodeId {
        self.scene.engine().nodes_labelled(label)[0]
    }

    fn local_position(&self, label: &str) -> Vec3 {
        let id = self.node(label);
        self.scene.engine().node(id).unwrap().transform.position
    }
}

#[test]
fn orbiter_circles_the_origin_at_radius_three() {
    let mut h = Harness::new(&SceneOptions::default());
    let mut seen = Vec::new();
    for _ in 0..5 {
        h.frames(30);
        let p = h.local_position("orbiter");
        let flat = Vec2::new(p.x, p.z);
        assert!((flat.length() - 3.0).abs() < 1e-4, "radius {}", flat.length());
        // Bob keeps y within its amplitude.
        assert!(p.y.abs() <= 0.2 + 1e-5);
        seen.push(p);
    }
    assert!(seen.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn hover_freezes_orbit_and_leave_resumes() {
    let mut h = Harness::new(&SceneOptions::default());
    h.frames(10);
    h.send(PointerEvent::Enter);
    assert!(h.handles.interactive_pause.is_paused());

    let frozen = h.local_position("orbiter");
    h.frames(20);
    assert_eq!(h.local_position("orbiter"), frozen);
    // Rotators are not paused by the clickable.
    let spin_before = h
        .scene
        .engine()
        .node(h.node("rotator"))
        .unwrap()
        .transform
        .rotation;
    h.frames(1);
    let spin_after = h
        .scene
        .engine()
        .node(h.node("rotator"))
        .unwrap()
        .transform
        .rotation;
    assert_ne!(spin_before, spin_after);

    h.send(PointerEvent::Leave);
    assert!(!h.handles.interactive_pause.is_paused());
    h.frames(1);
    assert_ne!(h.local_position("orbiter"), frozen);
}

#[test]
fn click_opens_the_link_once_and_tooltip_tracks_pointer() {
    let mut h = Harness::new(&SceneOptions::default());
    h.send(PointerEvent::Enter);
    h.send(PointerEvent::Move { x: 100.0, y: 50.0 });
    h.send(PointerEvent::Click);
    assert_eq!(
        *h.opened.0.borrow(),
        vec!["https://www.linkedin.com/in/shaheerulislam/".to_owned()]
    );

    let overlays = h.scene.overlays();
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].text, "Visit LinkedIn");
    assert_eq!((overlays[0].left, overlays[0].top), (116.0, 66.0));

    h.send(PointerEvent::Leave);
    assert!(h.scene.overlays().is_empty());
}

#[test]
fn outline_and_cursor_follow_hover() {
    let mut h = Harness::new(&SceneOptions::default());
    h.send(PointerEvent::Enter);
    assert_eq!(h.interaction.cursor.current(), CursorStyle::Pointer);
    h.frames(1);
    assert_eq!(h.scene.engine().outlined(), vec![h.node("clickable")]);

    h.send(PointerEvent::Leave);
    h.frames(1);
    assert!(h.scene.engine().outlined().is_empty());
    assert_eq!(
        *h.cursor.0.borrow(),
        vec![CursorStyle::Pointer, CursorStyle::Default]
    );
}

#[test]
fn unmounting_while_hovered_restores_the_cursor() {
    let mut h = Harness::new(&SceneOptions::default());
    h.send(PointerEvent::Enter);
    let rock = h.handles.interactive.unwrap();
    assert!(h.scene.unmount(rock));
    assert_eq!(h.interaction.cursor.current(), CursorStyle::Default);
    assert_eq!(h.interaction.cursor.active_requests(), 0);
    assert!(h.scene.engine().nodes_labelled("orbiter").is_empty());
}

#[test]
fn orbit_rig_lights_exist_only_while_hovered() {
    let mut options = SceneOptions::default();
    options.interactive.orbit_lights.enabled = true;
    options.interactive.orbit_lights.show_helpers = false;
    let mut h = Harness::new(&options);
    let count = |h: &Harness| {
        h.scene.engine().nodes_labelled("orbit rig light").len()
    };

    h.frames(5);
    assert_eq!(count(&h), 0);

    h.send(PointerEvent::Enter);
    assert_eq!(count(&h), 0, "events must not touch the engine");
    h.frames(1);
    assert_eq!(count(&h), 6);

    h.frames(45);
    let engine = h.scene.engine();
    let rock = engine.world_position(h.node(ROCK)).unwrap();
    assert!(rock.length() > 2.5, "rock at {rock}");
    for id in engine.nodes_labelled("orbit rig light") {
        let p = engine.world_position(id).unwrap();
        assert!(((p - rock).length() - 2.0).abs() < 1e-4, "light at {p}");
    }

    h.send(PointerEvent::Leave);
    h.frames(1);
    assert_eq!(count(&h), 0);
}

#[test]
fn hover_light_switches_with_hover() {
    let mut options = SceneOptions::default();
    options.interactive.hover_light.enabled = true;
    let mut h = Harness::new(&options);
    let lights = h.scene.engine().light_count();

    h.frames(30);
    h.send(PointerEvent::Enter);
    h.frames(1);
    let engine = h.scene.engine();
    assert_eq!(engine.light_count(), lights + 1);
    // The wrapper group and its light share a label; the light attached
    // last.
    let light = *engine.nodes_labelled("hover light").last().unwrap();
    let rock = engine.world_position(h.node(ROCK)).unwrap();
    let p = engine.world_position(light).unwrap();
    assert!(((p - rock).length() - 1.0).abs() < 1e-4, "light at {p}");
    h.send(PointerEvent::Leave);
    h.frames(1);
    assert_eq!(h.scene.engine().light_count(), lights);
}

#[test]
fn mouse_circle_eases_toward_the_pointer() {
    let mut h = Harness::new(&SceneOptions::default());
    // Right edge, vertical middle: target (5, 0).
    h.scene.pointer_moved(1280.0, 360.0);
    h.frames(1);
    let first = h.local_position("mouse circle");
    assert!((first.x - 0.25).abs() < 1e-5);

    h.frames(119);
    let p = h.local_position("mouse circle");
    assert!(p.x > 4.9 && p.x < 5.0);
    assert!(p.y.abs() < 1e-5);
    assert_eq!(p.z, 0.0);
}

#[test]
fn floating_light_stays_in_its_band() {
    let mut h = Harness::new(&SceneOptions::default());
    for _ in 0..200 {
        h.frames(1);
        let y = h.local_position("floating light").y;
        // target.y + height ± vertical_amp
        assert!((1.95 - 1e-4..=2.45 + 1e-4).contains(&y), "y = {y}");
    }
}

#[test]
fn floating_platform_drifts_around_its_target() {
    let mut options = SceneOptions::default();
    let mut drifting = FloatingPlatformOptions {
        target: [0.0, 0.0, 0.0],
        orbit_radius: 2.0,
        orbit_speed: 0.5,
        bob_intensity: 0.1,
        rotate_speed: 0.5,
        ..FloatingPlatformOptions::default()
    };
    drifting.platform.path = "/models/drift.glb".to_owned();
    drifting.platform.position = [0.0, 1.5, 0.0];
    drifting.platform.rotation = [0.4, 0.0, 0.0];
    options.floating_platforms.push(drifting);

    let mut h = Harness::new(&options);
    assert_eq!(h.handles.floating_platforms.len(), 1);

    for _ in 0..120 {
        h.frames(1);
        let p = h.local_position("/models/drift.glb");
        assert!((1.4 - 1e-5..=1.6 + 1e-5).contains(&p.y), "y = {p}");
        assert!((Vec2::new(p.x, p.z).length() - 2.0).abs() < 1e-4);
    }

    // 120 ticks of 1/60 s at 0.5 rad/s of spin.
    let id = h.node("/models/drift.glb");
    let rotation = h.scene.engine().node(id).unwrap().transform.rotation;
    let expected = Quat::from_euler(EulerRot::XYZ, 0.4, 1.0, 0.0);
    assert!(rotation.abs_diff_eq(expected, 1e-4), "{rotation}");
}
