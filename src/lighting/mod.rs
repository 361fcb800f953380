//! Scene lights: fixed, floating, hover-triggered and the orbiting rig.

/// Orbiting, bobbing light.
pub mod floating;
/// Point light shown while a subtree is hovered.
pub mod hover_light;
/// Light parameters shared by every light component.
pub mod light;
pub mod orbit_rig;
/// Light at a fixed position.
pub mod static_light;

pub use floating::FloatingLight;
pub use hover_light::HoverLight;
pub use light::{LightConfig, LightKind};
pub use orbit_rig::{OrbitLightConfig, OrbitLightRig};
pub use static_light::StaticLight;

use std::cell::Cell;
use std::rc::Rc;

use crate::scene::engine::{NodeDesc, NodeId, NodeKind, SceneEngine};
use crate::scene::Transform;
use crate::util::Color;

/// Size of the debug marker attached to lights with helpers on.
const HELPER_SIZE: f32 = 0.05;

/// Attach a light node (and optionally a helper marker under it).
fn attach_light(
    engine: &mut dyn SceneEngine,
    label: &str,
    parent: Option<NodeId>,
    light: LightConfig,
    transform: Transform,
    helper: bool,
) -> (NodeId, Option<NodeId>) {
    let node = engine.attach(
        NodeDesc::new(label, NodeKind::Light(light))
            .with_parent(parent)
            .with_transform(transform)
            .with_shadows(light.cast_shadow, false),
    );
    let helper = helper.then(|| {
        engine.attach(
            NodeDesc::new(
                format!("{label} helper"),
                NodeKind::Helper {
                    color: light.color,
                    size: HELPER_SIZE,
                },
            )
            .with_parent(Some(node)),
        )
    });
    (node, helper)
}

/// Shared handle to a mounted light's parameters.
///
/// Writers only record the new config; the light pushes it to the engine
/// on its next tick. Clones share the same cell.
#[derive(Debug, Clone)]
pub struct LightControl(Rc<Cell<LightConfig>>);

impl LightControl {
    /// Control starting at `config`.
    #[must_use]
    pub fn new(config: LightConfig) -> Self {
        Self(Rc::new(Cell::new(config)))
    }

    /// Current parameters.
    #[must_use]
    pub fn get(&self) -> LightConfig {
        self.0.get()
    }

    /// Replace the parameters.
    pub fn set(&self, config: LightConfig) {
        self.0.set(config);
    }

    /// Change only the intensity.
    pub fn set_intensity(&self, intensity: f32) {
        self.set(LightConfig {
            intensity,
            ..self.get()
        });
    }

    /// Change only the color.
    pub fn set_color(&self, color: Color) {
        self.set(LightConfig {
            color,
            ..self.get()
        });
    }

    /// Push pending changes to `node`. `applied` tracks what the engine
    /// last received.
    fn sync(
        &self,
        engine: &mut dyn SceneEngine,
        node: NodeId,
        applied: &mut LightConfig,
    ) {
        let wanted = self.get();
        if wanted == *applied {
            return;
        }
        if let Err(e) = engine.set_light(node, &wanted) {
            log::warn!("light update failed: {e}");
        }
        *applied = wanted;
    }
}
