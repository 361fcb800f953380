//! The scene-graph engine seam.
//!
//! Everything that actually draws pixels, decodes assets or hit-tests the
//! pointer lives behind [`SceneEngine`]. The core only attaches nodes,
//! pushes transforms and light parameters, and asks for assets by path.

use std::fmt;

use crate::error::SceneError;
use crate::lighting::LightConfig;
use crate::options::{BloomOptions, CameraOptions};
use crate::scene::Transform;
use crate::util::Color;

/// Engine-assigned node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a loaded model scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u32);

/// Handle to a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// What a node renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Empty transform group.
    Group,
    /// Instance of a loaded model.
    Model(ModelHandle),
    /// Light source.
    Light(LightConfig),
    /// Small debug marker drawn at a light.
    Helper {
        /// Marker color.
        color: Color,
        /// Marker size in world units.
        size: f32,
    },
    /// Flat unlit disc.
    Circle {
        /// Disc radius.
        radius: f32,
        /// Edge segment count.
        segments: u32,
        /// Fill color.
        color: Color,
        /// Whether tone mapping applies; unmapped white feeds bloom.
        tone_mapped: bool,
    },
}

/// Description of a node to attach.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDesc {
    /// Debug label.
    pub label: String,
    /// Node content.
    pub kind: NodeKind,
    /// Parent node, or `None` for the scene root.
    pub parent: Option<NodeId>,
    /// Initial local transform.
    pub transform: Transform,
    /// Whether meshes under this node cast shadows.
    pub cast_shadow: bool,
    /// Whether meshes under this node receive shadows.
    pub receive_shadow: bool,
}

impl NodeDesc {
    /// Node of `kind` at the scene root with an identity transform.
    pub fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            kind,
            parent: None,
            transform: Transform::new(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Empty group node.
    pub fn group(label: impl Into<String>) -> Self {
        Self::new(label, NodeKind::Group)
    }

    /// Same node under `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: Option<NodeId>) -> Self {
        self.parent = parent;
        self
    }

    /// Same node with an initial transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Same node with shadow flags.
    #[must_use]
    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }
}

/// Selection outline drawn around a node's meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Outline color.
    pub color: Color,
    /// Outline thickness in world units.
    pub thickness: f32,
}

/// The external scene-graph engine.
pub trait SceneEngine {
    /// Attach a node and return its id.
    fn attach(&mut self, desc: NodeDesc) -> NodeId;

    /// Detach a node and everything under it. Unknown ids are ignored.
    fn detach(&mut self, id: NodeId);

    /// Replace a node's local transform.
    fn set_transform(
        &mut self,
        id: NodeId,
        transform: &Transform,
    ) -> Result<(), SceneError>;

    /// Replace a light node's parameters.
    fn set_light(
        &mut self,
        id: NodeId,
        light: &LightConfig,
    ) -> Result<(), SceneError>;

    /// Show or hide a selection outline around a node.
    fn set_outline(
        &mut self,
        id: NodeId,
        outline: Option<Outline>,
    ) -> Result<(), SceneError>;

    /// Load a model; repeated paths may share a handle.
    fn load_model(&mut self, path: &str) -> Result<ModelHandle, SceneError>;

    /// Load an equirectangular environment map.
    fn load_environment_map(
        &mut self,
        path: &str,
    ) -> Result<TextureHandle, SceneError>;

    /// Use `texture` for image-based lighting (and optionally as the
    /// background).
    fn set_environment(
        &mut self,
        texture: TextureHandle,
        intensity: f32,
        background: bool,
    );

    /// Set the scene-wide ambient light.
    fn set_ambient_light(&mut self, color: Color, intensity: f32);

    /// Set the background clear color.
    fn set_background(&mut self, color: Color);

    /// Configure the perspective camera.
    fn configure_camera(&mut self, camera: &CameraOptions);

    /// Configure the bloom pass.
    fn configure_bloom(&mut self, bloom: &BloomOptions);
}

/// Push `transform` to `node`, logging instead of failing if the engine no
/// longer knows the node.
pub(crate) fn publish(
    engine: &mut dyn SceneEngine,
    node: Option<NodeId>,
    transform: &Transform,
) {
    let Some(id) = node else {
        return;
    };
    if let Err(e) = engine.set_transform(id, transform) {
        log::debug!("skipping transform update: {e}");
    }
}
