//! In-memory [`SceneEngine`] that records the node graph instead of
//! drawing it. Used by the binary and the tests.

use std::path::{Path, PathBuf};

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use super::engine::{
    ModelHandle, NodeDesc, NodeId, NodeKind, Outline, SceneEngine,
    TextureHandle,
};
use super::Transform;
use crate::error::SceneError;
use crate::lighting::LightConfig;
use crate::options::{BloomOptions, CameraOptions};
use crate::util::Color;

/// A node as the headless engine currently holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineNode {
    /// Debug label.
    pub label: String,
    /// Node content (light parameters are kept current).
    pub kind: NodeKind,
    /// Parent node, `None` at the scene root.
    pub parent: Option<NodeId>,
    /// Latest local transform.
    pub transform: Transform,
    /// Outline currently shown, if any.
    pub outline: Option<Outline>,
    /// Shadow casting flag.
    pub cast_shadow: bool,
    /// Shadow receiving flag.
    pub receive_shadow: bool,
}

/// Environment map binding as last set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentBinding {
    /// Bound texture.
    pub texture: TextureHandle,
    /// Lighting strength.
    pub intensity: f32,
    /// Whether it is drawn as the background.
    pub background: bool,
}

/// Recording engine.
///
/// Asset loads succeed for any path unless an asset root is set, in which
/// case the path (leading `/` stripped) must name an existing file under
/// the root.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    nodes: FxHashMap<NodeId, EngineNode>,
    next_node: u32,
    models: FxHashMap<String, ModelHandle>,
    textures: FxHashMap<String, TextureHandle>,
    asset_root: Option<PathBuf>,
    camera: Option<CameraOptions>,
    bloom: Option<BloomOptions>,
    environment: Option<EnvironmentBinding>,
    ambient: Option<(Color, f32)>,
    background: Option<Color>,
    transform_writes: u64,
}

impl HeadlessEngine {
    /// Engine that accepts every asset path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that only loads assets present under `root`.
    #[must_use]
    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: Some(root.into()),
            ..Self::default()
        }
    }

    fn check_asset(&self, path: &str) -> Result<(), SceneError> {
        let Some(root) = &self.asset_root else {
            return Ok(());
        };
        let resolved = root.join(Path::new(path.trim_start_matches('/')));
        if resolved.is_file() {
            Ok(())
        } else {
            Err(SceneError::AssetLoad {
                path: path.to_owned(),
                reason: format!("{} not found", resolved.display()),
            })
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut EngineNode, SceneError> {
        self.nodes.get_mut(&id).ok_or(SceneError::UnknownNode(id))
    }

    // ── Inspection ──

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&EngineNode> {
        self.nodes.get(&id)
    }

    /// Ids of all nodes with `label`, in attach order.
    #[must_use]
    pub fn nodes_labelled(&self, label: &str) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.label == label)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Direct children of `id`, in attach order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.parent == Some(id))
            .map(|(child, _)| *child)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of attached nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of light nodes.
    #[must_use]
    pub fn light_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node.kind, NodeKind::Light(_)))
            .count()
    }

    /// Nodes currently showing an outline.
    #[must_use]
    pub fn outlined(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.outline.is_some())
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// World matrix of `id`, composing every ancestor's local transform.
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.nodes.get(&id)?;
        let mut world = node.transform.matrix();
        while let Some(parent) = node.parent {
            node = self.nodes.get(&parent)?;
            world = node.transform.matrix() * world;
        }
        Some(world)
    }

    /// World-space origin of `id`.
    #[must_use]
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Distinct models loaded so far.
    #[must_use]
    pub fn loaded_models(&self) -> usize {
        self.models.len()
    }

    /// Total successful `set_transform` calls.
    #[must_use]
    pub fn transform_writes(&self) -> u64 {
        self.transform_writes
    }

    /// Camera as last configured.
    #[must_use]
    pub fn camera(&self) -> Option<&CameraOptions> {
        self.camera.as_ref()
    }

    /// Bloom as last configured.
    #[must_use]
    pub fn bloom(&self) -> Option<&BloomOptions> {
        self.bloom.as_ref()
    }

    /// Environment binding as last set.
    #[must_use]
    pub fn environment(&self) -> Option<EnvironmentBinding> {
        self.environment
    }

    /// Ambient light color and intensity as last set.
    #[must_use]
    pub fn ambient(&self) -> Option<(Color, f32)> {
        self.ambient
    }

    /// Background clear color as last set.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl SceneEngine for HeadlessEngine {
    fn attach(&mut self, desc: NodeDesc) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        log::trace!("attach {id} {:?}", desc.label);
        let _ = self.nodes.insert(
            id,
            EngineNode {
                label: desc.label,
                kind: desc.kind,
                parent: desc.parent,
                transform: desc.transform,
                outline: None,
                cast_shadow: desc.cast_shadow,
                receive_shadow: desc.receive_shadow,
            },
        );
        id
    }

    fn detach(&mut self, id: NodeId) {
        if self.nodes.remove(&id).is_none() {
            return;
        }
        let mut doomed = vec![id];
        while let Some(parent) = doomed.pop() {
            let children: Vec<NodeId> = self
                .nodes
                .iter()
                .filter(|(_, node)| node.parent == Some(parent))
                .map(|(child, _)| *child)
                .collect();
            for child in children {
                let _ = self.nodes.remove(&child);
                doomed.push(child);
            }
        }
        log::trace!("detach {id}");
    }

    fn set_transform(
        &mut self,
        id: NodeId,
        transform: &Transform,
    ) -> Result<(), SceneError> {
        self.node_mut(id)?.transform = *transform;
        self.transform_writes += 1;
        Ok(())
    }

    fn set_light(
        &mut self,
        id: NodeId,
        light: &LightConfig,
    ) -> Result<(), SceneError> {
        let node = self.node_mut(id)?;
        if matches!(node.kind, NodeKind::Light(_)) {
            node.kind = NodeKind::Light(*light);
        } else {
            log::warn!("set_light on non-light node {id} ({})", node.label);
        }
        Ok(())
    }

    fn set_outline(
        &mut self,
        id: NodeId,
        outline: Option<Outline>,
    ) -> Result<(), SceneError> {
        self.node_mut(id)?.outline = outline;
        Ok(())
    }

    fn load_model(&mut self, path: &str) -> Result<ModelHandle, SceneError> {
        if let Some(handle) = self.models.get(path) {
            return Ok(*handle);
        }
        self.check_asset(path)?;
        let handle = ModelHandle(u32::try_from(self.models.len()).unwrap_or(u32::MAX));
        let _ = self.models.insert(path.to_owned(), handle);
        log::debug!("loaded model {path}");
        Ok(handle)
    }

    fn load_environment_map(
        &mut self,
        path: &str,
    ) -> Result<TextureHandle, SceneError> {
        if let Some(handle) = self.textures.get(path) {
            return Ok(*handle);
        }
        self.check_asset(path)?;
        let handle =
            TextureHandle(u32::try_from(self.textures.len()).unwrap_or(u32::MAX));
        let _ = self.textures.insert(path.to_owned(), handle);
        log::debug!("loaded environment map {path}");
        Ok(handle)
    }

    fn set_environment(
        &mut self,
        texture: TextureHandle,
        intensity: f32,
        background: bool,
    ) {
        self.environment = Some(EnvironmentBinding {
            texture,
            intensity,
            background,
        });
    }

    fn set_ambient_light(&mut self, color: Color, intensity: f32) {
        self.ambient = Some((color, intensity));
    }

    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn configure_camera(&mut self, camera: &CameraOptions) {
        self.camera = Some(camera.clone());
    }

    fn configure_bloom(&mut self, bloom: &BloomOptions) {
        self.bloom = Some(bloom.clone());
    }
}
