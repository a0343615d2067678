//! Navigable objects and how they appear in the scene

use bevy::prelude::*;
use orrery_core::{AnchorKind, TargetId};
use orrery_scene::picking::SelectionHotkeys;
use orrery_scene::{FloatingMotion, NavTarget};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ObjectConfig;

/// Kind of celestial object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    Star,
    Planet,
    Nebula,
    BlackHole,
    SpaceStation,
}

impl ObjectClass {
    /// Nebulae drift on their own; everything else stays put
    pub fn anchor_kind(self) -> AnchorKind {
        match self {
            Self::Nebula => AnchorKind::Dynamic,
            _ => AnchorKind::Static,
        }
    }

    fn base_color(self) -> Color {
        match self {
            Self::Star => Color::srgb(1.0, 0.85, 0.4),
            Self::Planet => Color::srgb(0.3, 0.55, 0.9),
            Self::Nebula => Color::srgba(0.75, 0.35, 0.95, 0.6),
            Self::BlackHole => Color::srgb(0.02, 0.02, 0.02),
            Self::SpaceStation => Color::srgb(0.6, 0.6, 0.65),
        }
    }

    fn emissive(self) -> LinearRgba {
        match self {
            Self::Star => LinearRgba::rgb(8.0, 6.0, 2.0),
            Self::Nebula => LinearRgba::rgb(0.6, 0.2, 0.9),
            Self::BlackHole => LinearRgba::rgb(0.8, 0.3, 0.0),
            Self::Planet | Self::SpaceStation => LinearRgba::BLACK,
        }
    }
}

/// Display names of the spawned objects, by id
#[derive(Resource, Debug, Default)]
pub struct Catalog {
    names: Vec<(TargetId, String)>,
}

impl Catalog {
    pub fn from_objects(objects: &[ObjectConfig]) -> Self {
        Self {
            names: objects
                .iter()
                .map(|o| (TargetId::new(o.id.clone()), o.name.clone()))
                .collect(),
        }
    }

    pub fn name(&self, id: &TargetId) -> Option<&str> {
        self.names
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, name)| name.as_str())
    }

    /// Ids in catalog order, for the number-key hotkeys
    pub fn hotkeys(&self) -> SelectionHotkeys {
        SelectionHotkeys(self.names.iter().map(|(id, _)| id.clone()).collect())
    }
}

/// Spawn one sphere per configured object
pub fn spawn_objects(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    objects: &[ObjectConfig],
) {
    for object in objects {
        let position = Vec3::from_array(object.position);
        let kind = object.class.anchor_kind();

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(object.size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: object.class.base_color(),
                emissive: object.class.emissive(),
                alpha_mode: if object.class == ObjectClass::Nebula {
                    AlphaMode::Blend
                } else {
                    AlphaMode::Opaque
                },
                ..default()
            })),
            Transform::from_translation(position),
            NavTarget {
                id: TargetId::new(object.id.clone()),
                kind,
                pick_radius: object.size * 1.2,
            },
            Name::new(object.name.clone()),
        ));

        if kind == AnchorKind::Dynamic {
            entity.insert(FloatingMotion::new(position));
        }

        if object.class == ObjectClass::Star {
            entity.with_children(|parent| {
                parent.spawn(PointLight {
                    intensity: 5.0e8,
                    range: 2000.0,
                    shadows_enabled: false,
                    ..default()
                });
            });
        }
    }

    info!(count = objects.len(), "Spawned navigable objects");
}
