use bevy::prelude::*;

/// Enumeration of the customizable shoe parts.
///
/// Declaration order is the canonical order for the order summary. Scene
/// meshes whose name is not in this set are inert geometry and never receive
/// hover or selection feedback.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartName {
    Laces,
    Inside,
    Outside1,
    Outside2,
    Outside3,
    SoleBottom,
    SoleTop,
}

impl PartName {
    pub const ALL: [PartName; 7] = [
        Self::Laces,
        Self::Inside,
        Self::Outside1,
        Self::Outside2,
        Self::Outside3,
        Self::SoleBottom,
        Self::SoleTop,
    ];

    /// Match a scene node name against the part set.
    ///
    /// Gltf primitive entities carry the mesh name with a `.N` suffix, so the
    /// suffix is stripped before matching.
    pub fn from_mesh_name(name: &str) -> Option<Self> {
        let base = name.split('.').next().unwrap_or(name);
        match base {
            "laces" => Some(Self::Laces),
            "inside" => Some(Self::Inside),
            "outside_1" => Some(Self::Outside1),
            "outside_2" => Some(Self::Outside2),
            "outside_3" => Some(Self::Outside3),
            "sole_bottom" => Some(Self::SoleBottom),
            "sole_top" => Some(Self::SoleTop),
            _ => None,
        }
    }

    /// Part identifier as it appears in mesh names, reports, and RPC payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laces => "laces",
            Self::Inside => "inside",
            Self::Outside1 => "outside_1",
            Self::Outside2 => "outside_2",
            Self::Outside3 => "outside_3",
            Self::SoleBottom => "sole_bottom",
            Self::SoleTop => "sole_top",
        }
    }
}
