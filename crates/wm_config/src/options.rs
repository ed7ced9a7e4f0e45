use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wm_core::{ArrowId, CellLevel, TechCategory, TechGroup, TintColor};

/// Slider bounds and step for a numeric option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn as_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}

pub const ARROW_COUNT_RANGE: SliderRange = SliderRange::new(1.0, 10.0, 1.0);
pub const INTENSITY_RANGE: SliderRange = SliderRange::new(-4.0, 4.0, 0.1);
pub const SCALE_RANGE: SliderRange = SliderRange::new(0.0, 10.0, 0.1);
pub const PLACE_DEFAULT_DISTANCE_RANGE: SliderRange = SliderRange::new(0.0, 10.0, 1.0);
pub const PLACE_MAX_DISTANCE_RANGE: SliderRange = SliderRange::new(0.0, 30.0, 1.0);
pub const ICON_ALPHA_RANGE: SliderRange = SliderRange::new(0.0, 1.0, 0.01);

/// Options shared by every arrow. Changes need a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Number of different arrows to register.
    pub number_of_arrows: u32,
    /// Group tab in the builder tool.
    pub tech_group: TechGroup,
    /// Category tab in the builder tool.
    pub tech_category: TechCategory,
    /// Distance level the prefab stays visible at before unloading.
    pub cell_level: CellLevel,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            number_of_arrows: 1,
            tech_group: TechGroup::default(),
            tech_category: TechCategory::default(),
            cell_level: CellLevel::default(),
        }
    }
}

/// Per-arrow options. Every field is persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    pub name: String,
    pub description: String,
    /// sRGBA color of the model and the tint of the catalog icon.
    pub color: [f32; 4],
    /// Emission intensity exponent: emission = color * 2^intensity.
    pub intensity: f32,
    pub scale: [f32; 3],
    pub place_default_distance: f32,
    pub place_max_distance: f32,
    pub force_upright: bool,
    /// Trigger collider so the player can walk through the arrow.
    pub is_hologram: bool,
    /// File name of the catalog icon, relative to the assets folder.
    pub icon_file: String,
    /// Tint the catalog icon with `color`.
    pub change_icon_color: bool,
    /// Alpha scale of the catalog icon, 0 (transparent) to 1 (opaque).
    pub icon_alpha: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: "Directional arrow.".to_string(),
            color: [0.0, 1.0, 0.0, 1.0],
            intensity: 0.0,
            scale: [1.0, 1.0, 1.0],
            place_default_distance: 3.0,
            place_max_distance: 5.0,
            force_upright: false,
            is_hologram: false,
            icon_file: "arrow.png".to_string(),
            change_icon_color: true,
            icon_alpha: 0.8,
        }
    }
}

impl ArrowConfig {
    /// Default options for the arrow with the given id.
    pub fn new(id: ArrowId) -> Self {
        Self {
            name: default_name(id),
            ..default()
        }
    }

    pub fn color(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::srgba(r, g, b, a)
    }

    pub fn set_color(&mut self, color: Color) {
        let srgba = color.to_srgba();
        self.color = [srgba.red, srgba.green, srgba.blue, srgba.alpha];
    }

    /// Emission color: the base color scaled by 2^intensity in linear space.
    pub fn emissive(&self) -> LinearRgba {
        let linear = self.color().to_linear();
        let factor = 2f32.powf(self.intensity);
        LinearRgba::rgb(
            linear.red * factor,
            linear.green * factor,
            linear.blue * factor,
        )
    }

    /// Tint used for the catalog icon.
    pub fn icon_tint(&self) -> TintColor {
        let [r, g, b, _] = self.color;
        TintColor::new(r, g, b, self.icon_alpha)
    }

    pub fn scale_vec(&self) -> Vec3 {
        Vec3::from_array(self.scale)
    }

    /// Clamp every ranged value into its slider range.
    pub fn clamp(&mut self) {
        self.intensity = INTENSITY_RANGE.clamp(self.intensity);
        for axis in &mut self.scale {
            *axis = SCALE_RANGE.clamp(*axis);
        }
        self.place_default_distance = PLACE_DEFAULT_DISTANCE_RANGE.clamp(self.place_default_distance);
        self.place_max_distance = PLACE_MAX_DISTANCE_RANGE.clamp(self.place_max_distance);
        self.icon_alpha = ICON_ALPHA_RANGE.clamp(self.icon_alpha);
        for channel in &mut self.color {
            *channel = channel.clamp(0.0, 1.0);
        }
    }
}

fn default_name(id: ArrowId) -> String {
    format!("Arrow {}", id)
}

/// Every persisted option of the mod.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    pub general: GeneralConfig,
    pub arrows: BTreeMap<ArrowId, ArrowConfig>,
}

impl ModConfig {
    /// Ids of the arrows to register, `1..=number_of_arrows`.
    pub fn arrow_ids(&self) -> impl Iterator<Item = ArrowId> {
        ArrowId::range(self.general.number_of_arrows)
    }

    pub fn arrow(&self, id: ArrowId) -> Option<&ArrowConfig> {
        self.arrows.get(&id)
    }

    pub fn arrow_mut(&mut self, id: ArrowId) -> Option<&mut ArrowConfig> {
        self.arrows.get_mut(&id)
    }

    /// Clamp all values and add a default section for every arrow id that
    /// has none. Sections beyond the arrow count are kept so lowering the
    /// count does not lose their settings. Returns true if anything changed.
    pub fn ensure_arrow_sections(&mut self) -> bool {
        let before = self.clone();

        self.general.number_of_arrows =
            ARROW_COUNT_RANGE.clamp(self.general.number_of_arrows as f32) as u32;

        for id in ArrowId::range(self.general.number_of_arrows) {
            self.arrows.entry(id).or_insert_with(|| ArrowConfig::new(id));
        }

        for (id, arrow) in &mut self.arrows {
            if arrow.name.is_empty() {
                arrow.name = default_name(*id);
            }
            arrow.clamp();
        }

        *self != before
    }
}
