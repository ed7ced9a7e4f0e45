use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use wm_config::{
    ArrowConfig, ModConfig, SliderRange, ARROW_COUNT_RANGE, INTENSITY_RANGE,
    PLACE_DEFAULT_DISTANCE_RANGE, PLACE_MAX_DISTANCE_RANGE, SCALE_RANGE,
};
use wm_core::{ArrowId, Axis};
use wm_placeable::{ArrowOptionChange, ArrowOptionChanged, ArrowRegistry, SpawnArrow};

const RESTART_MSG: &str = "Restart the game to take effect.";
const ADVANCED_MSG: &str = "(advanced)";
const NOT_MODIFY_EXISTING_MSG: &str = "This does not modify the existing ones.";
const RESTART_TO_MODIFY_EXISTING_MSG: &str = "Require a restart to modify the existing ones.";

/// Key that shows or hides the options panel.
pub const TOGGLE_KEY: KeyCode = KeyCode::F10;

/// Resource for tracking UI state of the options panel.
#[derive(Resource)]
pub struct OptionsUiState {
    pub visible: bool,
    /// Number of arrows placed from the panel, used to offset new ones.
    pub placed: u32,
}

impl Default for OptionsUiState {
    fn default() -> Self {
        Self {
            visible: true,
            placed: 0,
        }
    }
}

/// System that toggles the options panel.
pub fn toggle_options_panel(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ui_state: ResMut<OptionsUiState>,
) {
    if keyboard.just_pressed(TOGGLE_KEY) {
        ui_state.visible = !ui_state.visible;
    }
}

/// System to render the options panel.
pub fn options_ui_system(
    mut contexts: EguiContexts,
    mut config: ResMut<ModConfig>,
    registry: Res<ArrowRegistry>,
    mut ui_state: ResMut<OptionsUiState>,
    mut option_events: EventWriter<ArrowOptionChanged>,
    mut spawn_events: EventWriter<SpawnArrow>,
) {
    if !ui_state.visible {
        return;
    }

    // Register icons before borrowing the context for drawing.
    let icons: Vec<(ArrowId, Option<egui::TextureId>)> = registry
        .iter()
        .map(|(id, entry)| {
            let texture = (entry.icon != Handle::default())
                .then(|| contexts.add_image(entry.icon.clone_weak()));
            (id, texture)
        })
        .collect();

    let mut arrow_count = config.general.number_of_arrows;
    let mut edits: Vec<(ArrowId, ArrowConfig, Vec<ArrowOptionChange>)> = Vec::new();
    let mut place_requests: Vec<ArrowId> = Vec::new();

    egui::SidePanel::right("waymark_options")
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Waymark options");
            ui.label(format!("Press {:?} to hide", TOGGLE_KEY));
            ui.separator();

            ui.collapsing("General", |ui| {
                ui.add(egui::Slider::new(
                    &mut arrow_count,
                    ARROW_COUNT_RANGE.min as u32..=ARROW_COUNT_RANGE.max as u32,
                )
                .text("Number of arrows"))
                .on_hover_text(format!("Number of different arrows you want. {}", RESTART_MSG));

                if arrow_count as usize != registry.len() {
                    ui.colored_label(egui::Color32::YELLOW, RESTART_MSG);
                }

                ui.add_space(4.0);
                ui.label(format!(
                    "{} Tech group: {}",
                    ADVANCED_MSG,
                    config.general.tech_group.name()
                ));
                ui.label(format!(
                    "{} Tech category: {}",
                    ADVANCED_MSG,
                    config.general.tech_category.name()
                ));
                ui.label(format!(
                    "{} Cell level: {}",
                    ADVANCED_MSG,
                    config.general.cell_level.name()
                ));
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (id, icon) in &icons {
                    let Some(current) = config.arrow(*id) else {
                        continue;
                    };
                    let mut edited = current.clone();

                    ui.horizontal(|ui| {
                        if let Some(texture) = icon {
                            ui.image((*texture, egui::vec2(24.0, 24.0)));
                        }
                        ui.strong(&edited.name);
                    });

                    let changes = ui
                        .collapsing(format!("Arrow {}", id), |ui| arrow_section(ui, *id, &mut edited))
                        .body_returned
                        .unwrap_or_default();

                    if ui.button("Place").on_hover_text("Place a copy in the scene").clicked() {
                        place_requests.push(*id);
                    }
                    ui.separator();

                    if !changes.is_empty() {
                        edits.push((*id, edited, changes));
                    }
                }
            });
        });

    if arrow_count != config.general.number_of_arrows {
        config.general.number_of_arrows = arrow_count;
        config.ensure_arrow_sections();
    }

    for (id, edited, changes) in edits {
        if let Some(slot) = config.arrow_mut(id) {
            *slot = edited;
        }
        for change in changes {
            option_events.send(ArrowOptionChanged::new(id, change));
        }
    }

    for id in place_requests {
        let offset = ui_state.placed as f32;
        ui_state.placed += 1;
        spawn_events.send(SpawnArrow {
            id,
            transform: Transform::from_xyz((id.0 as f32 - 1.0) * 1.5, 0.0, -offset),
        });
    }
}

/// Widgets for one arrow. Returns the edits made this frame.
fn arrow_section(ui: &mut egui::Ui, id: ArrowId, arrow: &mut ArrowConfig) -> Vec<ArrowOptionChange> {
    let mut changes = Vec::new();

    // The picker edits linear RGB; the config stores sRGB.
    let [r, g, b, a] = arrow.color;
    let linear = Color::srgba(r, g, b, a).to_linear();
    let mut rgb = [linear.red, linear.green, linear.blue];
    ui.horizontal(|ui| {
        ui.label(format!("Color (arrow id: {})", id));
        if ui
            .color_edit_button_rgb(&mut rgb)
            .on_hover_text(format!("Color value for arrow with id: {}", id))
            .changed()
        {
            let color = Color::LinearRgba(LinearRgba::new(rgb[0], rgb[1], rgb[2], a));
            arrow.set_color(color);
            changes.push(ArrowOptionChange::Color(color));
        }
    });

    if slider(ui, &mut arrow.intensity, INTENSITY_RANGE, "Intensity")
        .on_hover_text("Intensity of the emission color.")
        .changed()
    {
        changes.push(ArrowOptionChange::Intensity(arrow.intensity));
    }

    for axis in Axis::all() {
        let mut value = axis.get(arrow.scale);
        if slider(ui, &mut value, SCALE_RANGE, &format!("Scale {}", axis.name()))
            .on_hover_text(format!("Scale x,y,z. {}", NOT_MODIFY_EXISTING_MSG))
            .changed()
        {
            arrow.scale = axis.with(arrow.scale, value);
            changes.push(ArrowOptionChange::Scale { axis: *axis, value });
        }
    }

    if slider(
        ui,
        &mut arrow.place_default_distance,
        PLACE_DEFAULT_DISTANCE_RANGE,
        "Place default distance",
    )
    .on_hover_text("Place default distance.")
    .changed()
    {
        changes.push(ArrowOptionChange::PlaceDefaultDistance(arrow.place_default_distance));
    }

    if slider(
        ui,
        &mut arrow.place_max_distance,
        PLACE_MAX_DISTANCE_RANGE,
        "Place max distance",
    )
    .on_hover_text("Place max distance.")
    .changed()
    {
        changes.push(ArrowOptionChange::PlaceMaxDistance(arrow.place_max_distance));
    }

    if ui
        .checkbox(&mut arrow.force_upright, "Force upright")
        .on_hover_text(format!(
            "Force upright when placing the object. {}",
            NOT_MODIFY_EXISTING_MSG
        ))
        .changed()
    {
        changes.push(ArrowOptionChange::ForceUpright(arrow.force_upright));
    }

    if ui
        .checkbox(&mut arrow.is_hologram, "Is hologram")
        .on_hover_text(format!(
            "Set true if you want to be able to traverse the object. {}",
            RESTART_TO_MODIFY_EXISTING_MSG
        ))
        .changed()
    {
        changes.push(ArrowOptionChange::Hologram(arrow.is_hologram));
    }

    ui.add_space(4.0);
    ui.label(format!("{} Icon file: {}", ADVANCED_MSG, arrow.icon_file));
    ui.label(format!(
        "{} Tint icon: {}, icon alpha: {:.2}",
        ADVANCED_MSG, arrow.change_icon_color, arrow.icon_alpha
    ))
    .on_hover_text(RESTART_MSG);

    changes
}

fn slider(ui: &mut egui::Ui, value: &mut f32, range: SliderRange, text: &str) -> egui::Response {
    ui.add(
        egui::Slider::new(value, range.as_range())
            .step_by(range.step as f64)
            .text(text),
    )
}
