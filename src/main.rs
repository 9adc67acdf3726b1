//! Kitchen Chores - a small top-down checklist game built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use kitchen_chores::{
    Checklist, ConfigWatcher, CurrentScene, EventBus, InitSettings, InputQueue, PlayerInput,
    SceneDatabase, checklist, config_watcher, constants::*, events, input, objects, player, scenes,
    ui,
};

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --scene <name> override
    let scene_override = args
        .iter()
        .position(|a| a == "--scene")
        .and_then(|i| args.get(i + 1).cloned());

    // Load persistent settings (uses defaults if file doesn't exist)
    let settings = InitSettings::load();

    // Save settings on first run to ensure file exists
    if let Err(e) = settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    // Load scene database and route table from file
    let (scene_db, routes) = SceneDatabase::load_from_file(SCENES_FILE);

    // Use command-line scene override if provided, otherwise use saved settings
    let start_scene = scene_override.unwrap_or_else(|| settings.start_scene.clone());
    if scene_db.get(&start_scene).is_none() {
        warn!("Start scene {} is not defined, showing title only", start_scene);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(
                    settings.window_width,
                    settings.window_height,
                )
                .with_scale_factor_override(1.0),
                title: "Kitchen Chores".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(EventBus::new())
        .insert_resource(scene_db)
        .insert_resource(routes)
        .insert_resource(CurrentScene(start_scene))
        .init_resource::<PlayerInput>()
        .init_resource::<InputQueue>()
        .init_resource::<ConfigWatcher>()
        .add_systems(Startup, setup)
        // Frame order: input -> world -> checklist -> scene changes -> presentation -> bus flush
        .add_systems(
            Update,
            (
                (
                    events::update_event_bus_time,
                    input::capture_input,
                    player::move_player,
                    scenes::handle_skip_requests,
                )
                    .chain(),
                (
                    objects::sync_zone_locks,
                    objects::update_trigger_zones,
                    objects::process_interactions,
                    objects::advance_activities,
                    checklist::advance_checklist,
                )
                    .chain()
                    .run_if(resource_exists::<Checklist>),
                (
                    scenes::handle_transition_requests,
                    scenes::load_current_scene.run_if(resource_changed::<CurrentScene>),
                )
                    .chain(),
                (
                    ui::trigger_celebration,
                    ui::show_scene_card,
                    ui::apply_checklist_text.run_if(resource_exists::<Checklist>),
                    ui::clear_checklist_text.run_if(not(resource_exists::<Checklist>)),
                    ui::update_prompt,
                    objects::update_emitters,
                    ui::animate_dance,
                    ui::fade_card,
                )
                    .chain(),
                (config_watcher::check_config_changes, events::flush_event_bus).chain(),
            )
                .chain(),
        )
        .run();
}

/// Setup the camera, avatar, and persistent UI
fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    player::spawn_player(&mut commands);
    ui::spawn_checklist_panel(&mut commands);
    ui::spawn_prompt_box(&mut commands);
}
