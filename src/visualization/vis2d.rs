use bevy::log::info;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use super::physics_step_system;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};

/// Index of the body a circle entity draws
#[derive(Component)]
struct BodyIndex(pub usize);

/// Which panel a circle entity lives in
#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Full,
    Overview,
}

/// Text row showing the label of body `.0`
#[derive(Component)]
struct LabelRow(pub usize);

#[derive(Component, Clone, Copy)]
enum ToolbarAction {
    Reset,
    ToggleAnchorLock,
}

#[derive(Component)]
struct AnchorLockText;

/// Window-space placement of the two panels
#[derive(Resource, Clone, Copy)]
struct PanelLayout {
    window: Vec2,
    overview_origin: Vec2, // top-left corner of the overview panel
}

impl PanelLayout {
    /// Window pixel (top-left origin, y down) to world space (centered, y up)
    fn to_world(&self, origin: Vec2, p: NVec2) -> Vec2 {
        Vec2::new(
            origin.x + p.x as f32 - self.window.x / 2.0,
            self.window.y / 2.0 - (origin.y + p.y as f32),
        )
    }

    fn origin(&self, panel: Panel) -> Vec2 {
        match panel {
            Panel::Full => Vec2::ZERO,
            Panel::Overview => self.overview_origin,
        }
    }
}

const OVERVIEW_ORIGIN: Vec2 = Vec2::new(1100.0, 40.0);
const TOOLBAR_TOP: f32 = 480.0;
const ROW_HEIGHT: f32 = 32.0;
const RING_GAP: f32 = 5.0;
const GRAY: Color = Color::srgb(71.0 / 255.0, 71.0 / 255.0, 71.0 / 255.0);

fn color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies().len());

    let display = scenario.engine.display.clone();
    let layout = PanelLayout {
        window: Vec2::new(display.width, display.height),
        overview_origin: OVERVIEW_ORIGIN,
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(layout)
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: display.title,
                resolution: WindowResolution::new(display.width, display.height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, (setup_panels_system, setup_bodies_system, setup_ui_system))
        .add_systems(
            Update,
            (
                toolbar_system,
                keyboard_system,
                physics_step_system,
                sync_transforms_system,
                label_system,
                gizmo_system,
            )
                .chain(),
        )
        .run();
}

fn setup_panels_system(mut commands: Commands, scenario: Res<Scenario>, layout: Res<PanelLayout>) {
    commands.spawn(Camera2dBundle::default());

    // Overview frame: 1px gray border around a black panel
    let size = scenario.parameters.mini_view_size;
    let size = Vec2::new(size[0] as f32, size[1] as f32);
    let center = layout.to_world(layout.overview_origin, NVec2::new(size.x as f64 / 2.0, size.y as f64 / 2.0));

    commands.spawn(SpriteBundle {
        sprite: Sprite {
            color: GRAY,
            custom_size: Some(size + Vec2::splat(2.0)),
            ..default()
        },
        transform: Transform::from_xyz(center.x, center.y, 0.0),
        ..default()
    });
    commands.spawn(SpriteBundle {
        sprite: Sprite {
            color: Color::BLACK,
            custom_size: Some(size),
            ..default()
        },
        transform: Transform::from_xyz(center.x, center.y, 0.1),
        ..default()
    });
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    layout: Res<PanelLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for view in scenario.system.body_views() {
        let mesh = Mesh2dHandle(meshes.add(Circle::new(view.radius as f32)));
        let material = materials.add(ColorMaterial::from(color(view.color)));
        // collection order is draw order
        let z = 1.0 + view.index as f32 * 0.01;

        for (panel, p) in [(Panel::Full, view.full), (Panel::Overview, view.overview)] {
            let pos = layout.to_world(layout.origin(panel), p);
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: mesh.clone(),
                    material: material.clone(),
                    transform: Transform::from_xyz(pos.x, pos.y, z),
                    ..default()
                },
                BodyIndex(view.index),
                panel,
            ));
        }
    }
}

fn setup_ui_system(mut commands: Commands, scenario: Res<Scenario>) {
    let text_style = TextStyle {
        font_size: 16.0,
        color: Color::WHITE,
        ..default()
    };

    // One row per non-anchor body, top-left
    let rows = scenario.system.body_views().filter(|v| !v.anchor).map(|v| v.index);
    for (row, index) in rows.enumerate() {
        commands.spawn((
            TextBundle::from_section("", text_style.clone()).with_style(Style {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(row as f32 * ROW_HEIGHT),
                ..default()
            }),
            LabelRow(index),
        ));
    }

    if !scenario.engine.toolbar {
        return;
    }

    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                left: Val::Px(OVERVIEW_ORIGIN.x),
                top: Val::Px(TOOLBAR_TOP),
                column_gap: Val::Px(12.0),
                ..default()
            },
            ..default()
        })
        .with_children(|bar| {
            for (action, caption) in [
                (ToolbarAction::Reset, "reset"),
                (ToolbarAction::ToggleAnchorLock, "sun lock"),
            ] {
                bar.spawn((
                    ButtonBundle {
                        style: Style {
                            width: Val::Px(120.0),
                            height: Val::Px(36.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        background_color: BackgroundColor(GRAY),
                        ..default()
                    },
                    action,
                ))
                .with_children(|button| {
                    let mut text = button.spawn(TextBundle::from_section(caption, text_style.clone()));
                    if matches!(action, ToolbarAction::ToggleAnchorLock) {
                        text.insert(AnchorLockText);
                    }
                });
            }
        });
}

fn apply_action(action: ToolbarAction, scenario: &mut Scenario) {
    match action {
        ToolbarAction::Reset => {
            info!("reset requested");
            scenario.system.request_reset();
        }
        ToolbarAction::ToggleAnchorLock => scenario.toggle_anchor_lock(),
    }
}

fn toolbar_system(
    mut scenario: ResMut<Scenario>,
    mut buttons: Query<(&Interaction, &ToolbarAction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, action, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => apply_action(*action, &mut scenario),
            Interaction::Hovered => *background = BackgroundColor(Color::srgb(0.4, 0.4, 0.4)),
            Interaction::None => *background = BackgroundColor(GRAY),
        }
    }
}

fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::KeyR) {
        apply_action(ToolbarAction::Reset, &mut scenario);
    }
    if keys.just_pressed(KeyCode::KeyL) {
        apply_action(ToolbarAction::ToggleAnchorLock, &mut scenario);
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    layout: Res<PanelLayout>,
    mut query: Query<(&BodyIndex, &Panel, &mut Transform, &mut Visibility)>,
) {
    let overview = scenario.system.overview_projection();
    for (BodyIndex(i), panel, mut transform, mut visibility) in &mut query {
        let Some(view) = scenario.system.body_view(*i) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        let p = match panel {
            Panel::Full => view.full,
            Panel::Overview => view.overview,
        };
        let pos = layout.to_world(layout.origin(*panel), p);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;

        let shown = *panel == Panel::Full || view.on_overview(&overview);
        *visibility = if shown { Visibility::Inherited } else { Visibility::Hidden };
    }
}

fn label_system(
    scenario: Res<Scenario>,
    mut rows: Query<(&LabelRow, &mut Text)>,
    mut lock_text: Query<&mut Text, (With<AnchorLockText>, Without<LabelRow>)>,
) {
    for (LabelRow(i), mut text) in &mut rows {
        if let Some(label) = scenario.system.label(*i) {
            text.sections[0].value = label;
        }
    }
    let state = if scenario.system.anchor_lock() { "on" } else { "off" };
    for mut text in &mut lock_text {
        text.sections[0].value = format!("sun lock: {state}");
    }
}

/// Rings around ringed bodies and the overview footprint in the full view
fn gizmo_system(mut gizmos: Gizmos, scenario: Res<Scenario>, layout: Res<PanelLayout>) {
    let overview = scenario.system.overview_projection();
    for view in scenario.system.body_views().filter(|v| v.ring) {
        let ring = view.radius as f32 + RING_GAP;
        let full = layout.to_world(Vec2::ZERO, view.full);
        gizmos.circle_2d(full, ring, color(view.color));
        if view.on_overview(&overview) {
            let mini = layout.to_world(layout.overview_origin, view.overview);
            gizmos.circle_2d(mini, ring, color(view.color));
        }
    }

    let full = scenario.system.full_projection();
    let footprint = scenario.parameters.overview_footprint();
    let center = layout.to_world(Vec2::ZERO, full.center());
    let half = Vec2::new(footprint[0] as f32, footprint[1] as f32) / 2.0;
    let corners = [
        center + Vec2::new(-half.x, -half.y),
        center + Vec2::new(half.x, -half.y),
        center + Vec2::new(half.x, half.y),
        center + Vec2::new(-half.x, half.y),
        center + Vec2::new(-half.x, -half.y),
    ];
    gizmos.linestrip_2d(corners, GRAY);
}
