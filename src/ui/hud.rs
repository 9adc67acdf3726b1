//! HUD components and systems (checklist panel)

use bevy::prelude::*;

use crate::checklist::Checklist;
use crate::constants::*;

/// Checklist panel text component
#[derive(Component)]
pub struct ChecklistText;

/// Spawn the checklist panel in the top-left corner
pub fn spawn_checklist_panel(commands: &mut Commands) {
    commands.spawn((
        Text::new(CHECKLIST_HEADER),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        ChecklistText,
    ));
}

/// Panel contents for a checklist rendering
pub fn format_checklist_panel(rendering: &str) -> String {
    format!("{}\n{}", CHECKLIST_HEADER, rendering)
}

/// Push the coordinator's latest rendering into the panel.
/// Without a panel entity the update is dropped with a warning.
pub fn apply_checklist_text(
    mut checklist: ResMut<Checklist>,
    mut text_query: Query<&mut Text, With<ChecklistText>>,
) {
    if !checklist.has_pending_text() {
        return;
    }
    let Some(rendering) = checklist.take_pending_text() else {
        return;
    };

    let Ok(mut text) = text_query.single_mut() else {
        warn!("Checklist text is not set, skipping checklist update");
        return;
    };
    text.0 = format_checklist_panel(&rendering);
}

/// Clear the panel when the scene has no checklist
pub fn clear_checklist_text(mut text_query: Query<&mut Text, With<ChecklistText>>) {
    for mut text in &mut text_query {
        if !text.0.is_empty() {
            text.0.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_has_header_line() {
        assert_eq!(
            format_checklist_panel("Find a mug - Done!\nBoil the kettle"),
            "Task List:\nFind a mug - Done!\nBoil the kettle"
        );
    }
}
