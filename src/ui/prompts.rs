//! Prompt overlay - "Press 'E' to ..." box for the object in range

use bevy::prelude::*;

use crate::constants::*;
use crate::objects::WorldObject;

/// Prompt box root node
#[derive(Component)]
pub struct PromptBox;

/// Prompt box label
#[derive(Component)]
pub struct PromptText;

/// Spawn the (initially hidden) prompt box, bottom centre of the window
pub fn spawn_prompt_box(commands: &mut Commands) {
    commands
        .spawn((
            PromptBox,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(PROMPT_OFFSET_Y),
                left: Val::Percent((100.0 - PROMPT_WIDTH_PERCENT) / 2.0),
                width: Val::Percent(PROMPT_WIDTH_PERCENT),
                height: Val::Px(PROMPT_HEIGHT),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(PROMPT_BACKGROUND),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                PromptText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
        });
}

/// Prompt of the first object (by key) that wants one shown
pub fn active_prompt<'a>(objects: impl Iterator<Item = &'a WorldObject>) -> Option<&'a str> {
    objects
        .filter(|o| o.prompt_visible())
        .min_by(|a, b| a.key.cmp(&b.key))
        .map(|o| o.prompt.as_str())
}

/// Show the prompt while the player is in range of an idle object
pub fn update_prompt(
    objects: Query<&WorldObject>,
    mut boxes: Query<&mut Visibility, With<PromptBox>>,
    mut texts: Query<&mut Text, With<PromptText>>,
) {
    let prompt = active_prompt(objects.iter());

    for mut visibility in &mut boxes {
        let wanted = if prompt.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }

    let Some(prompt) = prompt else {
        return;
    };
    for mut text in &mut texts {
        if text.0 != prompt {
            text.0 = prompt.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::ObjectKey;
    use crate::objects::ObjectKind;

    #[test]
    fn test_prompt_hidden_while_busy() {
        let mut kettle = WorldObject::new(ObjectKey::new("kettle"), ObjectKind::Kettle);
        let mut mug = WorldObject::new(ObjectKey::new("mug"), ObjectKind::Collectable);

        assert_eq!(active_prompt([&kettle, &mug].into_iter()), None);

        kettle.on_zone_enter();
        assert_eq!(
            active_prompt([&kettle, &mug].into_iter()),
            Some("Press 'E' to boil the kettle")
        );

        kettle.on_interact();
        assert_eq!(active_prompt([&kettle, &mug].into_iter()), None);

        mug.on_zone_enter();
        assert_eq!(
            active_prompt([&kettle, &mug].into_iter()),
            Some("Press 'E' to pick up")
        );
    }
}
