use bevy::prelude::*;

use crate::tools::order::{OrderPlaced, OrderRequested};

#[derive(Component)]
pub struct OrderButton;

#[derive(Component)]
pub struct OrderSummaryText;

/// Order button in the top-right corner plus the summary readout below it.
pub fn setup_order_panel(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.15, 0.15, 0.15)),
                    BorderColor(Color::WHITE),
                    OrderButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Order"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                OrderSummaryText,
            ));
        });
}

pub fn handle_order_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<OrderButton>)>,
    mut requests: EventWriter<OrderRequested>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            requests.write(OrderRequested);
        }
    }
}

/// Show the most recent order summary.
pub fn update_order_panel(
    mut placed: EventReader<OrderPlaced>,
    mut readouts: Query<&mut Text, With<OrderSummaryText>>,
) {
    let Some(order) = placed.read().last() else {
        return;
    };
    for mut text in &mut readouts {
        text.0 = order.message.clone();
    }
}
