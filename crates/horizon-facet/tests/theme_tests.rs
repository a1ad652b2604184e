//! Integration tests for theme propagation and state color resolution.

use horizon_facet::prelude::*;

fn fill_slot(variant: ColorVariant) -> ColorSlot {
    ColorSlot::new(ColorRole::Fill, variant)
}

#[test]
fn inherited_widgets_follow_set_theme() {
    let context = ThemeContext::new();
    let mut button = Button::new("OK", &context.current_theme());
    let mut list = ListBox::new(&context.current_theme());

    context.set_theme(&ThemeId::Dark).unwrap();
    context.apply_to(&mut button);
    context.apply_to(&mut list);

    let dark = Theme::dark();
    assert_eq!(button.resolved_colors().fill, dark.color_set(PaletteKind::Button).fill.base);
    assert_eq!(list.resolved_colors().fill, dark.color_set(PaletteKind::List).fill.base);
}

#[test]
fn custom_widgets_keep_their_colors() {
    let context = ThemeContext::new();
    let mut button = Button::new("OK", &context.current_theme());
    button.set_color(fill_slot(ColorVariant::Base), Color::RED);
    assert_eq!(button.style().mode(), StyleMode::Custom);

    context.set_theme(&ThemeId::Dark).unwrap();
    context.apply_to(&mut button);
    assert_eq!(button.resolved_colors().fill, Color::RED);

    button.restore_inherited(&context.current_theme());
    assert_eq!(button.style().mode(), StyleMode::Inherited);
    assert_eq!(
        button.resolved_colors().fill,
        Theme::dark().color_set(PaletteKind::Button).fill.base
    );
}

#[test]
fn set_color_does_not_leak_into_siblings() {
    let theme = Theme::light();
    let mut first = Button::new("A", &theme);
    let second = Button::new("B", &theme);
    first.set_color(fill_slot(ColorVariant::Hover), Color::GREEN);

    assert_eq!(first.style().colors().fill.hover, Some(Color::GREEN));
    assert_eq!(
        second.style().colors().fill.hover,
        theme.color_set(PaletteKind::Button).fill.hover
    );
}

#[test]
fn disabled_always_wins() {
    let theme = Theme::light();
    let disabled = theme.color_set(PaletteKind::Button).fill.disabled;
    let mut button = Button::new("OK", &theme).with_light_style(true);

    for event in [
        InteractionEvent::FocusIn,
        InteractionEvent::MouseEnter,
        InteractionEvent::MouseDown,
    ] {
        button.handle_interaction(event);
    }
    button.widget_base_mut().set_selected(true);
    button.widget_base_mut().set_read_only(true);
    button.set_enabled(false);

    assert_eq!(Some(button.resolved_colors().fill), disabled);
}

#[test]
fn focus_uses_hover_colors_only_when_enabled() {
    let theme = Theme::light();
    let hover = theme.color_set(PaletteKind::Button).fill.hover;
    let base = theme.color_set(PaletteKind::Button).fill.base;

    let mut button = Button::new("OK", &theme);
    button.handle_interaction(InteractionEvent::FocusIn);
    assert_eq!(button.resolved_colors().fill, base);

    button.set_show_focus_color(Some(true));
    assert_eq!(Some(button.resolved_colors().fill), hover);

    let mut contrast = Button::new("OK", &Theme::high_contrast());
    contrast.handle_interaction(InteractionEvent::FocusIn);
    assert_eq!(
        Some(contrast.resolved_colors().fill),
        Theme::high_contrast().color_set(PaletteKind::Button).fill.hover
    );
}

#[test]
fn light_style_never_touches_the_border() {
    let theme = Theme::light();
    let set = theme.color_set(PaletteKind::Button);
    let button = Button::new("OK", &theme).with_light_style(true);
    let colors = button.resolved_colors();
    assert_eq!(Some(colors.fill), set.fill.plain);
    assert_eq!(colors.border, set.border.base);
}

#[test]
fn resolution_is_deterministic() {
    let theme = Theme::dark();
    let set = theme.color_set(PaletteKind::Pagination);
    let states = [
        WidgetVisualState::new(),
        WidgetVisualState::new().hover(true),
        WidgetVisualState::new().hover(true).press(true),
        WidgetVisualState::new().selected(true).focused(true),
        WidgetVisualState::new().read_only(true),
        WidgetVisualState::new().enabled(false).selected(true),
    ];
    for state in &states {
        for role in [ColorRole::Fill, ColorRole::Border, ColorRole::Text] {
            assert_eq!(
                resolve_color(role, state, set, true),
                resolve_color(role, state, set, true)
            );
        }
    }
}

#[test]
fn theme_reaches_every_scroll_bar_of_a_grid() {
    let mut grid = DataGrid::new(&Theme::light());
    let dark = Theme::dark();
    grid.apply_theme(&dark);
    for axis in ScrollAxis::ALL {
        let bar = grid.scroll_link(axis).map(|link| link.bar());
        assert_eq!(bar.map(|b| b.style().theme_id()), Some(&ThemeId::Dark));
    }
}

#[test]
fn selection_group_keeps_one_button_checked() {
    let theme = Theme::light();
    let mut a = Button::new("A", &theme).with_checkable(true);
    let mut b = Button::new("B", &theme).with_checkable(true);
    let mut group = SelectionGroup::new();
    group.add(&mut a);
    group.add(&mut b);

    let (a_id, b_id) = (a.id(), b.id());
    group.activate(a_id, &mut [&mut a, &mut b]);
    group.activate(b_id, &mut [&mut a, &mut b]);
    assert!(!a.is_checked());
    assert!(b.is_checked());
    assert_eq!(group.selected(), Some(b_id));
}
