//! Integration tests for the inline styles components render

use reel_core::{CarouselConfig, CarouselController, Direction, Point, Slot, enter_pose, rest_pose};
use reel_ui::components::style::{CARD_MOVE_S, backdrop_style, card_style, cursor_style};

#[test]
fn test_every_visible_card_has_distinct_rest_style() {
    let controller = CarouselController::new(5, CarouselConfig::default());
    let styles = controller
        .visible_cards()
        .iter()
        .map(|card| card_style(&rest_pose(card.slot, 550.0), CARD_MOVE_S))
        .collect::<Vec<_>>();

    assert_eq!(styles.len(), 3);
    assert_ne!(styles[0], styles[1]);
    assert_ne!(styles[1], styles[2]);
}

#[test]
fn test_entering_card_starts_offstage() {
    let entering = card_style(&enter_pose(Slot::Next, Direction::Forward, 550.0), CARD_MOVE_S);
    assert!(entering.contains("translateX(1100px)"));
    assert!(entering.contains("opacity: 0;"));
}

#[test]
fn test_cursor_and_backdrop_styles() {
    assert_eq!(
        cursor_style(Point::new(90.0, 40.0)),
        "transform: translate3d(90px, 40px, 0);"
    );
    assert!(backdrop_style("red").starts_with("background: red;"));
}
