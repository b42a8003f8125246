// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use iced_carousel::config::{self, Config};
use iced_carousel::domain::carousel::{ActiveIndex, Orientation};
use iced_carousel::ui::carousel::{self, Effect, Message, State};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const SCREEN: Size = Size::new(800.0, 650.0);

fn horizontal(item_width: f32, default_index: i32, with_pagination: bool) -> carousel::Config {
    carousel::Config {
        orientation: Orientation::Horizontal,
        item_width: Some(item_width),
        item_height: None,
        default_index,
        with_pagination,
    }
}

fn scrolled_to(x: f32) -> Message {
    Message::Scrolled {
        bounds: Rectangle::new(Point::ORIGIN, Size::new(300.0, 240.0)),
        content_bounds: Rectangle::new(Point::ORIGIN, Size::new(1500.0, 240.0)),
        offset: AbsoluteOffset { x, y: 0.0 },
    }
}

#[test]
fn mounts_on_default_index() {
    let start = Instant::now();
    let (mut state, _task) = State::new(horizontal(300.0, 2, true), 5, SCREEN);

    let offset = state.mount_offset().expect("mount scroll expected");
    assert_abs_diff_eq!(offset.x, 600.0);
    assert_abs_diff_eq!(offset.y, 0.0);

    // The scrollable reports the position it was moved to.
    let (effect, _) = state.update_at(scrolled_to(600.0), start);
    assert_eq!(effect, Effect::SnapItem(2));
    assert_eq!(state.active_index(), ActiveIndex::new(2));
    assert!(state.pagination().dots()[2].is_active());
}

#[test]
fn scrolling_moves_active_dot() {
    let start = Instant::now();
    let (mut state, _task) = State::new(horizontal(300.0, 2, true), 5, SCREEN);

    let (effect, _) = state.update_at(scrolled_to(910.0), start);
    assert_eq!(effect, Effect::SnapItem(3));

    let dots = state.pagination().dots();
    assert_abs_diff_eq!(dots[3].target_width(), 20.0);
    assert_abs_diff_eq!(dots[2].target_width(), 12.5);

    // Both springs start from the previous widths.
    assert_abs_diff_eq!(dots[3].width(start), 12.5, epsilon = 1e-3);
    assert_abs_diff_eq!(dots[2].width(start), 20.0, epsilon = 1e-3);

    let later = start + Duration::from_secs(2);
    assert_abs_diff_eq!(dots[3].width(later), 20.0, epsilon = 0.01);
    assert_abs_diff_eq!(dots[2].width(later), 12.5, epsilon = 0.01);
}

#[test]
fn empty_data_has_no_mount_scroll_and_no_dots() {
    let (state, _task) = State::new(horizontal(300.0, 2, true), 0, SCREEN);
    assert!(state.mount_offset().is_none());
    assert!(state.pagination().is_empty());
}

#[test]
fn default_index_change_needs_item_count_change() {
    let (mut state, _task) = State::new(horizontal(300.0, 1, false), 3, SCREEN);
    state.set_default_index(2);
    assert_eq!(state.active_index(), ActiveIndex::new(1));

    let _ = state.sync_item_count(4);
    let offset = state.mount_offset().expect("mount scroll expected");
    assert_abs_diff_eq!(offset.x, 600.0);
}

#[test]
fn carousel_settings_survive_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.carousel.orientation = Orientation::Vertical;
    saved.carousel.item_height = Some(180.0);
    saved.carousel.default_index = 2;
    saved.carousel.with_pagination = true;
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    let widget: carousel::Config = (&loaded.carousel).into();
    assert_eq!(widget.orientation, Orientation::Vertical);
    assert_eq!(widget.item_height, Some(180.0));

    let (state, _task) = State::new(widget, 4, SCREEN);
    let offset = state.mount_offset().expect("mount scroll expected");
    assert_abs_diff_eq!(offset.x, 0.0);
    assert_abs_diff_eq!(offset.y, 360.0);
}
