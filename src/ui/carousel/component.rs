// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.

use super::Config;
use crate::config::defaults::{SCROLL_EVENT_THROTTLE, SNAP_SETTLE_DELAY};
use crate::domain::carousel::{nearest_index, offset_for_index, ActiveIndex, ItemExtent};
use crate::ui::animation::SnapAnimator;
use crate::ui::pagination::Pagination;
use crate::ui::state::{ScrollSampler, ViewportState};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Rectangle, Size, Subscription, Task};
use std::time::Instant;

/// A programmatic scroll that lands further than this from where the snap
/// glide put it means the user grabbed the carousel again.
const USER_TAKEOVER_THRESHOLD: f32 = 1.0;

/// Messages emitted by the carousel widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable reported a new viewport.
    Scrolled {
        bounds: Rectangle,
        content_bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Animation frame.
    Frame(Instant),
    /// The window was resized; the size backs the default item extent.
    ScreenResized(Size),
}

/// What the caller should react to after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The carousel sampled its scroll position and is on this item.
    /// Reported on every sample, not only when the scroll comes to rest.
    SnapItem(i32),
}

/// Carousel state.
#[derive(Debug, Clone)]
pub struct State {
    config: Config,
    scrollable_id: Id,
    screen: Size,
    item_count: usize,
    active_index: ActiveIndex,
    viewport: ViewportState,
    sampler: ScrollSampler,
    snap: SnapAnimator,
    expected_offset: Option<f32>,
    pagination: Pagination,
    now: Instant,
}

impl State {
    /// Creates the carousel state for `item_count` items.
    ///
    /// The returned task scrolls to `config.default_index` when there are
    /// items and the index is not zero.
    pub fn new(config: Config, item_count: usize, screen: Size) -> (Self, Task<Message>) {
        let active_index = ActiveIndex::new(config.default_index);
        let state = Self {
            config,
            scrollable_id: Id::unique(),
            screen,
            item_count,
            active_index,
            viewport: ViewportState::default(),
            sampler: ScrollSampler::new(SCROLL_EVENT_THROTTLE, SNAP_SETTLE_DELAY),
            snap: SnapAnimator::new(),
            expected_offset: None,
            pagination: Pagination::new(item_count, active_index),
            now: Instant::now(),
        };
        let task = state.mount_task();
        (state, task)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the settings.
    ///
    /// This does not scroll: the mount scroll only runs again when the item
    /// count changes, so a new `default_index` alone has no visible effect.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Updates the stored default index without scrolling.
    pub fn set_default_index(&mut self, index: i32) {
        self.config.default_index = index;
    }

    #[must_use]
    pub fn scrollable_id(&self) -> &Id {
        &self.scrollable_id
    }

    #[must_use]
    pub fn active_index(&self) -> ActiveIndex {
        self.active_index
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Time of the last frame, used to sample animations in the view.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Size of one item along the scroll axis.
    #[must_use]
    pub fn item_extent(&self) -> ItemExtent {
        ItemExtent::resolve(
            self.config.orientation,
            self.config.item_width,
            self.config.item_height,
            self.screen.width,
            self.screen.height,
        )
    }

    /// Offset the mount scroll targets, if it should run at all.
    #[must_use]
    pub fn mount_offset(&self) -> Option<AbsoluteOffset> {
        if self.item_count == 0 || self.config.default_index == 0 {
            return None;
        }
        let offset = offset_for_index(self.config.default_index, self.item_extent());
        let (x, y) = self.config.orientation.point(offset);
        Some(AbsoluteOffset { x, y })
    }

    fn mount_task(&self) -> Task<Message> {
        match self.mount_offset() {
            Some(offset) => {
                log::debug!(
                    "Carousel mounting at index {} ({}, {})",
                    self.config.default_index,
                    offset.x,
                    offset.y
                );
                operation::scroll_to(self.scrollable_id.clone(), offset)
            }
            None => Task::none(),
        }
    }

    /// Tells the carousel how many items it shows.
    ///
    /// When the count changes, dots are added or removed at the end and the
    /// mount scroll runs again.
    pub fn sync_item_count(&mut self, count: usize) -> Task<Message> {
        if count == self.item_count {
            return Task::none();
        }
        self.item_count = count;
        self.pagination.resize(count, self.active_index);
        self.mount_task()
    }

    /// Handles a carousel message.
    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        self.update_at(message, Instant::now())
    }

    /// Handles a carousel message as if it arrived at `now`.
    ///
    /// Frame messages carry their own time and ignore `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::Scrolled {
                bounds,
                content_bounds,
                offset,
            } => (
                self.handle_scroll(bounds, content_bounds, offset, now),
                Task::none(),
            ),
            Message::Frame(at) => self.handle_frame(at),
            Message::ScreenResized(size) => {
                self.screen = size;
                (Effect::None, Task::none())
            }
        }
    }

    /// Frame subscription, active only while something moves.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_frames(Instant::now()) {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Whether a scroll, a snap glide or a dot transition is in progress.
    #[must_use]
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.snap.is_active() || self.sampler.is_scrolling() || self.pagination.is_animating(now)
    }

    fn handle_scroll(
        &mut self,
        bounds: Rectangle,
        content_bounds: Rectangle,
        offset: AbsoluteOffset,
        now: Instant,
    ) -> Effect {
        self.viewport.update(bounds, content_bounds, offset);
        if now > self.now {
            self.now = now;
        }

        if let Some(expected) = self.expected_offset {
            let current = self.viewport.offset_along(self.config.orientation);
            if (current - expected).abs() > USER_TAKEOVER_THRESHOLD {
                self.snap.cancel();
                self.expected_offset = None;
            }
        }

        if self.sampler.record(now) {
            self.observe_scroll(now)
        } else {
            Effect::None
        }
    }

    /// The single place the active index is derived from the scroll offset.
    fn observe_scroll(&mut self, now: Instant) -> Effect {
        let offset = self.viewport.offset_along(self.config.orientation);
        let index = nearest_index(offset, self.item_extent());

        if index != self.active_index.value() {
            log::debug!("Carousel active index {} -> {index}", self.active_index.value());
        }
        self.active_index = ActiveIndex::new(index);
        self.pagination.set_active(self.active_index, now);

        Effect::SnapItem(index)
    }

    fn handle_frame(&mut self, now: Instant) -> (Effect, Task<Message>) {
        self.now = now;
        self.pagination.settle(now);

        if let Some(offset) = self.snap.tick(now) {
            self.expected_offset = Some(offset);
            if !self.snap.is_active() {
                self.expected_offset = None;
            }
            return (Effect::None, self.scroll_task(offset));
        }

        let mut effect = Effect::None;
        if let Some(dropped) = self.sampler.take_settled(now) {
            if dropped {
                effect = self.observe_scroll(now);
            }
            if let Some(target) = self.snap_target() {
                if !self.viewport.is_aligned_with(self.config.orientation, target) {
                    let current = self.viewport.offset_along(self.config.orientation);
                    log::debug!("Carousel snapping from {current} to {target}");
                    self.snap.start(current, target, now);
                }
            }
        }
        (effect, Task::none())
    }

    /// Nearest item boundary within the scrollable range.
    fn snap_target(&self) -> Option<f32> {
        let orientation = self.config.orientation;
        let extent = self.item_extent();
        let index = nearest_index(self.viewport.offset_along(orientation), extent);
        let max = self.viewport.max_offset_along(orientation)?;
        let target = offset_for_index(index, extent).clamp(0.0, max);
        target.is_finite().then_some(target)
    }

    fn scroll_task(&self, offset: f32) -> Task<Message> {
        let (x, y) = self.config.orientation.point(offset);
        operation::scroll_to(self.scrollable_id.clone(), AbsoluteOffset { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::carousel::Orientation;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Point;
    use std::time::Duration;

    const SCREEN: Size = Size::new(800.0, 650.0);

    fn config(item_width: f32, default_index: i32) -> Config {
        Config {
            orientation: Orientation::Horizontal,
            item_width: Some(item_width),
            item_height: None,
            default_index,
            with_pagination: true,
        }
    }

    fn scrolled(x: f32, item_count: usize) -> Message {
        #[allow(clippy::cast_precision_loss)]
        let content_width = 300.0 * item_count as f32;
        Message::Scrolled {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(300.0, 200.0)),
            content_bounds: Rectangle::new(Point::ORIGIN, Size::new(content_width, 200.0)),
            offset: AbsoluteOffset { x, y: 0.0 },
        }
    }

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn mount_scrolls_to_default_index() {
        let (state, _) = State::new(config(300.0, 2), 5, SCREEN);
        let offset = state.mount_offset().expect("mount scroll");
        assert_abs_diff_eq!(offset.x, 600.0);
        assert_abs_diff_eq!(offset.y, 0.0);
        assert_eq!(state.active_index(), ActiveIndex::new(2));
    }

    #[test]
    fn mount_scroll_uses_vertical_axis() {
        let config = Config {
            orientation: Orientation::Vertical,
            item_height: Some(120.0),
            default_index: 3,
            ..Config::default()
        };
        let (state, _) = State::new(config, 5, SCREEN);
        let offset = state.mount_offset().expect("mount scroll");
        assert_abs_diff_eq!(offset.x, 0.0);
        assert_abs_diff_eq!(offset.y, 360.0);
    }

    #[test]
    fn mount_scroll_falls_back_to_screen_extent() {
        let config = Config {
            default_index: 1,
            ..Config::default()
        };
        let (state, _) = State::new(config, 3, SCREEN);
        assert_abs_diff_eq!(state.mount_offset().expect("mount scroll").x, 800.0);
    }

    #[test]
    fn no_mount_scroll_for_index_zero_or_empty_data() {
        let (state, _) = State::new(config(300.0, 0), 5, SCREEN);
        assert!(state.mount_offset().is_none());

        let (state, _) = State::new(config(300.0, 2), 0, SCREEN);
        assert!(state.mount_offset().is_none());
        assert!(state.pagination().is_empty());
    }

    #[test]
    fn scroll_sample_reports_nearest_index() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 2), 5, SCREEN);

        let (effect, _) = state.update_at(scrolled(910.0, 5), start);
        assert_eq!(effect, Effect::SnapItem(3));
        assert_eq!(state.active_index(), ActiveIndex::new(3));

        let dots = state.pagination().dots();
        assert!(dots[3].is_active());
        assert!(!dots[2].is_active());
        assert_abs_diff_eq!(dots[3].target_width(), 20.0);
        assert_abs_diff_eq!(dots[2].target_width(), 12.5);
        assert!(dots[2].is_animating(ms(start, 50)));
        assert!(dots[3].is_animating(ms(start, 50)));
    }

    #[test]
    fn every_accepted_sample_is_reported() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 5, SCREEN);

        let (first, _) = state.update_at(scrolled(10.0, 5), start);
        let (second, _) = state.update_at(scrolled(20.0, 5), ms(start, 20));
        assert_eq!(first, Effect::SnapItem(0));
        assert_eq!(second, Effect::SnapItem(0));
    }

    #[test]
    fn samples_inside_throttle_window_are_skipped() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 5, SCREEN);

        state.update_at(scrolled(10.0, 5), start);
        let (effect, _) = state.update_at(scrolled(400.0, 5), ms(start, 5));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.active_index(), ActiveIndex::new(0));
    }

    #[test]
    fn settling_samples_a_throttled_final_offset() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 5, SCREEN);

        state.update_at(scrolled(10.0, 5), start);
        state.update_at(scrolled(600.0, 5), ms(start, 5));

        let (effect, _) = state.update_at(Message::Frame(ms(start, 200)), ms(start, 200));
        assert_eq!(effect, Effect::SnapItem(2));
        assert_eq!(state.active_index(), ActiveIndex::new(2));
    }

    #[test]
    fn settled_scroll_glides_to_nearest_boundary() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 5, SCREEN);

        state.update_at(scrolled(910.0, 5), start);
        state.update_at(Message::Frame(ms(start, 100)), ms(start, 100));
        assert!(state.needs_frames(ms(start, 100)));

        // The glide ends exactly on the boundary.
        state.update_at(Message::Frame(ms(start, 400)), ms(start, 400));
        state.update_at(scrolled(900.0, 5), ms(start, 401));
        assert_eq!(state.active_index(), ActiveIndex::new(3));
        assert!(state.viewport().is_aligned_with(Orientation::Horizontal, 900.0));
    }

    #[test]
    fn aligned_scroll_does_not_glide() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 5, SCREEN);

        state.update_at(scrolled(600.0, 5), start);
        state.update_at(Message::Frame(ms(start, 100)), ms(start, 100));
        assert!(!state.needs_frames(ms(start, 2_000)));
    }

    #[test]
    fn last_page_clamps_to_scroll_range() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 2, SCREEN);

        // Content 600 wide in a 300 wide viewport: max offset is 300.
        state.update_at(scrolled(300.0, 2), start);
        state.update_at(Message::Frame(ms(start, 100)), ms(start, 100));
        assert!(!state.needs_frames(ms(start, 2_000)));
    }

    #[test]
    fn user_scroll_cancels_snap_glide() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 5, SCREEN);

        state.update_at(scrolled(910.0, 5), start);
        state.update_at(Message::Frame(ms(start, 100)), ms(start, 100));
        state.update_at(Message::Frame(ms(start, 116)), ms(start, 116));

        // The user drags far away from the glide position.
        state.update_at(scrolled(1100.0, 5), ms(start, 120));
        assert!(!state.snap.is_active());
    }

    #[test]
    fn item_count_change_reruns_mount_scroll_and_resizes_dots() {
        let (mut state, _) = State::new(config(300.0, 2), 0, SCREEN);
        assert!(state.mount_offset().is_none());

        let _ = state.sync_item_count(4);
        assert_eq!(state.pagination().len(), 4);
        assert!(state.mount_offset().is_some());
        assert!(state.pagination().dots()[2].is_active());

        let _ = state.sync_item_count(1);
        assert_eq!(state.pagination().len(), 1);
    }

    #[test]
    fn changing_default_index_alone_does_not_scroll() {
        let (mut state, _) = State::new(config(300.0, 1), 5, SCREEN);
        state.set_default_index(4);

        // Same item count: nothing is scheduled.
        let before = state.item_count();
        let _ = state.sync_item_count(before);
        assert_eq!(state.active_index(), ActiveIndex::new(1));

        // The new index is only picked up once the count changes.
        let _ = state.sync_item_count(6);
        assert_abs_diff_eq!(state.mount_offset().expect("mount scroll").x, 1200.0);
    }

    #[test]
    fn screen_resize_updates_fallback_extent() {
        let start = Instant::now();
        let (mut state, _) = State::new(Config::default(), 3, SCREEN);
        state.update_at(Message::ScreenResized(Size::new(400.0, 300.0)), start);
        assert_abs_diff_eq!(state.item_extent().value(), 400.0);
    }

    #[test]
    fn out_of_range_offset_leaves_no_active_dot() {
        let start = Instant::now();
        let (mut state, _) = State::new(config(300.0, 0), 2, SCREEN);
        state.update_at(scrolled(1500.0, 2), start);
        assert_eq!(state.active_index(), ActiveIndex::new(5));
        assert!(state.pagination().dots().iter().all(|dot| !dot.is_active()));
    }
}
