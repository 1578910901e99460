//! Bottom navigation bar with a sliding selection indicator.

use indexmap::IndexMap;
use wheelpose_animation::Lerp;
use wheelpose_foundation::{ConfigError, ValidationError, Validator};
use wheelpose_ui_graphics::{Point, Size};

use crate::context::WheelContext;
use crate::haptics::{perform_or_log, HapticFeedbackType};
use crate::widgets::wheel_picker::duplicate_name;

/// Name of an icon in the host's icon set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTab {
    pub label: String,
    pub icon: Option<IconRef>,
    /// Unread count shown over the icon.
    pub badge: Option<u32>,
}

impl NavTab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            badge: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Selection state of a navigation bar.
///
/// Tabs are kept in insertion order and addressed by index or label.
#[derive(Debug)]
pub struct NavigationBar {
    id: String,
    context: WheelContext,
    tabs: IndexMap<String, NavTab>,
    selected: usize,
    previous: usize,
    indicator_id: String,
    transition_active: bool,
}

impl NavigationBar {
    /// Fails when `tabs` is empty, a label repeats, or `selected_index` is
    /// out of range.
    ///
    /// `id` shares the context's widget names with every picker and is
    /// released on drop.
    pub fn new(
        id: impl Into<String>,
        context: WheelContext,
        tabs: Vec<NavTab>,
        selected_index: usize,
    ) -> Result<Self, ConfigError> {
        let mut by_label = IndexMap::with_capacity(tabs.len());
        let mut duplicates = Vec::new();
        let tab_count = tabs.len();
        for tab in tabs {
            if by_label.contains_key(&tab.label) {
                duplicates.push(tab.label);
            } else {
                by_label.insert(tab.label.clone(), tab);
            }
        }
        Validator::new()
            .require_non_empty("tabs", tab_count)
            .require_index_in_bounds(
                "selected_index",
                i64::try_from(selected_index).unwrap_or(i64::MAX),
                tab_count,
            )
            .require(duplicates.is_empty(), || {
                ValidationError::new("tabs", format!("duplicate tab labels {duplicates:?}"))
                    .with_expected_range("unique labels")
            })
            .finish()
            .into_result()?;

        let id = id.into();
        if !context.claim_name(&id) {
            return Err(duplicate_name(&id).into());
        }
        Ok(Self {
            indicator_id: format!("nav:{id}:indicator"),
            id,
            context,
            tabs: by_label,
            selected: selected_index,
            previous: selected_index,
            transition_active: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always `false`; a bar has at least one tab.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> impl Iterator<Item = &NavTab> {
        self.tabs.values()
    }

    pub fn tab(&self, index: usize) -> Option<&NavTab> {
        self.tabs.get_index(index).map(|(_, tab)| tab)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_tab(&self) -> &NavTab {
        &self.tabs[self.selected]
    }

    /// Whether the indicator is sliding between two tabs.
    pub fn is_transitioning(&self) -> bool {
        self.transition_active
    }

    /// Selects the tab at `index`.
    ///
    /// Out-of-range indices fail without changing anything. Returns whether
    /// the selection changed.
    pub fn select(&mut self, index: usize) -> Result<bool, ConfigError> {
        Validator::new()
            .require_index_in_bounds(
                "selected_index",
                i64::try_from(index).unwrap_or(i64::MAX),
                self.tabs.len(),
            )
            .finish()
            .into_result()?;
        if index == self.selected {
            return Ok(false);
        }

        log::debug!("{}: tab {} -> {}", self.id, self.selected, index);
        self.previous = self.selected;
        self.selected = index;
        self.context.metrics().record_redraw(&self.id);
        perform_or_log(self.context.haptics(), HapticFeedbackType::SelectionChange);

        self.transition_active = self.context.coordinator().try_begin(&self.indicator_id);
        if !self.transition_active {
            log::debug!("{}: indicator jumps, animation budget exhausted", self.id);
            self.previous = index;
        }
        Ok(true)
    }

    /// Selects the tab labelled `label`.
    pub fn select_label(&mut self, label: &str) -> Result<bool, ConfigError> {
        match self.tabs.get_index_of(label) {
            Some(index) => self.select(index),
            None => Err(ValidationError::new("tabs", format!("no tab labelled {label:?}")).into()),
        }
    }

    /// Updates the badge of the tab at `index`. `None` clears it.
    pub fn set_badge(&mut self, index: usize, badge: Option<u32>) -> bool {
        match self.tabs.get_index_mut(index) {
            Some((_, tab)) => {
                tab.badge = badge;
                true
            }
            None => false,
        }
    }

    /// Ends the indicator transition, releasing its animation slot.
    pub fn finish_transition(&mut self) {
        if self.transition_active {
            self.context.coordinator().unregister_animation(&self.indicator_id);
            self.transition_active = false;
        }
        self.previous = self.selected;
    }

    fn tab_center(&self, bar_size: Size, index: usize) -> Point {
        let slot = bar_size.width / self.tabs.len() as f32;
        Point::new(slot * (index as f32 + 0.5), bar_size.height / 2.0)
    }

    /// Center of the selection indicator inside a bar of `bar_size`.
    ///
    /// `progress` runs from 0 at the previous tab to 1 at the selected one.
    pub fn indicator_position(&self, bar_size: Size, progress: f32) -> Point {
        let to = self.tab_center(bar_size, self.selected);
        if !self.transition_active {
            return to;
        }
        let from = self.tab_center(bar_size, self.previous);
        let progress = if progress.is_nan() {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        from.lerp(&to, progress)
    }
}

impl Drop for NavigationBar {
    fn drop(&mut self) {
        self.finish_transition();
        self.context.release_name(&self.id);
    }
}

#[cfg(test)]
#[path = "../tests/navigation_bar_tests.rs"]
mod tests;
