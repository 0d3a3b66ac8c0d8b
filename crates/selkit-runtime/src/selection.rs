#![forbid(unsafe_code)]

//! Shared state for the settings/options picker.
//!
//! [`SelectionState`] owns five independent cells. It is an explicit
//! container: construct one per application, clone the handle (cheap, the
//! cells are shared) into whichever component needs it.
//!
//! Writes to different cells are independent. There is no multi-cell commit;
//! each write is visible to subscribers as soon as it happens.

use crate::reactive::{Computed, Observable};

/// Names the five cells of a [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCell {
    /// Free-text filter input.
    InputValue,
    /// Whether the setting picker is open.
    SettingSelectionActive,
    /// Whether the option picker is open.
    OptionSelectionActive,
    /// Settings matching the current filter.
    FilteredSettings,
    /// Options matching the current filter.
    FilteredOptions,
}

impl SelectionCell {
    pub const ALL: [SelectionCell; 5] = [
        SelectionCell::InputValue,
        SelectionCell::SettingSelectionActive,
        SelectionCell::OptionSelectionActive,
        SelectionCell::FilteredSettings,
        SelectionCell::FilteredOptions,
    ];

    /// Name the front end binds the cell under.
    pub const fn name(self) -> &'static str {
        match self {
            SelectionCell::InputValue => "inputValue",
            SelectionCell::SettingSelectionActive => "isSettingSelectionActive",
            SelectionCell::OptionSelectionActive => "isOptionSelectionActive",
            SelectionCell::FilteredSettings => "filteredSettings",
            SelectionCell::FilteredOptions => "filteredOptions",
        }
    }
}

/// The picker's reactive state.
///
/// Cloning shares the underlying cells.
#[derive(Debug, Clone)]
pub struct SelectionState {
    input_value: Observable<String>,
    is_setting_selection_active: Observable<bool>,
    is_option_selection_active: Observable<bool>,
    filtered_settings: Observable<Vec<String>>,
    filtered_options: Observable<Vec<String>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Fresh state: empty input, both pickers closed, no filtered entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input_value: Observable::named(SelectionCell::InputValue.name(), String::new()),
            is_setting_selection_active: Observable::named(
                SelectionCell::SettingSelectionActive.name(),
                false,
            ),
            is_option_selection_active: Observable::named(
                SelectionCell::OptionSelectionActive.name(),
                false,
            ),
            filtered_settings: Observable::named(
                SelectionCell::FilteredSettings.name(),
                Vec::new(),
            ),
            filtered_options: Observable::named(SelectionCell::FilteredOptions.name(), Vec::new()),
        }
    }

    #[must_use]
    pub fn input_value(&self) -> &Observable<String> {
        &self.input_value
    }

    #[must_use]
    pub fn is_setting_selection_active(&self) -> &Observable<bool> {
        &self.is_setting_selection_active
    }

    #[must_use]
    pub fn is_option_selection_active(&self) -> &Observable<bool> {
        &self.is_option_selection_active
    }

    #[must_use]
    pub fn filtered_settings(&self) -> &Observable<Vec<String>> {
        &self.filtered_settings
    }

    #[must_use]
    pub fn filtered_options(&self) -> &Observable<Vec<String>> {
        &self.filtered_options
    }

    /// Copy of every cell's current value.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            input_value: self.input_value.get(),
            is_setting_selection_active: self.is_setting_selection_active.get(),
            is_option_selection_active: self.is_option_selection_active.get(),
            filtered_settings: self.filtered_settings.get(),
            filtered_options: self.filtered_options.get(),
        }
    }

    /// True while either picker is open.
    #[must_use]
    pub fn any_selection_active(&self) -> Computed<bool> {
        Computed::from2(
            &self.is_setting_selection_active,
            &self.is_option_selection_active,
            |setting, option| *setting || *option,
        )
    }

    /// Write counter of the named cell.
    #[must_use]
    pub fn version_of(&self, cell: SelectionCell) -> u64 {
        match cell {
            SelectionCell::InputValue => self.input_value.version(),
            SelectionCell::SettingSelectionActive => self.is_setting_selection_active.version(),
            SelectionCell::OptionSelectionActive => self.is_option_selection_active.version(),
            SelectionCell::FilteredSettings => self.filtered_settings.version(),
            SelectionCell::FilteredOptions => self.filtered_options.version(),
        }
    }
}

/// Plain copy of a [`SelectionState`] at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub input_value: String,
    pub is_setting_selection_active: bool,
    pub is_option_selection_active: bool,
    pub filtered_settings: Vec<String>,
    pub filtered_options: Vec<String>,
}
