//! Collapse/expand affordance for the overview panel.
//!
//! The toggle button is absolutely positioned while the panel is expanded. On
//! collapse it must stay that way until the panel's width transition finishes,
//! otherwise it detaches from the shrinking panel mid-animation. The
//! `Collapsing` state covers that window.

#[cfg(test)]
#[path = "collapse_test.rs"]
mod collapse_test;

use serde::Serialize;

use crate::consts::COLLAPSE_TRANSITION_PROPERTY;

/// Panel visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollapseState {
    Expanded,
    /// Collapsed, but the width transition has not reported completion.
    Collapsing,
    Collapsed,
}

/// Which configured label the toggle button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// The "expand" label, shown while collapsed.
    Expand,
    /// The "collapse" label, shown while expanded.
    Collapse,
}

/// Visual attributes required by a [`CollapseState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Container carries the collapsed class.
    pub collapsed: bool,
    /// Toggle button carries the absolute-positioning class.
    pub button_absolute: bool,
    pub label: LabelKind,
}

impl CollapseState {
    #[must_use]
    pub fn initial(collapsed: bool) -> Self {
        if collapsed { Self::Collapsed } else { Self::Expanded }
    }

    /// Next state after the toggle control fires.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsing,
            Self::Collapsing | Self::Collapsed => Self::Expanded,
        }
    }

    /// Next state after a CSS transition on `property` completes.
    #[must_use]
    pub fn transition_ended(self, property: &str) -> Self {
        match self {
            Self::Collapsing if property == COLLAPSE_TRANSITION_PROPERTY => Self::Collapsed,
            other => other,
        }
    }

    #[must_use]
    pub fn presentation(self) -> Presentation {
        match self {
            Self::Expanded => Presentation { collapsed: false, button_absolute: true, label: LabelKind::Collapse },
            Self::Collapsing => Presentation { collapsed: true, button_absolute: true, label: LabelKind::Expand },
            Self::Collapsed => Presentation { collapsed: true, button_absolute: false, label: LabelKind::Expand },
        }
    }
}

/// Collapse state plus the `collapsible` switch from the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collapse {
    state: CollapseState,
    collapsible: bool,
}

impl Collapse {
    #[must_use]
    pub fn new(collapsed: bool, collapsible: bool) -> Self {
        Self { state: CollapseState::initial(collapsed), collapsible }
    }

    #[must_use]
    pub fn state(&self) -> CollapseState {
        self.state
    }

    /// Handle the toggle control. Returns the new presentation when it changed.
    pub fn toggle(&mut self) -> Option<Presentation> {
        if !self.collapsible {
            return None;
        }
        self.advance(self.state.toggled())
    }

    /// Handle a transition-completion signal. Returns the new presentation when it changed.
    pub fn transition_end(&mut self, property: &str) -> Option<Presentation> {
        self.advance(self.state.transition_ended(property))
    }

    fn advance(&mut self, next: CollapseState) -> Option<Presentation> {
        let before = self.state.presentation();
        self.state = next;
        let after = next.presentation();
        (before != after).then_some(after)
    }
}
