#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome state for the panel: the edit lock.
///
/// The lock is the single source of truth. The lock icon's glyph class, the
/// layout selector's `disabled` attribute, and the tool buttons' `disabled`
/// class are all derived from it on render, so the three surfaces cannot
/// disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub lock: LockState,
}

impl UiState {
    /// Invert the lock. Two calls in a row restore the starting state.
    pub fn toggle_lock(&mut self) {
        self.lock = self.lock.toggled();
    }

    /// Whether the layout selector carries the `disabled` attribute.
    pub fn selector_disabled(&self) -> bool {
        self.lock.is_locked()
    }

    /// Whether a tool button carries the `disabled` class.
    ///
    /// The lock button itself is exempt from the sweep.
    pub fn tool_disabled(&self, function: ToolFunction) -> bool {
        function != ToolFunction::Lock && self.lock.is_locked()
    }
}

/// Edit lock for the navigation bar. A fresh panel starts unlocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

impl LockState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unlocked => Self::Locked,
            Self::Locked => Self::Unlocked,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Self::Locked
    }

    /// Glyph classes for the lock button icon. Exactly one of the two
    /// glyphs is rendered at any time.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Unlocked => "bi bi-unlock-fill",
            Self::Locked => "bi bi-lock-fill",
        }
    }
}

/// Functions of the navigation bar tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolFunction {
    Refresh,
    Config,
    Reset,
    Lock,
}

impl ToolFunction {
    /// Identifier rendered as the button's `data-function` attribute and
    /// used in activity messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Config => "config",
            Self::Reset => "reset",
            Self::Lock => "lock",
        }
    }
}
