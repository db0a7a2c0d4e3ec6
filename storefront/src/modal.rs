//! Cart drawer modal: open/close state, focus restore, and the focus loop.
//!
//! The controller never touches the DOM. Every transition returns the list of
//! [`ModalEffect`]s the host must apply, in order. Elements are referred to by
//! their DOM id.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Whether the drawer is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// A DOM side effect produced by a drawer transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect {
    /// Un-hide the drawer.
    Reveal,
    /// Hide the drawer.
    Hide,
    /// Set `aria-expanded` on the trigger button.
    SetExpanded(bool),
    /// Move focus to the element with this id.
    Focus(String),
    /// Suspend background scroll.
    LockScroll,
    /// Restore background scroll.
    UnlockScroll,
    /// Cancel the browser's default handling of the triggering key event.
    PreventDefault,
}

/// A candidate for the drawer's focus loop, as seen in the DOM at key time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Focusable {
    pub id: String,
    pub disabled: bool,
    /// Not laid out (`display: none` or an ancestor is hidden).
    pub hidden: bool,
}

impl Focusable {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), disabled: false, hidden: false }
    }

    #[must_use]
    pub fn can_focus(&self) -> bool {
        !self.disabled && !self.hidden
    }
}

/// Drawer state machine.
#[derive(Debug, Clone)]
pub struct ModalController {
    state: DrawerState,
    initial_focus: String,
    restore_focus: Option<String>,
}

impl ModalController {
    /// `initial_focus` is the id of the drawer's first focusable control.
    pub fn new(initial_focus: impl Into<String>) -> Self {
        Self { state: DrawerState::Closed, initial_focus: initial_focus.into(), restore_focus: None }
    }

    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Open the drawer, remembering `active` (the focused element id) for close.
    ///
    /// Opening an already open drawer changes nothing, so the original restore
    /// target survives.
    pub fn open(&mut self, active: Option<String>) -> Vec<ModalEffect> {
        if self.is_open() {
            return Vec::new();
        }
        self.state = DrawerState::Open;
        self.restore_focus = active;
        vec![
            ModalEffect::Reveal,
            ModalEffect::SetExpanded(true),
            ModalEffect::Focus(self.initial_focus.clone()),
            ModalEffect::LockScroll,
        ]
    }

    /// Close the drawer and hand focus back. No-op while closed.
    pub fn close(&mut self) -> Vec<ModalEffect> {
        if !self.is_open() {
            return Vec::new();
        }
        self.state = DrawerState::Closed;
        let mut effects = vec![ModalEffect::Hide, ModalEffect::SetExpanded(false), ModalEffect::UnlockScroll];
        if let Some(id) = self.restore_focus.take() {
            effects.push(ModalEffect::Focus(id));
        }
        effects
    }

    /// A click inside the drawer; closes only when the target is a dismiss target.
    pub fn click(&mut self, is_dismiss_target: bool) -> Vec<ModalEffect> {
        if is_dismiss_target { self.close() } else { Vec::new() }
    }

    /// Key press anywhere on the page.
    ///
    /// `Escape` closes an open drawer. `Tab` / `Shift+Tab` wrap focus between
    /// the first and last focusable drawer controls. Everything else, and every
    /// key while closed, is ignored.
    pub fn key_down(&mut self, key: &str, shift: bool, active: Option<&str>, candidates: &[Focusable]) -> Vec<ModalEffect> {
        if !self.is_open() {
            return Vec::new();
        }
        match key {
            "Escape" => self.close(),
            "Tab" => focus_loop(shift, active, candidates),
            _ => Vec::new(),
        }
    }
}

fn focus_loop(shift: bool, active: Option<&str>, candidates: &[Focusable]) -> Vec<ModalEffect> {
    let mut focusable = candidates.iter().filter(|c| c.can_focus());
    let Some(first) = focusable.next() else {
        return Vec::new();
    };
    let last = focusable.last().unwrap_or(first);
    let (edge, target) = if shift { (first, last) } else { (last, first) };
    if active == Some(edge.id.as_str()) {
        vec![ModalEffect::PreventDefault, ModalEffect::Focus(target.id.clone())]
    } else {
        Vec::new()
    }
}
