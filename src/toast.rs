//! Toast Notifications
//!
//! A single toast slot: showing a new toast replaces the old one at once.
//! Every toast carries an id so timers started for a replaced toast become
//! no-ops instead of touching its successor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, enter transition not yet started
    Entering,
    Shown,
    /// Exit transition running; removed when it ends
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match (self.phase, self.kind) {
            (ToastPhase::Shown, ToastKind::Error) => "toast toast-error show",
            (ToastPhase::Shown, ToastKind::Success) => "toast show",
            (_, ToastKind::Error) => "toast toast-error",
            (_, ToastKind::Success) => "toast",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replace whatever is showing; returns the new toast's id
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        });
        self.next_id
    }

    pub fn reveal(&mut self, id: u64) -> bool {
        self.advance(id, ToastPhase::Entering, ToastPhase::Shown)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        self.advance(id, ToastPhase::Shown, ToastPhase::Leaving)
            || self.advance(id, ToastPhase::Entering, ToastPhase::Leaving)
    }

    /// Drop the toast once its exit transition is over
    pub fn remove(&mut self, id: u64) -> bool {
        match &self.current {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Leaving => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    fn advance(&mut self, id: u64, from: ToastPhase, to: ToastPhase) -> bool {
        match &mut self.current {
            Some(toast) if toast.id == id && toast.phase == from => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }
}

/// Anything that can surface a transient message to the user
pub trait Notifier {
    fn notify(&self, message: String, kind: ToastKind);
}
