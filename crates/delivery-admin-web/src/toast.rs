//! Transient notifications

use delivery_admin_core::Error;
use leptos::prelude::*;
use std::time::Duration;

/// Most toasts on screen at once; older ones are dropped first
const MAX_VISIBLE: usize = 5;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Neutral information
    Info,
}

impl ToastKind {
    /// CSS modifier class
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Info => "toast toast-info",
        }
    }
}

/// One notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used to dismiss it
    pub id: u64,
    /// Kind
    pub kind: ToastKind,
    /// Text
    pub message: String,
}

/// Ordered list of visible notifications
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a notification and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        self.next_id
    }

    /// Remove a notification; `false` if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Visible notifications, oldest first
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle screens use to raise notifications; provided as context by the app
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration_ms: u64,
}

impl Toaster {
    /// Create a toaster whose notifications disappear after `duration_ms`
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    /// Underlying queue, for rendering
    #[must_use]
    pub const fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    fn push(&self, kind: ToastKind, message: String) {
        let queue = self.queue;
        let Some(id) = queue.try_update(|q| q.push(kind, message)) else {
            return;
        };

        set_timeout(
            move || {
                let _ = queue.try_update(|q| q.dismiss(id));
            },
            Duration::from_millis(self.duration_ms),
        );
    }

    /// Raise a success notification
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Raise an error notification
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Raise a neutral notification
    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    /// Log a failed operation and tell the operator about it
    pub fn report(&self, context: &str, error: &Error) {
        tracing::error!("{context}: {error}");
        self.error(error.user_message());
    }

    /// Dismiss a notification immediately
    pub fn dismiss(&self, id: u64) {
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }
}

/// Toaster provided by the nearest ancestor
#[must_use]
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Salvo");
        let second = queue.push(ToastKind::Error, "Falhou");

        assert_ne!(first, second);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "Falhou");
    }

    #[test]
    fn test_oldest_toasts_are_dropped() {
        let mut queue = ToastQueue::default();
        for n in 0..8 {
            queue.push(ToastKind::Info, format!("toast {n}"));
        }

        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["toast 3", "toast 4", "toast 5", "toast 6", "toast 7"]
        );
    }
}
