//! Best-effort user notifications.
//!
//! Notifications are permission gated and fire-and-forget: a missing or
//! refused permission silently drops the notification.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Not asked yet.
    Default,
    Granted,
    Denied,
}

pub trait Notifier: Send {
    fn permission(&self) -> Permission;
    fn request_permission(&mut self) -> Permission;
    fn show(&mut self, title: &str, body: &str);
}

/// Shows the notification when permission is granted; returns whether it was shown.
pub fn notify(notifier: &mut dyn Notifier, title: &str, body: &str) -> bool {
    if notifier.permission() != Permission::Granted {
        msg_debug!(Message::NotificationSkipped(title.to_string()));
        return false;
    }
    notifier.show(title, body);
    true
}

/// Requests permission unless it was already granted or refused.
pub fn ensure_permission(notifier: &mut dyn Notifier) -> Permission {
    match notifier.permission() {
        Permission::Default => notifier.request_permission(),
        permission => permission,
    }
}

/// Prints notifications to the terminal with a bell.
pub struct TerminalNotifier {
    enabled: bool,
    permission: Permission,
}

impl TerminalNotifier {
    /// `enabled` comes from configuration; a disabled notifier denies every request.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            permission: Permission::Default,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        self.permission = if self.enabled { Permission::Granted } else { Permission::Denied };
        self.permission
    }

    fn show(&mut self, title: &str, body: &str) {
        msg_print!(Message::Notification(title.to_string(), body.to_string()), true);
    }
}

/// Notifier for environments without any notification surface.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn show(&mut self, _title: &str, _body: &str) {}
}
