//! Transient toast notifications.
//!
//! Every `show` bumps a generation counter and hands back a [`DismissTicket`].
//! The view schedules the dismissal for that ticket and cancels whatever
//! dismissal was pending before. A ticket from an older toast can never hide a
//! newer one: `dismiss` ignores stale generations.

/// Auto-dismiss delay in milliseconds.
pub const DISMISS_AFTER_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSeverity {
    #[default]
    Info,
    Error,
}

impl ToastSeverity {
    pub fn background(&self) -> &'static str {
        match self {
            Self::Info => "#06b6d4",
            Self::Error => "#dc2626",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toaster {
    current: Option<Toast>,
    generation: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) -> DismissTicket {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Toast {
            message: message.into(),
            severity,
        });
        DismissTicket(self.generation)
    }

    /// Hide the toast if `ticket` still belongs to it. Returns whether it hid.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Ticket for the toast currently on screen, if any.
    pub fn pending_ticket(&self) -> Option<DismissTicket> {
        self.current.as_ref().map(|_| DismissTicket(self.generation))
    }
}
