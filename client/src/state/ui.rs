//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (the notice banner) out of the
//! session and network layers so pages can raise feedback without owning
//! the banner's lifecycle.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual tone of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

/// One dismissible message shown at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
    /// Bumped on every `show` so an older auto-dismiss timer cannot close a
    /// newer notice.
    pub seq: u64,
}

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl UiState {
    /// Replace the current notice; returns its sequence number.
    pub fn show(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { title: title.into(), message: message.into(), kind, seq: self.notice_seq });
        self.notice_seq
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    /// Dismiss only if `seq` still names the visible notice.
    pub fn expire(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
