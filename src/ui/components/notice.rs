//! Short-lived status notices for quote actions (saved, submitted, rejected).

use std::time::Duration;

use dioxus::prelude::*;

const NOTICE_LIFETIME: Duration = Duration::from_secs(6);
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Success,
    Error,
}

impl NoticeTone {
    fn class(self) -> &'static str {
        match self {
            NoticeTone::Info => "notice notice-info",
            NoticeTone::Success => "notice notice-success",
            NoticeTone::Error => "notice notice-error",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            NoticeTone::Info => "ℹ️",
            NoticeTone::Success => "✅",
            NoticeTone::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u64,
    pub tone: NoticeTone,
    pub text: String,
}

/// Notices currently on screen, oldest first. Posting past the cap drops the oldest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    next_seq: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn post(&mut self, tone: NoticeTone, text: impl Into<String>) -> u64 {
        self.next_seq += 1;
        if self.notices.len() >= MAX_VISIBLE {
            self.notices.remove(0);
        }
        self.notices.push(Notice {
            seq: self.next_seq,
            tone,
            text: text.into(),
        });
        self.next_seq
    }

    pub fn dismiss(&mut self, seq: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.seq != seq);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

pub fn notify(mut board: Signal<NoticeBoard>, tone: NoticeTone, text: impl Into<String>) {
    let text = text.into();
    board.with_mut(|b| {
        b.post(tone, text);
    });
}

#[component]
pub fn NoticeStack() -> Element {
    let board = use_context::<Signal<NoticeBoard>>();
    let notices = board.read().notices().to_vec();
    if notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notices",
            ul {
                for (seq, notice) in notices.into_iter().map(|n| (n.seq, n)) {
                    NoticeItem { key: "{seq}", notice, board }
                }
            }
        }
    }
}

#[component]
fn NoticeItem(notice: Notice, board: Signal<NoticeBoard>) -> Element {
    let seq = notice.seq;
    let _expiry = use_future(move || {
        let mut board = board;
        async move {
            tokio::time::sleep(NOTICE_LIFETIME).await;
            board.with_mut(|b| b.dismiss(seq));
        }
    });

    rsx! {
        li { class: notice.tone.class(),
            span { "{notice.tone.glyph()}" }
            p { "{notice.text}" }
            button {
                onclick: move |_| {
                    let mut board = board;
                    board.with_mut(|b| b.dismiss(seq));
                },
                "关闭"
            }
        }
    }
}
