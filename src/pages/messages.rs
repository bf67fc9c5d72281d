//! Messages (inbox) page

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    listing::Selector,
    models::{Message, MessageType},
    repository::RecordSource,
    services::{
        notify::{Notification, Notifier},
        stats::{message_stats, MessageStats},
    },
};

use super::{ListView, Refinement};

/// Inbox tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Unread,
    Requests,
    Overdue,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::All, Tab::Unread, Tab::Requests, Tab::Overdue];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Unread => "Unread",
            Tab::Requests => "Requests",
            Tab::Overdue => "Overdue",
        }
    }
}

fn unread(message: &Message) -> bool {
    !message.is_read
}

pub struct MessagesPage {
    list: ListView<Message>,
    notifier: Arc<dyn Notifier>,
    tab: Tab,
}

impl MessagesPage {
    pub fn new(source: Arc<dyn RecordSource<Message>>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            list: ListView::new(source, notifier.clone(), page_size),
            notifier,
            tab: Tab::All,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        let (status, refinement) = match tab {
            Tab::All => (Selector::All, None),
            Tab::Unread => (Selector::All, Some(unread as Refinement<Message>)),
            Tab::Requests => (Selector::Only(MessageType::Request.as_str().to_string()), None),
            Tab::Overdue => (Selector::Only(MessageType::Overdue.as_str().to_string()), None),
        };
        self.list.set_status(status);
        self.list.set_refinement(refinement);
    }

    /// Open a message for reading, marking it read first if needed.
    pub async fn open(&mut self, id: &str) -> AppResult<Message> {
        let message = self.list.find(id)?.clone();
        if message.is_read {
            return Ok(message);
        }

        let mut read = message;
        read.is_read = true;
        match self.list.update_quietly(id, &read).await {
            Ok(saved) => Ok(saved),
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                self.notifier
                    .notify(Notification::error("Error updating message"));
                Err(e)
            }
        }
    }

    pub fn stats(&self) -> MessageStats {
        message_stats(self.list.records())
    }

    pub fn age_label(&self, message: &Message, now: DateTime<Utc>) -> String {
        message.age_label(now)
    }
}

impl Deref for MessagesPage {
    type Target = ListView<Message>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for MessagesPage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}
