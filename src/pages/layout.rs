//! Layout shell: sidebar and user menu.
//!
//! Window and document events arrive on a [`LayoutBus`]. A mounted layout
//! holds the only subscription it uses and releases it when dropped, so an
//! unmounted shell never reacts to events.

use tokio::sync::broadcast;

/// Widths below this are treated as mobile
pub const MOBILE_BREAKPOINT: u32 = 768;

const BUS_CAPACITY: usize = 64;

/// Sidebar entries, in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Dashboard", path: "/dashboard" },
    NavItem { label: "Books", path: "/books" },
    NavItem { label: "Authors", path: "/authors" },
    NavItem { label: "Settings", path: "/settings" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Where a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Sidebar,
    SidebarToggle,
    UserMenu,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    Resize { width: u32 },
    ToggleSidebar,
    ToggleUserMenu,
    Click(ClickTarget),
    Escape,
    Navigate { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    pub width: u32,
    pub sidebar_open: bool,
    pub user_menu_open: bool,
    pub active_path: String,
}

impl LayoutState {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            sidebar_open: false,
            user_menu_open: false,
            active_path: NAV_ITEMS[0].path.to_string(),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// On desktop the sidebar is always shown
    pub fn sidebar_visible(&self) -> bool {
        !self.is_mobile() || self.sidebar_open
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.active_path == item.path
    }

    pub fn apply(&mut self, event: &LayoutEvent) {
        match event {
            LayoutEvent::Resize { width } => {
                let was_mobile = self.is_mobile();
                self.width = *width;
                if was_mobile && !self.is_mobile() {
                    self.sidebar_open = false;
                }
            }
            LayoutEvent::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            LayoutEvent::ToggleUserMenu => self.user_menu_open = !self.user_menu_open,
            LayoutEvent::Click(target) => {
                if self.is_mobile()
                    && self.sidebar_open
                    && !matches!(target, ClickTarget::Sidebar | ClickTarget::SidebarToggle)
                {
                    self.sidebar_open = false;
                }
                if self.user_menu_open && *target != ClickTarget::UserMenu {
                    self.user_menu_open = false;
                }
            }
            LayoutEvent::Escape => {
                self.sidebar_open = false;
                self.user_menu_open = false;
            }
            LayoutEvent::Navigate { path } => {
                self.active_path = path.clone();
                self.user_menu_open = false;
                if self.is_mobile() {
                    self.sidebar_open = false;
                }
            }
        }
    }
}

/// Source of layout events
#[derive(Debug, Clone)]
pub struct LayoutBus {
    tx: broadcast::Sender<LayoutEvent>,
}

impl Default for LayoutBus {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBus {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Returns how many mounted layouts received the event
    pub fn publish(&self, event: LayoutEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribers(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Subscribe and start from `width`
    pub fn mount(&self, width: u32) -> MountedLayout {
        MountedLayout {
            state: LayoutState::new(width),
            events: self.tx.subscribe(),
        }
    }
}

/// Layout state plus its live subscription; dropping it unsubscribes.
#[derive(Debug)]
pub struct MountedLayout {
    state: LayoutState,
    events: broadcast::Receiver<LayoutEvent>,
}

impl MountedLayout {
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Apply every event published since the last call
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.state.apply(&event);
                    applied += 1;
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Layout events dropped");
                }
                Err(_) => break,
            }
        }
        applied
    }

    /// Wait for the next event and apply it; `None` once the bus is gone
    pub async fn next(&mut self) -> Option<LayoutEvent> {
        loop {
            match self.events.recv().await {
                Ok(event) => {
                    self.state.apply(&event);
                    return Some(event);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Layout events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
