use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 橫幅顯示時間
pub const BANNER_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-error",
        }
    }

    pub fn aria_live(&self) -> &'static str {
        match self {
            BannerKind::Success => "polite",
            BannerKind::Error => "assertive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Error, message)
    }

    pub fn expires_at(&self) -> Instant {
        self.shown_at + BANNER_DISPLAY_WINDOW
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// 頁面層級的回饋狀態（主內容區頂端的橫幅、焦點、捲動）
///
/// 瀏覽器端只需要把這個狀態同步到 DOM。
#[derive(Debug, Clone, Default)]
pub struct PageState {
    banners: VecDeque<Banner>,
    focused_field: Option<String>,
    scrolled_to_top: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最新的橫幅插在最上方
    pub fn show_banner(&mut self, banner: Banner) {
        tracing::debug!("🔔 Showing {:?} banner: {}", banner.kind, banner.message);
        self.banners.push_front(banner);
    }

    pub fn banners(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }

    pub fn latest_banner(&self) -> Option<&Banner> {
        self.banners.front()
    }

    /// 移除超過顯示時間的橫幅，回傳移除數量
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let before = self.banners.len();
        self.banners.retain(|banner| !banner.is_expired(now));
        before - self.banners.len()
    }

    pub fn focus_field(&mut self, name: impl Into<String>) {
        self.focused_field = Some(name.into());
    }

    pub fn focused_field(&self) -> Option<&str> {
        self.focused_field.as_deref()
    }

    pub fn scroll_to_top(&mut self) {
        self.scrolled_to_top = true;
    }

    pub fn scrolled_to_top(&self) -> bool {
        self.scrolled_to_top
    }
}
