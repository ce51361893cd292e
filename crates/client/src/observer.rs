//! Loading-indicator hooks around every catalog request.

/// Notified when a request starts and when it settles.
pub trait FetchObserver: Send + Sync {
    fn on_fetch_start(&self, url: &str);
    fn on_fetch_end(&self, url: &str);
}

/// Observer that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {
    fn on_fetch_start(&self, _url: &str) {}
    fn on_fetch_end(&self, _url: &str) {}
}

/// Signals `on_fetch_end` when dropped, whether the request succeeded or not.
pub(crate) struct FetchGuard<'a> {
    observer: &'a dyn FetchObserver,
    url: &'a str,
}

impl<'a> FetchGuard<'a> {
    pub(crate) fn start(observer: &'a dyn FetchObserver, url: &'a str) -> Self {
        observer.on_fetch_start(url);
        Self { observer, url }
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.observer.on_fetch_end(self.url);
    }
}
