//! Root presentation context shared by the form page and the alert dialog.
//!
//! The page owns two pieces of shared state: the set of theme markers on the
//! root (currently only `"dark"`), and whether the page may scroll. Scrolling
//! is only ever suspended through a [`ScrollLock`] guard, so a dialog that goes
//! away by any path releases it.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Marker present on the root while the page is in dark mode.
pub const DARK_MARKER: &str = "dark";

/// Page context handle. UI-thread only.
pub type SharedPage = Rc<RefCell<PageContext>>;

#[derive(Debug, Default)]
pub struct PageContext {
    markers: BTreeSet<&'static str>,
    scroll_locks: usize,
}

impl PageContext {
    pub fn shared() -> SharedPage {
        Rc::new(RefCell::new(PageContext::default()))
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn set_marker(&mut self, marker: &'static str, present: bool) {
        if present {
            self.markers.insert(marker);
        } else {
            self.markers.remove(marker);
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.markers.iter().copied()
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_locks == 0
    }
}

/// Holds page scrolling suspended for as long as it lives.
#[derive(Debug)]
pub struct ScrollLock {
    page: SharedPage,
}

impl ScrollLock {
    pub fn acquire(page: &SharedPage) -> Self {
        page.borrow_mut().scroll_locks += 1;
        Self {
            page: Rc::clone(page),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let mut page = self.page.borrow_mut();
        page.scroll_locks = page.scroll_locks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_restores_on_drop() {
        let page = PageContext::shared();
        assert!(page.borrow().scroll_enabled());
        {
            let _lock = ScrollLock::acquire(&page);
            assert!(!page.borrow().scroll_enabled());
        }
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_overlapping_locks() {
        let page = PageContext::shared();
        let first = ScrollLock::acquire(&page);
        let second = ScrollLock::acquire(&page);
        drop(first);
        assert!(!page.borrow().scroll_enabled());
        drop(second);
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_lock_released_during_unwind() {
        let page = PageContext::shared();
        let inner = Rc::clone(&page);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _lock = ScrollLock::acquire(&inner);
            panic!("dialog torn down abruptly");
        }));
        assert!(result.is_err());
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_markers() {
        let page = PageContext::shared();
        page.borrow_mut().set_marker(DARK_MARKER, true);
        assert!(page.borrow().has_marker(DARK_MARKER));
        page.borrow_mut().set_marker(DARK_MARKER, false);
        assert_eq!(page.borrow().markers().count(), 0);
    }
}
