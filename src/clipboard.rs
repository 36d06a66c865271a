//! Clipboard
//!
//! Copies sub-category ids and reports the outcome through a `Notifier`.

use std::future::Future;

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

use crate::loader::js_error_text;
use crate::models::ItemId;
use crate::toast::{Notifier, ToastKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// `navigator.clipboard.writeText`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or_else(|| ClipboardError("no window".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError(js_error_text(&e)))
    }
}

/// Copy `id` and show the matching toast
pub async fn copy_item_id<C, N>(clipboard: &C, notifier: &N, id: &ItemId)
where
    C: ClipboardWriter,
    N: Notifier,
{
    let result = clipboard.write_text(id.as_str()).await;
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("[Clipboard] Failed to copy text: {}", e).into());
    }
    report_copy(&result, id, notifier);
}

pub fn report_copy<N: Notifier>(result: &Result<(), ClipboardError>, id: &ItemId, notifier: &N) {
    match result {
        Ok(()) => notifier.notify(format!("分区ID: {} 已复制!", id), ToastKind::Success),
        Err(_) => notifier.notify("复制失败!".to_string(), ToastKind::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: RefCell<Vec<(String, ToastKind)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: String, kind: ToastKind) {
            self.seen.borrow_mut().push((message, kind));
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        written: RefCell<Vec<String>>,
    }

    impl ClipboardWriter for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_writes_id_and_notifies() {
        let clipboard = FakeClipboard::default();
        let notifier = RecordingNotifier::default();
        let id = ItemId::new("86");

        futures::executor::block_on(copy_item_id(&clipboard, &notifier, &id));

        assert_eq!(*clipboard.written.borrow(), vec!["86".to_string()]);
        assert_eq!(
            *notifier.seen.borrow(),
            vec![("分区ID: 86 已复制!".to_string(), ToastKind::Success)]
        );
    }

    #[test]
    fn test_failed_copy_shows_error_toast() {
        let notifier = RecordingNotifier::default();
        let result = Err(ClipboardError("denied".to_string()));

        report_copy(&result, &ItemId::new("86"), &notifier);

        assert_eq!(*notifier.seen.borrow(), vec![("复制失败!".to_string(), ToastKind::Error)]);
    }
}
