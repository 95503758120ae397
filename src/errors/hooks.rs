//! Process-wide failure hooks.

use std::any::Any;
use std::panic;
use std::sync::Arc;

use crate::errors::reporter::ErrorReporter;

/// Route panics to `reporter`, then run whatever hook was installed before.
pub fn install_panic_hook(reporter: Arc<dyn ErrorReporter>) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        reporter.report("panic", &panic_message(info.payload()), &location);
        previous(info);
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
