use crossterm::style::Stylize;
use tracing::info;

/// A place to send user-facing notices (toasts in a GUI, stderr in the CLI).
///
/// Handed to callers that want to report outcomes; the table view itself
/// never notifies.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Emits notices as `info` events under the `notify` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, body: &str) {
        info!(target: "notify", "{}: {}", title, body);
    }
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    use_color: bool,
}

impl ConsoleNotifier {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn format(&self, title: &str, body: &str) -> String {
        if self.use_color {
            format!("{} {}", format!("{}:", title).green().bold(), body)
        } else {
            format!("{}: {}", title, body)
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        eprintln!("{}", self.format(title, body));
        info!(target: "notify", "{}: {}", title, body);
    }
}
