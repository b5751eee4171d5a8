use crate::core::render::OutputFormat;
use crate::domain::model::View;
use crate::domain::ports::Display;
use std::io::Write;
use std::sync::Mutex;

/// Writes every rendered view to a writer, separated by a blank line.
pub struct TerminalDisplay<W: Write + Send> {
    out: Mutex<W>,
    format: OutputFormat,
    show_loading: bool,
}

impl TerminalDisplay<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out: Mutex::new(out),
            format,
            show_loading: true,
        }
    }

    /// Skip the transient loading view, e.g. when stdout is piped.
    pub fn hide_loading(mut self) -> Self {
        self.show_loading = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Display for TerminalDisplay<W> {
    fn show(&self, view: &View) {
        if !self.show_loading && !view.is_final() {
            return;
        }

        let rendered = self.format.render(view);
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}\n", rendered).and_then(|_| out.flush()) {
            tracing::error!("Failed to write to display: {}", e);
        }
    }
}

#[derive(Default)]
struct MemoryState {
    content: String,
    history: Vec<View>,
}

/// Keeps the current content of the container in memory.
#[derive(Default)]
pub struct MemoryDisplay {
    format: OutputFormat,
    state: Mutex<MemoryState>,
}

impl MemoryDisplay {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            state: Mutex::default(),
        }
    }

    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    pub fn history(&self) -> Vec<View> {
        self.lock().history.clone()
    }

    pub fn last_view(&self) -> Option<View> {
        self.lock().history.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Display for MemoryDisplay {
    fn show(&self, view: &View) {
        let mut state = self.lock();
        state.content = self.format.render(view);
        state.history.push(view.clone());
    }
}
