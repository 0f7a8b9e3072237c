//! Byte-level extraction progress.
//!
//! Extractors report through the [`ProgressSink`] trait so the terminal bar
//! can be swapped for a silent or recording sink. A [`ProgressScope`] ties one
//! sink activation to one extraction call: it calls [`ProgressSink::finish`]
//! when dropped, whichever way the call exits.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Receiver of progress updates for one extraction at a time.
pub trait ProgressSink {
    /// Begin a new operation expecting `total` bytes.
    fn start(&mut self, label: &str, total: u64);

    /// Add `delta` processed bytes.
    fn update(&mut self, delta: u64);

    /// Bytes processed since `start`.
    fn position(&self) -> u64;

    /// Flush the final state and stop redrawing.
    fn finish(&mut self);
}

/// Scoped activation of a [`ProgressSink`].
pub struct ProgressScope<'a> {
    sink: &'a mut dyn ProgressSink,
}

impl<'a> ProgressScope<'a> {
    pub fn begin(sink: &'a mut dyn ProgressSink, label: &str, total: u64) -> Self {
        sink.start(label, total);
        Self { sink }
    }

    pub fn update(&mut self, delta: u64) {
        self.sink.update(delta);
    }

    pub fn position(&self) -> u64 {
        self.sink.position()
    }
}

impl Drop for ProgressScope<'_> {
    fn drop(&mut self) {
        self.sink.finish();
    }
}

/// Progress bar drawn on stderr.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(
                "{msg}: {percent:>3}% [{bar:30.white/dim}] {bytes}/{total_bytes} {bytes_per_sec} [{elapsed_precise}<{eta}]",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl ProgressSink for TerminalProgress {
    fn start(&mut self, label: &str, total: u64) {
        if let Some(previous) = self.bar.take() {
            previous.finish();
        }

        let bar = ProgressBar::new(total);
        bar.set_style(Self::style());
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    fn update(&mut self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    fn position(&self) -> u64 {
        self.bar.as_ref().map(|bar| bar.position()).unwrap_or(0)
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

/// Sink that remembers every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub label: Option<String>,
    pub total: u64,
    pub updates: Vec<u64>,
    pub starts: usize,
    pub finishes: usize,
}

#[cfg(test)]
impl RecordingProgress {
    /// Whether every `start` has been matched by a `finish`.
    pub fn is_finished(&self) -> bool {
        self.starts > 0 && self.starts == self.finishes
    }

    /// Running totals after each update.
    pub fn cumulative(&self) -> Vec<u64> {
        self.updates
            .iter()
            .scan(0u64, |acc, delta| {
                *acc += delta;
                Some(*acc)
            })
            .collect()
    }
}

#[cfg(test)]
impl ProgressSink for RecordingProgress {
    fn start(&mut self, label: &str, total: u64) {
        self.label = Some(label.to_string());
        self.total = total;
        self.updates.clear();
        self.starts += 1;
    }

    fn update(&mut self, delta: u64) {
        self.updates.push(delta);
    }

    fn position(&self) -> u64 {
        self.updates.iter().sum()
    }

    fn finish(&mut self) {
        self.finishes += 1;
    }
}
