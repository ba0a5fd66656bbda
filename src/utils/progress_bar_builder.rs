use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const SCAN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] {msg} [{wide_bar}] {pos}/{len} ({per_sec})";
pub const PHASE_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

pub struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    length: Option<u64>,
    tick: Option<Duration>,
}

impl ProgressBarBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} {msg}",
            message: message.into(),
            length: None,
            tick: None,
        }
    }

    pub fn with_template(mut self, template: &'static str) -> Self {
        self.style_template = template;
        self
    }

    /// Builds a bar instead of a spinner. The length can be reset later.
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_tick(mut self) -> Self {
        self.tick = Some(Duration::from_millis(200));
        self
    }

    pub fn build(self) -> Result<ProgressBar> {
        let pb = match self.length {
            Some(length) => ProgressBar::new(length),
            None => ProgressBar::new_spinner(),
        };

        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if let Some(interval) = self.tick {
            pb.enable_steady_tick(interval);
        }

        Ok(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_bar_and_spinner() {
        let bar = ProgressBarBuilder::new("scan")
            .with_template(SCAN_TEMPLATE)
            .with_length(10)
            .build()
            .unwrap();
        assert_eq!(bar.length(), Some(10));
        assert_eq!(bar.message(), "scan");

        let spinner = ProgressBarBuilder::new("load")
            .with_template(PHASE_TEMPLATE)
            .with_tick()
            .build()
            .unwrap();
        assert_eq!(spinner.message(), "load");
        assert_eq!(spinner.length(), None);
        spinner.finish_and_clear();
    }
}
