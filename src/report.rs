/// Sink for the human-readable progress of a regression run.
pub trait Reporter {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, msg: &str) {
        log::info!("{msg}");
    }

    fn error(&self, msg: &str) {
        log::error!("{msg}");
    }
}
