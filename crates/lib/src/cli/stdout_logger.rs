use std::io::Write;

use log::Log;

/// Logger used by solvers outside of `--json` mode.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        // Nothing sensible to do if stdout is gone.
        let _ = writeln!(
            out,
            "{file}:{line}: {}: {}",
            record.level(),
            record.args(),
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}
