use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_CAP: u64 = 10 * 1024 * 1024;

pub fn init_logging(log_level: Level, log_file: Option<&str>) {
    let level_filter = LevelFilter::from_level(log_level);
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_filter(level_filter);

    let file_layer = log_file.map(|path| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(CappedLogFile::factory(PathBuf::from(path), LOG_FILE_CAP))
            .with_filter(level_filter)
    });

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

/// Appends to a log file; once the file reaches `cap` bytes only its newest half is kept.
struct CappedLogFile {
    path: PathBuf,
    cap: u64,
    lock: Arc<Mutex<()>>,
}

impl CappedLogFile {
    fn factory(path: PathBuf, cap: u64) -> impl Fn() -> CappedLogFile + Send + Sync + 'static {
        let lock = Arc::new(Mutex::new(()));
        move || CappedLogFile {
            path: path.clone(),
            cap,
            lock: lock.clone(),
        }
    }

    fn shrink_if_full(&self) -> io::Result<()> {
        let len = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(_) => return Ok(()),
        };
        if len < self.cap {
            return Ok(());
        }

        let keep = self.cap / 2;
        let mut tail = Vec::new();
        let mut reader = OpenOptions::new().read(true).open(&self.path)?;
        reader.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        reader.read_to_end(&mut tail)?;

        let mut writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        writer.write_all(&tail)
    }
}

impl Write for CappedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        self.shrink_if_full()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_log_file_keeps_newest_half() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.log");
        let make_writer = CappedLogFile::factory(path.clone(), 10);

        make_writer().write_all(b"0123456789").unwrap();
        make_writer().write_all(b"ab").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "56789ab");
    }

    #[test]
    fn test_capped_log_file_appends_below_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.log");
        let make_writer = CappedLogFile::factory(path.clone(), 1024);

        make_writer().write_all(b"first\n").unwrap();
        make_writer().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
