use chrono::{Local, Utc};
use chrono_tz::Tz;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
};

/// Timestamps log lines in the configured zone, host local time otherwise.
pub struct ZonedTime(pub Option<Tz>);

impl FormatTime for ZonedTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %Z";
        match self.0 {
            Some(tz) => write!(w, "{}", Utc::now().with_timezone(&tz).format(FORMAT)),
            None => write!(w, "{}", Local::now().format(FORMAT)),
        }
    }
}

pub fn init(tz: Option<Tz>) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(true)
        .with_timer(ZonedTime(tz))
        .init();
}
