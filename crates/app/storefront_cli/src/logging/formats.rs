use flexi_logger::{DeferredNow, style};
use log::{Level, Record};

/// `LEVEL [target] message`, coloured by level. Info lines drop the target.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    match level {
        Level::Info => write!(
            w,
            "{} {}",
            style(level).paint(level.as_str()),
            record.args()
        ),
        _ => write!(
            w,
            "{} [{}] {}",
            style(level).paint(level.as_str()),
            record.target(),
            record.args()
        ),
    }
}
