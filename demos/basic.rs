use sinlog::{configure, LogOptions};

fn main() -> std::io::Result<()> {
    // RUST_LOG controls the initial level; unset means debug.
    let log = sinlog::shared();
    log.debug("shared logger ready")?;

    let log = configure(LogOptions::new().with_level("info"));
    log.info("Information")?;
    log.debug("suppressed at info")?;

    // Free-function call style, including descriptor-driven dispatch.
    sinlog::warn("low disk space")?;
    sinlog::log_at("err", "Failed to open file.")?;

    // Tagged, privately owned handle.
    let worker = sinlog::Logger::with_tag("worker");
    worker.set_level("warn");
    worker.error("job 42 failed")?;

    Ok(())
}
