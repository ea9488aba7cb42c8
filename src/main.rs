use numstep::logging;
use numstep::ui;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    // The main loop is synchronous; tokio only hosts quote fetch tasks.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    ui::runtime::run(runtime.handle().clone())
}
