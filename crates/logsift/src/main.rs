use logsift::runtime::{boot, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let analyzer = boot::boot()?;
    let log_file = std::env::args().nth(1);
    run::run(&analyzer, log_file.as_deref())
}
