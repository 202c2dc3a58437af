use std::process::ExitCode;

use fsprobe::{FileAccessProbe, OpenTrace, ProbeConfig, SUCCESS_EXIT_CODE};

fn _main() -> fsprobe::Result<()> {
    let probe = FileAccessProbe::new(ProbeConfig::default());
    let mut trace = OpenTrace::new();
    let result = probe.run(&mut trace);
    for record in trace.records() {
        log::debug!("trace : {}", record);
    }
    // Handles are closed here, before the process exits.
    result.map(drop)
}

fn main() -> ExitCode {
    env_logger::init();
    match _main() {
        Ok(()) => ExitCode::from(SUCCESS_EXIT_CODE),
        Err(e) => {
            log::info!("error : {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
