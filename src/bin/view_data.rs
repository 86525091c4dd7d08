use stabping_view::{logging, run};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process;
use tracing::debug;

fn main() {
    logging::init();

    let args: Vec<OsString> = env::args_os().collect();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = run(&args, &mut out);
    // flush whatever made it out before exiting
    drop(out);

    match result {
        Ok(records) => debug!(records, "dump complete"),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
