use handsort_service::{LogFormat, init_logging};
use std::io;

fn main() {
    let format = match std::env::var("HANDSORT_LOG_FORMAT").as_deref() {
        Ok("json") => LogFormat::Json,
        _ => LogFormat::Text,
    };
    // A subscriber installed by an embedding process wins; logging is optional.
    let _ = init_logging(format);

    let code = handsort_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
