use anyhow::Result;
use lineset::report::{result_writer, Report, Terminal};
use lineset::{args, exec, logging, styles};
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = args::parsed();
    logging::init(args.verbose)?;
    styles::init();
    let style = styles::colored(args.color);

    // The output file is created only once there is a result to put in it
    let outcome = exec(&args.request())
        .and_then(|set| Ok((set, result_writer(args.output.as_deref())?)));
    match outcome {
        Ok((set, out)) => {
            let mut terminal = Terminal::new(out, io::stderr().lock(), style, args.sort);
            terminal.result(&set)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let mut terminal = Terminal::new(io::sink(), io::stderr().lock(), style, args.sort);
            terminal.error(&e)?;
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
