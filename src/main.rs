use log::LevelFilter;

use tsp_tours_core::{Error, Result, TspSolver, logging};

mod menu;

fn main() -> Result<()> {
    let filter = parse_args(std::env::args().skip(1))?;
    logging::init_logger(filter)?;

    let solver = TspSolver::new();
    menu::run(solver)
}

fn parse_args<I, S>(args: I) -> Result<LevelFilter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filter = LevelFilter::Warn;
    let mut args = args.into_iter().map(|arg| arg.as_ref().to_owned());

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Err(Error::invalid_input(usage()));
        }
        let Some(raw_name) = arg.strip_prefix("--") else {
            return Err(Error::invalid_input(format!(
                "Unexpected argument: {arg}\n\n{}",
                usage()
            )));
        };

        let (name, value) = match raw_name.split_once('=') {
            Some((name, value)) => (name.to_owned(), Some(value.to_owned())),
            None => (raw_name.to_owned(), args.next()),
        };

        match name.as_str() {
            "log-level" => {
                let value = value.ok_or_else(|| {
                    Error::invalid_input(format!("Missing value for --{name}"))
                })?;
                filter = logging::parse_level(&value)?;
            }
            _ => {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    usage()
                )));
            }
        }
    }

    Ok(filter)
}

fn usage() -> &'static str {
    concat!(
        "Usage:\n",
        "  tsp-tours [options]\n\n",
        "Options:\n",
        "  --log-level <error|warn|info|debug|trace|off>\n",
        "  --help\n",
    )
}
