use anyhow::bail;
use dbgprint_config::StreamKind;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dbgprint-demo",
    about = "Print a tour of dbgprint's value representations"
)]
pub(crate) struct Options {
    /// The stream to print to, either "stdout", "stderr" or "null"
    #[structopt(short, long)]
    stream: Option<StreamKind>,
    /// Show the names of the demo tests instead of running them
    #[structopt(short, long)]
    list: bool,
    /// Do not look for a dbgprint.toml
    #[structopt(long)]
    no_config: bool,
    /// Only run the tests whose name contains this
    #[structopt(default_value = "")]
    filter: String,
}

fn main() -> anyhow::Result<()> {
    #[cfg(not(debug_assertions))]
    std::panic::set_hook(Box::new(dbgprint_cli::panic_hook));
    env_logger::init();

    let opt = Options::from_args();
    let suite = dbgprint_cli::demo_suite();

    if opt.list {
        dbgprint_cli::show_tests(&suite);
        return Ok(());
    }

    let config = dbgprint_cli::resolve_config(opt.stream, opt.no_config)?;
    log::debug!("running demos with {:?}", config);
    dbgprint::install(&config);

    if suite.run_matching(&opt.filter) == 0 {
        bail!("no demo test matches '{}'", opt.filter);
    }
    Ok(())
}
