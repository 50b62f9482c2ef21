use granter::{run, Error, Options};
use structopt::StructOpt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let options = Options::from_args();

    // set up logging, keeping the interactive output clean by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    run(options).await
}
