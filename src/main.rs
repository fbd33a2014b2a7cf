use llg_shapley::{Result, TableWriterBuilder, make_tables};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let tables = make_tables();
    TableWriterBuilder::default().build()?.write(&tables)
}
