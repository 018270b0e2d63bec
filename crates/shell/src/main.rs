use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use shopfront_catalog::CatalogPipeline;
use shopfront_infra::ShopfrontConfig;
use shopfront_shell::{Session, Step};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = ShopfrontConfig::from_env();
    tracing::info!(products = ?config.products, cart = %config.cart_path.display(), "starting shopfront");

    let source = config.product_source();
    let pipeline = CatalogPipeline::load(source.as_ref(), config.cart_store(), config.settings.clone()).await;
    let mut session = Session::new(pipeline);

    let mut stdout = std::io::stdout();
    write!(stdout, "{}", session.welcome())?;
    stdout.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match session.handle_line(&line) {
            Step::Continue(output) => {
                write!(stdout, "{output}")?;
                stdout.flush()?;
            }
            Step::Quit => break,
        }
    }

    Ok(())
}
