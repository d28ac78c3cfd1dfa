use anyhow::Result;
use gaia_runner::utils::logging::render_results_table;
use gaia_runner::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    let result = app.run().await?;

    println!("{}", result.status_message(&app.config().username));
    println!();
    println!("{}", render_results_table(&result.results_log));

    Ok(())
}
