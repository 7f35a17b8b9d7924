use log::info;

use kringle_service::integration::{self, Config};
use kringle_service::state::AppState;

#[tokio::main]
async fn main() -> kringle_service::Result<()> {
    integration::load_dotenv();
    integration::init_logger()?;

    let config = Config::env()?;
    let state = AppState::init(&config)?;
    let app = kringle_service::app(state);

    let addr = config.addr();
    match config.env.ssl_config()? {
        Some(ssl_config) => {
            info!("listening on https://{addr}");
            axum_server::bind_openssl(addr, ssl_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!("listening on http://{addr}");
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
