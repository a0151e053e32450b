use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;

use crypto_wallet_api::constants;
use crypto_wallet_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_address = constants::config::get_server_address();
    println!("🚀 Starting Crypto Wallet API server...");
    println!("🌐 Server will be available at http://{}", server_address);

    HttpServer::new(|| {
        App::new()
            .wrap(
                middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")),
            )
            .service(routes::api::configure_routes())
    })
    .bind(&server_address)?
    .run()
    .await
}
