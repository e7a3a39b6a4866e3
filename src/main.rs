#[tokio::main]
async fn main() {
    portfolio_backend::start_server().await;
}
