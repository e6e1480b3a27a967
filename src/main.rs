#[tokio::main]
async fn main() {
  sports_analytics_lib::run().await
}
