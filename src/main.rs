use ladder_client::run;

#[tokio::main]
async fn main() {
    run().await;
}
