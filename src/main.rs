#[tokio::main]
async fn main() {
    casolab_lib::run().await;
}
