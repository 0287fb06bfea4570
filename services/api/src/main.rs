use skinkit_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("skinkit-api error: {err}");
        std::process::exit(1);
    }
}
