fn main() {
    sample_service_client::demo::run();
}
