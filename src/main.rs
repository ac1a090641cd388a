fn main() {
    promptopt::app::cli::run();
}
