fn main() {
    defectlab::app::cli::run();
}
