// Usage: jsgo [--config FILE] [--json-logs] <stringify|compile|check|ast> ...

fn main() {
    jsgo::cli::run();
}
