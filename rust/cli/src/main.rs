use crossterm::tty::IsTty;

fn main() {
    bingo_cli::logging::init_logging();
    let color = std::io::stdout().is_tty();
    let code = bingo_cli::run_with_color(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        color,
    );
    std::process::exit(code);
}
