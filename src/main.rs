use grid_chess::terminal::terminal_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
