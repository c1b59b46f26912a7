use clap::Parser;
use fz_cli::{Cli, run, stderr_color};
use owo_colors::OwoColorize;

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    let color = stderr_color(&cli);

    if let Err(e) = run(cli) {
        if color {
            eprintln!("{} {}", "Error:".red(), e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
