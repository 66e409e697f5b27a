//! Plots a truncated fourier series of a pulse wave. The right and left arrow keys change how
//! many periods fit across the window. The up and down arrow keys change the number of terms in
//! the series.

use fourier_plt_core::Config;
use fourier_plt_sdl2::Window;

fn run() -> anyhow::Result<()> {
    let window = Window::builder().config(Config::default()).build();
    window.run()
}

/// Prints the diagnostic for a failed run and returns the process exit status.
fn exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("{e}");
            1
        }
    }
}

fn main() {
    env_logger::init();
    let code = exit_code(run());
    log::debug!("Exiting with status {code}");
    std::process::exit(code);
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn closed_window_exits_zero() {
        assert_eq!(exit_code(Ok(())), 0);
    }

    #[test]
    fn startup_failure_exits_one() {
        let result =
            Err(anyhow!("Window could not be created! SDL_Error: no display"));
        assert_eq!(exit_code(result), 1);
    }
}
