use crate::params::Params;
use coord_2d::Size;

/// A platform event that the plot responds to, already decoded from whatever the windowing
/// library delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Right arrow
    IncreaseTimeScale,
    /// Left arrow
    DecreaseTimeScale,
    /// Up arrow
    IncreaseTermCount,
    /// Down arrow
    DecreaseTermCount,
    Resize(Size),
    Quit,
}

impl Command {
    /// Applies the command to the parameter state. `Quit` doesn't touch the parameters. It's
    /// handled by the frame loop.
    pub fn apply(self, params: &mut Params) {
        match self {
            Self::IncreaseTimeScale => {
                params.increase_time_scale();
                log_series_params(params);
            }
            Self::DecreaseTimeScale => {
                params.decrease_time_scale();
                log_series_params(params);
            }
            Self::IncreaseTermCount => {
                params.increase_term_count();
                log_series_params(params);
            }
            Self::DecreaseTermCount => {
                params.decrease_term_count();
                log_series_params(params);
            }
            Self::Resize(viewport) => {
                params.resize(viewport);
                log::debug!(
                    "viewport resized to {}x{}",
                    viewport.width(),
                    viewport.height()
                );
            }
            Self::Quit => (),
        }
    }
}

fn log_series_params(params: &Params) {
    log::debug!(
        "time scale: {}, term count: {}",
        params.time_scale,
        params.term_count
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;

    fn params() -> Params {
        Params::new(&Config::default(), Size::new(800, 600))
    }

    #[test]
    fn arrow_commands() {
        let mut params = params();
        Command::IncreaseTimeScale.apply(&mut params);
        assert_eq!(params.time_scale, 4.0);
        Command::DecreaseTimeScale.apply(&mut params);
        assert_eq!(params.time_scale, 2.0);
        Command::DecreaseTimeScale.apply(&mut params);
        assert_eq!(params.time_scale, 2.0);
        Command::IncreaseTermCount.apply(&mut params);
        assert_eq!(params.term_count, 3.0);
        Command::DecreaseTermCount.apply(&mut params);
        assert_eq!(params.term_count, 2.0);
    }

    #[test]
    fn quit_leaves_params_alone() {
        let mut params = params();
        let before = params.clone();
        Command::Quit.apply(&mut params);
        assert_eq!(params, before);
    }

    #[test]
    fn resize() {
        let mut params = params();
        Command::Resize(Size::new(1920, 1080)).apply(&mut params);
        assert_eq!(params.viewport, Size::new(1920, 1080));
        assert_eq!(params.time_scale, 2.0);
    }

    #[test]
    fn each_command_changes_only_its_field() {
        let start = params();
        let cases = [
            (Command::IncreaseTimeScale, 4.0, 2.0, Size::new(800, 600)),
            (Command::DecreaseTimeScale, 2.0, 2.0, Size::new(800, 600)),
            (Command::IncreaseTermCount, 2.0, 3.0, Size::new(800, 600)),
            (Command::DecreaseTermCount, 2.0, 1.0, Size::new(800, 600)),
            (Command::Resize(Size::new(10, 20)), 2.0, 2.0, Size::new(10, 20)),
            (Command::Quit, 2.0, 2.0, Size::new(800, 600)),
        ];
        for (command, time_scale, term_count, viewport) in cases {
            let mut params = start.clone();
            command.apply(&mut params);
            assert_eq!(params.time_scale, time_scale, "{command:?}");
            assert_eq!(params.term_count, term_count, "{command:?}");
            assert_eq!(params.viewport, viewport, "{command:?}");
        }
    }
}
