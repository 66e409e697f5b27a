use std::f64::consts::PI;

/// Which truncated series is plotted. Only `Pwm` is used by the program. The others are kept as
/// alternatives that can be chosen in the config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Square wave with a quarter duty cycle, made of cosine harmonics weighted by a sinc
    /// envelope.
    #[default]
    Pwm,
    /// The fundamental sine, repeated once per term.
    Sine,
    /// Rolling wave shape from cosine harmonics weighted by `1 / (4n^2 - 1)`.
    Sea,
    /// Odd sine harmonics of a symmetric square wave, starting at the third harmonic.
    Square,
}

impl Waveform {
    /// The `n`th term of the series (`n` starts at 1) evaluated at `x`.
    pub fn term(self, n: f64, base_frequency: f64, x: f64) -> f64 {
        match self {
            Self::Pwm => {
                let duty_angle = n * 0.25 * PI;
                (duty_angle.sin() / duty_angle) * (n * base_frequency * x).cos()
            }
            Self::Sine => (base_frequency * x).sin(),
            Self::Sea => {
                (n * base_frequency * x).cos() / ((4.0 * n * n) - 1.0)
            }
            Self::Square => {
                // odd harmonics from the third upwards, the fundamental is never summed
                let k = (2.0 * n) + 1.0;
                (k * base_frequency * x).sin() / k
            }
        }
    }

    /// Maps the accumulated sum of terms to a height in pixels above the horizontal axis.
    pub fn height(self, amplitude: f64, sum: f64) -> f64 {
        match self {
            Self::Pwm => (0.5 * amplitude) + (amplitude * sum),
            Self::Sine => amplitude * sum,
            Self::Sea => {
                ((2.0 * amplitude) / PI) - (((4.0 * amplitude) / PI) * sum)
            }
            Self::Square => ((4.0 * amplitude) / PI) * sum,
        }
    }

    /// Sum of the terms `1..=term_count`. The count is a real valued bound so fractional counts
    /// truncate and counts below 1 give an empty sum.
    pub fn sum(self, term_count: f64, base_frequency: f64, x: f64) -> f64 {
        let mut sum = 0.0;
        let mut n = 1.0;
        while n <= term_count {
            sum += self.term(n, base_frequency, x);
            n += 1.0;
        }
        sum
    }

    pub fn evaluate(
        self,
        term_count: f64,
        base_frequency: f64,
        amplitude: f64,
        x: f64,
    ) -> f64 {
        self.height(amplitude, self.sum(term_count, base_frequency, x))
    }
}
