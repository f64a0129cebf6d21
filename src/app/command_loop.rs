use log::debug;
use std::io::{self, BufRead, Write};

use crate::commands::{parse_command, process_command, CommandError, Outcome};
use crate::renderer::DisplayModel;
use crate::simulation::EnergySimulator;
use crate::storage::SettingsStore;

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

fn draw<S: SettingsStore, W: Write>(
    sim: &EnergySimulator<S>,
    chart: ChartSize,
    output: &mut W,
) -> io::Result<()> {
    let model = DisplayModel::with_chart_size(sim, chart.width, chart.height);
    write!(output, "{}", model.render())
}

/// Read one command per line until `quit` or end of input, redrawing after each.
/// Returns the number of commands processed.
pub fn run_session<S, R, W>(
    sim: &mut EnergySimulator<S>,
    input: R,
    output: &mut W,
    chart: ChartSize,
) -> io::Result<usize>
where
    S: SettingsStore,
    R: BufRead,
    W: Write,
{
    draw(sim, chart, output)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut processed = 0;
    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
            Err(e) => {
                writeln!(output, "{}", e)?;
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
        };
        debug!("Command: {:?}", cmd);
        processed += 1;

        match process_command(cmd, sim) {
            Outcome::Render => draw(sim, chart, output)?,
            Outcome::Message(text) => writeln!(output, "{}", text)?,
            Outcome::Quit => break,
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(processed)
}
