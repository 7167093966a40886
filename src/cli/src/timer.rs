use std::{
    io::{BufRead, Write},
    time::Instant,
};

use cubelab_core::{
    scramble::generate_scramble,
    session::{Session, format_time},
};
use fastrand::Rng;
use log::info;

use crate::net::{NetStyle, render_net};

fn show_average(session: &Session, n: usize) -> String {
    session
        .average_of(n)
        .map_or_else(|| "-".to_owned(), format_time)
}

/// Waits for one line. `false` at end of input or when the user asks to quit.
fn wait_for_enter(input: &mut impl BufRead) -> std::io::Result<bool> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    Ok(read > 0 && !line.trim().eq_ignore_ascii_case("q"))
}

/// A line driven practice timer. Every round shows a fresh scramble, the
/// first Enter starts the clock and the second one stops it.
pub fn run_timer(
    input: &mut impl BufRead,
    output: &mut impl Write,
    rng: &mut Rng,
    scramble_length: usize,
    style: Option<&NetStyle>,
) -> std::io::Result<Session> {
    let mut session = Session::new();

    loop {
        let scramble = generate_scramble(scramble_length, rng);
        writeln!(output, "Scramble: {scramble}")?;
        if let Some(style) = style {
            let cube = cubelab_core::run_algorithm(&cubelab_core::create_solved_cube(), &scramble);
            write!(output, "{}", render_net(&cube, style))?;
        }
        writeln!(output, "Press Enter to start, q to quit")?;
        output.flush()?;

        if !wait_for_enter(input)? {
            break;
        }

        let start = Instant::now();
        writeln!(output, "Solving... press Enter to stop")?;
        output.flush()?;

        if !wait_for_enter(input)? {
            break;
        }

        let time = start.elapsed();
        info!("Recorded {} for `{scramble}`", format_time(time));
        session.record(time, scramble);

        writeln!(
            output,
            "{}  best {}  ao5 {}  ao12 {}\n",
            format_time(time),
            session.best().map_or_else(|| "-".to_owned(), format_time),
            show_average(&session, 5),
            show_average(&session, 12),
        )?;
    }

    Ok(session)
}
