//! Line-based terminal front end for interactive games.

use std::io::{self, BufRead, Write};

use chess_core::Color;
use tracing::warn;

use crate::interactive::{MoveInput, MoveSource, Presenter};

/// Terminal streams and display settings for one run.
pub struct TerminalContext<R, W> {
    input: R,
    output: W,
    /// Side drawn at the bottom of the board
    orientation: Color,
    unicode: bool,
}

impl TerminalContext<io::StdinLock<'static>, io::Stdout> {
    /// Context over the process's standard input and output.
    pub fn stdio(orientation: Color) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), orientation)
    }
}

impl<R: BufRead, W: Write> TerminalContext<R, W> {
    pub fn new(input: R, output: W, orientation: Color) -> Self {
        Self {
            input,
            output,
            orientation,
            unicode: true,
        }
    }

    /// Draw pieces as FEN letters instead of chess glyphs.
    pub fn ascii(mut self) -> Self {
        self.unicode = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// [`Presenter`] and [`MoveSource`] over a [`TerminalContext`].
pub struct TerminalPresenter<'a, R, W> {
    context: &'a mut TerminalContext<R, W>,
}

impl<'a, R: BufRead, W: Write> TerminalPresenter<'a, R, W> {
    pub fn new(context: &'a mut TerminalContext<R, W>) -> Self {
        Self { context }
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<'_, R, W> {
    fn render(&mut self, fen: &str) -> io::Result<()> {
        let board = render_board(fen, self.context.orientation, self.context.unicode);
        writeln!(self.context.output)?;
        write!(self.context.output, "{board}")?;
        self.context.output.flush()
    }

    fn announce(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.context.output, "{message}")?;
        self.context.output.flush()
    }
}

impl<R: BufRead, W: Write> MoveSource for TerminalPresenter<'_, R, W> {
    /// Prompt until a well-formed move is typed. End of input, `quit` or a
    /// read error ends the game.
    fn next_move(&mut self) -> Option<MoveInput> {
        let mut line = String::new();
        loop {
            let prompted = write!(self.context.output, "Your move (e.g. e2e4, quit to stop): ")
                .and_then(|_| self.context.output.flush());
            if let Err(err) = prompted {
                warn!(error = %err, "cannot write prompt");
                return None;
            }

            line.clear();
            match self.context.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "cannot read move");
                    return None;
                }
            }

            let text = line.trim();
            match text {
                "" => continue,
                "q" | "quit" | "exit" => return None,
                _ => match MoveInput::parse(text) {
                    Ok(input) => return Some(input),
                    Err(err) => {
                        if writeln!(self.context.output, "{err}").is_err() {
                            return None;
                        }
                    }
                },
            }
        }
    }
}

fn glyph(piece: char, unicode: bool) -> char {
    if !unicode {
        return piece;
    }
    match piece {
        'K' => '♔',
        'Q' => '♕',
        'R' => '♖',
        'B' => '♗',
        'N' => '♘',
        'P' => '♙',
        'k' => '♚',
        'q' => '♛',
        'r' => '♜',
        'b' => '♝',
        'n' => '♞',
        'p' => '♟',
        other => other,
    }
}

/// Draw the placement field of a FEN as an 8x8 grid with rank and file
/// labels. Empty squares are dots.
pub fn render_board(fen: &str, orientation: Color, unicode: bool) -> String {
    let placement = fen.split_whitespace().next().unwrap_or_default();

    // rows[0] is rank 8
    let mut rows: Vec<Vec<char>> = placement
        .split('/')
        .map(|rank| {
            let mut row = Vec::with_capacity(8);
            for ch in rank.chars() {
                match ch.to_digit(10) {
                    Some(empty) => row.extend(std::iter::repeat('.').take(empty as usize)),
                    None => row.push(glyph(ch, unicode)),
                }
            }
            row
        })
        .collect();
    let mut files: Vec<char> = ('a'..='h').collect();
    let mut ranks: Vec<char> = ('1'..='8').rev().collect();

    if orientation == Color::Black {
        rows.reverse();
        rows.iter_mut().for_each(|row| row.reverse());
        files.reverse();
        ranks.reverse();
    }

    let mut out = String::new();
    for (row, rank) in rows.iter().zip(&ranks) {
        out.push(*rank);
        for square in row {
            out.push(' ');
            out.push(*square);
        }
        out.push('\n');
    }
    out.push(' ');
    for file in files {
        out.push(' ');
        out.push(file);
    }
    out.push('\n');
    out
}
