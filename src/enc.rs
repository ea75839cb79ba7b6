//! Run-length-encoded pattern files.

use crate::{Board, Cell, Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Conversion between a [`Board`] and a textual pattern format.
pub trait PatternCodec {
    fn encode(&self, board: &Board) -> String;
    fn decode(&self, value: &str) -> Result<Board>;
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}

impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: u64, c: char) {
        let append = match run {
            0 => return,
            1 => c.to_string(),
            n => format!("{n}{c}"),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// The RLE format used by most Life software.
///
/// Encoding moves the pattern so its bounding box starts at the origin.
pub struct RunLengthEncoded {
    name: Option<String>,
    header: bool,
    max_line_len: usize,
}

impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    pub fn set_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    fn encode_header(&self, board: &Board) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {name}\n"));
        }
        let (width, height) = board
            .bounds()
            .map_or((0, 0), |bounds| (bounds.width(), bounds.height()));
        header.push_str(&format!("x = {width}, y = {height}, rule = B3/S23\n"));
        header
    }

    fn encode_cells(&self, board: &Board) -> String {
        let mut seq = RunEncoder::new(self.max_line_len);
        let Some(bounds) = board.bounds() else {
            return seq.end();
        };
        let mut last: Option<Cell> = None;
        let mut alive_run = 0;
        for pos in board.sorted() {
            let (lines_run, dead_run) = match last {
                Some(prev) if prev.y == pos.y => {
                    // if we're one ahead of the last, then only increment the run
                    if prev.x + 1 == pos.x {
                        alive_run += 1;
                        last = Some(pos);
                        continue;
                    }
                    (0, pos.x.abs_diff(prev.x) - 1)
                }
                Some(prev) => (pos.y.abs_diff(prev.y), pos.x.abs_diff(bounds.min.x)),
                // sorted, so the first cell is on the top row
                None => (0, pos.x.abs_diff(bounds.min.x)),
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(lines_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = Some(pos);
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }
}

impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            header: true,
            max_line_len: 70,
        }
    }
}

static RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*)([bo$!])").expect("valid run pattern"));

fn decode_error(line: usize, reason: impl Into<String>) -> Error {
    Error::Decode {
        line,
        reason: reason.into(),
    }
}

impl PatternCodec for RunLengthEncoded {
    fn encode(&self, board: &Board) -> String {
        format!("{}{}\n", self.encode_header(board), self.encode_cells(board))
    }

    fn decode(&self, value: &str) -> Result<Board> {
        let mut alive = Board::new();
        let mut cursor = Cell::zero();
        'lines_loop: for (idx, line) in value.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            // comments and the size header carry nothing we need
            if line.starts_with('#') || line.starts_with('x') {
                continue;
            }

            let mut consumed = 0;
            for caps in RUN.captures_iter(line) {
                let (whole, [run_str, state]) = caps.extract();
                let start = caps.get(0).map_or(0, |m| m.start());
                if !line[consumed..start].trim().is_empty() {
                    return Err(decode_error(
                        line_no,
                        format!("unexpected {:?}", line[consumed..start].trim()),
                    ));
                }
                consumed = start + whole.len();

                let run = match run_str {
                    "" => 1,
                    digits => digits
                        .parse::<i64>()
                        .map_err(|err| decode_error(line_no, format!("run {digits:?}: {err}")))?,
                };
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        for _ in 0..run {
                            alive.insert(cursor);
                            cursor = cursor
                                .checked_offset(1, 0)
                                .ok_or_else(|| decode_error(line_no, "pattern too wide"))?;
                        }
                    }
                    "b" => {
                        cursor = cursor
                            .checked_offset(run, 0)
                            .ok_or_else(|| decode_error(line_no, "pattern too wide"))?;
                    }
                    "$" => {
                        cursor = Cell::new(0, cursor.y)
                            .checked_offset(0, run)
                            .ok_or_else(|| decode_error(line_no, "pattern too tall"))?;
                    }
                    _ => unreachable!(),
                }
            }
            if !line[consumed..].trim().is_empty() {
                return Err(decode_error(
                    line_no,
                    format!("unexpected {:?}", line[consumed..].trim()),
                ));
            }
        }

        Ok(alive)
    }
}
