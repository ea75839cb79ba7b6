use std::{str::FromStr, time::Duration};

use sparselife::{Board, Cell, Error, Pattern, PatternCodec, Result, RunLengthEncoded};

/// Delay between frames when animating in the terminal
const DEFAULT_SLEEP: Duration = Duration::from_millis(500);

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("q", "quiet", "run without drawing the board");
        opts.optopt("p", "pattern", "named seed pattern", "NAME");
        opts.optopt("i", "input", "RLE seed file", "FILE");
        opts.optopt("w", "width", "set fill width", "WIDTH");
        opts.optopt("h", "height", "set fill height", "HEIGHT");
        opts.optopt("f", "fill", "seed a filled area instead of a pattern", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optflag("", "rle", "print the final board as RLE");
        opts.optopt("", "period", "look for a cycle within COUNT generations", "COUNT");
        opts
    }

    /// Parses `args`, returning `None` when only help was requested.
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            let patterns: Vec<&str> = Pattern::ALL.iter().map(|p| p.name()).collect();
            println!("{}", opts.usage("usage: sparselife [options]"));
            println!("patterns: {}", patterns.join(", "));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }

    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(env.as_slice())
    }

    fn parsed<T: FromStr>(&self, option: &'static str) -> Result<Option<T>> {
        match self.matches.opt_str(option) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| Error::InvalidArgument { option, value }),
            None => Ok(None),
        }
    }

    pub fn quiet(&self) -> bool {
        self.matches.opt_present("quiet")
    }

    pub fn rle(&self) -> bool {
        self.matches.opt_present("rle")
    }

    pub fn generations(&self) -> Result<usize> {
        // no limit means run until interrupted
        Ok(self.parsed("gens")?.unwrap_or(usize::MAX))
    }

    pub fn sleep(&self) -> Result<Duration> {
        Ok(match self.parsed("sleep")? {
            Some(millis) => Duration::from_millis(millis),
            None if self.quiet() => Duration::ZERO,
            None => DEFAULT_SLEEP,
        })
    }

    pub fn period(&self) -> Result<Option<usize>> {
        self.parsed("period")
    }

    fn grid_size(&self) -> Result<(i64, i64)> {
        let default: (i64, i64) = if self.quiet() { (500, 500) } else { (40, 20) };
        let size = (
            self.parsed("width")?.unwrap_or(default.0),
            self.parsed("height")?.unwrap_or(default.1),
        );
        if size.0 < 0 || size.1 < 0 {
            return Err(Error::InvalidArgument {
                option: "width",
                value: format!("{}x{}", size.0, size.1),
            });
        }
        Ok(size)
    }

    pub fn fill_mode(&self) -> Result<Option<FillMode>> {
        match self.matches.opt_str("fill") {
            Some(value) => FillMode::new(&value)
                .map(Some)
                .ok_or(Error::InvalidArgument {
                    option: "fill",
                    value,
                }),
            None => Ok(None),
        }
    }

    pub fn pattern(&self) -> Result<Pattern> {
        Ok(self.parsed("pattern")?.unwrap_or(Pattern::Glider))
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    /// A short description of where the seed comes from.
    pub fn seed_name(&self) -> Result<String> {
        if let Some(file_name) = self.input_file() {
            return Ok(file_name);
        }
        if let Some(fill) = self.matches.opt_str("fill") {
            return Ok(format!("{fill} fill"));
        }
        Ok(self.pattern()?.to_string())
    }

    /// The board to start from: an input file, a filled area or a named pattern.
    pub fn seed(&self) -> Result<Board> {
        if let Some(file_name) = self.input_file() {
            let encoded = std::fs::read_to_string(file_name)?;
            return RunLengthEncoded::default().decode(&encoded);
        }
        if let Some(fill) = self.fill_mode()? {
            let (w, h) = self.grid_size()?;
            return Ok(fill.create_alive(w, h));
        }
        Ok(self.pattern()?.board())
    }
}

pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}

impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn reserve_size(&self, w: i64, h: i64) -> usize {
        let total = usize::try_from(w.saturating_mul(h)).unwrap_or(0);
        match self {
            Self::Random => total.div_ceil(2),
            Self::Alternating => total.div_ceil(2),
            Self::All => total,
            Self::Empty => 0,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Cell, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    pub fn create_alive(self, w: i64, h: i64) -> Board {
        let reserve_size = self.reserve_size(w, h);
        if reserve_size == 0 {
            // reserve_size indicates this will produce no alive cells
            return Board::new();
        }

        let mut rng = rand::rng();
        let mut alive = Board::with_capacity(reserve_size);
        for y in 0..h {
            for x in 0..w {
                let cell = Cell { x, y };
                if self.fill_cell(cell, &mut rng) {
                    alive.insert(cell);
                }
            }
        }
        alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not help")
    }

    fn board(cells: &[(i64, i64)]) -> Board {
        cells.iter().copied().collect()
    }

    #[test]
    fn fill_mode_parses() {
        let args = args(&["--fill", "alternating"]);

        assert!(matches!(args.fill_mode(), Ok(Some(FillMode::Alternating))));
    }

    #[test]
    fn unknown_fill_mode_is_an_error() {
        let args = args(&["--fill", "checkers"]);

        assert!(matches!(
            args.fill_mode(),
            Err(Error::InvalidArgument { option: "fill", .. })
        ));
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).expect("valid args").is_none());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(matches!(Args::new(&["--bogus"]), Err(Error::Options(_))));
    }

    #[test]
    fn defaults() {
        let args = args(&[]);

        assert_eq!(args.generations().expect("gens"), usize::MAX);
        assert_eq!(args.sleep().expect("sleep"), DEFAULT_SLEEP);
        assert_eq!(args.pattern().expect("pattern"), Pattern::Glider);
        assert_eq!(args.period().expect("period"), None);
        assert!(!args.quiet());
        assert!(!args.rle());
    }

    #[test]
    fn quiet_mode_does_not_sleep() {
        assert_eq!(args(&["-q"]).sleep().expect("sleep"), Duration::ZERO);
        assert_eq!(
            args(&["-q", "-s", "20"]).sleep().expect("sleep"),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn bad_number_is_an_error() {
        let err = args(&["--gens", "lots"]).generations().unwrap_err();

        assert!(matches!(err, Error::InvalidArgument { option: "gens", value } if value == "lots"));
    }

    #[test]
    fn seed_from_pattern() {
        let args = args(&["--pattern", "toad"]);

        assert_eq!(args.seed().expect("seed"), Pattern::Toad.board());
        assert_eq!(args.seed_name().expect("name"), "toad");
    }

    #[test]
    fn seed_from_fill() {
        let args = args(&["--fill", "all", "-w", "2", "-h", "2"]);

        assert_eq!(args.seed().expect("seed"), board(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        assert_eq!(args.seed_name().expect("name"), "all fill");
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let args = args(&["--input", "/nonexistent/sparselife/seed.rle"]);

        assert!(matches!(args.seed(), Err(Error::Io(_))));
    }

    #[test]
    fn create_alive_all_fills_grid() {
        let alive = FillMode::All.create_alive(3, 2);

        assert_eq!(alive, board(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]));
    }

    #[test]
    fn create_alive_empty_is_empty() {
        assert!(FillMode::Empty.create_alive(5, 4).is_empty());
    }

    #[test]
    fn create_alive_alternating_uses_parity() {
        let alive = FillMode::Alternating.create_alive(3, 3);

        assert_eq!(alive, board(&[(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)]));
    }

    #[test]
    fn create_alive_random_is_within_bounds() {
        let (w, h) = (4, 3);
        let alive = FillMode::Random.create_alive(w, h);

        assert!(alive.iter().all(|p| p.x >= 0 && p.y >= 0 && p.x < w && p.y < h));
    }
}
