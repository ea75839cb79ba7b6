use sparselife::{Animator, Error, Headless, PatternCodec, RunLengthEncoded, detect_cycle};
use tracing::info;

mod console;
mod options;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sparselife=info")),
        )
        .init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let seed = args.seed()?;
    let seed_name = args.seed_name()?;
    info!(seed = %seed_name, alive = seed.len(), "seeded board");

    if let Some(limit) = args.period()? {
        match detect_cycle(&seed, limit) {
            Some(cycle) => info!(
                start = cycle.start,
                period = cycle.period,
                shift = ?cycle.shift,
                "pattern repeats"
            ),
            None => info!(limit, "no cycle found"),
        }
    }

    let generations = args.generations()?;
    let sleep = args.sleep()?;
    let animator = Animator::new(&seed);
    let outcome = if args.quiet() {
        animator.run(generations, sleep, &mut Headless)?
    } else {
        // the terminal is restored when this scope ends
        let mut console = console::Terminal::new()?;
        animator.run(generations, sleep, &mut console)?
    };
    info!(
        generations = outcome.generations,
        alive = outcome.board.len(),
        interrupted = outcome.interrupted,
        "finished"
    );

    if args.rle() {
        let encoder = RunLengthEncoded::default().set_name(&seed_name);
        print!("{}", encoder.encode(&outcome.board));
    }

    Ok(())
}
