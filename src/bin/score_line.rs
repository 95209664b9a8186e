//! Batch scorer.
//!
//! Each argument is a roll entry (`x`, `/`, `-` or a pin count, several per
//! argument separated by commas). Prints the scorecard, or the game snapshot
//! as JSON with `--json`.
//!
//! ```text
//! score-line x 7,/ 9,- x -,8 8,/ -,6 x x x,8,1
//! score-line --json x x x
//! ```

use anyhow::{bail, Context, Result};
use tracing::info;

use tui_bowling::engine::Scorekeeper;
use tui_bowling::logging;
use tui_bowling::term::ScorecardView;

const USAGE: &str = "usage: score-line [--json] ENTRY...";

fn main() -> Result<()> {
    logging::init_stderr();

    let mut json = false;
    let mut entries = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            _ => entries.push(arg),
        }
    }

    let mut keeper = Scorekeeper::new();
    for (i, entry) in entries.iter().enumerate() {
        keeper
            .roll_entry(entry)
            .with_context(|| format!("argument {} ({entry:?})", i + 1))?;
    }
    info!(
        rolls = keeper.game().frames().iter().map(|f| f.rolls().len()).sum::<usize>(),
        total = keeper.game().total_score(),
        "scored"
    );

    let snap = keeper.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        for row in ScorecardView::new(false).render_text(&snap) {
            println!("{row}");
        }
    }
    Ok(())
}
