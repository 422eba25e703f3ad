/// Diagnostic tool to verify the board → layout pipeline
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use compact_str::CompactString;
use serde::Deserialize;
use taskmap::{is_layout_weight, layout, Category, Item, Rect, WeightTable};

/// Lay out a task board file and report what the treemap looks like.
#[derive(Parser, Debug)]
#[command(name = "debug-layout", version, about, long_about = None)]
struct Args {
    /// JSON board file: { width, height, weights?, items: [...] }
    board: PathBuf,

    /// Override the board width
    #[arg(long)]
    width: Option<f64>,

    /// Override the board height
    #[arg(long)]
    height: Option<f64>,

    /// Print the rectangles as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Deserialize)]
struct Board {
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    weights: WeightTable,
    items: Vec<BoardItem>,
}

#[derive(Debug, Deserialize)]
struct BoardItem {
    id: CompactString,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    category: Option<Category>,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl BoardItem {
    fn into_item(self, table: &WeightTable) -> anyhow::Result<Item<CompactString, serde_json::Value>> {
        let item = match (self.weight, self.category) {
            (Some(weight), _) => Item::new(self.id, weight),
            (None, Some(category)) => Item::from_category(self.id, category, table),
            (None, None) => bail!("item '{}' has neither a weight nor a category", self.id),
        };
        Ok(Item {
            payload: self.payload,
            ..item
        })
    }
}

impl Board {
    fn into_items(self) -> anyhow::Result<Vec<Item<CompactString, serde_json::Value>>> {
        let table = self.weights;
        self.items.into_iter().map(|item| item.into_item(&table)).collect()
    }
}

/// Items the layout filters out before placing anything.
fn dropped_items<K, P>(items: &[Item<K, P>]) -> usize {
    items.iter().filter(|item| !is_layout_weight(item.weight)).count()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "taskmap=debug" } else { "taskmap=info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let raw = std::fs::read_to_string(&args.board)
        .with_context(|| format!("reading board file {}", args.board.display()))?;
    let board: Board = serde_json::from_str(&raw)
        .with_context(|| format!("parsing board file {}", args.board.display()))?;

    let width = args.width.or(board.width).context("board width missing (use --width)")?;
    let height = args.height.or(board.height).context("board height missing (use --height)")?;

    let items = board.into_items()?;
    let input_count = items.len();
    let dropped = dropped_items(&items);

    let rects = layout(items, width, height)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rects)?);
        return Ok(());
    }

    println!("=== DIAGNOSTIC: Board → Layout Pipeline ===");
    println!("Board: {} ({} items, {:.0}x{:.0})", args.board.display(), input_count, width, height);

    println!("\n[1] Layout computed: {} rectangles", rects.len());
    for (i, rect) in rects.iter().enumerate() {
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.0}u²) at ({:.1}, {:.1}) aspect {:.2}",
            i,
            rect.id,
            rect.width,
            rect.height,
            rect.area(),
            rect.x,
            rect.y,
            rect.aspect_ratio()
        );
    }

    print_anomalies(&rects, input_count, dropped, width, height);
    Ok(())
}

fn print_anomalies(
    rects: &[Rect<CompactString, serde_json::Value>],
    input_count: usize,
    dropped: usize,
    width: f64,
    height: f64,
) {
    println!("\n[2] Checking for anomalies:");

    let area_sum: f64 = rects.iter().map(|r| r.area()).sum();
    let board_area = width * height;
    println!("    Total rect area: {:.2}u²", area_sum);
    println!("    Board area:      {:.2}u²", board_area);
    println!("    Coverage: {:.3}%", (area_sum / board_area) * 100.0);

    let worst = rects
        .iter()
        .filter(|r| r.area() > 0.0)
        .map(|r| r.aspect_ratio())
        .fold(0.0, f64::max);
    if !rects.is_empty() {
        println!("    Worst aspect ratio: {:.3}", worst);
    }

    if dropped > 0 {
        println!("    Dropped {} items with non-positive or non-finite weight", dropped);
    }
    let missing = (input_count - dropped).saturating_sub(rects.len());
    if missing > 0 {
        println!("    ✗ {} items with a usable weight have no rectangle", missing);
    }

    let degenerate = rects.iter().filter(|r| !(r.width.is_finite() && r.height.is_finite())).count();
    if degenerate > 0 {
        println!("    ✗ {} rectangles have non-finite geometry", degenerate);
    }

    let outside = rects
        .iter()
        .filter(|r| r.x < -1e-9 || r.y < -1e-9 || r.right() > width + 1e-6 || r.bottom() > height + 1e-6)
        .count();
    if outside > 0 {
        println!("    ✗ {} rectangles extend outside the board", outside);
    }
}
