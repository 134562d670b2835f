use anyhow::{Context, Result, bail};
use card_layout::{Deck, PageLayout, PrintOptions, Side};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cardw", about = "Card layout and print CLI", version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page grid for a card size
    Layout {
        /// Card width in mm
        #[arg(long, default_value = "63.5")]
        width: f64,

        /// Card height in mm
        #[arg(long, default_value = "88.9")]
        height: f64,

        /// Number of printed cards, for page counts
        #[arg(long)]
        cards: Option<usize>,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Print the page plan of a deck as JSON
    Plan {
        /// Input deck JSON file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Show which style each card resolves to
    Resolve {
        /// Input deck JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List the style/side renders a deck needs
    Renders {
        /// Input deck JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show deck or game statistics
    Stats {
        /// Input deck JSON file (or game file with --game)
        #[arg(short, long)]
        input: PathBuf,

        /// Treat the input as a game holding several decks
        #[arg(long)]
        game: bool,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Write a proof PDF for a deck
    Export {
        /// Input deck JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Also write a CSV slot manifest
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Leave card and style ids off the slots
        #[arg(long)]
        no_labels: bool,

        #[command(flatten)]
        print: PrintArgs,
    },
}

/// Overrides applied on top of the config file and deck settings
#[derive(Args)]
struct PrintArgs {
    /// Print options JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Paper size (defaults to the deck's own)
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Grid strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Spacing between cards in mm
    #[arg(long)]
    spacing: Option<f64>,

    /// Minimum page margin in mm
    #[arg(long)]
    margin: Option<f64>,

    /// Draw dashed cut guides
    #[arg(long, conflicts_with = "no_cut_guides")]
    cut_guides: bool,

    /// Never draw cut guides
    #[arg(long)]
    no_cut_guides: bool,

    /// Page order in the exported PDF
    #[arg(long, value_enum)]
    order: Option<OrderArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    A4,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Fixed,
    Adaptive,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Interleaved,
    Separate,
}

impl From<PaperArg> for card_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Letter => Self::Letter,
            PaperArg::A4 => Self::A4,
        }
    }
}

impl From<StrategyArg> for card_layout::GridStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fixed => Self::Fixed,
            StrategyArg::Adaptive => Self::Adaptive,
        }
    }
}

impl From<OrderArg> for card_layout::PageOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Interleaved => Self::Interleaved,
            OrderArg::Separate => Self::Separate,
        }
    }
}

impl PrintArgs {
    async fn options(&self) -> Result<PrintOptions> {
        let mut options = match &self.config {
            Some(path) => PrintOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => PrintOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper_size = Some(paper.into());
        }
        if let Some(strategy) = self.strategy {
            options.grid.strategy = strategy.into();
        }
        if let Some(spacing) = self.spacing {
            options.grid.spacing_mm = spacing;
        }
        if let Some(margin) = self.margin {
            options.grid.min_margin_mm = margin;
        }
        if self.cut_guides {
            options.cut_guides = Some(true);
        } else if self.no_cut_guides {
            options.cut_guides = Some(false);
        }
        if let Some(order) = self.order {
            options.page_order = order.into();
        }

        options.validate()?;
        Ok(options)
    }
}

async fn load_deck(path: &Path) -> Result<Deck> {
    let deck = card_layout::load_deck(path)
        .await
        .with_context(|| format!("loading {}", path.display()))?;
    deck.validate()?;
    Ok(deck)
}

fn print_layout(layout: &PageLayout) {
    println!(
        "  Page: {:.1} x {:.1} mm",
        layout.page_width, layout.page_height
    );
    println!(
        "  Grid: {} x {} ({} per page)",
        layout.cards_per_row,
        layout.cards_per_col,
        layout.cards_per_page()
    );
    println!("  Spacing: {:.1} mm", layout.spacing);
    println!(
        "  Margins: {:.2} mm left, {:.2} mm top",
        layout.margin_left, layout.margin_top
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Layout {
            width,
            height,
            cards,
            print,
        } => {
            if !(width > 0.0 && height > 0.0) {
                bail!("Card size must be positive, got {}x{}mm", width, height);
            }
            let options = print.options().await?;
            let paper = options.paper_size_for(card_layout::PaperSize::default());
            let layout = PageLayout::calculate(width, height, paper, &options.grid);

            println!("Layout for {}x{}mm cards on {}:", width, height, paper.name());
            print_layout(&layout);
            if let Some(cards) = cards {
                println!("  Sheets: {}", layout.sheets_for(cards));
                println!("  Pages: {}", layout.total_pages_for(cards));
            }
        }

        Commands::Plan { input, print } => {
            let deck = load_deck(&input).await?;
            let options = print.options().await?;
            let plan = card_layout::compose(&deck, &options);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }

        Commands::Resolve { input } => {
            let deck = load_deck(&input).await?;
            for card in &deck.cards {
                let front = deck.resolve(card, Side::Front);
                let back = deck.resolve(card, Side::Back);
                println!(
                    "{}: front={} ({:?}) back={} ({:?})",
                    card.id,
                    front.id.unwrap_or("-"),
                    front.resolution,
                    back.id.unwrap_or("-"),
                    back.resolution
                );
            }
        }

        Commands::Renders { input } => {
            let deck = load_deck(&input).await?;
            let requests = card_layout::render_requests(&deck);
            println!("{} renders needed:", requests.len());
            for request in &requests {
                let sample = request.sample(&deck).map(|c| c.id.as_str()).unwrap_or("-");
                println!("  {} {} (sample card {})", request.side, request.style_id, sample);
            }
        }

        Commands::Stats { input, game, print } => {
            let options = print.options().await?;
            if game {
                let game = card_layout::load_game(&input)
                    .await
                    .with_context(|| format!("loading {}", input.display()))?;
                let stats = card_layout::calculate_game_statistics(&game, &options);
                println!("Game Statistics ({}):", game.name);
                println!("  Decks: {}", stats.decks);
                println!("  Unique cards: {}", stats.unique_cards);
                println!("  Printed cards: {}", stats.expanded_cards);
                println!("  Front styles: {}", stats.front_styles);
                println!("  Back styles: {}", stats.back_styles);
                println!("  Sheets: {}", stats.sheets);
            } else {
                let deck = load_deck(&input).await?;
                let stats = card_layout::calculate_statistics(&deck, &options);
                println!("Deck Statistics ({}):", deck.name);
                println!("  Unique cards: {}", stats.unique_cards);
                println!("  Printed cards: {}", stats.expanded_cards);
                println!("  Cards per page: {}", stats.cards_per_page);
                println!("  Sheets: {}", stats.sheets);
                println!("  Pages: {}", stats.total_pages);
                println!("  Empty slots on last sheet: {}", stats.empty_slots_last_sheet);
                println!(
                    "  Front styles: {} ({} used)",
                    stats.front_styles, stats.used_front_styles
                );
                println!(
                    "  Back styles: {} ({} used)",
                    stats.back_styles, stats.used_back_styles
                );
            }
        }

        Commands::Export {
            input,
            output,
            manifest,
            no_labels,
            print,
        } => {
            let deck = load_deck(&input).await?;
            let options = print.options().await?;

            let export = card_print::ExportOptions {
                title: deck.name.clone(),
                page_order: options.page_order,
                labels: !no_labels,
                ..Default::default()
            };
            let plan = card_print::export_deck(&deck, &options, &export, &output).await?;
            println!(
                "Exported {} cards on {} pages ({} rendered styles) → {}",
                plan.slot_count(),
                plan.total_pages(),
                deck.rendered_cards.len(),
                output.display()
            );

            if let Some(manifest) = manifest {
                card_print::write_manifest(&plan, &manifest).await?;
                println!("Manifest → {}", manifest.display());
            }
        }
    }

    Ok(())
}
