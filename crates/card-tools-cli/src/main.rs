use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Uploaded decks are capped at 5 MB
const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "cardt", about = "Vocabulary flashcard sheet tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a duplex flashcard PDF from CSV
    Generate {
        /// Input CSV file (columns: word, part_of_speech, definition, example)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,

        /// Paper size
        #[arg(long, default_value = "letter", value_enum)]
        paper: PaperArg,

        /// Page orientation
        #[arg(long, default_value = "landscape", value_enum)]
        orientation: OrientationArg,

        /// Page margin in inches
        #[arg(long, default_value = "0.5")]
        margin_in: f32,

        /// Gap between cards in inches
        #[arg(long, default_value = "0.25")]
        cell_spacing_in: f32,

        /// Maximum characters per wrapped line on card backs
        #[arg(long, default_value = "60")]
        max_line_width: usize,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the card arrangement of the first sheets
    Preview {
        /// Input CSV file (columns: word, part_of_speech, definition, example)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,

        /// Number of sheets to show
        #[arg(long, default_value = "3")]
        sheets: usize,
    },
}

#[derive(Args)]
struct ColumnArgs {
    /// Header name of the word column
    #[arg(long, default_value = "word")]
    word_column: String,

    /// Header name of the part-of-speech column
    #[arg(long, default_value = "part_of_speech")]
    part_of_speech_column: String,

    /// Header name of the definition column
    #[arg(long, default_value = "definition")]
    definition_column: String,

    /// Header name of the example column
    #[arg(long, default_value = "example")]
    example_column: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<&ColumnArgs> for card_deck::ColumnMapping {
    fn from(args: &ColumnArgs) -> Self {
        Self {
            word: args.word_column.clone(),
            part_of_speech: args.part_of_speech_column.clone(),
            definition: args.definition_column.clone(),
            example: args.example_column.clone(),
        }
    }
}

impl From<PaperArg> for card_press::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for card_press::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

async fn check_upload_policy(input: &Path) -> Result<()> {
    let is_csv = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("Only .csv files are accepted: {}", input.display());
    }

    let metadata = tokio::fs::metadata(input)
        .await
        .with_context(|| format!("Cannot read {}", input.display()))?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        bail!(
            "{} is {} bytes, over the {} byte limit",
            input.display(),
            metadata.len(),
            MAX_UPLOAD_BYTES
        );
    }

    Ok(())
}

async fn load_cards(
    input: &Path,
    columns: &card_deck::ColumnMapping,
) -> Result<Vec<card_deck::CardRecord>> {
    check_upload_policy(input).await?;
    let cards = card_deck::load_from_csv(input, columns)
        .await
        .with_context(|| format!("Failed to load cards from {}", input.display()))?;
    Ok(cards)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            columns,
            paper,
            orientation,
            margin_in,
            cell_spacing_in,
            max_line_width,
            stats_only,
        } => {
            let mapping = card_deck::ColumnMapping::from(&columns);
            let cards = load_cards(&input, &mapping).await?;

            // Calculate and show statistics
            let stats = card_press::calculate_statistics(cards.len());
            println!("Layout statistics:");
            println!("  Cards: {}", stats.card_count);
            println!("  Sheets: {}", stats.sheet_count);
            println!("  PDF pages: {}", stats.pdf_page_count);
            println!("  Cards on last sheet: {}", stats.last_sheet_cards);

            if stats_only {
                return Ok(());
            }

            let mut options =
                card_press::LayoutOptions::for_paper(paper.into(), orientation.into());
            options.margin_left_mm = margin_in * 25.4;
            options.margin_top_mm = margin_in * 25.4;
            options.cell_spacing_mm = cell_spacing_in * 25.4;
            options.max_line_width = max_line_width;
            options.fit_cells_to_page();

            card_press::generate_pdf(&cards, &options, &output).await?;
            println!("Generated {} cards → {}", cards.len(), output.display());
        }

        Commands::Preview {
            input,
            columns,
            sheets,
        } => {
            let mapping = card_deck::ColumnMapping::from(&columns);
            let cards = load_cards(&input, &mapping).await?;
            if cards.is_empty() {
                println!("No cards found in {}", input.display());
                return Ok(());
            }

            let options = card_press::LayoutOptions::default();
            let pairs = card_press::layout(&cards, &options)?;
            let groups = card_press::preview_groups(&pairs, Some(sheets));

            for group in &groups {
                println!("Sheet {}:", group.sheet_index + 1);
                println!("  Front:");
                for cell in &group.front {
                    println!(
                        "    [{:>3}] {} ({})",
                        cell.display_index, cell.word, cell.part_of_speech
                    );
                }
                println!("  Back:");
                for cell in &group.back {
                    let first_line = cell
                        .definition_lines
                        .first()
                        .map(String::as_str)
                        .unwrap_or("");
                    println!("    [{:>3}] {}", cell.display_index, first_line);
                }
            }

            if pairs.len() > groups.len() {
                println!("({} more sheets not shown)", pairs.len() - groups.len());
            }
        }
    }

    Ok(())
}
