// ==========================================
// Notion 导出转换 - 命令行入口
// ==========================================
// 用法:
//   notion2md [-q] convert --csv <file> [--out <dir>] [--flat <true|false>]
//                     [--strict-header] [--on-duplicate <overwrite|reject>]
//                     [--format <human|json>]
// ==========================================

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use notion2md::config::DEFAULT_OUTPUT_DIR;
use notion2md::{
    logging, ConvertConfig, Converter, DuplicatePolicy, OutputLayout, UnknownFieldPolicy,
};

/// Notion 表格导出工具
#[derive(Parser, Debug)]
#[command(name = "notion2md")]
#[command(version = notion2md::VERSION)]
#[command(about = "Convert Notion table exports into Markdown documents")]
struct Cli {
    /// only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the exported csv of a table to a series of Markdown files
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// csv filepath
    #[arg(long, default_value = "")]
    csv: String,

    /// output folder (must not exist)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out: String,

    /// output markdowns in same folder (true) or in category folders (false)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    flat: bool,

    /// fail on header columns that are not article fields
    #[arg(long)]
    strict_header: bool,

    /// what to do when two rows map to the same file
    #[arg(long, default_value = "overwrite")]
    on_duplicate: DuplicatePolicy,

    /// report format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

impl ConvertArgs {
    fn to_config(&self) -> ConvertConfig {
        let unknown_field_policy = if self.strict_header {
            UnknownFieldPolicy::Reject
        } else {
            UnknownFieldPolicy::Skip
        };

        ConvertConfig::new(&self.csv, &self.out)
            .with_layout(OutputLayout::from_flat(self.flat))
            .with_unknown_field_policy(unknown_field_policy)
            .with_duplicate_policy(self.on_duplicate)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.quiet {
        logging::QUIET_LEVEL
    } else {
        logging::DEFAULT_LEVEL
    });

    match cli.command {
        Command::Convert(args) => {
            let summary = Converter::new(args.to_config()).run()?;
            match args.format {
                OutputFormat::Human => println!("{}", summary),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
    }

    Ok(())
}
