use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use crate::parsers::{SizeArg, parse_positive_usize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labelled line per field
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "county",
    version = crate::VERSION,
    about = "ファイルをバイト範囲に分割し、並列に改行を数える",
    long_about = "Splits FILE into one contiguous byte range per worker, counts the \
                  newline bytes of every range in parallel and reports the total \
                  together with the time spent counting. A final line without a \
                  trailing newline is not counted."
)]
pub struct Args {
    /// 対象ファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// ワーカー数 [default: 論理CPU数]
    #[arg(value_parser = parse_positive_usize)]
    pub workers: Option<usize>,

    /// 1回の読み込みサイズ (例: 65536, 512K, 8MiB) [default: 4MiB]
    pub chunk_size: Option<SizeArg>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// デバッグログを標準エラーに出力
    #[arg(short, long)]
    pub verbose: bool,
}
