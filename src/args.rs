// src/args.rs
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Default)]
#[command(
    name = "sandbox_probe",
    version = crate::VERSION,
    about = "システムプロパティとカレントディレクトリ以下の全ファイルを出力する診断ツール",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// 診断ログを stderr に出力 (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// 残りの引数は受け付けるが使用しない
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}
