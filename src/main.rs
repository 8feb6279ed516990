use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use screenplay_extract::{open, Conf, Extractor};

/// 从剧本文件中提取角色、场景和大写词，输出 JSON
#[derive(Parser, Debug)]
#[command(name = "screenplay-extract", version, about)]
struct Cli {
    /// 剧本文件 (.fountain / .rtf / .celtx)
    file: PathBuf,

    /// JSON 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 格式化输出
    #[arg(long)]
    pretty: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<Conf, String> {
    let Some(path) = path else {
        return Ok(Conf::default());
    };
    let content = fs::read_to_string(path)
        .map_err(|e| format!("读取配置文件失败 {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("解析配置文件失败 {}: {}", path.display(), e))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let conf = match load_config(cli.config.as_ref()) {
        Ok(conf) => conf,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let breakdown = match open(&cli.file, &conf).and_then(|extractor| extractor.breakdown()) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            eprintln!("提取失败: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "角色 {} 个, 场景 {} 个, 大写词 {} 个",
        breakdown.characters.len(),
        breakdown.scenes.len(),
        breakdown.capitalized.len()
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&breakdown)
    } else {
        serde_json::to_string(&breakdown)
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("输出JSON失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
