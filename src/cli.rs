use anyhow::{anyhow, Context, Result};
use std::io;
use tracing::info;

use crate::agent::{bootstrap, ManifestFormat, ManifestHandoff, StorageLocation};
use crate::config::Config;
use crate::logger;

/// 命令行子命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(ManifestFormat),
    Where,
    Onboard,
    Help,
}

impl Command {
    /// 解析参数（包含程序名）
    pub fn parse(args: &[String]) -> Result<Command> {
        let Some(command) = args.get(1) else {
            return Ok(Command::Show(ManifestFormat::Toml));
        };

        match command.to_lowercase().as_str() {
            "show" | "s" => {
                let mut format = ManifestFormat::Toml;
                for flag in &args[2..] {
                    match flag.as_str() {
                        "--json" => format = ManifestFormat::Json,
                        "--toml" => format = ManifestFormat::Toml,
                        other => return Err(anyhow!("未知参数：{}", other)),
                    }
                }
                Ok(Command::Show(format))
            }
            "where" | "w" => Ok(Command::Where),
            "onboard" => Ok(Command::Onboard),
            "help" | "-h" | "--help" | "h" => Ok(Command::Help),
            other => Err(anyhow!("未知命令：{}", other)),
        }
    }
}

/// 打印帮助信息
fn print_help() {
    println!("🤖 telex - Telex Helper 助手配置");
    println!();
    println!("用法：telex <命令>");
    println!();
    println!("命令:");
    println!("  show [--json]   输出交给运行时的助手清单（默认，TOML）");
    println!("  where           显示解析后的记忆存储位置");
    println!("  onboard         初始化配置");
    println!("  help            显示此帮助信息");
    println!();
    println!("配置文件：{}", Config::default_path().display());
}

/// Onboard 命令 - 写入默认配置
fn run_onboard() -> Result<()> {
    let path = Config::default_path();
    if path.exists() {
        println!("ℹ️ 配置已存在：{}", path.display());
        return Ok(());
    }

    let config = Config::default();
    config.save(&path).context("保存配置文件失败")?;
    std::fs::create_dir_all(&config.memory.output_dir).context("创建输出目录失败")?;

    info!(path = %path.display(), "config written");
    println!("✅ 保存配置：{}", path.display());
    println!("✅ 输出目录：{}", config.memory.output_dir.display());
    Ok(())
}

fn run_where(config: &Config) -> Result<()> {
    match config.storage_location()? {
        StorageLocation::File(path) => println!("📁 {}", path.display()),
        StorageLocation::Memory => println!("🧠 内存存储（进程退出即丢失）"),
        StorageLocation::Remote(url) => println!("🌐 {}", url),
    }
    Ok(())
}

async fn run_show(config: &Config, format: ManifestFormat) -> Result<()> {
    let mut handoff = ManifestHandoff::new(io::stdout().lock(), format);
    bootstrap(config, &mut handoff).await
}

/// 主入口函数
pub async fn run_cli(args: &[String]) -> Result<()> {
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!();
            eprintln!("运行 'telex help' 查看帮助信息");
            std::process::exit(1);
        }
    };

    if command == Command::Help {
        print_help();
        return Ok(());
    }

    let config = Config::load_default()?;
    logger::init(&config.log.level)?;

    match command {
        Command::Show(format) => run_show(&config, format).await,
        Command::Where => run_where(&config),
        Command::Onboard => run_onboard(),
        Command::Help => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("telex")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_shows_toml() {
        assert_eq!(
            Command::parse(&args(&[])).unwrap(),
            Command::Show(ManifestFormat::Toml)
        );
    }

    #[test]
    fn show_json_flag() {
        assert_eq!(
            Command::parse(&args(&["show", "--json"])).unwrap(),
            Command::Show(ManifestFormat::Json)
        );
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!(Command::parse(&args(&["W"])).unwrap(), Command::Where);
        assert_eq!(Command::parse(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(Command::parse(&args(&["onboard"])).unwrap(), Command::Onboard);
    }

    #[test]
    fn unknown_input_errors() {
        assert!(Command::parse(&args(&["serve"])).is_err());
        assert!(Command::parse(&args(&["show", "--yaml"])).is_err());
    }
}
