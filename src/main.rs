//! Entry point for vmdash. Parses args, loads config, and runs the App.

use std::env;

use vmdash::app::App;
use vmdash::config::{load_config, save_config};

#[derive(Debug)]
struct ParsedArgs {
    root: Option<String>,
    check_cmd: Option<String>,
    save: bool,
    print_config: bool,
}

fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--root PATH|-r PATH] [--check-cmd CMD] [--save] [--print-config] [--version]"
    )
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "vmdash".into());
    let mut root: Option<String> = None;
    let mut check_cmd: Option<String> = None;
    let mut save = false; // persist resolved config back to disk
    let mut print_config = false; // print resolved config and exit

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(usage(&prog));
            }
            "-V" | "--version" => {
                return Err(format!("{prog} {}", env!("CARGO_PKG_VERSION")));
            }
            "--root" | "-r" => {
                root = it.next();
            }
            "--check-cmd" => {
                check_cmd = it.next();
            }
            "--save" => {
                save = true;
            }
            "--print-config" => {
                print_config = true;
            }
            _ if arg.starts_with("--root=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        root = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--check-cmd=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        check_cmd = Some(v.to_string());
                    }
                }
            }
            _ => {
                return Err(format!("Unexpected argument '{arg}'. {}", usage(&prog)));
            }
        }
    }
    Ok(ParsedArgs {
        root,
        check_cmd,
        save,
        print_config,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reuse the same parsing logic for testability
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let mut cfg = load_config();
    if let Some(root) = parsed.root {
        cfg.root_path = root.into();
    }
    if let Some(cmd) = parsed.check_cmd {
        cfg.check_command = cmd;
    }
    if parsed.save {
        if let Err(e) = save_config(&cfg) {
            eprintln!("could not save config: {e}");
        }
    }
    if parsed.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let mut app = App::new(cfg);
    app.run().await
}
